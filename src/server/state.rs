//! Startup race state machine.
//!
//! The probe feeds events into [`StartupRace`]; the first event that
//! decides the race moves it out of `Waiting` and every later event is
//! ignored.

/// State of a startup race.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeState {
    /// No deciding event yet.
    Waiting,
    /// Ready banner seen on stdout.
    Succeeded,
    /// Error output, early exit, or spawn failure.
    Failed(FailureCause),
    /// Deadline passed first.
    TimedOut,
}

impl ProbeState {
    /// Whether the race has been decided.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Waiting)
    }
}

/// Why a startup attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureCause {
    /// A stderr line matched an error marker.
    ErrorOutput(String),
    /// The process closed its output before becoming ready.
    Exited(Option<i32>),
    /// The process could not be spawned.
    Spawn(String),
}

/// Single-assignment holder for the race outcome.
#[derive(Debug)]
pub struct StartupRace {
    state: ProbeState,
}

impl Default for StartupRace {
    fn default() -> Self {
        Self::new()
    }
}

impl StartupRace {
    /// Start a race in `Waiting`.
    pub fn new() -> Self {
        Self {
            state: ProbeState::Waiting,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ProbeState {
        &self.state
    }

    /// Whether the race has been decided.
    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Decide the race. Returns `false` and leaves the state untouched if it
    /// was already decided or `outcome` is `Waiting`.
    pub fn resolve(&mut self, outcome: ProbeState) -> bool {
        if self.is_resolved() || !outcome.is_resolved() {
            return false;
        }
        tracing::debug!(state = ?outcome, "startup race resolved");
        self.state = outcome;
        true
    }

    /// Consume the race and return its final state.
    pub fn into_state(self) -> ProbeState {
        self.state
    }
}
