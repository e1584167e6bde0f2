//! Automation server startup probe.
//!
//! Spawns the server with piped output and races the ready banner, error
//! markers, process exit, and a single deadline. Whatever happens, a
//! spawned child is killed and reaped exactly once before [`ServerProbe::run`]
//! returns.

use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::ServerConfig;
use crate::shell::{forward_lines, OutputLine};

use super::state::{FailureCause, ProbeState, StartupRace};

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// How a probe run ended.
#[derive(Debug, Clone)]
pub struct StartupReport {
    /// Final race state; never `Waiting`.
    pub state: ProbeState,
    /// Time from spawn to resolution.
    pub elapsed: Duration,
    /// Whether a child process was spawned.
    pub spawned: bool,
    /// Whether the child is known to be gone (vacuously true if never spawned).
    pub terminated: bool,
}

impl StartupReport {
    /// Whether the server reached its ready banner.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, ProbeState::Succeeded)
    }
}

/// Parameters for one startup attempt.
#[derive(Debug, Clone)]
pub struct ServerProbe {
    command: String,
    args: Vec<String>,
    ready_banner: String,
    error_markers: Vec<String>,
    timeout: Duration,
}

impl ServerProbe {
    /// Create a probe for `command` with no arguments and default markers.
    pub fn new(command: impl Into<String>) -> Self {
        let defaults = ServerConfig::default();
        Self {
            command: command.into(),
            args: Vec::new(),
            ready_banner: defaults.ready_banner,
            error_markers: defaults.error_markers,
            timeout: Duration::from_millis(defaults.startup_timeout_ms),
        }
    }

    /// Build a probe from configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            ready_banner: config.ready_banner.clone(),
            error_markers: config.error_markers.clone(),
            timeout: Duration::from_millis(config.startup_timeout_ms),
        }
    }

    /// Set the arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the stdout substring that signals readiness.
    pub fn ready_banner(mut self, banner: impl Into<String>) -> Self {
        self.ready_banner = banner.into();
        self
    }

    /// Set the stderr substrings that signal failure.
    pub fn error_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.error_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the startup deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured deadline.
    pub fn startup_timeout(&self) -> Duration {
        self.timeout
    }

    /// The command line, for messages.
    pub fn command_line(&self) -> String {
        std::iter::once(self.command.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Spawn the server and run the race to completion.
    pub fn run(&self) -> StartupReport {
        let start = Instant::now();
        let mut race = StartupRace::new();

        tracing::debug!(command = %self.command_line(), "spawning server");

        let mut child = match Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                race.resolve(ProbeState::Failed(FailureCause::Spawn(e.to_string())));
                return StartupReport {
                    state: race.into_state(),
                    elapsed: start.elapsed(),
                    spawned: false,
                    terminated: true,
                };
            }
        };

        let (tx, rx) = mpsc::channel();
        if let Some(stdout) = child.stdout.take() {
            forward_lines(stdout, tx.clone(), OutputLine::Stdout);
        }
        if let Some(stderr) = child.stderr.take() {
            forward_lines(stderr, tx.clone(), OutputLine::Stderr);
        }
        // Only the reader threads hold senders now, so the channel
        // disconnects once both pipes close.
        drop(tx);

        let deadline = start + self.timeout;
        self.drive(&mut race, &rx, &mut child, deadline);
        drop(rx);

        let terminated = terminate(&mut child);
        let elapsed = start.elapsed();
        tracing::debug!(
            elapsed_ms = elapsed.as_millis() as u64,
            terminated,
            "server probe finished"
        );

        StartupReport {
            state: race.into_state(),
            elapsed,
            spawned: true,
            terminated,
        }
    }

    fn drive(
        &self,
        race: &mut StartupRace,
        rx: &Receiver<OutputLine>,
        child: &mut Child,
        deadline: Instant,
    ) {
        while !race.is_resolved() {
            let now = Instant::now();
            if now >= deadline {
                race.resolve(ProbeState::TimedOut);
                break;
            }

            match rx.recv_timeout(deadline - now) {
                Ok(OutputLine::Stdout(line)) => {
                    if line.contains(&self.ready_banner) {
                        race.resolve(ProbeState::Succeeded);
                    }
                }
                Ok(OutputLine::Stderr(line)) => {
                    if self.error_markers.iter().any(|m| line.contains(m.as_str())) {
                        race.resolve(ProbeState::Failed(FailureCause::ErrorOutput(line)));
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    race.resolve(ProbeState::TimedOut);
                }
                Err(RecvTimeoutError::Disconnected) => match wait_until(child, deadline) {
                    Some(status) => {
                        race.resolve(ProbeState::Failed(FailureCause::Exited(status.code())));
                    }
                    None => {
                        race.resolve(ProbeState::TimedOut);
                    }
                },
            }
        }
    }
}

/// Poll for exit until `deadline`.
fn wait_until(child: &mut Child, deadline: Instant) -> Option<ExitStatus> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Some(status),
            Ok(None) => {}
            Err(e) => {
                tracing::debug!(error = %e, "failed to poll server process");
                return None;
            }
        }

        let now = Instant::now();
        if now >= deadline {
            return None;
        }
        thread::sleep(EXIT_POLL_INTERVAL.min(deadline - now));
    }
}

/// Kill and reap the child. Returns whether it was reaped.
fn terminate(child: &mut Child) -> bool {
    if let Ok(Some(_)) = child.try_wait() {
        return true;
    }

    if let Err(e) = child.kill() {
        tracing::debug!(error = %e, "failed to kill server process");
    }

    match child.wait() {
        Ok(status) => {
            tracing::debug!(?status, "server process reaped");
            true
        }
        Err(e) => {
            tracing::debug!(error = %e, "failed to reap server process");
            false
        }
    }
}
