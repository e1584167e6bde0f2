//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including info-level detail lines.
    Verbose,
    /// Show check messages and the summary.
    #[default]
    Normal,
    /// Show warnings, errors and the summary only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-check info and success lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
