//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every detail, including fully met requirement trees.
    Verbose,
    /// Show status and results.
    #[default]
    Normal,
    /// Show results and errors only.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the global `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether informational status lines are shown.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Whether extra detail is shown.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
