//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including captured runner output.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show spinners and final status only.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Mode selected by `-v` and the number of `-q` flags.
    pub fn from_flags(verbose: bool, quiet: u8) -> Self {
        match quiet {
            0 if verbose => Self::Verbose,
            0 => Self::Normal,
            1 => Self::Quiet,
            _ => Self::Silent,
        }
    }

    /// Check if this mode shows captured command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal | Self::Quiet)
    }

    /// Check if this mode shows per-operation status lines.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
