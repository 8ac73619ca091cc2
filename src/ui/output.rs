//! Output mode and writer.

use super::theme::{should_use_colors, NumsecTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including diagnostic detail.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show minimal output (final status only).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows diagnostic detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Output writer that respects output mode and terminal capabilities.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: NumsecTheme,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            NumsecTheme::new()
        } else {
            NumsecTheme::plain()
        };
        Self { mode, theme }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a plain line if the mode allows status messages.
    pub fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a line regardless of mode (command results, JSON payloads).
    pub fn result(&mut self, msg: &str) {
        println!("{}", msg);
    }

    /// Write a success message.
    pub fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    /// Write a warning message.
    pub fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_warning(msg));
        }
    }

    /// Write an error message to stderr. Always shown.
    pub fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Write diagnostic detail in verbose mode only.
    pub fn detail(&mut self, msg: &str) {
        if self.mode.shows_detail() {
            println!("{}", self.theme.format_info(msg));
        }
    }
}
