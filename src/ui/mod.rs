//! Terminal output and styling.
//!
//! This module provides:
//! - [`OutputMode`] for verbosity control
//! - [`Output`] for writing status messages that respect the mode
//! - [`NumsecTheme`] for console styles
//!
//! # Example
//!
//! ```
//! use numsec::ui::{Output, OutputMode};
//!
//! let mut out = Output::new(OutputMode::Quiet);
//! out.success("Threat analysis complete");
//! ```

pub mod output;
pub mod theme;

pub use output::{Output, OutputMode};
pub use theme::{should_use_colors, NumsecTheme};
