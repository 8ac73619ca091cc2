//! Numsec - security-focused project scaffolding and threat analysis.
//!
//! Numsec is a CLI tool that initializes projects from embedded templates and
//! runs a lightweight heuristic scan for hardcoded secret material, writing
//! stable, assistant-friendly markdown threat artifacts under
//! `<project>/numsec/threats/`.
//!
//! # Modules
//!
//! - [`analyze`] - Threat detection pipeline (walk, match, build, render, write)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`preflight`] - Startup precondition checks
//! - [`templates`] - Embedded project templates and scaffolding
//! - [`ui`] - Terminal output and styling
//!
//! # Example
//!
//! ```no_run
//! use numsec::analyze::{analyze_project, ReportFormat};
//!
//! let outcome = analyze_project(std::path::Path::new("."), ReportFormat::Text).unwrap();
//! println!("{}", outcome.summary());
//! ```

pub mod analyze;
pub mod cli;
pub mod error;
pub mod preflight;
pub mod templates;
pub mod ui;

pub use error::{NumsecError, Result};
