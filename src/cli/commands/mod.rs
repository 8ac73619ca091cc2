//! Command implementations.

pub mod analyze;
pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod list_templates;
