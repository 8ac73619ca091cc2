//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::analyze::ReportFormat;

/// Numsec - security-focused project toolkit.
#[derive(Debug, Parser)]
#[command(name = "numsec")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new security project from a template
    Init(InitArgs),

    /// List all available project templates
    ListTemplates,

    /// Analyze a project and generate threat reports
    Analyze(AnalyzeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InitArgs {
    /// Name (or path) of the project to create
    pub project_name: String,

    /// Project template to use
    #[arg(long, default_value = "basic")]
    pub template: String,

    /// Proceed even if the directory already exists
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `analyze` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AnalyzeArgs {
    /// Project path to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format for the run report
    #[arg(long, value_enum, default_value_t)]
    pub format: ReportFormat,

    /// Deprecated: use --format json instead
    #[arg(long, hide = true)]
    pub ai_format: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
