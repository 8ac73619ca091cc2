//! Numsec CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use numsec::cli::{Cli, CommandDispatcher};
use numsec::ui::{Output, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("numsec=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("numsec=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Clamp a command exit code into the process exit range.
///
/// Codes outside `0..=255` become 1 instead of wrapping; a wrapped code
/// could read as success.
fn sanitize_exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Numsec starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut output = Output::new(output_mode);

    // Startup precondition: the embedded scaffold must declare an artifact
    // format this binary supports. Checked once, before any command runs.
    if let Err(e) = numsec::preflight::check() {
        output.error(&format!("Error: {}", e));
        return ExitCode::from(1);
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    // Dispatch command
    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, &mut output) {
        Ok(result) => ExitCode::from(sanitize_exit_code(result.exit_code)),
        Err(e) => {
            output.error(&format!("Error: {}", e));
            if cli.verbose {
                output.error(&format!("{:?}", anyhow::Error::from(e)));
            }
            ExitCode::from(1)
        }
    }
}
