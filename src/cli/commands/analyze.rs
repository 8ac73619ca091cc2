//! Analyze command implementation.
//!
//! The `numsec analyze` command runs the threat detection pipeline against a
//! project and prints either a human summary or the JSON run report.

use std::path::{Path, PathBuf};

use crate::analyze::{analyze_project, ReportFormat};
use crate::cli::args::AnalyzeArgs;
use crate::error::Result;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The analyze command implementation.
pub struct AnalyzeCommand {
    project_root: PathBuf,
    args: AnalyzeArgs,
}

impl AnalyzeCommand {
    /// Create a new analyze command.
    pub fn new(project_root: &Path, args: AnalyzeArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Resolve the directory to analyze.
    ///
    /// Collecting components drops the `.` left by the default path argument
    /// so it does not linger in reported paths.
    fn analysis_root(&self) -> PathBuf {
        let joined = if self.args.path.is_absolute() {
            self.args.path.clone()
        } else {
            self.project_root.join(&self.args.path)
        };
        joined.components().collect()
    }

    /// Effective report format, honoring the deprecated `--ai-format` alias.
    fn format(&self) -> ReportFormat {
        if self.args.ai_format {
            ReportFormat::Json
        } else {
            self.args.format
        }
    }
}

impl Command for AnalyzeCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let root = self.analysis_root();
        let format = self.format();

        let outcome = analyze_project(&root, format)?;

        let skipped = outcome.report().skipped_files;
        if skipped > 0 && format == ReportFormat::Text {
            out.warning(&format!(
                "{skipped} file(s) could not be read and were skipped"
            ));
        }

        match format {
            ReportFormat::Json => out.result(&outcome.render()?),
            ReportFormat::Text => {
                out.success("Threat analysis complete");
                out.detail(&format!(
                    "Threats directory: {}",
                    outcome.report().threats_dir
                ));
                out.result(&outcome.render()?);
            }
        }

        Ok(CommandResult::success())
    }
}
