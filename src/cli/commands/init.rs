//! Init command implementation.
//!
//! The `numsec init` command scaffolds a new security project from an
//! embedded template.

use std::path::{Path, PathBuf};

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::templates;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

const ASCII_BANNER: &str = r"
███╗   ██╗██╗   ██╗███╗   ███╗███████╗███████╗ ██████╗
████╗  ██║██║   ██║████╗ ████║██╔════╝██╔════╝██╔════╝
██╔██╗ ██║██║   ██║██╔████╔██║███████╗█████╗  ██║
██║╚██╗██║██║   ██║██║╚██╔╝██║╚════██║██╔══╝  ██║
██║ ╚████║╚██████╔╝██║ ╚═╝ ██║███████║███████╗╚██████╗
╚═╝  ╚═══╝ ╚═════╝ ╚═╝     ╚═╝╚══════╝╚══════╝ ╚═════╝
";

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Resolve the target directory for the new project.
    ///
    /// An absolute name is used as-is; a relative one is anchored at the
    /// project root (normally the current directory).
    fn target_path(&self) -> PathBuf {
        let name = Path::new(&self.args.project_name);
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.project_root.join(name)
        }
    }
}

impl Command for InitCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let target = self.target_path();

        templates::init_project(&target, &self.args.template, self.args.force)?;

        out.message(ASCII_BANNER);
        out.success(&format!("Created project at {}", target.display()));
        Ok(CommandResult::success())
    }
}
