//! List-templates command implementation.

use crate::error::Result;
use crate::templates;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The list-templates command implementation.
pub struct ListTemplatesCommand;

impl Command for ListTemplatesCommand {
    fn execute(&self, out: &mut Output) -> Result<CommandResult> {
        let names = templates::available_templates();

        if names.is_empty() {
            out.warning("No templates available.");
            return Ok(CommandResult::success());
        }

        out.result("Available templates:");
        for name in names {
            out.result(&format!("  - {name}"));
        }

        Ok(CommandResult::success())
    }
}
