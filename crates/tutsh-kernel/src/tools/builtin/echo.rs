//! echo — Print arguments.

use tutsh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Echo tool: arguments joined by single spaces.
pub struct Echo;

impl Tool for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("echo", "Display a line of text.")
            .usage("echo [args...]")
            .example("Say hello", "echo hello world")
    }

    fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(args.positional.join(" "))
    }
}
