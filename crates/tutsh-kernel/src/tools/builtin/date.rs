//! date — Display the current date and time.

use tutsh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Date tool: the same stamp format `ls -l` shows.
pub struct Date;

impl Tool for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("date", "Display the current date and time.")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(ctx.now())
    }
}
