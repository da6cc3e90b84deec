//! whoami — Print the session user.

use tutsh_types::ExecResult;

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

pub struct Whoami;

impl Tool for Whoami {
    fn name(&self) -> &str {
        "whoami"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("whoami", "Print the effective user ID.")
    }

    fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(ctx.session.user.clone())
    }
}
