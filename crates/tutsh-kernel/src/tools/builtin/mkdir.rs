//! mkdir — Create a directory in the current directory.

use tutsh_types::{ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::Node;

/// Mkdir tool: create one directory under the current directory.
pub struct Mkdir;

impl Tool for Mkdir {
    fn name(&self) -> &str {
        "mkdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mkdir", "Make directories.")
            .usage("mkdir <dir>")
            .example("Create a directory here", "mkdir notes")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match make_dir(args.get(0), ctx) {
            Ok(()) => ExecResult::success(""),
            Err(ShellError::MissingOperand) => {
                ExecResult::failure(EXIT_FAILURE, "mkdir: missing operand")
            }
            Err(e) => ExecResult::failure(
                EXIT_FAILURE,
                format!(
                    "mkdir: cannot create directory '{}': {}",
                    e.operand().unwrap_or_default(),
                    e
                ),
            ),
        }
    }
}

/// `name` is a single segment, created directly under the current directory.
fn make_dir(name: Option<&str>, ctx: &mut ExecContext) -> ShellResult<()> {
    let name = name.ok_or(ShellError::MissingOperand)?;
    let cwd = ctx.cwd().clone();
    let dir = Node::directory(ctx.now());
    ctx.fs
        .insert(&cwd, name, dir)
        .map_err(|e| e.with_operand(name))
}
