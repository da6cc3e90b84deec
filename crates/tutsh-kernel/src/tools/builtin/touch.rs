//! touch — Refresh a file's timestamp or create an empty file.

use tutsh_types::{ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::Node;

/// Touch tool: update timestamp or create an empty file in the current directory.
pub struct Touch;

impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("touch", "Change file timestamps or create new files.")
            .usage("touch <file>")
            .example("Create an empty file", "touch todo.txt")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match touch(args.get(0), ctx) {
            Ok(()) => ExecResult::success(""),
            Err(ShellError::MissingOperand) => {
                ExecResult::failure(EXIT_FAILURE, "touch: missing file operand")
            }
            Err(e) => ExecResult::failure(
                EXIT_FAILURE,
                format!(
                    "touch: cannot touch '{}': {}",
                    e.operand().unwrap_or_default(),
                    e
                ),
            ),
        }
    }
}

fn touch(name: Option<&str>, ctx: &mut ExecContext) -> ShellResult<()> {
    let name = name.ok_or(ShellError::MissingOperand)?;
    let cwd = ctx.cwd().clone();
    let now = ctx.now();
    match ctx.fs.lookup_mut(&cwd.join(name)) {
        Some(node) if node.is_dir() => Err(ShellError::IsADirectory(name.to_string())),
        Some(node) => {
            node.touch(now);
            Ok(())
        }
        None => ctx
            .fs
            .insert(&cwd, name, Node::file("", now))
            .map_err(|e| e.with_operand(name)),
    }
}
