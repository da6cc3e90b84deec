//! mv — Rename an entry within the current directory.

use tutsh_types::{ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Mv tool: rebind a child of the current directory under a new name.
///
/// The node itself moves, so content and timestamp are untouched.
pub struct Mv;

impl Tool for Mv {
    fn name(&self) -> &str {
        "mv"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("mv", "Move or rename files or directories.")
            .usage("mv <src> <dest>")
            .example("Rename a file", "mv draft.txt final.txt")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match rename(&args, ctx) {
            Ok(()) => ExecResult::success(""),
            Err(e @ ShellError::InvalidArgumentCount) => ExecResult::failure(
                EXIT_FAILURE,
                format!("mv: {e}{}Try 'mv SOURCE DEST'", ctx.newline),
            ),
            Err(e @ ShellError::NotFound(_)) => ExecResult::failure(
                EXIT_FAILURE,
                format!("mv: cannot stat '{}': {}", e.operand().unwrap_or_default(), e),
            ),
            Err(e) => ExecResult::failure(
                EXIT_FAILURE,
                format!("mv: cannot move to '{}': {}", e.operand().unwrap_or_default(), e),
            ),
        }
    }
}

fn rename(args: &ToolArgs, ctx: &mut ExecContext) -> ShellResult<()> {
    let (Some(src), Some(dst), 2) = (args.get(0), args.get(1), args.len()) else {
        return Err(ShellError::InvalidArgumentCount);
    };
    let cwd = ctx.cwd();
    let (from, to) = (cwd.join(src), cwd.join(dst));
    ctx.fs.move_entry(&from, &to).map_err(|e| match e {
        ShellError::NotFound(_) => e.with_operand(src),
        other => other.with_operand(dst),
    })
}
