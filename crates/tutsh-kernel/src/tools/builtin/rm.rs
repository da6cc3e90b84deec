//! rm — Remove a file from the current directory.

use tutsh_types::{ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};
use crate::vfs::Node;

/// Rm tool: remove one file. Directories are refused.
pub struct Rm;

impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Remove files.")
            .usage("rm <file>")
            .example("Delete a file", "rm old.txt")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match remove_file(args.get(0), ctx) {
            Ok(()) => ExecResult::success(""),
            Err(ShellError::MissingOperand) => {
                ExecResult::failure(EXIT_FAILURE, "rm: missing operand")
            }
            Err(e) => ExecResult::failure(
                EXIT_FAILURE,
                format!(
                    "rm: cannot remove '{}': {}",
                    e.operand().unwrap_or_default(),
                    e
                ),
            ),
        }
    }
}

fn remove_file(name: Option<&str>, ctx: &mut ExecContext) -> ShellResult<()> {
    let name = name.ok_or(ShellError::MissingOperand)?;
    let cwd = ctx.cwd().clone();
    match ctx.current_dir()?.child(name).map(Node::is_dir) {
        None => Err(ShellError::NotFound(name.to_string())),
        Some(true) => Err(ShellError::IsADirectory(name.to_string())),
        Some(false) => ctx.fs.remove(&cwd, name).map(drop),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ctx_with, run, NOW};

    fn make_ctx() -> ExecContext {
        ctx_with(
            Node::directory(NOW)
                .with_child("a.txt", Node::file("a", NOW))
                .with_child("dir", Node::directory(NOW)),
        )
    }

    #[test]
    fn test_rm_file() {
        let mut ctx = make_ctx();
        let result = run(&Rm, &mut ctx, "a.txt");
        assert!(result.ok());
        assert!(ctx.current_dir().unwrap().child("a.txt").is_none());
    }

    #[test]
    fn test_rm_directory_refused() {
        let mut ctx = make_ctx();
        let result = run(&Rm, &mut ctx, "dir");
        assert_eq!(result.err, "rm: cannot remove 'dir': Is a directory");
        assert!(ctx.current_dir().unwrap().child("dir").is_some());
    }

    #[test]
    fn test_rm_nonexistent() {
        let mut ctx = make_ctx();
        let result = run(&Rm, &mut ctx, "ghost");
        assert_eq!(result.err, "rm: cannot remove 'ghost': No such file or directory");
    }

    #[test]
    fn test_rm_no_arg() {
        let mut ctx = make_ctx();
        assert_eq!(run(&Rm, &mut ctx, "").err, "rm: missing operand");
    }
}
