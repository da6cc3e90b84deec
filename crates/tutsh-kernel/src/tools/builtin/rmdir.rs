//! rmdir — Remove an empty directory from the current directory.

use tutsh_types::{ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Rmdir tool: remove an empty child directory.
pub struct Rmdir;

impl Tool for Rmdir {
    fn name(&self) -> &str {
        "rmdir"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rmdir", "Remove empty directories.")
            .usage("rmdir <dir>")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match remove_dir(args.get(0), ctx) {
            Ok(()) => ExecResult::success(""),
            Err(ShellError::MissingOperand) => {
                ExecResult::failure(EXIT_FAILURE, "rmdir: missing operand")
            }
            Err(e) => ExecResult::failure(
                EXIT_FAILURE,
                format!(
                    "rmdir: failed to remove '{}': {}",
                    e.operand().unwrap_or_default(),
                    e
                ),
            ),
        }
    }
}

fn remove_dir(name: Option<&str>, ctx: &mut ExecContext) -> ShellResult<()> {
    let name = name.ok_or(ShellError::MissingOperand)?;
    let cwd = ctx.cwd().clone();
    let dir = ctx.current_dir()?;
    match dir.child(name) {
        None => return Err(ShellError::NotFound(name.to_string())),
        Some(node) if node.is_file() => return Err(ShellError::NotADirectory(name.to_string())),
        Some(node) if !node.is_empty_dir() => {
            return Err(ShellError::DirectoryNotEmpty(name.to_string()));
        }
        Some(_) => {}
    }
    ctx.fs.remove(&cwd, name).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ctx_with, run, NOW};
    use crate::vfs::Node;

    fn make_ctx() -> ExecContext {
        ctx_with(
            Node::directory(NOW)
                .with_child("empty", Node::directory(NOW))
                .with_child(
                    "full",
                    Node::directory(NOW).with_child("a.txt", Node::file("a", NOW)),
                )
                .with_child("file.txt", Node::file("x", NOW)),
        )
    }

    #[test]
    fn test_rmdir_empty() {
        let mut ctx = make_ctx();
        let result = run(&Rmdir, &mut ctx, "empty");
        assert!(result.ok());
        assert!(ctx.current_dir().unwrap().child("empty").is_none());
    }

    #[test]
    fn test_rmdir_not_empty() {
        let mut ctx = make_ctx();
        let before = ctx.fs.clone();
        let result = run(&Rmdir, &mut ctx, "full");
        assert_eq!(result.err, "rmdir: failed to remove 'full': Directory not empty");
        assert_eq!(ctx.fs, before);
    }

    #[test]
    fn test_rmdir_file() {
        let mut ctx = make_ctx();
        let result = run(&Rmdir, &mut ctx, "file.txt");
        assert_eq!(result.err, "rmdir: failed to remove 'file.txt': Not a directory");
    }

    #[test]
    fn test_rmdir_missing() {
        let mut ctx = make_ctx();
        let result = run(&Rmdir, &mut ctx, "ghost");
        assert_eq!(
            result.err,
            "rmdir: failed to remove 'ghost': No such file or directory"
        );
        assert_eq!(run(&Rmdir, &mut ctx, "").err, "rmdir: missing operand");
    }
}
