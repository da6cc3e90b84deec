//! cp — Copy a file within the current directory.

use tutsh_types::{ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cp tool: duplicate a file child under a new name with a fresh timestamp.
pub struct Cp;

impl Tool for Cp {
    fn name(&self) -> &str {
        "cp"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cp", "Copy files.")
            .usage("cp <src> <dest>")
            .example("Back up a file", "cp notes.md notes.bak")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let err = match copy(&args, ctx) {
            Ok(()) => return ExecResult::success(""),
            Err(e @ ShellError::InvalidArgumentCount) => {
                format!("cp: {e}{}Try 'cp SOURCE DEST'", ctx.newline)
            }
            Err(e @ ShellError::NotFound(_)) => {
                format!("cp: cannot stat '{}': {}", e.operand().unwrap_or_default(), e)
            }
            Err(ShellError::IsADirectory(src)) => {
                format!("cp: -r not specified; omitting directory '{src}'")
            }
            Err(e) => format!("cp: cannot copy to '{}': {}", e.operand().unwrap_or_default(), e),
        };
        ExecResult::failure(EXIT_FAILURE, err)
    }
}

fn copy(args: &ToolArgs, ctx: &mut ExecContext) -> ShellResult<()> {
    let (Some(src), Some(dst), 2) = (args.get(0), args.get(1), args.len()) else {
        return Err(ShellError::InvalidArgumentCount);
    };
    let cwd = ctx.cwd().clone();
    let dir = ctx.current_dir()?;
    let mut duplicate = match dir.child(src) {
        None => return Err(ShellError::NotFound(src.to_string())),
        Some(node) if node.is_dir() => return Err(ShellError::IsADirectory(src.to_string())),
        Some(node) => node.clone(),
    };
    duplicate.touch(ctx.now());
    ctx.fs
        .insert(&cwd, dst, duplicate)
        .map_err(|e| e.with_operand(dst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ctx_with, run, NOW, THEN};
    use crate::vfs::Node;

    fn make_ctx() -> ExecContext {
        ctx_with(
            Node::directory(THEN)
                .with_child("a.txt", Node::file("alpha", THEN))
                .with_child("b.txt", Node::file("beta", THEN))
                .with_child("dir", Node::directory(THEN)),
        )
    }

    #[test]
    fn test_cp_file() {
        let mut ctx = make_ctx();
        let result = run(&Cp, &mut ctx, "a.txt c.txt");
        assert!(result.ok());

        let dir = ctx.current_dir().unwrap();
        let original = dir.child("a.txt").unwrap();
        let copy = dir.child("c.txt").unwrap();
        assert_eq!(original.content(), Some("alpha"));
        assert_eq!(original.modified, THEN);
        assert_eq!(copy.content(), Some("alpha"));
        assert_eq!(copy.size, original.size);
        assert_eq!(copy.modified, NOW);
    }

    #[test]
    fn test_cp_copy_is_independent() {
        let mut ctx = make_ctx();
        run(&Cp, &mut ctx, "a.txt c.txt");
        let cwd = ctx.cwd().clone();
        ctx.fs.remove(&cwd, "a.txt").unwrap();
        let copy = ctx.current_dir().unwrap().child("c.txt").unwrap();
        assert_eq!(copy.content(), Some("alpha"));
    }

    #[test]
    fn test_cp_directory_refused() {
        let mut ctx = make_ctx();
        let result = run(&Cp, &mut ctx, "dir dir2");
        assert_eq!(result.err, "cp: -r not specified; omitting directory 'dir'");
        assert!(ctx.current_dir().unwrap().child("dir2").is_none());
    }

    #[test]
    fn test_cp_onto_existing() {
        let mut ctx = make_ctx();
        let result = run(&Cp, &mut ctx, "a.txt b.txt");
        assert_eq!(result.err, "cp: cannot copy to 'b.txt': File exists");
        let b = ctx.current_dir().unwrap().child("b.txt").unwrap();
        assert_eq!(b.content(), Some("beta"));
    }

    #[test]
    fn test_cp_missing_source() {
        let mut ctx = make_ctx();
        let result = run(&Cp, &mut ctx, "ghost x");
        assert_eq!(result.err, "cp: cannot stat 'ghost': No such file or directory");
    }

    #[test]
    fn test_cp_wrong_arg_count() {
        let mut ctx = make_ctx();
        assert_eq!(
            run(&Cp, &mut ctx, "a.txt").err,
            "cp: missing file operand\r\nTry 'cp SOURCE DEST'"
        );
    }
}
