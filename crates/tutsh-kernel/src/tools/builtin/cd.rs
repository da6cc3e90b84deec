//! cd — Change working directory.

use tutsh_types::{ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cd tool: change current working directory.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change the current directory.")
            .usage("cd <dir>")
            .example("Go home", "cd")
            .example("Go up one level", "cd ..")
            .example("Go back to the previous directory", "cd -")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let target = args.get(0);
        match change_dir(target, ctx) {
            Ok(Some(printed)) => ExecResult::success(printed),
            Ok(None) => ExecResult::success(""),
            Err(e) => ExecResult::failure(EXIT_FAILURE, render_error(target, &e)),
        }
    }
}

/// Move the session to `target`.
///
/// Returns the line to print, which only `cd -` has.
fn change_dir(target: Option<&str>, ctx: &mut ExecContext) -> ShellResult<Option<String>> {
    let (resolved, print) = match target {
        None => (ctx.session.home.clone(), false),
        Some("-") => match ctx.session.get_prev_cwd() {
            Some(prev) => (prev.clone(), true),
            None => return Err(ShellError::NotFound("OLDPWD".into())),
        },
        Some(path) => (ctx.resolve_path(path), false),
    };

    let label = target.unwrap_or("~");
    ctx.fs.dir(&resolved).map_err(|e| e.with_operand(label))?;

    let printed = print.then(|| resolved.to_string());
    ctx.session.set_cwd(resolved);
    Ok(printed)
}

fn render_error(target: Option<&str>, err: &ShellError) -> String {
    if target == Some("-") && matches!(err, ShellError::NotFound(name) if name == "OLDPWD") {
        return "bash: cd: OLDPWD not set".to_string();
    }
    let label = err.operand().unwrap_or_default();
    format!("bash: cd: {}: {}", label, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::VPath;
    use crate::tools::test_support::{ctx_with, run, NOW};
    use crate::vfs::Node;

    fn make_ctx() -> ExecContext {
        ctx_with(
            Node::directory(NOW)
                .with_child("subdir", Node::directory(NOW))
                .with_child("file.txt", Node::file("data", NOW)),
        )
    }

    #[test]
    fn test_cd_subdir() {
        let mut ctx = make_ctx();
        let result = run(&Cd, &mut ctx, "subdir");
        assert!(result.ok());
        assert_eq!(result.out, "");
        assert_eq!(ctx.cwd().to_string(), "/home/user/subdir");
    }

    #[test]
    fn test_cd_root() {
        let mut ctx = make_ctx();
        assert!(run(&Cd, &mut ctx, "/").ok());
        assert_eq!(*ctx.cwd(), VPath::root());
    }

    #[test]
    fn test_cd_no_arg_goes_home() {
        let mut ctx = make_ctx();
        ctx.session.cwd = VPath::root();
        assert!(run(&Cd, &mut ctx, "").ok());
        assert_eq!(ctx.cwd().to_string(), "/home/user");
    }

    #[test]
    fn test_cd_tilde_goes_home() {
        let mut ctx = make_ctx();
        run(&Cd, &mut ctx, "subdir");
        assert!(run(&Cd, &mut ctx, "~").ok());
        assert_eq!(ctx.cwd().to_string(), "/home/user");
    }

    #[test]
    fn test_cd_dotdot_floors_at_root() {
        let mut ctx = make_ctx();
        for _ in 0..4 {
            assert!(run(&Cd, &mut ctx, "..").ok());
        }
        assert_eq!(*ctx.cwd(), VPath::root());
    }

    #[test]
    fn test_cd_file_fails() {
        let mut ctx = make_ctx();
        let result = run(&Cd, &mut ctx, "file.txt");
        assert!(!result.ok());
        assert_eq!(result.err, "bash: cd: file.txt: Not a directory");
        assert_eq!(ctx.cwd().to_string(), "/home/user");
    }

    #[test]
    fn test_cd_nonexistent() {
        let mut ctx = make_ctx();
        let result = run(&Cd, &mut ctx, "nowhere");
        assert_eq!(result.err, "bash: cd: nowhere: No such file or directory");
        assert_eq!(ctx.cwd().to_string(), "/home/user");
    }

    #[test]
    fn test_cd_dash_toggles() {
        let mut ctx = make_ctx();
        run(&Cd, &mut ctx, "subdir");

        let result = run(&Cd, &mut ctx, "-");
        assert!(result.ok());
        assert_eq!(result.out, "/home/user");

        let result = run(&Cd, &mut ctx, "-");
        assert_eq!(result.out, "/home/user/subdir");
        assert_eq!(ctx.cwd().to_string(), "/home/user/subdir");
    }

    #[test]
    fn test_cd_dash_no_previous() {
        let mut ctx = make_ctx();
        let result = run(&Cd, &mut ctx, "-");
        assert!(!result.ok());
        assert_eq!(result.err, "bash: cd: OLDPWD not set");
    }

    #[test]
    fn test_cd_missing_home() {
        let mut ctx = make_ctx();
        ctx.session.home = VPath::parse("/gone");
        let result = run(&Cd, &mut ctx, "");
        assert_eq!(result.err, "bash: cd: ~: No such file or directory");
        assert_eq!(ctx.cwd().to_string(), "/home/user");
    }
}
