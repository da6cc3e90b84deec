//! history — Show or clear the lines entered this session.

use tutsh_types::{ExecResult, ShellError, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

const CLEARED: &str = "\x1B[32m✓ History cleared\x1B[0m";

pub struct History;

/// What one `history` invocation asks for.
#[derive(Debug, PartialEq, Eq)]
enum Request {
    /// Show the last `n` lines, or all of them.
    Show(Option<usize>),
    Clear,
}

impl Tool for History {
    fn name(&self) -> &str {
        "history"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("history", "Show command history.")
            .usage("history [n] [-c]")
            .example("Show the last 10 commands", "history 10")
            .example("Clear the history list", "history -c")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match parse(args) {
            Ok(Request::Clear) => {
                ctx.session.clear_history();
                ExecResult::success(CLEARED)
            }
            Ok(Request::Show(limit)) => show(ctx, limit),
            Err(msg) => ExecResult::failure(EXIT_FAILURE, format!("history: {msg}")),
        }
    }
}

/// Parse the arguments, or return the message to print after `history: `.
fn parse(mut args: ToolArgs) -> Result<Request, String> {
    let mut clear = false;
    for flag in args.take_flags() {
        match flag {
            'c' => clear = true,
            other => return Err(ShellError::InvalidOption(other).to_string()),
        }
    }
    if clear {
        return Ok(Request::Clear);
    }
    let limit = match args.get(0) {
        None => None,
        Some(word) => Some(
            word.parse::<usize>()
                .map_err(|_| format!("{word}: numeric argument required"))?,
        ),
    };
    // `history 0` shows everything.
    Ok(Request::Show(limit.filter(|&n| n > 0)))
}

fn show(ctx: &ExecContext, limit: Option<usize>) -> ExecResult {
    let history = &ctx.session.history;
    if history.is_empty() {
        return ExecResult::success("No commands in history");
    }
    let start = limit.map_or(0, |n| history.len().saturating_sub(n));
    let lines = history
        .iter()
        .enumerate()
        .skip(start)
        .map(|(i, line)| format!("{:>5}  {}", i + 1, line));
    ExecResult::success(ctx.join_lines(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ctx_with, run, NOW};
    use crate::vfs::Node;

    fn make_ctx() -> ExecContext {
        let mut ctx = ctx_with(Node::directory(NOW));
        for line in ["ls -l", "cd documents", "cat notes.md", "history"] {
            ctx.session.record(line);
        }
        ctx
    }

    #[test]
    fn test_history_numbered() {
        let mut ctx = ctx_with(Node::directory(NOW));
        ctx.session.record("ls -l");
        ctx.session.record("history");
        let result = run(&History, &mut ctx, "");
        assert_eq!(result.out, "    1  ls -l\r\n    2  history");
    }

    #[test]
    fn test_history_empty() {
        let mut ctx = ctx_with(Node::directory(NOW));
        assert_eq!(run(&History, &mut ctx, "").out, "No commands in history");
    }

    #[test]
    fn test_history_limit_keeps_numbering() {
        let mut ctx = make_ctx();
        let result = run(&History, &mut ctx, "2");
        assert_eq!(result.out, "    3  cat notes.md\r\n    4  history");
    }

    #[test]
    fn test_history_limit_larger_than_history() {
        let mut ctx = make_ctx();
        assert_eq!(run(&History, &mut ctx, "50").out.lines().count(), 4);
        assert_eq!(run(&History, &mut ctx, "0").out.lines().count(), 4);
    }

    #[test]
    fn test_history_clear() {
        let mut ctx = make_ctx();
        let result = run(&History, &mut ctx, "-c");
        assert!(result.ok());
        assert_eq!(result.out, CLEARED);
        assert!(ctx.session.history.is_empty());
        assert_eq!(run(&History, &mut ctx, "").out, "No commands in history");
    }

    #[test]
    fn test_history_rejects_bad_arguments() {
        let mut ctx = make_ctx();
        let result = run(&History, &mut ctx, "lots");
        assert_eq!(result.code, EXIT_FAILURE);
        assert_eq!(result.err, "history: lots: numeric argument required");

        let result = run(&History, &mut ctx, "-z");
        assert_eq!(result.err, "history: invalid option -- 'z'");
        assert_eq!(ctx.session.history.len(), 4);
    }
}
