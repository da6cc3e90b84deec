//! help — List commands or describe one.

use tutsh_types::{ExecResult, EXIT_FAILURE};

use crate::help::{format_tool_help, format_tool_list};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Help tool: print the command list, or details for `help <cmd>`.
pub struct Help;

impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Display this help message.")
            .example("Describe one command", "help ls")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let Some(topic) = args.get(0) else {
            return ExecResult::success(format_tool_list(&ctx.tool_schemas, &ctx.newline));
        };
        match format_tool_help(topic, &ctx.tool_schemas, &ctx.newline) {
            Some(text) => ExecResult::success(text),
            None => ExecResult::failure(
                EXIT_FAILURE,
                format!("help: no help topics match '{topic}'"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{ctx_with, run};
    use crate::vfs::Node;

    fn make_ctx_with_schemas() -> ExecContext {
        let mut ctx = ctx_with(Node::directory("Jul 25 10:00"));
        ctx.set_tool_schemas(vec![
            ToolSchema::new("cat", "Concatenate and print files.")
                .usage("cat <file>")
                .example("Show a file", "cat README.txt"),
            ToolSchema::new("whoami", "Print the effective user ID."),
        ]);
        ctx
    }

    #[test]
    fn test_help_overview() {
        let mut ctx = make_ctx_with_schemas();
        let result = run(&Help, &mut ctx, "");
        assert!(result.ok());
        assert!(result.out.starts_with("Supported commands:\r\n"));
        assert!(result.out.contains("  cat <file>      - Concatenate and print files.\r\n"));
        assert!(result.out.contains("  whoami          - Print the effective user ID.\r\n"));
    }

    #[test]
    fn test_help_specific_tool() {
        let mut ctx = make_ctx_with_schemas();
        let result = run(&Help, &mut ctx, "cat");
        assert!(result.ok());
        assert!(result.out.starts_with("cat <file> - Concatenate and print files."));
        assert!(result.out.contains("cat README.txt"));
    }

    #[test]
    fn test_help_unknown_topic() {
        let mut ctx = make_ctx_with_schemas();
        let result = run(&Help, &mut ctx, "grep");
        assert!(!result.ok());
        assert_eq!(result.err, "help: no help topics match 'grep'");
    }
}
