//! cat — Print file contents.

use tutsh_types::{ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Cat tool: print a file's content verbatim.
pub struct Cat;

impl Tool for Cat {
    fn name(&self) -> &str {
        "cat"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cat", "Concatenate and print files.")
            .usage("cat <file>")
            .example("Show a file", "cat README.txt")
    }

    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match read_file(args.get(0), ctx) {
            Ok(content) => ExecResult::success(content),
            Err(ShellError::MissingOperand) => {
                ExecResult::failure(EXIT_FAILURE, "cat: missing operand")
            }
            Err(e) => ExecResult::failure(
                EXIT_FAILURE,
                format!("cat: {}: {}", e.operand().unwrap_or_default(), e),
            ),
        }
    }
}

fn read_file(target: Option<&str>, ctx: &ExecContext) -> ShellResult<String> {
    let target = target.ok_or(ShellError::MissingOperand)?;
    let node = ctx
        .fs
        .stat(&ctx.resolve_path(target))
        .map_err(|e| e.with_operand(target))?;
    node.content()
        .map(str::to_string)
        .ok_or_else(|| ShellError::IsADirectory(target.to_string()))
}
