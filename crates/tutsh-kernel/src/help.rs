//! Help text for tutsh.
//!
//! Generated from the tool schemas in the registry, so every registered
//! command shows up with the usage string it declares.

use crate::tools::ToolSchema;

/// Width of the usage column in the command list.
const USAGE_WIDTH: usize = 15;

/// Format the `help` overview: one aligned line per command.
///
/// Lines are terminated with `newline`, including the last one.
pub fn format_tool_list(schemas: &[ToolSchema], newline: &str) -> String {
    let mut output = format!("Supported commands:{newline}");
    for schema in schemas {
        output.push_str(&format!(
            "  {:<width$} - {}{newline}",
            schema.usage,
            schema.description,
            width = USAGE_WIDTH
        ));
    }
    output
}

/// Format detailed help for one command, `None` if no tool has that name.
pub fn format_tool_help(name: &str, schemas: &[ToolSchema], newline: &str) -> Option<String> {
    let schema = schemas.iter().find(|s| s.name == name)?;
    let mut lines = vec![format!("{} - {}", schema.usage, schema.description)];

    if !schema.examples.is_empty() {
        lines.push(String::new());
        lines.push("Examples:".to_string());
        for example in &schema.examples {
            lines.push(format!("  # {}", example.description));
            lines.push(format!("  {}", example.code));
        }
    }

    Some(lines.join(newline))
}
