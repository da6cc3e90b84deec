//! ls — List directory contents.

use tutsh_types::{DirEntry, ExecResult, ShellError, ShellResult, EXIT_FAILURE};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Styling marker for directory names.
pub const DIR_STYLE: &str = "\x1B[1;34m";
pub const RESET: &str = "\x1B[0m";

/// Ls tool: list directory contents.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List directory contents. Use -l for long format.")
            .usage("ls [-l]")
            .example("List current directory", "ls")
            .example("Show details of a directory", "ls -l documents")
    }

    fn execute(&self, mut args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let flags = args.take_flags();
        if let Some(&bad) = flags.iter().find(|&&f| f != 'l') {
            return ExecResult::failure(EXIT_FAILURE, format!("ls: {}", ShellError::InvalidOption(bad)));
        }
        let long = !flags.is_empty();
        let target = args.get(0);

        match list(target, ctx) {
            Ok(listing) => ExecResult::success(render(&listing, long, ctx)),
            Err(e) => ExecResult::failure(
                EXIT_FAILURE,
                format!("ls: cannot access '{}': {}", target.unwrap_or("."), e),
            ),
        }
    }
}

/// What a target resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Listing {
    /// A single file, named as the user typed it.
    File(DirEntry),
    /// A directory's entries in name order.
    Directory(Vec<DirEntry>),
}

fn list(target: Option<&str>, ctx: &ExecContext) -> ShellResult<Listing> {
    let Some(target) = target else {
        return ctx.fs.list(ctx.cwd()).map(Listing::Directory);
    };
    let path = ctx.resolve_path(target);
    let node = ctx.fs.stat(&path).map_err(|e| e.with_operand(target))?;
    if node.is_file() {
        Ok(Listing::File(node.entry(target)))
    } else {
        ctx.fs
            .list(&path)
            .map(Listing::Directory)
            .map_err(|e| e.with_operand(target))
    }
}

fn render(listing: &Listing, long: bool, ctx: &ExecContext) -> String {
    match listing {
        Listing::File(entry) if long => long_line(entry),
        Listing::File(entry) => entry.name.clone(),
        Listing::Directory(entries) if long => ctx.join_lines(entries.iter().map(long_line)),
        Listing::Directory(entries) => entries
            .iter()
            .map(short_name)
            .collect::<Vec<_>>()
            .join("\t"),
    }
}

fn short_name(entry: &DirEntry) -> String {
    if entry.is_dir() {
        format!("{DIR_STYLE}{}/{RESET}", entry.name)
    } else {
        entry.name.clone()
    }
}

/// `perms 1 owner group  size date name`, size right-justified to 6.
fn long_line(entry: &DirEntry) -> String {
    let name = if entry.is_dir() {
        format!("{DIR_STYLE}{}{RESET}", entry.name)
    } else {
        entry.name.clone()
    };
    format!(
        "{} 1 {} {} {:>6} {} {}",
        entry.permissions, entry.owner, entry.group, entry.size, entry.modified, name
    )
}
