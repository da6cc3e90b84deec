//! Tool system for tutsh.
//!
//! Every shell verb is a tool. Tools split their work in two: a pure
//! transition over the context returning `ShellResult<T>`, and a renderer that
//! turns that into an `ExecResult` with the bash-style message.
//!
//! # Architecture
//!
//! ```text
//! ToolRegistry
//! └── Builtins (ls, cd, pwd, cat, mkdir, rmdir, touch, rm, mv, cp,
//!               whoami, date, clear, help, echo, history)
//! ```

mod builtin;
mod context;
mod registry;
mod traits;

pub use builtin::{register_builtins, Screen, NullScreen};
pub use context::{ExecContext, CRLF};
pub use registry::ToolRegistry;
pub use traits::{Example, Tool, ToolArgs, ToolSchema};

#[cfg(test)]
pub(crate) mod test_support {
    //! Fixtures shared by the builtin tests.

    use std::sync::Arc;

    use chrono::NaiveDate;
    use tutsh_types::ExecResult;

    use super::{ExecContext, Tool, ToolArgs};
    use crate::clock::FixedClock;
    use crate::vfs::{Node, Tree};

    /// What the fixed test clock stamps.
    pub const NOW: &str = "Oct 19 09:30";
    /// An older stamp for pre-existing nodes.
    pub const THEN: &str = "Jul 25 10:00";

    pub fn fixed_clock() -> Arc<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        Arc::new(FixedClock(at))
    }

    /// A context whose `/home/user` is `home`, with cwd there.
    pub fn ctx_with(home: Node) -> ExecContext {
        let root = Node::directory(THEN)
            .with_child("home", Node::directory(THEN).with_child("user", home));
        ExecContext::new(Tree::from_root(root).unwrap()).with_clock(fixed_clock())
    }

    /// Run `tool` with whitespace-split `line` as arguments.
    pub fn run(tool: &dyn Tool, ctx: &mut ExecContext, line: &str) -> ExecResult {
        tool.execute(ToolArgs::from_words(line.split_whitespace()), ctx)
    }
}
