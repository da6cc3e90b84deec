//! Execution context for tools.

use std::sync::Arc;

use tutsh_types::ShellResult;

use crate::clock::{Clock, SystemClock};
use crate::paths::VPath;
use crate::state::Session;
use crate::vfs::{Node, Tree};

use super::traits::ToolSchema;

/// Line ending of the web terminal host.
pub const CRLF: &str = "\r\n";

/// Execution context passed to tools.
///
/// Owns the session's tree and location state. Tools get `&mut` access for
/// the duration of one command and nothing else touches it meanwhile.
pub struct ExecContext {
    /// The filesystem tree.
    pub fs: Tree,
    /// Current location, identity and history.
    pub session: Session,
    /// Host line ending used to join multi-line output.
    pub newline: String,
    /// Source of timestamps.
    pub clock: Arc<dyn Clock>,
    /// Tool schemas for the help command.
    pub tool_schemas: Vec<ToolSchema>,
}

impl ExecContext {
    /// Create a context over `fs` with a default session.
    pub fn new(fs: Tree) -> Self {
        Self::with_session(fs, Session::default())
    }

    /// Create a context with a specific session.
    pub fn with_session(fs: Tree, session: Session) -> Self {
        Self {
            fs,
            session,
            newline: CRLF.to_string(),
            clock: Arc::new(SystemClock),
            tool_schemas: Vec::new(),
        }
    }

    /// Replace the clock.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the line ending.
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    /// Set the available tool schemas (for help command).
    pub fn set_tool_schemas(&mut self, schemas: Vec<ToolSchema>) {
        self.tool_schemas = schemas;
    }

    /// Current location.
    pub fn cwd(&self) -> &VPath {
        &self.session.cwd
    }

    /// Resolve a path relative to the current location.
    pub fn resolve_path(&self, path: &str) -> VPath {
        self.session.resolve(path)
    }

    /// The current directory node.
    pub fn current_dir(&self) -> ShellResult<&Node> {
        self.fs.dir(&self.session.cwd)
    }

    /// The current time as a display timestamp.
    pub fn now(&self) -> String {
        self.clock.stamp()
    }

    /// Join output lines with the host line ending.
    pub fn join_lines<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                out.push_str(&self.newline);
            }
            out.push_str(line.as_ref());
        }
        out
    }

    /// Make sure the current location still names a directory.
    ///
    /// If it vanished, move to the nearest surviving ancestor directory and
    /// return the new location.
    pub fn settle_cwd(&mut self) -> Option<VPath> {
        if self.current_dir().is_ok() {
            return None;
        }
        let mut candidate = self.session.cwd.clone();
        while self.fs.dir(&candidate).is_err() {
            // The root always exists, so this terminates.
            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => break,
            }
        }
        tracing::warn!(from = %self.session.cwd, to = %candidate, "current directory vanished, relocating");
        self.session.cwd = candidate.clone();
        Some(candidate)
    }
}
