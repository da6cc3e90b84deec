//! ExecResult — the structured result of every command execution.
//!
//! The host terminal only ever sees a string; `ExecResult` keeps success and
//! failure apart until the final rendering step.

use serde::{Deserialize, Serialize};

/// Exit code for a command that ran and failed.
pub const EXIT_FAILURE: i64 = 1;
/// Exit code for a verb with no registered handler.
pub const EXIT_NOT_FOUND: i64 = 127;

/// The result of executing one command.
///
/// - `code` — exit code (0 = success)
/// - `out` — display text on success (may be empty)
/// - `err` — display text on failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output as a string.
    pub out: String,
    /// Standard error as a string.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }

    /// The text to hand to the terminal renderer.
    ///
    /// The empty string means "no output".
    pub fn text(&self) -> &str {
        if self.ok() { &self.out } else { &self.err }
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}
