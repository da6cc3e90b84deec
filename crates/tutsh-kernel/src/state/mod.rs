//! Per-session state: where the user is and who they are.
//!
//! A `Session` never holds a reference into the tree. The current location
//! is a [`VPath`] re-resolved on every access, so a session is plain data
//! and each kernel owns exactly one.

use crate::paths::{resolve_with_home, VPath};

/// Default identity shown by `whoami` and the prompt.
pub const DEFAULT_USER: &str = "bloguser";
pub const DEFAULT_HOST: &str = "bloghost";

/// Oldest lines are dropped once history grows past this.
pub const MAX_HISTORY: usize = 1000;

const PROMPT_USER_STYLE: &str = "\x1B[1;32m";
const PROMPT_PATH_STYLE: &str = "\x1B[1;34m";
const RESET: &str = "\x1B[0m";

/// Mutable location plus identity constants for one terminal session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Current location. Changed only by `cd`.
    pub cwd: VPath,
    /// Previous location (for `cd -`).
    pub prev_cwd: Option<VPath>,
    /// Target of `~` and bare `cd`.
    pub home: VPath,
    pub user: String,
    pub host: String,
    /// Non-empty lines entered this session, oldest first, at most
    /// [`MAX_HISTORY`] of them.
    pub history: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        let home = VPath::default_home();
        Self {
            cwd: home.clone(),
            prev_cwd: None,
            home,
            user: DEFAULT_USER.to_string(),
            host: DEFAULT_HOST.to_string(),
            history: Vec::new(),
        }
    }
}

impl Session {
    /// Resolve a path typed by the user against the current location.
    pub fn resolve(&self, target: &str) -> VPath {
        resolve_with_home(target, &self.cwd, &self.home)
    }

    /// Change the current location, remembering the old one for `cd -`.
    pub fn set_cwd(&mut self, path: VPath) {
        let old = std::mem::replace(&mut self.cwd, path);
        self.prev_cwd = Some(old);
    }

    /// Get the previous location (for `cd -`).
    pub fn get_prev_cwd(&self) -> Option<&VPath> {
        self.prev_cwd.as_ref()
    }

    /// Record an entered line. A repeat of the previous line is skipped.
    pub fn record(&mut self, line: &str) {
        if self.history.last().is_some_and(|last| last == line) {
            return;
        }
        self.history.push(line.to_string());
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(..excess);
        }
    }

    /// Forget every recorded line.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// The colourised `user@host:/path$ ` prompt.
    pub fn prompt(&self) -> String {
        format!(
            "{PROMPT_USER_STYLE}{}@{}{RESET}:{PROMPT_PATH_STYLE}{}{RESET}$ ",
            self.user, self.host, self.cwd
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_starts_home() {
        let session = Session::default();
        assert_eq!(session.cwd.to_string(), "/home/user");
        assert!(session.get_prev_cwd().is_none());
    }

    #[test]
    fn test_set_cwd_remembers_previous() {
        let mut session = Session::default();
        session.set_cwd(VPath::root());
        assert_eq!(session.cwd, VPath::root());
        assert_eq!(session.get_prev_cwd(), Some(&VPath::default_home()));
    }

    #[test]
    fn test_resolve_uses_session_home() {
        let mut session = Session::default();
        session.home = VPath::parse("/root");
        assert_eq!(session.resolve("~/x").to_string(), "/root/x");
        assert_eq!(session.resolve("x").to_string(), "/home/user/x");
    }

    #[test]
    fn test_record_skips_immediate_repeat() {
        let mut session = Session::default();
        session.record("pwd");
        session.record("pwd");
        session.record("ls");
        session.record("pwd");
        assert_eq!(session.history, vec!["pwd", "ls", "pwd"]);
    }

    #[test]
    fn test_record_drops_oldest_past_cap() {
        let mut session = Session::default();
        for i in 0..MAX_HISTORY + 5 {
            session.record(&format!("echo {i}"));
        }
        assert_eq!(session.history.len(), MAX_HISTORY);
        assert_eq!(session.history[0], "echo 5");
        assert_eq!(
            session.history.last().map(String::as_str),
            Some(format!("echo {}", MAX_HISTORY + 4).as_str())
        );
    }

    #[test]
    fn test_clear_history() {
        let mut session = Session::default();
        session.record("ls");
        session.clear_history();
        assert!(session.history.is_empty());
    }

    #[test]
    fn test_prompt() {
        let session = Session::default();
        assert_eq!(
            session.prompt(),
            "\x1B[1;32mbloguser@bloghost\x1B[0m:\x1B[1;34m/home/user\x1B[0m$ "
        );
    }
}
