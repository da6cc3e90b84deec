//! Absolute locations in the tree and the path resolver.
//!
//! A [`VPath`] is a sequence of segment names from the root; the empty
//! sequence is the root itself. [`resolve`] turns whatever the user typed into
//! a `VPath` without touching the tree, so existence is always checked by the
//! lookup that follows.

use std::fmt;

/// Default home location, the target of `~`.
pub const DEFAULT_HOME: &[&str] = &["home", "user"];

/// An absolute location in the tree, as segment names from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VPath(Vec<String>);

impl VPath {
    /// The root location.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Build a path from segments. Empty segments are dropped.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            segments
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        )
    }

    /// The default home location (`/home/user`).
    pub fn default_home() -> Self {
        Self::from_segments(DEFAULT_HOME.iter().copied())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last segment, `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The containing location, `None` for the root.
    pub fn parent(&self) -> Option<VPath> {
        if self.0.is_empty() {
            None
        } else {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// This location with one more segment appended.
    pub fn join(&self, name: &str) -> VPath {
        let mut next = self.clone();
        next.push(name);
        next
    }

    pub fn push(&mut self, name: &str) {
        self.0.push(name.to_string());
    }

    /// Drop the last segment. Popping the root is a no-op.
    pub fn pop(&mut self) {
        self.0.pop();
    }

    /// True if `self` equals `ancestor` or lies below it.
    pub fn starts_with(&self, ancestor: &VPath) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    /// Parse an absolute path string. Relative markers are not interpreted.
    pub fn parse(path: &str) -> VPath {
        Self::from_segments(path.split('/'))
    }
}

impl fmt::Display for VPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Resolve `target` against `cwd`, with `~` meaning [`VPath::default_home`].
pub fn resolve(target: &str, cwd: &VPath) -> VPath {
    resolve_with_home(target, cwd, &VPath::default_home())
}

/// Resolve `target` against `cwd` with an explicit home location.
///
/// - a leading `/` starts from the root, anything else from `cwd`
/// - empty segments are skipped, so `a//b/` is `a/b`
/// - `.` is a no-op, `..` pops one segment and stops at the root
/// - `~` restarts from `home`; later segments continue from there
/// - everything else is appended as-is
pub fn resolve_with_home(target: &str, cwd: &VPath, home: &VPath) -> VPath {
    let mut resolved = if target.starts_with('/') {
        VPath::root()
    } else {
        cwd.clone()
    };

    for segment in target.split('/').filter(|s| !s.is_empty()) {
        match segment {
            "." => {}
            ".." => resolved.pop(),
            "~" => resolved = home.clone(),
            name => resolved.push(name),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn p(s: &str) -> VPath {
        VPath::parse(s)
    }

    #[rstest]
    #[case("/", "/home/user", "/")]
    #[case("docs", "/home/user", "/home/user/docs")]
    #[case("/etc//passwd/", "/home/user", "/etc/passwd")]
    #[case("..", "/home/user", "/home")]
    #[case("../..", "/home/user", "/")]
    #[case("../../../..", "/home/user", "/")]
    #[case("..", "/", "/")]
    #[case("./a/./b", "/", "/a/b")]
    #[case("~", "/", "/home/user")]
    #[case("~/documents", "/tmp", "/home/user/documents")]
    #[case("a/~/b", "/tmp", "/home/user/b")]
    #[case("/tmp/~/..", "/", "/home")]
    #[case("", "/home/user", "/home/user")]
    #[case("missing/../here", "/", "/here")]
    fn test_resolve(#[case] target: &str, #[case] cwd: &str, #[case] expected: &str) {
        assert_eq!(resolve(target, &p(cwd)), p(expected));
    }

    #[rstest]
    #[case("docs")]
    #[case("/a/b")]
    #[case("..")]
    #[case("~")]
    fn test_trailing_dot_is_idempotent(#[case] target: &str) {
        let cwd = p("/home/user");
        let dotted = format!("{}/.", target);
        assert_eq!(resolve(&dotted, &cwd), resolve(target, &cwd));
    }

    #[test]
    fn test_custom_home() {
        let home = p("/root");
        assert_eq!(resolve_with_home("~/x", &VPath::root(), &home), p("/root/x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(VPath::root().to_string(), "/");
        assert_eq!(VPath::default_home().to_string(), "/home/user");
    }

    #[test]
    fn test_parent_and_join() {
        let home = VPath::default_home();
        assert_eq!(home.parent(), Some(p("/home")));
        assert_eq!(VPath::root().parent(), None);
        assert_eq!(home.join("docs"), p("/home/user/docs"));
        assert_eq!(home.file_name(), Some("user"));
    }

    #[test]
    fn test_starts_with() {
        let home = VPath::default_home();
        assert!(home.join("a").starts_with(&home));
        assert!(home.starts_with(&home));
        assert!(home.starts_with(&VPath::root()));
        assert!(!p("/home/username").starts_with(&home));
    }
}
