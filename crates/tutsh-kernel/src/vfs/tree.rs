//! The in-memory filesystem tree.
//!
//! A single root directory owns every node. Mutations always go through a
//! resolved parent directory; nothing creates missing intermediate
//! directories. Errors carry the absolute path involved, callers relabel them
//! with the operand the user typed.

use tutsh_types::{DirEntry, ShellError, ShellResult};

use super::node::Node;
use crate::paths::VPath;

/// In-memory filesystem rooted at a single directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Create a tree holding only an empty root directory.
    pub fn new(modified: impl Into<String>) -> Self {
        Self {
            root: Node::directory(modified),
        }
    }

    /// Wrap an existing directory node as the root.
    ///
    /// Returns `Err` if `root` is a file.
    pub fn from_root(root: Node) -> ShellResult<Self> {
        if !root.is_dir() {
            return Err(ShellError::NotADirectory("/".into()));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk from the root. `None` as soon as a segment is missing or a file
    /// would have to be descended through.
    pub fn lookup(&self, path: &VPath) -> Option<&Node> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Mutable variant of [`Tree::lookup`].
    pub fn lookup_mut(&mut self, path: &VPath) -> Option<&mut Node> {
        let mut current = &mut self.root;
        for segment in path.segments() {
            current = current.children_mut()?.get_mut(segment)?;
        }
        Some(current)
    }

    /// Look up a node, failing with `NotFound`.
    pub fn stat(&self, path: &VPath) -> ShellResult<&Node> {
        self.lookup(path)
            .ok_or_else(|| ShellError::NotFound(path.to_string()))
    }

    /// Look up a directory, failing with `NotFound` or `NotADirectory`.
    pub fn dir(&self, path: &VPath) -> ShellResult<&Node> {
        let node = self.stat(path)?;
        if node.is_dir() {
            Ok(node)
        } else {
            Err(ShellError::NotADirectory(path.to_string()))
        }
    }

    fn dir_mut(&mut self, path: &VPath) -> ShellResult<&mut Node> {
        match self.lookup_mut(path) {
            Some(node) if node.is_dir() => Ok(node),
            Some(_) => Err(ShellError::NotADirectory(path.to_string())),
            None => Err(ShellError::NotFound(path.to_string())),
        }
    }

    /// List a directory's entries in name order.
    pub fn list(&self, path: &VPath) -> ShellResult<Vec<DirEntry>> {
        let dir = self.dir(path)?;
        Ok(dir
            .children()
            .into_iter()
            .flatten()
            .map(|(name, node)| node.entry(name))
            .collect())
    }

    /// Attach `node` as a new child `name` of the directory at `parent`.
    pub fn insert(&mut self, parent: &VPath, name: &str, node: Node) -> ShellResult<()> {
        validate_name(name)?;
        let dir = self.dir_mut(parent)?;
        let children = dir
            .children_mut()
            .ok_or_else(|| ShellError::NotADirectory(parent.to_string()))?;
        if children.contains_key(name) {
            return Err(ShellError::AlreadyExists(parent.join(name).to_string()));
        }
        tracing::trace!(parent = %parent, name, kind = ?node.kind(), "insert");
        children.insert(name.to_string(), node);
        Ok(())
    }

    /// Detach and return the child `name` of the directory at `parent`.
    ///
    /// The returned node is dropped by the caller unless re-attached.
    pub fn remove(&mut self, parent: &VPath, name: &str) -> ShellResult<Node> {
        let dir = self.dir_mut(parent)?;
        let children = dir
            .children_mut()
            .ok_or_else(|| ShellError::NotADirectory(parent.to_string()))?;
        let node = children
            .remove(name)
            .ok_or_else(|| ShellError::NotFound(parent.join(name).to_string()))?;
        tracing::trace!(parent = %parent, name, "remove");
        Ok(node)
    }

    /// Bind `node` under `name`, returning whatever was bound there before.
    pub fn replace(&mut self, parent: &VPath, name: &str, node: Node) -> ShellResult<Option<Node>> {
        validate_name(name)?;
        let dir = self.dir_mut(parent)?;
        let children = dir
            .children_mut()
            .ok_or_else(|| ShellError::NotADirectory(parent.to_string()))?;
        tracing::trace!(parent = %parent, name, "replace");
        Ok(children.insert(name.to_string(), node))
    }

    /// Move the node at `src` to `dst`, keeping its identity and metadata.
    ///
    /// `dst` must not exist and its parent must be a directory. A directory
    /// can never be attached beneath itself.
    pub fn move_entry(&mut self, src: &VPath, dst: &VPath) -> ShellResult<()> {
        let (Some(src_parent), Some(src_name)) = (src.parent(), src.file_name()) else {
            return Err(ShellError::WouldCycle(src.to_string()));
        };
        let (Some(dst_parent), Some(dst_name)) = (dst.parent(), dst.file_name()) else {
            return Err(ShellError::AlreadyExists(dst.to_string()));
        };

        self.stat(src)?;
        validate_name(dst_name)?;
        if self.lookup(dst).is_some() {
            return Err(ShellError::AlreadyExists(dst.to_string()));
        }
        if dst.starts_with(src) {
            return Err(ShellError::WouldCycle(dst.to_string()));
        }
        self.dir(&dst_parent)?;

        let node = self.remove(&src_parent, src_name)?;
        if let Err(e) = self.insert(&dst_parent, dst_name, node.clone()) {
            // Put the node back so a failed move leaves the tree untouched.
            self.replace(&src_parent, src_name, node)?;
            return Err(e);
        }
        Ok(())
    }
}

/// A child name is one non-empty segment other than `.` and `..`.
fn validate_name(name: &str) -> ShellResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(ShellError::InvalidName(name.to_string()));
    }
    Ok(())
}
