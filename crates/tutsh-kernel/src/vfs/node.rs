//! The node model: one file or directory in the tree.

use std::collections::BTreeMap;

use tutsh_types::{DirEntry, EntryKind};

/// Permissions shown for new directories.
pub const DIR_PERMISSIONS: &str = "drwxr-xr-x";
/// Permissions shown for new files.
pub const FILE_PERMISSIONS: &str = "-rw-r--r--";
/// Owner and group of every node.
pub const OWNER: &str = "user";
pub const GROUP: &str = "user";
/// Display size of every directory.
pub const DIR_SIZE: u64 = 4096;

/// Kind-specific payload. A file never has children, a directory never has
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    File { content: String },
    Directory { children: BTreeMap<String, Node> },
}

/// A file or directory.
///
/// The display attributes are plain data and may be edited freely; the kind
/// and its payload only change by replacing the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Display permissions. Cosmetic, never enforced.
    pub permissions: String,
    pub owner: String,
    pub group: String,
    /// Byte count for files, [`DIR_SIZE`] for directories.
    pub size: u64,
    /// Last-modified display string.
    pub modified: String,
    body: Body,
}

impl Node {
    /// A new file holding `content`, sized to its byte length.
    pub fn file(content: impl Into<String>, modified: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            permissions: FILE_PERMISSIONS.to_string(),
            owner: OWNER.to_string(),
            group: GROUP.to_string(),
            size: content.len() as u64,
            modified: modified.into(),
            body: Body::File { content },
        }
    }

    /// A new empty directory.
    pub fn directory(modified: impl Into<String>) -> Self {
        Self {
            permissions: DIR_PERMISSIONS.to_string(),
            owner: OWNER.to_string(),
            group: GROUP.to_string(),
            size: DIR_SIZE,
            modified: modified.into(),
            body: Body::Directory {
                children: BTreeMap::new(),
            },
        }
    }

    /// Override the display size.
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Add a child while building a directory. Ignored on files.
    pub fn with_child(mut self, name: impl Into<String>, child: Node) -> Self {
        if let Body::Directory { children } = &mut self.body {
            children.insert(name.into(), child);
        }
        self
    }

    pub fn kind(&self) -> EntryKind {
        match self.body {
            Body::File { .. } => EntryKind::File,
            Body::Directory { .. } => EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.body, Body::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self.body, Body::File { .. })
    }

    /// File content, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match &self.body {
            Body::File { content } => Some(content),
            Body::Directory { .. } => None,
        }
    }

    /// Directory children in name order, `None` for files.
    pub fn children(&self) -> Option<&BTreeMap<String, Node>> {
        match &self.body {
            Body::Directory { children } => Some(children),
            Body::File { .. } => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match &mut self.body {
            Body::Directory { children } => Some(children),
            Body::File { .. } => None,
        }
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().and_then(|c| c.get(name))
    }

    /// True for a directory with no children. Files are never empty dirs.
    pub fn is_empty_dir(&self) -> bool {
        self.children().is_some_and(BTreeMap::is_empty)
    }

    /// Refresh the last-modified stamp.
    pub fn touch(&mut self, modified: impl Into<String>) {
        self.modified = modified.into();
    }

    /// Display metadata for this node under `name`.
    pub fn entry(&self, name: &str) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            kind: self.kind(),
            permissions: self.permissions.clone(),
            owner: self.owner.clone(),
            group: self.group.clone(),
            size: self.size,
            modified: self.modified.clone(),
        }
    }
}
