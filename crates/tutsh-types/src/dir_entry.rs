//! Directory entry types returned by filesystem listings.

use serde::{Deserialize, Serialize};

/// Kind of node in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// A directory entry — the display metadata of one node.
///
/// Produced by tree listings and `stat`-style lookups; `ls -l` renders one
/// line per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Name of the entry (not full path).
    pub name: String,
    /// Kind of entry.
    pub kind: EntryKind,
    /// Display permissions, e.g. `-rw-r--r--`. Never enforced.
    pub permissions: String,
    pub owner: String,
    pub group: String,
    /// Size in bytes (a constant display value for directories).
    pub size: u64,
    /// Last-modified display string, e.g. `Jul 25 10:00`.
    pub modified: String,
}

impl DirEntry {
    /// Returns true if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns true if this entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}
