//! Virtual filesystem for tutsh.
//!
//! A single in-memory [`Tree`] of [`Node`]s, owned by one session:
//!
//! ```text
//! /
//! └── home/
//!     └── user/            # home, the target of `~`
//!         ├── documents/
//!         ├── projects/
//!         ├── downloads/
//!         └── README.txt
//! ```
//!
//! Nodes are owned by their parent's children map and dropped when removed.
//! Nothing in the tree is shared between sessions.

mod node;
mod seed;
mod tree;

pub use node::{Node, DIR_PERMISSIONS, DIR_SIZE, FILE_PERMISSIONS, GROUP, OWNER};
pub use seed::tutorial_tree;
pub use tree::Tree;
