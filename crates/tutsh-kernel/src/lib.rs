//! tutsh-kernel: the core of the tutsh teaching shell.
//!
//! This crate provides:
//!
//! - **Paths**: resolving typed paths against the current location
//! - **VFS**: the in-memory filesystem tree and its seeded tutorial layout
//! - **State**: per-session location, identity and history
//! - **Tools**: Tool trait, registry, and the builtin commands
//! - **Kernel**: one session wiring all of the above behind `execute(line)`
//!
//! ```
//! use tutsh_kernel::{Kernel, KernelConfig};
//!
//! let mut kernel = Kernel::new(KernelConfig::default())?;
//! kernel.execute("mkdir notes");
//! assert_eq!(kernel.execute("cd notes").code, 0);
//! assert_eq!(kernel.execute("pwd").out, "/home/user/notes");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod clock;
pub mod help;
pub mod kernel;
pub mod paths;
pub mod state;
pub mod tools;
pub mod vfs;

pub use clock::{Clock, FixedClock, SystemClock};
pub use kernel::{Kernel, KernelConfig};
pub use paths::VPath;
pub use state::Session;
pub use tools::{NullScreen, Screen};

pub use tutsh_types::{DirEntry, EntryKind, ExecResult, ShellError, ShellResult};
