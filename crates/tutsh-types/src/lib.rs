//! Pure data types for tutsh — command results, directory entries, errors.
//!
//! This crate is a leaf dependency with no I/O and no clock. It exists so that
//! a host terminal can consume results from the kernel without pulling in the
//! filesystem or the builtins.

pub mod dir_entry;
pub mod error;
pub mod result;

// Flat re-exports for convenience
pub use dir_entry::*;
pub use error::*;
pub use result::*;
