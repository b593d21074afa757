//! Filesystem adapter backed by a capability directory.

mod storage;

pub use storage::FileStorage;
