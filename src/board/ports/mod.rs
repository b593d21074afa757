//! Port contracts for the board store.
//!
//! Ports define the infrastructure-agnostic collaborators the store relies
//! on: a key-value storage for the persisted board and a generator for
//! fresh identifiers.

pub mod ids;
pub mod storage;

pub use ids::IdGenerator;
pub use storage::{
    DEFAULT_STORAGE_KEY, KeyValueStorage, StorageError, StorageKey, StorageResult,
};
