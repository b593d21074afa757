//! Adapter implementations of the board ports.
//!
//! - [`memory`]: process-local storage and deterministic identifiers
//! - [`file`]: one JSON file per storage key in a capability directory
//! - [`uuid_ids`]: random UUID v4 identifiers

pub mod file;
pub mod memory;
pub mod uuid_ids;
