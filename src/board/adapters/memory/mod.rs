//! In-memory adapters for tests and ephemeral sessions.

mod ids;
mod storage;

pub use ids::SequentialIdGenerator;
pub use storage::InMemoryStorage;
