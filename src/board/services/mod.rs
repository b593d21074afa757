//! Application services for board state management.

mod config;
mod envelope;
mod store;
mod subscription;

pub use config::BoardStoreConfig;
pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
pub use subscription::Subscription;
