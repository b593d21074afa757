//! Board store configuration.

use crate::board::ports::StorageKey;

/// Settings for a [`BoardStore`](super::BoardStore).
///
/// # Examples
///
/// ```
/// use kanban_board::board::{ports::StorageKey, services::BoardStoreConfig};
///
/// let config = BoardStoreConfig::default();
/// assert_eq!(config.storage_key().as_str(), "kanban-storage");
/// assert_eq!(config.version(), 0);
///
/// let custom = BoardStoreConfig::default()
///     .with_storage_key(StorageKey::new("team-board").expect("valid key"))
///     .with_version(2);
/// assert_eq!(custom.storage_key().as_str(), "team-board");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardStoreConfig {
    storage_key: StorageKey,
    version: u32,
}

impl BoardStoreConfig {
    /// Sets the key the board is persisted under.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: StorageKey) -> Self {
        self.storage_key = storage_key;
        self
    }

    /// Sets the schema version written to, and required from, storage.
    #[must_use]
    pub const fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Returns the storage key.
    #[must_use]
    pub const fn storage_key(&self) -> &StorageKey {
        &self.storage_key
    }

    /// Returns the persisted schema version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }
}
