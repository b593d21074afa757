//! In-memory key-value storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::ports::{KeyValueStorage, StorageError, StorageKey, StorageResult};

/// Thread-safe in-memory key-value storage.
///
/// Clones share the same underlying map, so a store reopened with a clone
/// sees everything written through the original.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with a single entry.
    #[must_use]
    pub fn with_entry(key: &StorageKey, value: impl Into<String>) -> Self {
        let entries = HashMap::from([(key.as_str().to_owned(), value.into())]);
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

fn poisoned(err: &impl ToString) -> StorageError {
    StorageError::io(std::io::Error::other(err.to_string()))
}

impl KeyValueStorage for InMemoryStorage {
    fn get_item(&self, key: &StorageKey) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|err| poisoned(&err))?;
        Ok(entries.get(key.as_str()).cloned())
    }

    fn set_item(&self, key: &StorageKey, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(&err))?;
        entries.insert(key.as_str().to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &StorageKey) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|err| poisoned(&err))?;
        entries.remove(key.as_str());
        Ok(())
    }
}
