//! File-backed key-value storage.
//!
//! Each key maps to `<key>.json` inside a single directory. Writes go to a
//! dot-prefixed temporary file that is synced to disk and then renamed over
//! the target, so readers never see a partially written value and a crash
//! after the rename cannot leave an empty file behind.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{ErrorKind, Write};
use tracing::debug;

use crate::board::ports::{KeyValueStorage, StorageError, StorageKey, StorageResult};

const FILE_EXTENSION: &str = "json";

/// Key-value storage that keeps one JSON file per key.
#[derive(Debug)]
pub struct FileStorage {
    root: Utf8PathBuf,
    dir: Dir,
}

impl FileStorage {
    /// Opens storage rooted at `root`, creating the directory when missing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> StorageResult<Self> {
        let root_path = root.as_ref();
        Dir::create_ambient_dir_all(root_path, ambient_authority()).map_err(StorageError::io)?;
        let dir = Dir::open_ambient_dir(root_path, ambient_authority()).map_err(StorageError::io)?;
        debug!(root = %root_path, "opened file storage");
        Ok(Self {
            root: root_path.to_owned(),
            dir,
        })
    }

    /// Returns the directory holding the stored files.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the path of the file backing `key`, relative to the root.
    #[must_use]
    pub fn file_name(key: &StorageKey) -> String {
        format!("{key}.{FILE_EXTENSION}")
    }

    fn temp_file_name(key: &StorageKey) -> String {
        format!(".{key}.{FILE_EXTENSION}.tmp")
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &StorageKey) -> StorageResult<Option<String>> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(err)),
        }
    }

    fn set_item(&self, key: &StorageKey, value: &str) -> StorageResult<()> {
        let temp_name = Self::temp_file_name(key);
        let mut temp_file = self.dir.create(&temp_name).map_err(StorageError::io)?;
        temp_file
            .write_all(value.as_bytes())
            .map_err(StorageError::io)?;
        temp_file.sync_all().map_err(StorageError::io)?;
        drop(temp_file);
        self.dir
            .rename(&temp_name, &self.dir, Self::file_name(key))
            .map_err(StorageError::io)?;
        debug!(key = %key, bytes = value.len(), "wrote storage entry");
        Ok(())
    }

    fn remove_item(&self, key: &StorageKey) -> StorageResult<()> {
        match self.dir.remove_file(Self::file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::io(err)),
        }
    }
}
