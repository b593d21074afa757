//! Board store: the single owner of board state for a session.
//!
//! Each operation computes the next snapshot from the current one, writes
//! it to storage, commits it, and then notifies subscribers. The write
//! happens before the commit, so a storage failure leaves both the
//! in-memory snapshot and the stored document at the previous state.

use std::sync::{Arc, Mutex};

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{
    config::BoardStoreConfig,
    envelope,
    subscription::{ListenerRegistry, Subscription},
};
use crate::board::{
    domain::{
        Board, BoardDomainError, BoardIntegrityError, ColumnId, NewTask, TaskId, TaskMove,
        TaskPatch,
    },
    ports::{IdGenerator, KeyValueStorage, StorageError},
};

/// Service-level errors for board store operations.
#[derive(Debug, Error)]
pub enum BoardStoreError {
    /// The transition was rejected by the domain.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// The storage adapter failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The board could not be serialized.
    #[error("failed to encode board: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored document could not be deserialized.
    #[error("failed to decode stored board: {0}")]
    Decode(#[source] serde_json::Error),

    /// The stored document was written with another schema version.
    #[error("stored board has version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version the store is configured for.
        expected: u32,
        /// Version found in storage.
        found: u32,
    },

    /// The stored board violates a structural invariant.
    #[error("stored board is inconsistent: {0}")]
    Integrity(#[from] BoardIntegrityError),

    /// A previous operation panicked while holding the state lock.
    #[error("board state lock poisoned")]
    Poisoned,
}

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Board state container with persistence and change notification.
pub struct BoardStore<S, G, C>
where
    S: KeyValueStorage,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    config: BoardStoreConfig,
    storage: Arc<S>,
    ids: Arc<G>,
    clock: Arc<C>,
    state: Mutex<Committed>,
    listeners: Arc<ListenerRegistry>,
}

/// The current snapshot and the revision it was committed under.
///
/// Revisions start at zero for the hydrated board and increase by one per
/// commit.
struct Committed {
    board: Arc<Board>,
    revision: u64,
}

impl Committed {
    fn replace(&mut self, board: Arc<Board>) -> u64 {
        self.board = board;
        self.revision += 1;
        self.revision
    }
}

impl<S, G, C> BoardStore<S, G, C>
where
    S: KeyValueStorage,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Opens a store and hydrates it from storage.
    ///
    /// An absent entry yields an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when the entry cannot be read,
    /// [`BoardStoreError::Decode`] when it is not a valid document,
    /// [`BoardStoreError::UnsupportedVersion`] when its version differs from
    /// the configured one, and [`BoardStoreError::Integrity`] when the
    /// decoded board is inconsistent.
    pub fn open(
        config: BoardStoreConfig,
        storage: Arc<S>,
        ids: Arc<G>,
        clock: Arc<C>,
    ) -> BoardStoreResult<Self> {
        let board = load(&config, storage.as_ref())?;
        info!(
            key = %config.storage_key(),
            columns = board.columns().len(),
            tasks = board.tasks().len(),
            "board store hydrated"
        );
        Ok(Self {
            config,
            storage,
            ids,
            clock,
            state: Mutex::new(Committed {
                board: Arc::new(board),
                revision: 0,
            }),
            listeners: Arc::new(ListenerRegistry::default()),
        })
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardStoreConfig {
        &self.config
    }

    /// Returns the current board snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Poisoned`] when the state lock is poisoned.
    pub fn state(&self) -> BoardStoreResult<Arc<Board>> {
        let current = self.state.lock().map_err(|_| BoardStoreError::Poisoned)?;
        Ok(Arc::clone(&current.board))
    }

    /// Registers a listener called with every committed snapshot.
    ///
    /// Listeners run in registration order after the state lock has been
    /// released. A listener never receives an older snapshot after a newer
    /// one: when a nested or concurrent commit has already reached it, the
    /// superseded notification is skipped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Board) + Send + Sync + 'static,
    {
        self.listeners.register(Arc::new(listener))
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Adds an empty column at the end of the column order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError`] when persisting the new board fails.
    pub fn add_column(&self, title: impl Into<String>) -> BoardStoreResult<ColumnId> {
        let title_text = title.into();
        self.transition("add_column", |board| {
            let column_id = ColumnId::new(self.ids.generate());
            let next = board.with_column_added(column_id.clone(), title_text)?;
            Ok((next, column_id))
        })
    }

    /// Replaces the title of a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] (wrapped) when the
    /// column does not exist, or a storage error.
    pub fn update_column(
        &self,
        column_id: &ColumnId,
        title: impl Into<String>,
    ) -> BoardStoreResult<()> {
        let title_text = title.into();
        self.transition("update_column", |board| {
            Ok((board.with_column_renamed(column_id, title_text)?, ()))
        })
    }

    /// Deletes a column and every task it owns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] (wrapped) when the
    /// column does not exist, or a storage error.
    pub fn delete_column(&self, column_id: &ColumnId) -> BoardStoreResult<()> {
        self.transition("delete_column", |board| Ok((board.without_column(column_id)?, ())))
    }

    /// Adds a task at the end of a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] (wrapped) when the
    /// column does not exist, or a storage error.
    pub fn add_task(&self, column_id: &ColumnId, draft: NewTask) -> BoardStoreResult<TaskId> {
        self.transition("add_task", |board| {
            let task_id = TaskId::new(self.ids.generate());
            let next =
                board.with_task_added(column_id, task_id.clone(), draft, self.clock.utc())?;
            Ok((next, task_id))
        })
    }

    /// Merges a patch into a task and refreshes its edit time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] (wrapped) when the task
    /// does not exist, [`BoardDomainError::EmptyTaskTitle`] (wrapped) for a
    /// blank title, or a storage error.
    pub fn update_task(&self, task_id: &TaskId, patch: TaskPatch) -> BoardStoreResult<()> {
        self.transition("update_task", |board| {
            Ok((board.with_task_updated(task_id, patch, self.clock.utc())?, ()))
        })
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] (wrapped) when the task
    /// does not exist, or a storage error.
    pub fn delete_task(&self, task_id: &TaskId) -> BoardStoreResult<()> {
        self.transition("delete_task", |board| Ok((board.without_task(task_id)?, ())))
    }

    /// Moves a task to `new_index` in `destination`.
    ///
    /// # Errors
    ///
    /// Returns the wrapped [`BoardDomainError`] for unknown identifiers or
    /// a task owned by another column, or a storage error.
    pub fn move_task(
        &self,
        task_id: &TaskId,
        source: &ColumnId,
        destination: &ColumnId,
        new_index: usize,
    ) -> BoardStoreResult<()> {
        let request = TaskMove::new(
            task_id.clone(),
            source.clone(),
            destination.clone(),
            new_index,
        );
        self.transition("move_task", |board| Ok((board.with_task_moved(&request)?, ())))
    }

    /// Moves the column at `start_index` to `end_index`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnIndexOutOfRange`] (wrapped) when
    /// `start_index` does not name a column, or a storage error.
    pub fn reorder_column(&self, start_index: usize, end_index: usize) -> BoardStoreResult<()> {
        self.transition("reorder_column", |board| {
            Ok((board.with_column_reordered(start_index, end_index)?, ()))
        })
    }

    /// Replaces the current snapshot with the stored board.
    ///
    /// Subscribers are notified with the reloaded board.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`open`](Self::open).
    pub fn rehydrate(&self) -> BoardStoreResult<Arc<Board>> {
        let reloaded = Arc::new(load(&self.config, self.storage.as_ref())?);
        let revision = {
            let mut current = self.state.lock().map_err(|_| BoardStoreError::Poisoned)?;
            current.replace(Arc::clone(&reloaded))
        };
        info!(key = %self.config.storage_key(), revision, "board store rehydrated");
        self.notify(revision, &reloaded);
        Ok(reloaded)
    }

    /// Removes the persisted board. The in-memory snapshot is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Storage`] when the entry cannot be removed.
    pub fn clear_storage(&self) -> BoardStoreResult<()> {
        self.storage.remove_item(self.config.storage_key())?;
        info!(key = %self.config.storage_key(), "persisted board cleared");
        Ok(())
    }

    /// Flushes the current snapshot, drops every listener and returns the
    /// final board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError`] when the final write fails.
    pub fn close(self) -> BoardStoreResult<Arc<Board>> {
        let board = self.state()?;
        self.persist(&board)?;
        self.listeners.clear();
        info!(key = %self.config.storage_key(), "board store closed");
        Ok(board)
    }

    /// Applies one transition: compute, persist, commit, notify.
    fn transition<T, F>(&self, operation: &'static str, apply: F) -> BoardStoreResult<T>
    where
        F: FnOnce(&Board) -> Result<(Board, T), BoardDomainError>,
    {
        let (committed, revision, output) = {
            let mut current = self.state.lock().map_err(|_| BoardStoreError::Poisoned)?;
            let (next, output) = apply(&current.board).inspect_err(|err| {
                debug!(operation, error = %err, "board transition rejected");
            })?;
            self.persist(&next)?;
            let committed = Arc::new(next);
            let revision = current.replace(Arc::clone(&committed));
            (committed, revision, output)
        };
        debug!(
            operation,
            revision,
            columns = committed.columns().len(),
            tasks = committed.tasks().len(),
            "board transition committed"
        );
        self.notify(revision, &committed);
        Ok(output)
    }

    fn persist(&self, board: &Board) -> BoardStoreResult<()> {
        let document =
            envelope::encode(board, self.config.version()).map_err(BoardStoreError::Encode)?;
        self.storage
            .set_item(self.config.storage_key(), &document)
            .map_err(|err| {
                warn!(key = %self.config.storage_key(), error = %err, "failed to persist board");
                BoardStoreError::from(err)
            })
    }

    fn notify(&self, revision: u64, board: &Board) {
        for listener in self.listeners.snapshot() {
            if !listener.deliver(revision, board) {
                debug!(revision, "skipped superseded notification");
            }
        }
    }
}

fn load<S>(config: &BoardStoreConfig, storage: &S) -> BoardStoreResult<Board>
where
    S: KeyValueStorage + ?Sized,
{
    let Some(raw) = storage.get_item(config.storage_key())? else {
        return Ok(Board::new());
    };
    let (board, found) = envelope::decode(&raw).map_err(BoardStoreError::Decode)?;
    if found != config.version() {
        return Err(BoardStoreError::UnsupportedVersion {
            expected: config.version(),
            found,
        });
    }
    board.verify_integrity()?;
    Ok(board)
}
