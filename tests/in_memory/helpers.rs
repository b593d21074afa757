//! Shared test helpers for in-memory board store integration tests.

use std::sync::Arc;

use kanban_board::board::{
    adapters::memory::{InMemoryStorage, SequentialIdGenerator},
    domain::{Board, ColumnId, NewTask, TaskId},
    services::{BoardStore, BoardStoreConfig, BoardStoreError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used across the in-memory suites.
pub type TestStore = BoardStore<InMemoryStorage, SequentialIdGenerator, DefaultClock>;

/// Provides fresh shared storage for each test.
#[fixture]
pub fn storage() -> InMemoryStorage {
    InMemoryStorage::new()
}

/// Opens a store over `storage` with the default configuration.
///
/// Identifiers are prefixed with `prefix` so that several stores sharing
/// one storage never mint the same identifier.
///
/// # Errors
///
/// Returns an error if the stored board cannot be hydrated.
pub fn open_store(storage: &InMemoryStorage, prefix: &str) -> Result<TestStore, BoardStoreError> {
    BoardStore::open(
        BoardStoreConfig::default(),
        Arc::new(storage.clone()),
        Arc::new(SequentialIdGenerator::new(prefix)),
        Arc::new(DefaultClock),
    )
}

/// Provides a store over empty storage.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
#[fixture]
pub fn store() -> Result<TestStore, BoardStoreError> {
    open_store(&InMemoryStorage::new(), "id")
}

/// Adds a task with the given title.
///
/// # Errors
///
/// Returns an error if the title is blank or the store rejects the task.
pub fn add_titled_task(
    store: &TestStore,
    column_id: &ColumnId,
    title: &str,
) -> Result<TaskId, BoardStoreError> {
    let draft = NewTask::new(title)?;
    store.add_task(column_id, draft)
}

/// Returns the task titles of a column in display order.
#[must_use]
pub fn titles_in(board: &Board, column_id: &ColumnId) -> Vec<String> {
    board
        .column_tasks(column_id)
        .map(|tasks| tasks.iter().map(|task| task.title().to_owned()).collect())
        .unwrap_or_default()
}
