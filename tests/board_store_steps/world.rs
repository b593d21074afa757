//! Shared world state for board store BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use kanban_board::board::{
    adapters::memory::{InMemoryStorage, SequentialIdGenerator},
    domain::{Board, ColumnId, TaskId},
    services::{BoardStore, BoardStoreConfig, BoardStoreError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Store type used by the BDD world.
pub type TestBoardStore = BoardStore<InMemoryStorage, SequentialIdGenerator, DefaultClock>;

/// Scenario world for board store behaviour tests.
pub struct BoardWorld {
    pub storage: InMemoryStorage,
    pub store: Option<TestBoardStore>,
    pub columns: HashMap<String, ColumnId>,
    pub tasks: HashMap<String, TaskId>,
    pub last_result: Option<Result<(), BoardStoreError>>,
    pub original_board: Option<Arc<Board>>,
    pub reopened_board: Option<Arc<Board>>,
}

impl BoardWorld {
    /// Creates a world with no open store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: InMemoryStorage::new(),
            store: None,
            columns: HashMap::new(),
            tasks: HashMap::new(),
            last_result: None,
            original_board: None,
            reopened_board: None,
        }
    }

    /// Opens a store over the world's storage.
    ///
    /// `prefix` keeps identifiers minted by successive stores distinct.
    pub fn open_store(&self, prefix: &str) -> Result<TestBoardStore, BoardStoreError> {
        BoardStore::open(
            BoardStoreConfig::default(),
            Arc::new(self.storage.clone()),
            Arc::new(SequentialIdGenerator::new(prefix)),
            Arc::new(DefaultClock),
        )
    }

    /// Returns the open store.
    pub fn store(&self) -> Result<&TestBoardStore, eyre::Report> {
        self.store
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no board store open in scenario world"))
    }

    /// Resolves a column title used in the scenario to its identifier.
    pub fn column(&self, title: &str) -> Result<ColumnId, eyre::Report> {
        self.columns
            .get(title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("unknown column '{title}' in scenario world"))
    }

    /// Resolves a task title used in the scenario to its identifier.
    pub fn task(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .cloned()
            .ok_or_else(|| eyre::eyre!("unknown task '{title}' in scenario world"))
    }

    /// Returns the current board snapshot.
    pub fn board(&self) -> Result<Arc<Board>, eyre::Report> {
        self.store()?
            .state()
            .map_err(|err| eyre::eyre!("board snapshot unavailable: {err}"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
