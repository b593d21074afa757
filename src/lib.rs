//! Kanban board: a to-do board store with persistence and view bindings.
//!
//! The crate keeps a board of columns and tasks, applies mutations as
//! immutable snapshot transitions, persists every committed snapshot to a
//! key-value storage, and notifies subscribers so views can re-render.
//!
//! # Architecture
//!
//! The board follows hexagonal architecture principles:
//!
//! - **Domain**: the board aggregate and its pure transitions
//! - **Ports**: storage and identifier generation contracts
//! - **Adapters**: in-memory, file-backed and UUID implementations
//! - **Services**: the stateful store with its subscriber registry
//!
//! # Modules
//!
//! - [`board`]: board state, transitions, persistence and notification
//! - [`view`]: metric cards and footer rendering bound to a store
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kanban_board::board::{
//!     adapters::memory::{InMemoryStorage, SequentialIdGenerator},
//!     domain::NewTask,
//!     services::{BoardStore, BoardStoreConfig},
//! };
//! use mockable::DefaultClock;
//!
//! let store = BoardStore::open(
//!     BoardStoreConfig::default(),
//!     Arc::new(InMemoryStorage::new()),
//!     Arc::new(SequentialIdGenerator::default()),
//!     Arc::new(DefaultClock),
//! )
//! .expect("empty storage hydrates");
//!
//! let todo = store.add_column("Todo").expect("column added");
//! let done = store.add_column("Done").expect("column added");
//! let task = store
//!     .add_task(&todo, NewTask::new("Write docs").expect("valid title"))
//!     .expect("task added");
//! store.move_task(&task, &todo, &done, 0).expect("task moved");
//!
//! let board = store.state().expect("snapshot readable");
//! assert_eq!(board.task(&task).map(|t| t.column_id()), Some(&done));
//! ```

pub mod board;
pub mod view;
