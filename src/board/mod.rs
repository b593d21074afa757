//! Kanban board state management.
//!
//! The board module holds columns, tasks and the column order, applies
//! add/update/delete/move/reorder transitions, persists every committed
//! snapshot and notifies subscribers. It follows hexagonal architecture:
//!
//! - Domain types and pure transitions in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The stateful [`services::BoardStore`] in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
