//! Domain model for the Kanban board.
//!
//! The board aggregate owns columns and tasks and exposes every mutation as
//! a pure transition from one snapshot to the next. Persistence, identifier
//! generation and change notification live outside the domain boundary.

mod board;
mod column;
mod error;
mod ids;
mod task;

pub use board::{Board, TaskMove};
pub use column::Column;
pub use error::{BoardDomainError, BoardIntegrityError};
pub use ids::{ColumnId, TaskId};
pub use task::{NewTask, Task, TaskPatch};
