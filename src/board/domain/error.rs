//! Error types for board transitions and integrity checks.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned when a board transition cannot be applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The referenced column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task is owned by a different column than the one named.
    #[error("task {task_id} is not in column {column_id}")]
    TaskNotInColumn {
        /// Task being moved.
        task_id: TaskId,
        /// Column named as the task's current owner.
        column_id: ColumnId,
    },

    /// A column position lies outside the column order.
    #[error("column index {index} is out of range for {len} columns")]
    ColumnIndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of columns on the board.
        len: usize,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// A column with the generated identifier already exists.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumnId(ColumnId),

    /// A task with the generated identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(TaskId),
}

/// Invariant violations found while verifying a board.
///
/// Boards built through [`Board`](super::Board) transitions never violate
/// these; they surface when a board is decoded from storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardIntegrityError {
    /// The column order names a column that does not exist.
    #[error("column order references unknown column {0}")]
    UnknownColumnInOrder(ColumnId),

    /// The column order lists the same column twice.
    #[error("column {0} appears more than once in the column order")]
    DuplicateColumnInOrder(ColumnId),

    /// A column exists but is absent from the column order.
    #[error("column {0} is missing from the column order")]
    ColumnMissingFromOrder(ColumnId),

    /// A column is stored under a key that differs from its identifier.
    #[error("column stored under key {key} carries identifier {id}")]
    ColumnKeyMismatch {
        /// Map key.
        key: ColumnId,
        /// Identifier embedded in the column.
        id: ColumnId,
    },

    /// A task is stored under a key that differs from its identifier.
    #[error("task stored under key {key} carries identifier {id}")]
    TaskKeyMismatch {
        /// Map key.
        key: TaskId,
        /// Identifier embedded in the task.
        id: TaskId,
    },

    /// A column lists a task that does not exist.
    #[error("column {column_id} references unknown task {task_id}")]
    UnknownTaskInColumn {
        /// Column holding the dangling reference.
        column_id: ColumnId,
        /// Missing task.
        task_id: TaskId,
    },

    /// More than one column position lists the same task.
    #[error("task {0} is listed more than once")]
    TaskListedTwice(TaskId),

    /// A task's back-reference disagrees with the column listing it.
    #[error("task {task_id} is listed in column {listed_in} but belongs to {owner}")]
    TaskOwnerMismatch {
        /// Task with the inconsistent back-reference.
        task_id: TaskId,
        /// Column whose task list contains the task.
        listed_in: ColumnId,
        /// Column named by the task itself.
        owner: ColumnId,
    },

    /// A task exists but no column lists it.
    #[error("task {0} is not listed in any column")]
    OrphanTask(TaskId),
}
