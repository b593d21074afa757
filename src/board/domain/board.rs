//! Board aggregate and its state transitions.
//!
//! Every transition borrows the current board and returns a new one, so a
//! failed transition leaves the original untouched. Preconditions are
//! checked against the current board before the copy is modified.

use super::{
    BoardDomainError, BoardIntegrityError, Column, ColumnId, NewTask, Task, TaskId, TaskPatch,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// The full to-do structure: columns, tasks and column ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    columns: HashMap<ColumnId, Column>,
    tasks: HashMap<TaskId, Task>,
    column_order: Vec<ColumnId>,
}

/// Parameter object describing a drag of one task to a new position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskMove {
    /// Task being moved.
    pub task_id: TaskId,
    /// Column currently owning the task.
    pub source: ColumnId,
    /// Column receiving the task; may equal `source`.
    pub destination: ColumnId,
    /// Target position in the destination; past-the-end appends.
    pub new_index: usize,
}

impl TaskMove {
    /// Creates a move request.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        source: ColumnId,
        destination: ColumnId,
        new_index: usize,
    ) -> Self {
        Self {
            task_id,
            source,
            destination,
            new_index,
        }
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all columns keyed by identifier.
    #[must_use]
    pub const fn columns(&self) -> &HashMap<ColumnId, Column> {
        &self.columns
    }

    /// Returns all tasks keyed by identifier.
    #[must_use]
    pub const fn tasks(&self) -> &HashMap<TaskId, Task> {
        &self.tasks
    }

    /// Returns the column identifiers in display order.
    #[must_use]
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Looks up a column.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.get(id)
    }

    /// Looks up a task.
    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Iterates columns in display order.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order.iter().filter_map(|id| self.columns.get(id))
    }

    /// Returns the tasks of a column in display order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] when the column does not
    /// exist.
    pub fn column_tasks(&self, id: &ColumnId) -> Result<Vec<&Task>, BoardDomainError> {
        let column = self.require_column(id)?;
        Ok(column
            .task_ids()
            .iter()
            .filter_map(|task_id| self.tasks.get(task_id))
            .collect())
    }

    /// Returns `true` when the board has no columns and no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.tasks.is_empty() && self.column_order.is_empty()
    }

    /// Adds an empty column at the end of the column order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateColumnId`] when the identifier
    /// is already in use.
    pub fn with_column_added(
        &self,
        id: ColumnId,
        title: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        if self.columns.contains_key(&id) {
            return Err(BoardDomainError::DuplicateColumnId(id));
        }
        let mut next = self.clone();
        next.column_order.push(id.clone());
        next.columns.insert(id.clone(), Column::new(id, title.into()));
        Ok(next)
    }

    /// Replaces a column title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] when the column does not
    /// exist.
    pub fn with_column_renamed(
        &self,
        id: &ColumnId,
        title: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        self.require_column(id)?;
        let mut next = self.clone();
        next.column_mut(id)?.rename(title.into());
        Ok(next)
    }

    /// Removes a column together with every task it owns.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] when the column does not
    /// exist.
    pub fn without_column(&self, id: &ColumnId) -> Result<Self, BoardDomainError> {
        self.require_column(id)?;
        let mut next = self.clone();
        next.columns.remove(id);
        next.tasks.retain(|_, task| task.column_id() != id);
        next.column_order.retain(|column_id| column_id != id);
        Ok(next)
    }

    /// Adds a task at the end of a column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnNotFound`] when the column does not
    /// exist or [`BoardDomainError::DuplicateTaskId`] when the task
    /// identifier is already in use.
    pub fn with_task_added(
        &self,
        column_id: &ColumnId,
        task_id: TaskId,
        draft: NewTask,
        created_at: DateTime<Utc>,
    ) -> Result<Self, BoardDomainError> {
        self.require_column(column_id)?;
        if self.tasks.contains_key(&task_id) {
            return Err(BoardDomainError::DuplicateTaskId(task_id));
        }
        let mut next = self.clone();
        next.column_mut(column_id)?.push_task(task_id.clone());
        let task = Task::new(task_id.clone(), column_id.clone(), draft, created_at);
        next.tasks.insert(task_id, task);
        Ok(next)
    }

    /// Merges a patch into a task and stamps its edit time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task does not
    /// exist, or the patch validation error.
    pub fn with_task_updated(
        &self,
        task_id: &TaskId,
        patch: TaskPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, BoardDomainError> {
        self.require_task(task_id)?;
        patch.validate()?;
        let mut next = self.clone();
        next.task_mut(task_id)?.apply(patch, updated_at);
        Ok(next)
    }

    /// Removes a task from the task map and from its owning column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task does not
    /// exist.
    pub fn without_task(&self, task_id: &TaskId) -> Result<Self, BoardDomainError> {
        let owner = self.require_task(task_id)?.column_id().clone();
        let mut next = self.clone();
        next.tasks.remove(task_id);
        next.column_mut(&owner)?.remove_task(task_id);
        Ok(next)
    }

    /// Moves a task to a position in the same or another column.
    ///
    /// Any existing occurrence of the task in the destination is removed
    /// before insertion, so repeating a move yields the same ordering. A
    /// task already owned by the destination is accepted for the same
    /// reason. An index past the end of the destination appends.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] or
    /// [`BoardDomainError::ColumnNotFound`] for unknown identifiers, and
    /// [`BoardDomainError::TaskNotInColumn`] when neither `source` nor
    /// `destination` owns the task.
    pub fn with_task_moved(&self, request: &TaskMove) -> Result<Self, BoardDomainError> {
        let task = self.require_task(&request.task_id)?;
        self.require_column(&request.source)?;
        self.require_column(&request.destination)?;
        let owner = task.column_id();
        if owner != &request.source && owner != &request.destination {
            return Err(BoardDomainError::TaskNotInColumn {
                task_id: request.task_id.clone(),
                column_id: request.source.clone(),
            });
        }

        let mut next = self.clone();
        next.column_mut(&request.source)?.remove_task(&request.task_id);
        let destination = next.column_mut(&request.destination)?;
        destination.remove_task(&request.task_id);
        destination.insert_task(request.new_index, request.task_id.clone());
        next.task_mut(&request.task_id)?.reassign(request.destination.clone());
        Ok(next)
    }

    /// Moves the column at `start_index` to `end_index` in the column order.
    ///
    /// An `end_index` past the end appends.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ColumnIndexOutOfRange`] when
    /// `start_index` does not name a column.
    pub fn with_column_reordered(
        &self,
        start_index: usize,
        end_index: usize,
    ) -> Result<Self, BoardDomainError> {
        let len = self.column_order.len();
        if start_index >= len {
            return Err(BoardDomainError::ColumnIndexOutOfRange {
                index: start_index,
                len,
            });
        }
        let mut next = self.clone();
        let moved = next.column_order.remove(start_index);
        let position = end_index.min(next.column_order.len());
        next.column_order.insert(position, moved);
        Ok(next)
    }

    /// Checks every structural invariant of the board.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardIntegrityError`] found.
    pub fn verify_integrity(&self) -> Result<(), BoardIntegrityError> {
        let mut ordered = HashSet::with_capacity(self.column_order.len());
        for id in &self.column_order {
            if !self.columns.contains_key(id) {
                return Err(BoardIntegrityError::UnknownColumnInOrder(id.clone()));
            }
            if !ordered.insert(id) {
                return Err(BoardIntegrityError::DuplicateColumnInOrder(id.clone()));
            }
        }

        let mut listed = HashSet::with_capacity(self.tasks.len());
        for (key, column) in &self.columns {
            if key != column.id() {
                return Err(BoardIntegrityError::ColumnKeyMismatch {
                    key: key.clone(),
                    id: column.id().clone(),
                });
            }
            if !ordered.contains(key) {
                return Err(BoardIntegrityError::ColumnMissingFromOrder(key.clone()));
            }
            for task_id in column.task_ids() {
                let task = self.tasks.get(task_id).ok_or_else(|| {
                    BoardIntegrityError::UnknownTaskInColumn {
                        column_id: key.clone(),
                        task_id: task_id.clone(),
                    }
                })?;
                if !listed.insert(task_id) {
                    return Err(BoardIntegrityError::TaskListedTwice(task_id.clone()));
                }
                if task.column_id() != key {
                    return Err(BoardIntegrityError::TaskOwnerMismatch {
                        task_id: task_id.clone(),
                        listed_in: key.clone(),
                        owner: task.column_id().clone(),
                    });
                }
            }
        }

        for (key, task) in &self.tasks {
            if key != task.id() {
                return Err(BoardIntegrityError::TaskKeyMismatch {
                    key: key.clone(),
                    id: task.id().clone(),
                });
            }
            if !listed.contains(key) {
                return Err(BoardIntegrityError::OrphanTask(key.clone()));
            }
        }
        Ok(())
    }

    fn require_column(&self, id: &ColumnId) -> Result<&Column, BoardDomainError> {
        self.columns
            .get(id)
            .ok_or_else(|| BoardDomainError::ColumnNotFound(id.clone()))
    }

    fn require_task(&self, id: &TaskId) -> Result<&Task, BoardDomainError> {
        self.tasks
            .get(id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(id.clone()))
    }

    fn column_mut(&mut self, id: &ColumnId) -> Result<&mut Column, BoardDomainError> {
        self.columns
            .get_mut(id)
            .ok_or_else(|| BoardDomainError::ColumnNotFound(id.clone()))
    }

    fn task_mut(&mut self, id: &TaskId) -> Result<&mut Task, BoardDomainError> {
        self.tasks
            .get_mut(id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(id.clone()))
    }
}
