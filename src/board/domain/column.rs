//! Board column: a titled, ordered list of task references.

use super::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A named bucket of task references.
///
/// A column stores only the ordered identifiers of its tasks; task data
/// lives in the board's task map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: String,
    task_ids: Vec<TaskId>,
}

impl Column {
    pub(super) fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            task_ids: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the column title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the owned task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.task_ids.len()
    }

    pub(super) fn rename(&mut self, title: String) {
        self.title = title;
    }

    pub(super) fn push_task(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    /// Inserts at `index`, appending when the index is past the end.
    pub(super) fn insert_task(&mut self, index: usize, task_id: TaskId) {
        let position = index.min(self.task_ids.len());
        self.task_ids.insert(position, task_id);
    }

    pub(super) fn remove_task(&mut self, task_id: &TaskId) {
        self.task_ids.retain(|id| id != task_id);
    }
}
