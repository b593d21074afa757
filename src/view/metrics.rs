//! Per-column metric cards shown in the board header.

use mockable::Clock;
use serde::Serialize;
use tracing::debug;

use super::{ViewRenderer, ViewResult};
use crate::board::{
    domain::{Board, ColumnId},
    ports::{IdGenerator, KeyValueStorage},
    services::BoardStore,
};

/// Title and task count of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMetric {
    /// Column the metric describes.
    pub id: ColumnId,
    /// Column title.
    pub label: String,
    /// Number of tasks in the column.
    pub value: usize,
}

/// Metrics for every column, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanbanMetrics {
    metrics: Vec<ColumnMetric>,
}

impl KanbanMetrics {
    /// Derives one metric per column in `board`'s column order.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let metrics = board
            .ordered_columns()
            .map(|column| ColumnMetric {
                id: column.id().clone(),
                label: column.title().to_owned(),
                value: column.task_count(),
            })
            .collect();
        Self { metrics }
    }

    /// Returns the metrics as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ColumnMetric] {
        &self.metrics
    }

    /// Returns the number of metric cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Returns `true` when the board has no columns.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Iterates the metrics in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnMetric> {
        self.metrics.iter()
    }
}

impl<'a> IntoIterator for &'a KanbanMetrics {
    type Item = &'a ColumnMetric;
    type IntoIter = std::slice::Iter<'a, ColumnMetric>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Header view binding a store to the metric cards.
///
/// Each card's delete affordance maps to
/// [`BoardStore::delete_column`].
pub struct MetricsView<'a, S, G, C>
where
    S: KeyValueStorage,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    store: &'a BoardStore<S, G, C>,
    renderer: &'a ViewRenderer,
}

impl<'a, S, G, C> MetricsView<'a, S, G, C>
where
    S: KeyValueStorage,
    G: IdGenerator,
    C: Clock + Send + Sync,
{
    /// Binds the view to a store and renderer.
    #[must_use]
    pub const fn new(store: &'a BoardStore<S, G, C>, renderer: &'a ViewRenderer) -> Self {
        Self { store, renderer }
    }

    /// Derives metrics from the store's current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Store`](super::ViewError::Store) when the
    /// snapshot cannot be read.
    pub fn metrics(&self) -> ViewResult<KanbanMetrics> {
        let board = self.store.state()?;
        Ok(KanbanMetrics::from_board(&board))
    }

    /// Handles a click on a card's delete affordance.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Store`](super::ViewError::Store) when the store
    /// rejects the deletion.
    pub fn delete(&self, column_id: &ColumnId) -> ViewResult<()> {
        debug!(column = %column_id, "delete requested from metrics view");
        self.store.delete_column(column_id)?;
        Ok(())
    }

    /// Renders the header with one card per column.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`](super::ViewError) when the snapshot cannot be
    /// read or the template fails.
    pub fn render(&self) -> ViewResult<String> {
        let metrics = self.metrics()?;
        self.renderer.render_metrics(metrics.as_slice())
    }
}
