//! Presentation bindings for the board.
//!
//! Views derive everything they show from the store's current snapshot and
//! forward user actions to store operations; they hold no board state of
//! their own.

mod error;
mod footer;
mod metrics;
mod render;

pub use error::{ViewError, ViewResult};
pub use footer::KanbanFooter;
pub use metrics::{ColumnMetric, KanbanMetrics, MetricsView};
pub use render::{METRICS_SUBTITLE, METRICS_TITLE, ViewRenderer};
