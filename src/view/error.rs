//! Error types for view rendering and actions.

use crate::board::services::BoardStoreError;
use thiserror::Error;

/// Errors returned by view bindings.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The bound store rejected a read or an action.
    #[error(transparent)]
    Store(#[from] BoardStoreError),

    /// A template failed to compile or render.
    #[error("failed to render view: {0}")]
    Render(#[from] minijinja::Error),
}

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;
