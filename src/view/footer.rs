//! Board footer with the horizontal scroll hint.

use super::{ViewRenderer, ViewResult};

/// Footer shown under the board columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanbanFooter;

impl KanbanFooter {
    /// Text between the scroll arrows.
    pub const HINT: &'static str = "Scroll to see more";

    /// Creates the footer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the scroll hint, e.g. `← Scroll to see more →`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`](super::ViewError::Render) when the
    /// footer template fails.
    pub fn render(self, renderer: &ViewRenderer) -> ViewResult<String> {
        renderer.render_footer(Self::HINT)
    }
}
