//! Template environment shared by the board views.

use minijinja::{Environment, context};

use super::{ColumnMetric, ViewResult};

const METRICS_TEMPLATE_NAME: &str = "metrics";
const FOOTER_TEMPLATE_NAME: &str = "footer";

const METRICS_TEMPLATE: &str = "{{ title }}\n{{ subtitle }}\n\
{% for metric in metrics %}[{{ metric.label }}: {{ metric.value }}]\n{% endfor %}";

const FOOTER_TEMPLATE: &str = "← {{ hint }} →";

/// Header title of the metrics view.
pub const METRICS_TITLE: &str = "To-Do List";

/// Header subtitle of the metrics view.
pub const METRICS_SUBTITLE: &str = "Manage your tasks efficiently";

/// Compiled view templates.
///
/// # Examples
///
/// ```
/// use kanban_board::view::{KanbanFooter, ViewRenderer};
///
/// let renderer = ViewRenderer::new().expect("templates compile");
/// let footer = KanbanFooter::new().render(&renderer).expect("footer renders");
/// assert_eq!(footer, "← Scroll to see more →");
/// ```
pub struct ViewRenderer {
    environment: Environment<'static>,
}

impl ViewRenderer {
    /// Compiles the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`](super::ViewError::Render) when a
    /// template does not compile.
    pub fn new() -> ViewResult<Self> {
        let mut environment = Environment::new();
        environment.add_template(METRICS_TEMPLATE_NAME, METRICS_TEMPLATE)?;
        environment.add_template(FOOTER_TEMPLATE_NAME, FOOTER_TEMPLATE)?;
        Ok(Self { environment })
    }

    /// Renders the metrics header: title, subtitle and one card line per
    /// column.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`](super::ViewError::Render) when
    /// rendering fails.
    pub fn render_metrics(&self, metrics: &[ColumnMetric]) -> ViewResult<String> {
        let template = self.environment.get_template(METRICS_TEMPLATE_NAME)?;
        Ok(template.render(context! {
            title => METRICS_TITLE,
            subtitle => METRICS_SUBTITLE,
            metrics => metrics,
        })?)
    }

    /// Renders the footer hint between scroll arrows.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`](super::ViewError::Render) when
    /// rendering fails.
    pub fn render_footer(&self, hint: &str) -> ViewResult<String> {
        let template = self.environment.get_template(FOOTER_TEMPLATE_NAME)?;
        Ok(template.render(context! { hint => hint })?)
    }
}
