use serde::Serialize;

use crate::domain::AppError;

/// Trait for rendering named templates.
///
/// Keeps the template engine out of the domain layer.
pub trait TemplateRenderer {
    /// Render the template registered as `template_name` with `context`.
    fn render<S: Serialize>(&self, template_name: &str, context: &S) -> Result<String, AppError>;
}
