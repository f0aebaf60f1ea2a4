use std::cell::RefCell;

use serde::Serialize;

use crate::domain::AppError;
use crate::ports::TemplateRenderer;

/// Renderer that records template names and returns a placeholder.
#[derive(Default)]
pub struct RecordingRenderer {
    pub rendered: RefCell<Vec<String>>,
}

impl TemplateRenderer for RecordingRenderer {
    fn render<S: Serialize>(&self, template_name: &str, _context: &S) -> Result<String, AppError> {
        self.rendered.borrow_mut().push(template_name.to_string());
        Ok(format!("rendered {}", template_name))
    }
}
