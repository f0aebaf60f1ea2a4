mod image_builder;
mod template_renderer;

pub use image_builder::{BuildRequest, BuildStatus, ImageBuilder};
pub use template_renderer::TemplateRenderer;
