use crate::ports::{ImageBuilder, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: TemplateRenderer, B: ImageBuilder> {
    renderer: R,
    builder: B,
}

impl<R: TemplateRenderer, B: ImageBuilder> AppContext<R, B> {
    /// Create a new application context.
    pub fn new(renderer: R, builder: B) -> Self {
        Self { renderer, builder }
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a reference to the image builder.
    pub fn builder(&self) -> &B {
        &self.builder
    }
}
