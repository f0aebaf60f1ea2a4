use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;
use crate::ports::TemplateRenderer;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Renders templates compiled into the binary with minijinja.
pub struct EmbeddedTemplateRenderer {
    env: Environment<'static>,
}

impl EmbeddedTemplateRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for file in TEMPLATES_DIR.files() {
            let name = file
                .path()
                .to_str()
                .ok_or_else(|| AppError::template("<embedded>", "non UTF-8 template path"))?;
            let source = file
                .contents_utf8()
                .ok_or_else(|| AppError::template(name, "template is not valid UTF-8"))?;
            env.add_template(name, source).map_err(|e| AppError::template(name, e))?;
        }

        tracing::trace!(count = TEMPLATES_DIR.files().count(), "registered embedded templates");
        Ok(Self { env })
    }
}

impl TemplateRenderer for EmbeddedTemplateRenderer {
    fn render<S: Serialize>(&self, template_name: &str, context: &S) -> Result<String, AppError> {
        let template = self
            .env
            .get_template(template_name)
            .map_err(|e| AppError::template(template_name, e))?;

        template.render(context).map_err(|e| AppError::template(template_name, e))
    }
}
