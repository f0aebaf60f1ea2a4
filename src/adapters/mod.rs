pub mod docker_command;
pub mod embedded_template_renderer;
pub mod scaffold_assets;

pub use docker_command::{DEFAULT_DOCKER_PROGRAM, DockerCommandBuilder};
pub use embedded_template_renderer::EmbeddedTemplateRenderer;
