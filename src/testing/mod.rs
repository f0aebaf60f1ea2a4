mod recording_renderer;

#[allow(unused_imports)]
pub use fake_image_builder::FakeImageBuilder;
#[allow(unused_imports)]
pub use recording_renderer::RecordingRenderer;

use crate::domain::ToolsConfig;

/// Parse an inline `cli-tools.yml` document.
pub fn config_from_yaml(yaml: &str) -> ToolsConfig {
    serde_yaml::from_str(yaml).expect("test config should parse")
}
