pub mod dockerfile;
pub mod error;
pub mod packages;
pub mod tool_listing;
pub mod tools_config;

pub use dockerfile::{DockerfileContext, render_dockerfile};
pub use error::AppError;
pub use packages::{FeatureFlags, alias_packages, resolve_packages};
pub use tool_listing::ToolSummary;
pub use tools_config::{BaseConfig, Tool, ToolSpec, ToolTable, ToolsConfig};
