//! Configuration loading from the filesystem.
//!
//! Schema and defaults live in `domain::tools_config`.

mod load_tools_config;

pub use load_tools_config::{DEFAULT_CONFIG_PATH, load_tools_config};
