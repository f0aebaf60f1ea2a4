//! `cli-tools.yml` schema.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

const DEFAULT_IMAGE_NAME: &str = "cli-tools";
const DEFAULT_IMAGE_TAG: &str = "latest";
const DEFAULT_PYTHON_VERSION: &str = "3.11";
const DEFAULT_INSTALL_COMMAND: &str = "uv sync";
const DEFAULT_RUN_COMMAND: &str = "uv run";
const DEFAULT_BRANCH: &str = "main";

/// Root of a `cli-tools.yml` document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub base: BaseConfig,
    /// Packages installed regardless of which tools are enabled.
    #[serde(default = "default_system_packages")]
    pub system_packages: Vec<String>,
    #[serde(default, deserialize_with = "nullable_table")]
    pub tools: ToolTable,
}

impl ToolsConfig {
    /// Tools whose `enabled` flag is true or absent, in declaration order.
    pub fn enabled_tools(&self) -> Vec<&Tool> {
        self.tools.iter().filter(|tool| tool.is_enabled()).collect()
    }

    /// Image reference passed to `docker build -t`.
    pub fn image_reference(&self) -> String {
        format!("{}:{}", self.base.image_name, self.base.image_tag)
    }
}

/// Base image settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    pub image_name: String,
    pub image_tag: String,
    #[serde(deserialize_with = "scalar_string")]
    pub python_version: String,
    /// Explicit `FROM` image; derived from `python_version` when unset.
    pub image: Option<String>,
    pub install_command: String,
    pub run_command: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            image_name: DEFAULT_IMAGE_NAME.to_string(),
            image_tag: DEFAULT_IMAGE_TAG.to_string(),
            python_version: DEFAULT_PYTHON_VERSION.to_string(),
            image: None,
            install_command: DEFAULT_INSTALL_COMMAND.to_string(),
            run_command: DEFAULT_RUN_COMMAND.to_string(),
        }
    }
}

impl BaseConfig {
    pub fn from_image(&self) -> String {
        match &self.image {
            Some(image) => image.clone(),
            None => format!("python:{}-slim-bookworm", self.python_version),
        }
    }
}

/// Attributes of one tool entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ToolSpec {
    pub repo: String,
    #[serde(default)]
    pub local_name: Option<String>,
    pub command: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Alias-table tokens or literal apt package names.
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub post_install: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Absent means enabled; an explicit `null` means disabled.
    #[serde(default, deserialize_with = "null_as_disabled")]
    pub enabled: Option<bool>,
    /// Overrides `base.install_command` for this tool.
    #[serde(default)]
    pub install: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}

/// A tool entry together with its key in the `tools` mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub spec: ToolSpec,
}

impl Tool {
    pub fn is_enabled(&self) -> bool {
        self.spec.enabled.unwrap_or(true)
    }

    /// Directory the repository is cloned into.
    pub fn local_name(&self) -> &str {
        self.spec.local_name.as_deref().unwrap_or(&self.name)
    }

    pub fn has_custom_clone_dir(&self) -> bool {
        self.local_name() != self.name
    }

    pub fn post_install(&self) -> Option<&str> {
        self.spec.post_install.as_deref().map(str::trim).filter(|cmd| !cmd.is_empty())
    }

    pub fn install_command<'a>(&'a self, base: &'a BaseConfig) -> &'a str {
        self.spec.install.as_deref().unwrap_or(&base.install_command)
    }

    pub fn branch(&self) -> &str {
        self.spec.branch.as_deref().unwrap_or(DEFAULT_BRANCH)
    }

    pub fn requires(&self, token: &str) -> bool {
        self.spec.requires.iter().any(|req| req == token)
    }
}

/// Tool entries in the order they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolTable(Vec<Tool>);

impl ToolTable {
    pub fn iter(&self) -> std::slice::Iter<'_, Tool> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.0.iter().find(|tool| tool.name == name)
    }
}

impl FromIterator<Tool> for ToolTable {
    fn from_iter<I: IntoIterator<Item = Tool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ToolTable {
    type Item = &'a Tool;
    type IntoIter = std::slice::Iter<'a, Tool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for ToolTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ToolTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping from tool names to tool entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ToolTable, A::Error> {
                let mut tools: Vec<Tool> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, spec)) = map.next_entry::<String, ToolSpec>()? {
                    if tools.iter().any(|tool| tool.name == name) {
                        return Err(de::Error::custom(format!("duplicate tool '{}'", name)));
                    }
                    tools.push(Tool { name, spec });
                }
                Ok(ToolTable(tools))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

fn default_system_packages() -> Vec<String> {
    vec!["git".to_string()]
}

fn nullable_table<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ToolTable, D::Error> {
    Ok(Option::<ToolTable>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_disabled<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(Some(Option::<bool>::deserialize(deserializer)?.unwrap_or(false)))
}

/// Accepts `python_version: 3.12` as well as `python_version: "3.12"`.
fn scalar_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(value) => Ok(value),
        serde_yaml::Value::Number(value) => Ok(value.to_string()),
        other => Err(de::Error::custom(format!("expected a string or number, found {:?}", other))),
    }
}
