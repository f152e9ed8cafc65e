//! Project configuration loading
//!
//! The project's configuration lives in `tool/dev.toml` under the project
//! root. It is loaded once at startup and discarded after producing the
//! per-task overlays. An absent file yields empty overlays (pure defaults);
//! a malformed file aborts before any task executes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{AnalyzeOverlay, ExamplesOverlay, FormatOverlay, TestOverlay};

/// Project configuration path, relative to the project root.
pub const CONFIG_PATH: &str = "tool/dev.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration in tool/dev.toml: {0}")]
    Parse(String),

    #[error("Wrong value type in tool/dev.toml: {0}")]
    Type(String),
}

/// Per-task overlays read from `tool/dev.toml`.
///
/// Tasks the file does not mention get an empty overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileOverlay {
    #[serde(default)]
    pub analyze: AnalyzeOverlay,

    #[serde(default)]
    pub examples: ExamplesOverlay,

    #[serde(default)]
    pub format: FormatOverlay,

    #[serde(default)]
    pub test: TestOverlay,
}

/// Loads the project configuration from `<project_root>/tool/dev.toml`.
pub fn load(project_root: &Path) -> Result<FileOverlay, ConfigError> {
    let path = project_root.join(CONFIG_PATH);
    if !path.exists() {
        return Ok(FileOverlay::default());
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?;

    parse(&content)
}

pub(crate) fn parse(content: &str) -> Result<FileOverlay, ConfigError> {
    toml::from_str(content).map_err(classify)
}

/// Splits deserializer failures into the taxonomy: a value of the wrong
/// kind for a known field is a type error, everything else (bad syntax,
/// unknown keys) a parse error. Both abort before dispatch.
fn classify(err: toml::de::Error) -> ConfigError {
    let message = err.to_string();
    if message.contains("invalid type") {
        ConfigError::Type(message)
    } else {
        ConfigError::Parse(message)
    }
}
