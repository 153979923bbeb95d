//! `baleen.toml` configuration.
//!
//! ```toml
//! [offsets]
//! leaf-mode = "bracketed"
//! numbering = "phrases"
//!
//! [prune]
//! batch-size = 25000
//! fuel = 100000
//! collapse-label = "join"
//!
//! [log]
//! filter = "baleen=debug"
//! ```
//!
//! Every section and key is optional.

use std::path::{Path, PathBuf};

use crate::prune::PruneOptions;
use crate::pstree::TreeOptions;

/// Name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "baleen.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub offsets: TreeOptions,
    pub prune: PruneOptions,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

impl Config {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Loads `path` if given, else `baleen.toml` in `dir` if it exists, else defaults.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default = dir.join(DEFAULT_CONFIG_FILE);
        if default.is_file() {
            return Self::load(&default);
        }
        Ok(Self::default())
    }
}
