//! User configuration loaded from `config.toml`.
//!
//! Every field is optional. A missing file yields the defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use swatchbook_core::{CaseStyle, Color, ScaleCategory, Separator};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Base color overrides per category, as hex strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub brand: Option<String>,
    pub neutral: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    #[serde(alias = "danger")]
    pub error: Option<String>,
    pub info: Option<String>,
}

impl PaletteConfig {
    pub fn get(&self, category: ScaleCategory) -> Option<&str> {
        match category {
            ScaleCategory::Brand => self.brand.as_deref(),
            ScaleCategory::Neutral => self.neutral.as_deref(),
            ScaleCategory::Success => self.success.as_deref(),
            ScaleCategory::Warning => self.warning.as_deref(),
            ScaleCategory::Error => self.error.as_deref(),
            ScaleCategory::Info => self.info.as_deref(),
        }
    }

    /// Valid overrides as colors. Invalid entries are logged and skipped.
    pub fn base_colors(&self) -> HashMap<ScaleCategory, Color> {
        ScaleCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let raw = self.get(category)?;
                match raw.parse::<Color>() {
                    Ok(color) => Some((category, color)),
                    Err(e) => {
                        log::warn!("Ignoring configured {} base color: {}", category, e);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Token builder defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokensConfig {
    pub separator: Separator,
    pub case: CaseStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Token library directory (default: platform data dir)
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for downloaded exports (default: current directory)
    pub dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub palette: PaletteConfig,
    pub tokens: TokensConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// `<config dir>/swatchbook/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("swatchbook").join("config.toml"))
    }

    /// Load from `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path: path.to_path_buf(), source }),
        };
        let config = toml::from_str(&contents)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Directory exports are downloaded into.
    pub fn output_dir(&self) -> PathBuf {
        self.output.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
