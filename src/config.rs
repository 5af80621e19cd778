//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <FILE>`, else `$XDG_CONFIG_HOME/arc-blog/arc-blog.toml`
//! 3. Environment variables: `ARC_BLOG_*` prefix
//!
//! Command-line flags win over all of these.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ApplicationError;
use crate::domain::DEFAULT_OUT_DIR;

/// Unified configuration for arc-blog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Destination directory when `--out-dir` is not given
    pub out_dir: String,
    /// Output format when no output flag is given
    pub output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            out_dir: DEFAULT_OUT_DIR.into(),
            output: "table".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means not specified).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub out_dir: Option<String>,
    pub output: Option<String>,
}

/// Get the XDG config directory for arc-blog.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "arc-blog").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("arc-blog.toml"))
}

/// Config file consulted for this invocation.
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit.map(Path::to_path_buf).or_else(global_config_path)
}

/// Load a TOML file into RawSettings.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            out_dir: overlay
                .out_dir
                .clone()
                .unwrap_or_else(|| self.out_dir.clone()),
            output: overlay.output.clone().unwrap_or_else(|| self.output.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// An explicit config file must exist and parse. The global one is
    /// optional: if it is unreadable or malformed, a warning is logged and
    /// defaults are kept.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        match explicit {
            Some(path) => {
                current = current.merge_with(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        match load_raw_settings(&global_path) {
                            Ok(raw) => current = current.merge_with(&raw),
                            Err(e) => warn!("ignoring global config: {}", e),
                        }
                    }
                }
            }
        }

        current = Self::apply_env_overrides(current)?;
        debug!("load: {:?}", current);
        Ok(current)
    }

    /// Apply ARC_BLOG_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ARC_BLOG")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("out_dir") {
            settings.out_dir = val;
        }
        if let Ok(val) = config.get_string("output") {
            settings.output = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_fetch_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.out_dir, "docs/research-external/blog");
        assert_eq!(settings.output, "table");
    }

    #[test]
    fn given_partial_overlay_when_merge_then_keeps_unset_fields() {
        let overlay = RawSettings {
            out_dir: None,
            output: Some("json".into()),
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.out_dir, DEFAULT_OUT_DIR);
        assert_eq!(merged.output, "json");
    }

    #[test]
    fn given_explicit_path_when_config_path_then_returns_it() {
        let path = Path::new("/tmp/custom.toml");
        assert_eq!(config_path(Some(path)), Some(path.to_path_buf()));
    }
}
