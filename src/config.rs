//! Configuration loading for mdenhance.
//!
//! Settings live in `.mdenhance.toml`, loaded from an explicit path or
//! discovered in the current directory. Everything has a default, so a
//! missing config file is not an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default configuration file name, discovered in the working directory.
pub const CONFIG_FILE_NAME: &str = ".mdenhance.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Complete configuration loaded from `.mdenhance.toml`.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub global: GlobalConfig,
    pub labels: LabelConfig,
}

/// Global options.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Mask credential-shaped substrings before rendering
    pub redact: bool,
    /// Default output format ("text" or "json"); CLI flag wins
    pub output_format: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            redact: true,
            output_format: None,
        }
    }
}

/// Additional UI-element labels rendered in bold.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub extra: Vec<String>,
}

impl Config {
    /// Load configuration from `path`, or discover `.mdenhance.toml`
    /// in the working directory when no path is given. An explicit
    /// path that does not exist is an error; an absent discovered file
    /// yields the defaults.
    pub fn load(path: Option<&str>) -> Result<Config, ConfigError> {
        match path {
            Some(p) => Self::from_file(Path::new(p)),
            None => {
                let discovered = Path::new(CONFIG_FILE_NAME);
                if discovered.exists() {
                    Self::from_file(discovered)
                } else {
                    log::debug!("no {CONFIG_FILE_NAME} found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display.clone(),
            source,
        })?;
        log::debug!("loaded configuration from {display}");
        Ok(config)
    }
}

/// Starter configuration written by `mdenhance init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# mdenhance configuration file

[global]
# Mask credential-shaped substrings (API keys, tokens) before rendering
redact = true

# Default output format: "text" or "json"
# output_format = "text"

[labels]
# Additional UI-element labels to render in bold, on top of the
# built-in set (Terminal, Explorer, Visual Studio Code, ...)
extra = []
"#;

/// Create a starter config file at `path`.
///
/// Returns `true` if the file was created, or `false` if it already
/// exists.
pub fn create_default_config(path: &str) -> Result<bool, ConfigError> {
    if Path::new(path).exists() {
        return Ok(false);
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.global.redact);
        assert_eq!(config.global.output_format, None);
        assert!(config.labels.extra.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
[global]
redact = false
output_format = "json"

[labels]
extra = ["Dock", "Activity Bar"]
"#,
        )
        .unwrap();
        assert!(!config.global.redact);
        assert_eq!(config.global.output_format.as_deref(), Some("json"));
        assert_eq!(config.labels.extra, vec!["Dock", "Activity Bar"]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str("[labels]\nextra = [\"Sidebar\"]\n").unwrap();
        assert!(config.global.redact);
        assert_eq!(config.labels.extra, vec!["Sidebar"]);
    }

    #[test]
    fn test_template_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(config, Config::default());
    }
}
