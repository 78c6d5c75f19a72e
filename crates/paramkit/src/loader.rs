//! Layered loading of [`AccessorConfig`].
//!
//! Layers apply in order, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. A TOML or JSON document (file or string)
//! 3. Environment variables `PREFIX__QUERY_DECODING` and `PREFIX__LOG_REJECTIONS`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::AccessorConfig;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Failed to read configuration file.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error.
    #[error("failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Document format other than TOML or JSON.
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// Environment variable parsing error.
    #[error("failed to parse environment variable {var}: {reason}")]
    EnvParseError {
        /// The environment variable name.
        var: String,
        /// Explanation of the parsing error.
        reason: String,
    },
}

impl ConfigError {
    fn env_parse_error(var: &str, reason: impl Into<String>) -> Self {
        Self::EnvParseError {
            var: var.to_string(),
            reason: reason.into(),
        }
    }
}

/// Configuration loader.
///
/// # Example
///
/// ```
/// use paramkit::{ConfigLoader, QueryDecoding};
///
/// let config = ConfigLoader::new()
///     .with_string(r#"query_decoding = "percent""#, "toml")
///     .unwrap()
///     .load()
///     .unwrap();
///
/// assert_eq!(config.query_decoding, QueryDecoding::Percent);
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config: AccessorConfig,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    /// Creates a loader starting from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a `.toml` or `.json` file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, unreadable, has an
    /// unsupported extension, or does not parse (unknown fields included).
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        self.config = parse(&content, &format)?;
        Ok(self)
    }

    /// Loads a file if it exists, otherwise continues unchanged.
    pub fn with_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            self.with_file(path)
        } else {
            Ok(self)
        }
    }

    /// Loads a document from a string; `format` is `"toml"` or `"json"`.
    pub fn with_string(mut self, content: &str, format: &str) -> Result<Self, ConfigError> {
        self.config = parse(content, &format.to_lowercase())?;
        Ok(self)
    }

    /// Sets the environment variable prefix for overrides.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_uppercase());
        self
    }

    /// Loads a `.env` file into the process environment, if one exists.
    #[must_use]
    pub fn with_dotenv(self) -> Self {
        if let Err(err) = dotenvy::dotenv() {
            tracing::trace!(error = %err, "No .env file loaded");
        }
        self
    }

    /// Applies environment overrides and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvParseError` for an unknown key under the
    /// prefix or a value that does not parse.
    pub fn load(mut self) -> Result<AccessorConfig, ConfigError> {
        if let Some(prefix) = self.env_prefix.take() {
            let vars = env::vars().filter(|(key, _)| key.starts_with(&prefix));
            for (key, value) in vars {
                self.apply_env_var(&key, &value, &prefix)?;
            }
        }

        Ok(self.config)
    }

    fn apply_env_var(&mut self, key: &str, value: &str, prefix: &str) -> Result<(), ConfigError> {
        let Some(name) = key.strip_prefix(prefix).and_then(|k| k.strip_prefix("__")) else {
            // Another variable that merely shares the prefix.
            return Ok(());
        };

        match name {
            "QUERY_DECODING" => {
                self.config.query_decoding = value
                    .parse()
                    .map_err(|reason: String| ConfigError::env_parse_error(key, reason))?;
            }
            "LOG_REJECTIONS" => {
                self.config.log_rejections = parse_bool(value)
                    .ok_or_else(|| ConfigError::env_parse_error(key, "expected boolean"))?;
            }
            _ => return Err(ConfigError::env_parse_error(key, "unknown configuration key")),
        }

        Ok(())
    }
}

fn parse(content: &str, format: &str) -> Result<AccessorConfig, ConfigError> {
    match format {
        "toml" => Ok(toml::from_str(content)?),
        "json" => Ok(serde_json::from_str(content)?),
        other => Err(ConfigError::UnsupportedFormat(other.to_string())),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QueryDecoding;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config, AccessorConfig::default());
    }

    #[test]
    fn test_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "query_decoding = \"percent\"").unwrap();

        let config = ConfigLoader::new().with_file(file.path()).unwrap().load().unwrap();
        assert_eq!(config.query_decoding, QueryDecoding::Percent);
        assert!(config.log_rejections);
    }

    #[test]
    fn test_json_string() {
        let config = ConfigLoader::new()
            .with_string(r#"{"log_rejections": false}"#, "JSON")
            .unwrap()
            .load()
            .unwrap();

        assert!(!config.log_rejections);
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::new().with_file("/nonexistent/paramkit.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_optional_missing_file() {
        let config = ConfigLoader::new()
            .with_optional_file("/nonexistent/paramkit.toml")
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(config, AccessorConfig::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = NamedTempFile::new().unwrap();
        let err = ConfigLoader::new().with_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_unknown_field() {
        let err = ConfigLoader::new()
            .with_string("strict = true", "toml")
            .unwrap_err();
        assert!(matches!(err, ConfigError::TomlError(_)));
    }

    #[test]
    fn test_env_overrides() {
        std::env::set_var("PARAMKIT_LOADER_OK__QUERY_DECODING", "percent");
        std::env::set_var("PARAMKIT_LOADER_OK__LOG_REJECTIONS", "off");

        let config = ConfigLoader::new()
            .with_env_prefix("paramkit_loader_ok")
            .load()
            .unwrap();

        assert_eq!(config.query_decoding, QueryDecoding::Percent);
        assert!(!config.log_rejections);
    }

    #[test]
    fn test_env_bad_value() {
        std::env::set_var("PARAMKIT_LOADER_BAD__LOG_REJECTIONS", "sometimes");

        let err = ConfigLoader::new()
            .with_env_prefix("PARAMKIT_LOADER_BAD")
            .load()
            .unwrap_err();

        assert!(matches!(err, ConfigError::EnvParseError { .. }));
        assert!(err.to_string().contains("PARAMKIT_LOADER_BAD__LOG_REJECTIONS"));
    }

    #[test]
    fn test_env_unknown_key() {
        std::env::set_var("PARAMKIT_LOADER_UNKNOWN__MAX_VALUES", "3");

        let err = ConfigLoader::new()
            .with_env_prefix("PARAMKIT_LOADER_UNKNOWN")
            .load()
            .unwrap_err();

        assert!(matches!(err, ConfigError::EnvParseError { .. }));
    }
}
