//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with environment variable
//! overrides for sensitive values like `APP_PASSWORD`. A missing config
//! file is not an error; built-in defaults apply.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

/// Database location settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file. Defaults to a per-user data
    /// directory when unset.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Access gate configuration.
///
/// When a password is configured (here or via the `APP_PASSWORD`
/// environment variable), every invocation prompts for it before any
/// storage access.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub password: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; a present but malformed file
    /// is an error.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read or parsed, or
    /// when a value fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected \"pretty\" or \"json\", got \"{other}\""),
                }
                .into())
            }
        }
        if self.logging.level.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Resolve the database file path.
    ///
    /// Precedence: explicit override (CLI flag), then the config file,
    /// then a per-user data directory, then the working directory.
    #[must_use]
    pub fn database_path(&self, override_path: Option<&Path>) -> PathBuf {
        if let Some(path) = override_path {
            return path.to_path_buf();
        }
        if let Some(path) = &self.database.path {
            return path.clone();
        }
        dirs::data_local_dir()
            .map(|d| d.join("lunchpick").join("lunch.db"))
            .unwrap_or_else(|| PathBuf::from("lunch.db"))
    }

    /// The configured gate secret, if any. `APP_PASSWORD` overrides the
    /// config file value. Resolved once at startup and injected into the
    /// gate check.
    #[must_use]
    pub fn gate_secret(&self) -> Option<String> {
        std::env::var("APP_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty())
            .or_else(|| self.auth.password.clone().filter(|p| !p.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load("/nonexistent/lunchpick.toml").unwrap();
        assert!(config.database.path.is_none());
        assert_eq!(config.logging.level, "warn");
        assert!(config.auth.password.is_none());
    }

    #[test]
    fn parses_full_config() {
        let toml = concat!(
            "[database]\n",
            "path = \"/tmp/lunch.db\"\n",
            "\n",
            "[logging]\n",
            "level = \"debug\"\n",
            "format = \"json\"\n",
            "\n",
            "[auth]\n",
            "password = \"hunter2\"\n",
        );
        let config: Config = toml::from_str(toml).unwrap();
        config.validate().unwrap();

        assert_eq!(config.database.path, Some(PathBuf::from("/tmp/lunch.db")));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.auth.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn invalid_log_format_is_rejected() {
        let toml = "[logging]\nformat = \"xml\"\n";
        let config: Config = toml::from_str(toml).unwrap();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("logging.format"));
    }

    #[test]
    fn database_path_override_wins() {
        let config = Config {
            database: DatabaseConfig {
                path: Some(PathBuf::from("/from/config.db")),
            },
            ..Config::default()
        };

        assert_eq!(
            config.database_path(Some(Path::new("/from/flag.db"))),
            PathBuf::from("/from/flag.db")
        );
        assert_eq!(
            config.database_path(None),
            PathBuf::from("/from/config.db")
        );
    }

    #[test]
    fn blank_config_password_is_no_gate() {
        let config: Config = toml::from_str("[auth]\npassword = \"\"\n").unwrap();
        if std::env::var("APP_PASSWORD").is_err() {
            assert!(config.gate_secret().is_none());
        }
    }
}
