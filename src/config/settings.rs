//! Sample settings loading from config.toml
//!
//! The demo binary reads a small TOML file to tune the notification subject and
//! the registration export target. Every section is optional; missing values
//! fall back to the defaults used by the samples themselves.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the settings file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Notification dispatch settings
    #[serde(default)]
    pub notification: NotificationConfig,
    /// User registration settings
    #[serde(default)]
    pub registration: RegistrationConfig,
}

/// Settings for the notification sample
#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    /// Subject line used for notification emails
    #[serde(default = "default_notification_subject")]
    pub subject: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            subject: default_notification_subject(),
        }
    }
}

fn default_notification_subject() -> String {
    "Notification".to_string()
}

/// Settings for the registration sample
#[derive(Debug, Deserialize, Clone)]
pub struct RegistrationConfig {
    /// Subject line used for welcome emails
    #[serde(default = "default_welcome_subject")]
    pub welcome_subject: String,
    /// Where the CSV export is written; stdout when absent
    #[serde(default)]
    pub export_path: Option<PathBuf>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            welcome_subject: default_welcome_subject(),
            export_path: None,
        }
    }
}

fn default_welcome_subject() -> String {
    "Welcome!".to_string()
}

/// Gets the config path from the `SOLID_CONFIG_PATH` environment variable or
/// returns the default location.
#[must_use]
pub fn get_config_path() -> PathBuf {
    std::env::var("SOLID_CONFIG_PATH")
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Parses settings from TOML text
///
/// # Errors
/// Returns `Error::Config` if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Loads settings from the configured location, using defaults when no file exists there.
///
/// # Errors
/// Returns an error if a file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    let path = get_config_path();
    if !path.exists() {
        tracing::info!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_config(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            [notification]
            subject = "Heads up"

            [registration]
            welcome_subject = "Hello there"
            export_path = "out/users.csv"
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.notification.subject, "Heads up");
        assert_eq!(config.registration.welcome_subject, "Hello there");
        assert_eq!(
            config.registration.export_path,
            Some(PathBuf::from("out/users.csv"))
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.notification.subject, "Notification");
        assert_eq!(config.registration.welcome_subject, "Welcome!");
        assert!(config.registration.export_path.is_none());

        let config = parse_config("[registration]\nexport_path = \"a.csv\"").unwrap();
        assert_eq!(config.registration.welcome_subject, "Welcome!");
        assert_eq!(config.notification.subject, "Notification");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = parse_config("[notification\nsubject = ");
        assert!(matches!(result, Err(Error::Config { .. })));

        let result = parse_config("[notification]\nsubject = 42");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let result = load_config("definitely/not/here/config.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
