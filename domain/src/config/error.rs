//! Configuration error types

use super::field::ConfigField;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving the startup configuration.
///
/// All variants are fatal to startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {field} = '{value}' ({reason})")]
    InvalidConfiguration {
        field: ConfigField,
        value: String,
        reason: String,
    },

    #[error("Configuration file not found: {}", .path.display())]
    ConfigurationFileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration file {}: {message}", .path.display())]
    ConfigurationFileMalformed { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn invalid(field: ConfigField, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidConfiguration {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display_names_field_and_value() {
        let error = ConfigError::invalid(ConfigField::LogLevel, "bogus", "unknown log level");
        let message = error.to_string();
        assert!(message.contains("log_level"));
        assert!(message.contains("bogus"));
        assert!(matches!(
            error,
            ConfigError::InvalidConfiguration { field: ConfigField::LogLevel, .. }
        ));
    }

    #[test]
    fn test_not_found_display_has_path() {
        let error = ConfigError::ConfigurationFileNotFound {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: missing.json"
        );
        assert!(std::error::Error::source(&error).is_some());
    }
}
