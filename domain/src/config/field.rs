//! Field registry for configuration resolution.
//!
//! Defines metadata for every recognized configuration field: its key in a
//! configuration file, the environment variable that supplies it, and a
//! description. The resolver walks this table instead of merging ad-hoc maps,
//! so an unrecognized key can never silently become a setting.

use std::fmt;

/// A recognized configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConfigField {
    LogLevel,
    LogDirectory,
    LogFile,
    Width,
    Height,
}

impl ConfigField {
    /// Every recognized field, in report order.
    pub const ALL: [ConfigField; 5] = [
        ConfigField::LogLevel,
        ConfigField::LogDirectory,
        ConfigField::LogFile,
        ConfigField::Width,
        ConfigField::Height,
    ];

    /// Key used in configuration files (and as the merged key).
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::LogLevel => "log_level",
            ConfigField::LogDirectory => "log_directory",
            ConfigField::LogFile => "log_file",
            ConfigField::Width => "width",
            ConfigField::Height => "height",
        }
    }

    /// Older key names still accepted in configuration files.
    pub fn file_aliases(&self) -> &'static [&'static str] {
        match self {
            ConfigField::LogDirectory => &["logging_directory"],
            _ => &[],
        }
    }

    /// Environment variable that supplies this field.
    pub fn env_var(&self) -> &'static str {
        match self {
            ConfigField::LogLevel => "LOG_LEVEL",
            ConfigField::LogDirectory => "LOG_DIRECTORY",
            ConfigField::LogFile => "LOG_FILE",
            ConfigField::Width => "WIDTH",
            ConfigField::Height => "HEIGHT",
        }
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigField::LogLevel => "Log verbosity: debug, info, warning, error or critical",
            ConfigField::LogDirectory => "Directory that receives the log file",
            ConfigField::LogFile => "Name of the log file",
            ConfigField::Width => "Surface width in pixels",
            ConfigField::Height => "Surface height in pixels",
        }
    }

    /// Look up a field by its file key (aliases included).
    pub fn from_key(key: &str) -> Option<ConfigField> {
        Self::ALL
            .into_iter()
            .find(|field| field.key() == key || field.file_aliases().contains(&key))
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Environment variable naming the configuration file to load.
pub const CONFIGURATION_FILE_ENV: &str = "CONFIGURATION_FILE";

/// One of the four ranked configuration sources.
///
/// Ordered from highest to lowest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Explicit,
    Environment,
    File,
    Default,
}

impl Layer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Explicit => "explicit",
            Layer::Environment => "environment",
            Layer::File => "file",
            Layer::Default => "default",
        }
    }

    /// Parse the name produced by [`Layer::as_str`].
    pub fn from_name(name: &str) -> Option<Layer> {
        [Layer::Explicit, Layer::Environment, Layer::File, Layer::Default]
            .into_iter()
            .find(|layer| layer.as_str() == name)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
