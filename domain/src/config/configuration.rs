//! Resolved configuration and the built-in default table

use super::field::{ConfigField, Layer};
use super::log_level::LogLevel;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Fully-populated startup configuration.
///
/// Created once by the resolver and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub log_level: LogLevel,
    pub log_directory: PathBuf,
    pub log_file: String,
    #[serde(rename = "width")]
    pub surface_width: u32,
    #[serde(rename = "height")]
    pub surface_height: u32,
}

impl Configuration {
    /// Full path of the log file (`log_directory/log_file`).
    pub fn log_path(&self) -> PathBuf {
        self.log_directory.join(&self.log_file)
    }

    /// Display value of a single field.
    pub fn value_of(&self, field: ConfigField) -> String {
        match field {
            ConfigField::LogLevel => self.log_level.as_str().to_string(),
            ConfigField::LogDirectory => self.log_directory.display().to_string(),
            ConfigField::LogFile => self.log_file.clone(),
            ConfigField::Width => self.surface_width.to_string(),
            ConfigField::Height => self.surface_height.to_string(),
        }
    }
}

/// Lowest-precedence layer: a frozen table of default values.
///
/// Passed into the resolver explicitly rather than living in shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTable {
    pub log_level: LogLevel,
    pub log_directory: PathBuf,
    pub log_file: String,
    pub width: u32,
    pub height: u32,
    /// Configuration files loaded when no file is named explicitly.
    /// Only the first one that exists is read; missing candidates are skipped.
    pub candidate_files: Vec<PathBuf>,
}

impl Default for DefaultTable {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Debug,
            log_directory: PathBuf::from("logs"),
            log_file: "application.log".to_string(),
            width: 800,
            height: 600,
            candidate_files: Vec::new(),
        }
    }
}

impl DefaultTable {
    pub fn with_candidate_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidate_files.push(path.into());
        self
    }

    /// The configuration these defaults produce when no other layer is set.
    pub fn to_configuration(&self) -> Configuration {
        Configuration {
            log_level: self.log_level,
            log_directory: self.log_directory.clone(),
            log_file: self.log_file.clone(),
            surface_width: self.width,
            surface_height: self.height,
        }
    }
}

/// Highest-precedence layer: values supplied directly by the caller.
///
/// `None` means the field is absent and resolution falls through to the next
/// layer. `Some` is always authoritative, even for an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitArgs {
    pub log_level: Option<String>,
    pub log_directory: Option<String>,
    pub log_file: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ExplicitArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_log_directory(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    pub fn with_log_file(mut self, file: impl Into<String>) -> Self {
        self.log_file = Some(file.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Where each resolved value came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub fields: BTreeMap<ConfigField, Layer>,
    /// The configuration file that was read, if any.
    pub file: Option<PathBuf>,
}

impl Sources {
    pub fn layer_of(&self, field: ConfigField) -> Layer {
        self.fields.get(&field).copied().unwrap_or(Layer::Default)
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }
}

/// Result of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub configuration: Configuration,
    pub sources: Sources,
}
