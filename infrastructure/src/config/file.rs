//! Configuration file reading and writing
//!
//! Files are flat key-value documents in JSON or TOML. The extension picks
//! the parser when it is `.json` or `.toml`; otherwise a document starting
//! with `{` is JSON and anything else is TOML.

use figment::providers::{Format, Json, Toml};
use figment::value::Dict;
use figment::{Profile, Provider};
use snake_domain::{ConfigError, Configuration};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    /// Format implied by the file extension alone.
    pub fn from_extension(path: &Path) -> Option<FileFormat> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(FileFormat::Json),
            "toml" => Some(FileFormat::Toml),
            _ => None,
        }
    }

    pub fn detect(path: &Path, contents: &str) -> FileFormat {
        Self::from_extension(path).unwrap_or_else(|| {
            if contents.trim_start().starts_with('{') {
                FileFormat::Json
            } else {
                FileFormat::Toml
            }
        })
    }
}

/// Read and parse a configuration file into its top-level table.
pub fn read_config_file(path: &Path) -> Result<Dict, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            ConfigError::ConfigurationFileMalformed {
                path: path.to_path_buf(),
                message: "file is not valid UTF-8".to_string(),
            }
        } else {
            ConfigError::ConfigurationFileNotFound {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let format = FileFormat::detect(path, &contents);
    debug!("Parsing {} as {:?}", path.display(), format);
    parse_config(path, &contents, format)
}

/// Parse configuration text of a known format.
pub fn parse_config(path: &Path, contents: &str, format: FileFormat) -> Result<Dict, ConfigError> {
    let parsed = match format {
        FileFormat::Json => Json::string(contents).data(),
        FileFormat::Toml => Toml::string(contents).data(),
    };

    let mut profiles = parsed.map_err(|e| ConfigError::ConfigurationFileMalformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(profiles.remove(&Profile::Default).unwrap_or_default())
}

/// Errors from writing a configuration file
#[derive(Error, Debug)]
pub enum ConfigWriteError {
    #[error("Could not write configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize configuration: {0}")]
    Serialize(String),
}

/// Write `configuration` as a settings file the resolver can read back.
///
/// Parent directories are created as needed. `.toml` paths get TOML,
/// everything else pretty-printed JSON.
pub fn write_config_file(path: &Path, configuration: &Configuration) -> Result<(), ConfigWriteError> {
    let contents = match FileFormat::from_extension(path) {
        Some(FileFormat::Toml) => toml::to_string_pretty(configuration)
            .map_err(|e| ConfigWriteError::Serialize(e.to_string()))?,
        _ => {
            let mut json = serde_json::to_string_pretty(configuration)
                .map_err(|e| ConfigWriteError::Serialize(e.to_string()))?;
            json.push('\n');
            json
        }
    };

    let io_error = |source| ConfigWriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, contents).map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_domain::{DefaultTable, LogLevel};

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            FileFormat::detect(Path::new("settings.JSON"), "width = 1"),
            FileFormat::Json
        );
        assert_eq!(
            FileFormat::detect(Path::new("settings.toml"), "{}"),
            FileFormat::Toml
        );
    }

    #[test]
    fn test_detect_by_content() {
        assert_eq!(
            FileFormat::detect(Path::new("settings.cfg"), "  {\"width\": 1}"),
            FileFormat::Json
        );
        assert_eq!(
            FileFormat::detect(Path::new("settings"), "width = 1"),
            FileFormat::Toml
        );
    }

    #[test]
    fn test_parse_json() {
        let dict = parse_config(
            Path::new("x.json"),
            r#"{"log_level": "info", "width": 1920}"#,
            FileFormat::Json,
        )
        .unwrap();
        assert_eq!(dict.get("log_level").and_then(|v| v.as_str()), Some("info"));
        assert_eq!(dict.get("width").and_then(|v| v.to_u128()), Some(1920));
    }

    #[test]
    fn test_parse_toml() {
        let dict = parse_config(
            Path::new("x.toml"),
            "log_level = \"error\"\nheight = 480\n",
            FileFormat::Toml,
        )
        .unwrap();
        assert_eq!(dict.get("log_level").and_then(|v| v.as_str()), Some("error"));
        assert_eq!(dict.get("height").and_then(|v| v.to_i128()), Some(480));
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let result = parse_config(Path::new("x.json"), "{ not json", FileFormat::Json);
        assert!(matches!(
            result,
            Err(ConfigError::ConfigurationFileMalformed { .. })
        ));
    }

    #[test]
    fn test_parse_non_table_is_malformed() {
        let result = parse_config(Path::new("x.json"), "[1, 2, 3]", FileFormat::Json);
        assert!(matches!(
            result,
            Err(ConfigError::ConfigurationFileMalformed { .. })
        ));
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_config_file(&dir.path().join("missing.json"));
        assert!(matches!(
            result,
            Err(ConfigError::ConfigurationFileNotFound { .. })
        ));
    }

    #[test]
    fn test_read_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_config_file(dir.path());
        assert!(matches!(
            result,
            Err(ConfigError::ConfigurationFileNotFound { .. })
        ));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("res").join("settings.json");
        let config = DefaultTable::default().to_configuration();

        write_config_file(&path, &config).unwrap();

        let dict = read_config_file(&path).unwrap();
        assert_eq!(dict.get("log_level").and_then(|v| v.as_str()), Some("debug"));
        assert_eq!(dict.get("width").and_then(|v| v.to_u128()), Some(800));
        assert_eq!(
            dict.get("log_file").and_then(|v| v.as_str()),
            Some("application.log")
        );
    }

    #[test]
    fn test_write_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let mut config = DefaultTable::default().to_configuration();
        config.log_level = LogLevel::Critical;

        write_config_file(&path, &config).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("log_level = \"critical\""));
        assert!(text.contains("height = 600"));
    }
}
