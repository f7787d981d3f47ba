//! tracing subscriber installation
//!
//! Logs go to stderr and, through a non-blocking writer, to
//! `log_directory/log_file`. The directory and file are created if missing;
//! an existing file is appended to.

use snake_domain::Configuration;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Errors from setting up logging
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Could not create log directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not install the log subscriber: {0}")]
    Install(String),
}

/// Keeps the file writer alive; dropping it flushes buffered log lines.
pub struct LoggingGuard {
    _worker: WorkerGuard,
    path: PathBuf,
}

impl LoggingGuard {
    /// Path of the log file being written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Open (creating as needed) the log file for appending.
pub fn open_log_file(configuration: &Configuration) -> Result<File, LoggingError> {
    let directory = &configuration.log_directory;
    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDirectory {
        path: directory.clone(),
        source,
    })?;

    let path = configuration.log_path();
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| LoggingError::OpenFile { path, source })
}

/// Non-blocking writer for the configured log file.
pub fn file_writer(
    configuration: &Configuration,
) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    let file = open_log_file(configuration)?;
    Ok(tracing_appender::non_blocking(file))
}

/// Install the global subscriber for `configuration`.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(configuration: &Configuration) -> Result<LoggingGuard, LoggingError> {
    let (writer, worker) = file_writer(configuration)?;

    let filter = EnvFilter::new(configuration.log_level.filter_directive());
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    info!("Log level set to {}.", configuration.log_level);

    Ok(LoggingGuard {
        _worker: worker,
        path: configuration.log_path(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_domain::DefaultTable;
    use std::io::Write;

    fn config_in(dir: &Path) -> Configuration {
        Configuration {
            log_directory: dir.join("nested").join("logs"),
            log_file: "snake.log".to_string(),
            ..DefaultTable::default().to_configuration()
        }
    }

    #[test]
    fn test_open_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        open_log_file(&config).unwrap();

        assert!(config.log_path().is_file());
    }

    #[test]
    fn test_open_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        writeln!(open_log_file(&config).unwrap(), "first").unwrap();
        writeln!(open_log_file(&config).unwrap(), "second").unwrap();

        let contents = std::fs::read_to_string(config.log_path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn test_open_fails_when_directory_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let config = Configuration {
            log_directory: blocker,
            ..DefaultTable::default().to_configuration()
        };

        let result = open_log_file(&config);
        assert!(matches!(result, Err(LoggingError::CreateDirectory { .. })));
    }

    #[test]
    fn test_file_writer_flushes_on_guard_drop() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let (mut writer, guard) = file_writer(&config).unwrap();
        writer.write_all(b"hello\n").unwrap();
        drop(guard);

        let contents = std::fs::read_to_string(config.log_path()).unwrap();
        assert_eq!(contents, "hello\n");
    }
}
