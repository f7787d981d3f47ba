//! Logging setup: stderr plus a log file under the configured directory.

mod subscriber;

pub use subscriber::{LoggingError, LoggingGuard, file_writer, init_logging, open_log_file};
