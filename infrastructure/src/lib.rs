//! Infrastructure layer for snake-game
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: configuration resolution (figment layers, files,
//! the process environment) and logging setup.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigResolver, ConfigWriteError, FileFormat, LayerProvider, ProcessEnvironment,
    read_config_file, write_config_file,
};
pub use logging::{LoggingError, LoggingGuard, init_logging};
