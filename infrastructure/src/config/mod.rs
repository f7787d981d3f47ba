//! Configuration resolution for snake-game
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest), decided per field:
//!
//! 1. Explicit call-site arguments (command-line flags)
//! 2. Environment variables
//! 3. Configuration file (`--config-file`, `$CONFIGURATION_FILE`, or the
//!    first existing default candidate)
//! 4. Default values

mod environment;
mod file;
mod layers;
mod loader;

pub use environment::ProcessEnvironment;
pub use file::{ConfigWriteError, FileFormat, parse_config, read_config_file, write_config_file};
pub use layers::LayerProvider;
pub use loader::ConfigResolver;
