//! Configuration value objects for the domain layer
//!
//! The resolved [`Configuration`], the frozen [`DefaultTable`], the typed
//! [`ExplicitArgs`] layer and the field registry shared by every layer.

mod configuration;
mod error;
mod field;
mod log_level;

pub use configuration::{Configuration, DefaultTable, ExplicitArgs, Resolved, Sources};
pub use error::ConfigError;
pub use field::{CONFIGURATION_FILE_ENV, ConfigField, Layer};
pub use log_level::{LogLevel, UnknownLogLevel};
