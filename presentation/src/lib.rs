//! Presentation layer for snake-game
//!
//! This crate contains the CLI definition, the terminal frame renderer and
//! the configuration report.

pub mod cli;
pub mod render;
pub mod report;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use render::console::ConsoleRenderer;
pub use report::config::ConfigReport;
