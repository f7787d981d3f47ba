//! Domain layer for snake-game
//!
//! This crate contains the core value objects and the two pieces of
//! decision logic. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Configuration
//!
//! Startup settings come from four ranked layers (explicit, environment,
//! file, default). The domain owns the resolved [`Configuration`], the
//! frozen [`DefaultTable`] and the field registry; the merging itself lives in
//! the infrastructure layer.
//!
//! ## Bounded motion
//!
//! An [`Actor`] moves by a constant velocity each tick on a surface that
//! wraps at its edges (see [`advance`]).

pub mod config;
pub mod motion;

// Re-export commonly used types
pub use config::{
    CONFIGURATION_FILE_ENV, ConfigError, ConfigField, Configuration, DefaultTable, ExplicitArgs,
    Layer, LogLevel, Resolved, Sources,
};
pub use motion::{Actor, Bounds, Footprint, MotionError, Vec2, advance};
