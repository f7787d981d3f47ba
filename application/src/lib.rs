//! Application layer for snake-game
//!
//! This crate contains the simulation loop use case and the port definitions
//! it and the configuration resolver depend on. It depends only on the domain
//! layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SimulationConfig;
pub use ports::{
    environment::{EnvironmentSource, MapEnvironment},
    frame_sink::{Frame, FrameSink, NoFrames, SimulationSummary, StopReason},
};
pub use use_cases::run_simulation::{RunSimulationError, RunSimulationUseCase};
