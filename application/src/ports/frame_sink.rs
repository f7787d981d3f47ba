//! Frame output port
//!
//! Defines the interface the simulation loop uses to hand each frame to a
//! renderer.

use snake_domain::{Bounds, Footprint, Vec2};

/// Snapshot of the actor after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// 1-based tick number.
    pub tick: u64,
    pub position: Vec2,
    pub footprint: Footprint,
    pub bounds: Bounds,
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The quit signal fired.
    Cancelled,
    /// The configured tick limit was reached.
    TickLimit,
}

/// Summary returned when the loop ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSummary {
    pub ticks: u64,
    pub final_position: Vec2,
    pub stop_reason: StopReason,
}

/// Receives frames from the simulation loop.
///
/// Implementations live in the presentation layer.
pub trait FrameSink: Send + Sync {
    /// Called once before the first tick with the initial frame (tick 0).
    fn on_start(&self, _initial: &Frame) {}

    /// Called after every tick.
    fn on_frame(&self, frame: &Frame);

    /// Called once when the loop ends.
    fn on_stop(&self, _summary: &SimulationSummary) {}
}

/// No-op sink for headless runs
pub struct NoFrames;

impl FrameSink for NoFrames {
    fn on_frame(&self, _frame: &Frame) {}
}
