//! Run Simulation use case
//!
//! Drives the fixed-rate tick loop: advance the actor, hand the frame to the
//! sink, repeat until the quit signal fires or the tick limit is reached.

use crate::config::SimulationConfig;
use crate::ports::frame_sink::{Frame, FrameSink, SimulationSummary, StopReason};
use snake_domain::Actor;
use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors that can occur before the loop starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunSimulationError {
    #[error("Tick rate must be positive")]
    InvalidTickRate,
}

/// Use case for running the simulation loop
pub struct RunSimulationUseCase {
    config: SimulationConfig,
    cancel: CancellationToken,
}

impl RunSimulationUseCase {
    pub fn new(config: SimulationConfig, cancel: CancellationToken) -> Self {
        Self { config, cancel }
    }

    /// Run until cancelled or until `max_ticks` ticks have elapsed.
    pub async fn execute(
        &self,
        actor: &mut Actor,
        sink: &dyn FrameSink,
    ) -> Result<SimulationSummary, RunSimulationError> {
        let period = self
            .config
            .period()
            .ok_or(RunSimulationError::InvalidTickRate)?;

        info!(
            "Starting simulation at {} ticks/s (limit: {:?})",
            self.config.tick_rate, self.config.max_ticks
        );

        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        sink.on_start(&Self::frame(actor, 0));

        let mut ticks = 0u64;
        let stop_reason = loop {
            if self.config.max_ticks.is_some_and(|max| ticks >= max) {
                break StopReason::TickLimit;
            }

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break StopReason::Cancelled,
                _ = interval.tick() => {}
            }

            actor.tick();
            ticks += 1;
            sink.on_frame(&Self::frame(actor, ticks));
        };

        let summary = SimulationSummary {
            ticks,
            final_position: actor.position(),
            stop_reason,
        };
        debug!("Simulation stopped: {:?}", summary);
        sink.on_stop(&summary);

        Ok(summary)
    }

    fn frame(actor: &Actor, tick: u64) -> Frame {
        Frame {
            tick,
            position: actor.position(),
            footprint: actor.footprint(),
            bounds: actor.bounds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::frame_sink::NoFrames;
    use snake_domain::{Bounds, Footprint, Vec2};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        started: Mutex<Option<Frame>>,
        frames: Mutex<Vec<Frame>>,
        stopped: Mutex<Option<SimulationSummary>>,
    }

    impl FrameSink for RecordingSink {
        fn on_start(&self, initial: &Frame) {
            *self.started.lock().unwrap() = Some(*initial);
        }

        fn on_frame(&self, frame: &Frame) {
            self.frames.lock().unwrap().push(*frame);
        }

        fn on_stop(&self, summary: &SimulationSummary) {
            *self.stopped.lock().unwrap() = Some(*summary);
        }
    }

    fn fast(max_ticks: u64) -> SimulationConfig {
        SimulationConfig::default()
            .with_tick_rate(1000)
            .with_max_ticks(Some(max_ticks))
    }

    #[tokio::test]
    async fn test_stops_at_tick_limit() {
        let mut actor = Actor::spawn_centered(Bounds::from_surface(800, 600).unwrap());
        let sink = RecordingSink::default();
        let use_case = RunSimulationUseCase::new(fast(5), CancellationToken::new());

        let summary = use_case.execute(&mut actor, &sink).await.unwrap();

        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.stop_reason, StopReason::TickLimit);
        assert_eq!(summary.final_position, Vec2::new(410.0, 300.0));

        let frames = sink.frames.lock().unwrap();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].tick, 1);
        assert_eq!(frames[0].position, Vec2::new(402.0, 300.0));
        assert_eq!(frames[4].tick, 5);

        let started = sink.started.lock().unwrap().unwrap();
        assert_eq!(started.tick, 0);
        assert_eq!(started.position, Vec2::new(400.0, 300.0));
        assert_eq!(*sink.stopped.lock().unwrap(), Some(summary));
    }

    #[tokio::test]
    async fn test_wraps_during_loop() {
        let bounds = Bounds::new(100.0, 100.0).unwrap();
        let mut actor = Actor::new(
            Vec2::new(99.0, 50.0),
            Vec2::new(5.0, 0.0),
            Footprint::default(),
            bounds,
        );
        let use_case = RunSimulationUseCase::new(fast(1), CancellationToken::new());

        let summary = use_case.execute(&mut actor, &NoFrames).await.unwrap();
        assert_eq!(summary.final_position, Vec2::new(0.0, 50.0));
    }

    #[tokio::test]
    async fn test_cancelled_before_first_tick() {
        let mut actor = Actor::spawn_centered(Bounds::from_surface(800, 600).unwrap());
        let cancel = CancellationToken::new();
        cancel.cancel();
        let use_case = RunSimulationUseCase::new(SimulationConfig::default(), cancel);

        let summary = use_case.execute(&mut actor, &NoFrames).await.unwrap();
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.stop_reason, StopReason::Cancelled);
        assert_eq!(summary.final_position, Vec2::new(400.0, 300.0));
    }

    #[tokio::test]
    async fn test_cancel_while_running() {
        let mut actor = Actor::spawn_centered(Bounds::from_surface(800, 600).unwrap());
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        let use_case = RunSimulationUseCase::new(
            SimulationConfig::default().with_tick_rate(1000),
            cancel,
        );

        tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let summary = use_case.execute(&mut actor, &NoFrames).await.unwrap();
        assert_eq!(summary.stop_reason, StopReason::Cancelled);
        assert!(summary.ticks > 0);
    }

    #[tokio::test]
    async fn test_zero_tick_rate_is_rejected() {
        let mut actor = Actor::spawn_centered(Bounds::from_surface(800, 600).unwrap());
        let use_case = RunSimulationUseCase::new(
            SimulationConfig::default().with_tick_rate(0),
            CancellationToken::new(),
        );

        let result = use_case.execute(&mut actor, &NoFrames).await;
        assert_eq!(result, Err(RunSimulationError::InvalidTickRate));
    }
}
