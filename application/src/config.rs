//! Application-level configuration.
//!
//! Controls how the simulation loop is paced. These settings come from the
//! command line only; they are not part of the layered startup configuration.

use std::time::Duration;

/// Simulation pacing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Ticks per second.
    pub tick_rate: u32,
    /// Stop after this many ticks. `None` runs until cancelled.
    pub max_ticks: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_rate: Self::DEFAULT_TICK_RATE,
            max_ticks: None,
        }
    }
}

impl SimulationConfig {
    pub const DEFAULT_TICK_RATE: u32 = 60;

    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Time between ticks, or `None` for a zero tick rate.
    pub fn period(&self) -> Option<Duration> {
        (self.tick_rate > 0).then(|| Duration::from_secs(1) / self.tick_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sixty_hz_unbounded() {
        let config = SimulationConfig::default();
        assert_eq!(config.tick_rate, 60);
        assert!(config.max_ticks.is_none());
    }

    #[test]
    fn test_period() {
        let config = SimulationConfig::default().with_tick_rate(50);
        assert_eq!(config.period(), Some(Duration::from_millis(20)));
        assert_eq!(SimulationConfig::default().with_tick_rate(0).period(), None);
    }
}
