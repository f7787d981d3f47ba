//! The moving actor

use super::advance::advance;
use super::bounds::{Bounds, Footprint};
use super::vector::Vec2;

/// The single moving entity of the simulation.
///
/// Only [`Actor::tick`] changes the position; velocity and bounds are fixed
/// for the actor's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    position: Vec2,
    velocity: Vec2,
    footprint: Footprint,
    bounds: Bounds,
}

impl Actor {
    /// Speed along x in pixels per tick for a freshly spawned actor.
    pub const DEFAULT_SPEED: f64 = 2.0;

    pub fn new(position: Vec2, velocity: Vec2, footprint: Footprint, bounds: Bounds) -> Self {
        Self {
            position,
            velocity,
            footprint,
            bounds,
        }
    }

    /// Spawn at the centre of the surface, heading right.
    pub fn spawn_centered(bounds: Bounds) -> Self {
        let (x, y) = bounds.center();
        Self::new(
            Vec2::new(x, y),
            Vec2::new(Self::DEFAULT_SPEED, 0.0),
            Footprint::default(),
            bounds,
        )
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance one simulation step and return the new position.
    pub fn tick(&mut self) -> Vec2 {
        self.position = advance(self.position, self.velocity, self.bounds);
        self.position
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn footprint(&self) -> Footprint {
        self.footprint
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
