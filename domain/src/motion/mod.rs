//! Bounded-surface motion model
//!
//! - [`Vec2`]: positions and velocities
//! - [`Bounds`] / [`Footprint`]: the surface and the actor's rectangle
//! - [`advance`]: one tick of motion with toroidal wrap-around
//! - [`Actor`]: the single moving entity

mod actor;
mod advance;
mod bounds;
mod vector;

pub use actor::Actor;
pub use advance::advance;
pub use bounds::{Bounds, Footprint, MotionError};
pub use vector::Vec2;
