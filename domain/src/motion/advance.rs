//! Toroidal wrap-around motion

use super::bounds::Bounds;
use super::vector::Vec2;

/// Advance a position by one tick of velocity, wrapping at the edges.
///
/// Each axis wraps independently: a candidate past the far edge resets to 0,
/// a candidate before the origin resets to the extent. The result is always
/// within `[0, extent]` on both axes for finite inputs.
pub fn advance(position: Vec2, velocity: Vec2, bounds: Bounds) -> Vec2 {
    let candidate = position + velocity;
    Vec2::new(
        wrap_axis(candidate.x, bounds.width()),
        wrap_axis(candidate.y, bounds.height()),
    )
}

fn wrap_axis(value: f64, extent: f64) -> f64 {
    if value > extent {
        0.0
    } else if value < 0.0 {
        extent
    } else {
        value
    }
}
