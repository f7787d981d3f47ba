//! Surface bounds and actor footprint

use thiserror::Error;

/// Errors from constructing motion value objects
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("Invalid bounds {width}x{height}: extents must be positive and finite")]
    InvalidBounds { width: f64, height: f64 },

    #[error("Invalid footprint {width}x{height}: extents must be positive and finite")]
    InvalidFootprint { width: f64, height: f64 },
}

fn valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Rectangle anchored at the origin that the actor moves within.
///
/// Extents are always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Result<Self, MotionError> {
        if valid_extent(width) && valid_extent(height) {
            Ok(Self { width, height })
        } else {
            Err(MotionError::InvalidBounds { width, height })
        }
    }

    /// Bounds for a pixel surface. Zero dimensions are rejected.
    pub fn from_surface(width: u32, height: u32) -> Result<Self, MotionError> {
        Self::new(f64::from(width), f64::from(height))
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Small rectangle occupied by the actor.
///
/// The actor's position is the footprint's reference (top-left) corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    width: f64,
    height: f64,
}

impl Footprint {
    pub const DEFAULT_SIZE: f64 = 10.0;

    pub fn new(width: f64, height: f64) -> Result<Self, MotionError> {
        if valid_extent(width) && valid_extent(height) {
            Ok(Self { width, height })
        } else {
            Err(MotionError::InvalidFootprint { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }
}
