use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Surface properties of a body, read when another body slides along it
///
/// Both coefficients live in `[0, 1]`: 0 lets a mover slide freely, 1 stops
/// it on the first tick of contact. `friction_x` damps horizontal motion
/// along floors and ceilings, `friction_y` damps vertical motion along walls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// Damping of horizontal velocity for bodies touching this one from above or below
    pub friction_x: f32,

    /// Damping of vertical velocity for bodies touching this one from the side
    pub friction_y: f32,
}

impl Material {
    /// Creates a new material, rejecting coefficients outside `[0, 1]`
    pub fn new(friction_x: f32, friction_y: f32) -> Result<Self> {
        let valid = |f: f32| (0.0..=1.0).contains(&f);
        if !valid(friction_x) || !valid(friction_y) {
            return Err(PhysicsError::InvalidFriction { friction_x, friction_y });
        }

        Ok(Self { friction_x, friction_y })
    }

    /// A surface nothing slows down on
    pub fn frictionless() -> Self {
        Self {
            friction_x: 0.0,
            friction_y: 0.0,
        }
    }

    /// Slippery floor
    pub fn ice() -> Self {
        Self {
            friction_x: 0.02,
            friction_y: 0.0,
        }
    }

    /// Walls that slow a sliding body down as well
    pub fn sticky() -> Self {
        Self {
            friction_x: 0.6,
            friction_y: 0.4,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            friction_x: 0.3,
            friction_y: 0.0,
        }
    }
}
