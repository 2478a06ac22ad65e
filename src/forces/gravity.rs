use crate::bodies::Body;
use crate::core::{GravityScaling, SimulationConfig};
use crate::forces::ForceGenerator;
use crate::math::Vector2;

/// Pulls airborne bodies toward +y
///
/// Bodies with something under them (a `y_pos` contact) get no gravity at
/// all; the contact clamp alone would also stop them, but skipping the force
/// keeps resting bodies exactly still.
#[derive(Debug, Clone, Copy)]
pub struct GravityForce {
    /// Acceleration along +y
    gravity: f32,

    /// Whether `gravity` is per second or per tick
    scaling: GravityScaling,
}

impl GravityForce {
    /// Creates a new gravity force generator
    pub fn new(gravity: f32, scaling: GravityScaling) -> Self {
        Self { gravity, scaling }
    }

    /// Creates a gravity force generator from the simulation settings
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.gravity, config.gravity_scaling)
    }

    /// Gets the gravity strength
    pub fn get_gravity(&self) -> f32 {
        self.gravity
    }

    /// Velocity change this generator adds over one tick of length `dt`
    pub fn velocity_change(&self, dt: f32) -> f32 {
        match self.scaling {
            GravityScaling::PerSecond => self.gravity * dt,
            GravityScaling::PerTick => self.gravity,
        }
    }
}

impl ForceGenerator for GravityForce {
    fn generator_type(&self) -> &'static str {
        "Gravity"
    }

    fn apply_force(&self, body: &mut Body, dt: f32) {
        if body.is_fixed() || body.is_grounded() {
            return;
        }

        // F = m * a, as a per-tick impulse
        let force = body.get_mass() * self.velocity_change(dt);
        body.apply_force(Vector2::new(0.0, force));
    }
}
