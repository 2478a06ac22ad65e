use bitflags::bitflags;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

bitflags! {
    /// Optional engine capabilities
    ///
    /// The complete engine enables everything; clearing flags reproduces the
    /// simpler behaviors (gravity only, no friction, solid bridges, ...).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
    pub struct EngineFeatures: u32 {
        /// Sense adjacent terrain and clamp velocity into it
        const CONTACTS = 0x01;

        /// Damp sliding velocity by the contacted surface's friction
        const FRICTION = 0x02;

        /// Bodies flagged one-way can be passed from below
        const ONE_WAY_PLATFORMS = 0x04;

        /// The player can steer while airborne
        const AIR_CONTROL = 0x08;

        /// Step bodies back out of terrain they moved into
        const RESOLVE_PENETRATION = 0x10;
    }
}

impl Default for EngineFeatures {
    fn default() -> Self {
        Self::all()
    }
}

/// How the gravity constant relates to the tick length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum GravityScaling {
    /// `gravity` is an acceleration in units/s²; the injected force is scaled by Δt
    #[default]
    PerSecond,

    /// `gravity` is a velocity change per tick, whatever the tick length
    PerTick,
}

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Gravity strength along +y (downward)
    pub gravity: f32,

    /// Whether `gravity` is applied per second or per tick
    pub gravity_scaling: GravityScaling,

    /// Horizontal speed the player targets on the ground at unit move intent
    pub move_velocity: f32,

    /// Upward speed a jump adds
    pub jump_velocity: f32,

    /// Fraction of `move_velocity` the player targets while airborne
    pub air_control_factor: f32,

    /// Displacement used to probe for contacts
    pub probe_distance: f32,

    /// Fraction of the tick's displacement undone per resolver iteration
    pub resolve_factor: f32,

    /// Upper bound for a tick's Δt. `None` integrates whatever time was measured,
    /// so a long stall turns into one large step.
    pub max_time_step: Option<f32>,

    /// Enabled capabilities
    pub features: EngineFeatures,
}

impl SimulationConfig {
    /// Gravity and free fall only: no contact sensing, no resolution
    pub fn falling_only() -> Self {
        Self {
            features: EngineFeatures::empty(),
            ..Self::default()
        }
    }

    /// The tick-scaled gravity of the earliest variant (`G` per tick, not per second)
    pub fn per_tick_gravity(gravity: f32) -> Self {
        Self {
            gravity,
            gravity_scaling: GravityScaling::PerTick,
            ..Self::default()
        }
    }

    /// Checks if a capability is enabled
    #[inline]
    pub fn has(&self, feature: EngineFeatures) -> bool {
        self.features.contains(feature)
    }

    /// Upper bound on resolver iterations for one body/obstacle pair
    ///
    /// Undoing the whole displacement takes `1 / resolve_factor` iterations;
    /// twice that leaves room for rounding.
    pub fn max_resolve_iterations(&self) -> u32 {
        (2.0 / self.resolve_factor).ceil() as u32 + 2
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 900.0,
            gravity_scaling: GravityScaling::PerSecond,
            move_velocity: 100.0,
            jump_velocity: 450.0,
            air_control_factor: 0.3,
            probe_distance: 1.0,
            resolve_factor: 0.01,
            max_time_step: None,
            features: EngineFeatures::all(),
        }
    }
}
