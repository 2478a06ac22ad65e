use crate::bodies::Body;
use crate::core::{EngineFeatures, SimulationConfig};
use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// What the input collaborator asks the player to do on the next tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ActorIntent {
    /// Signed horizontal intent; 0 is none, magnitudes above 1 mean sprinting
    pub move_intent: f32,

    /// Jump if standing on something
    pub jump: bool,
}

impl ActorIntent {
    /// No intent
    pub fn idle() -> Self {
        Self::default()
    }

    /// Horizontal movement only
    pub fn moving(move_intent: f32) -> Self {
        Self { move_intent, jump: false }
    }

    /// A jump without horizontal movement
    pub fn jumping() -> Self {
        Self { move_intent: 0.0, jump: true }
    }

    /// Returns true if nothing is requested
    pub fn is_idle(&self) -> bool {
        self.move_intent == 0.0 && !self.jump
    }
}

/// Turns the player's intent into forces
///
/// Horizontal movement targets a speed rather than adding one: the
/// controller injects exactly the force that brings `vx` to the target, and
/// only when the player is slower than the target or heading the other way.
/// Jumping is a one-shot impulse and only works from the ground.
#[derive(Debug, Clone, Copy)]
pub struct ActorController {
    move_velocity: f32,
    jump_velocity: f32,
    air_control_factor: Option<f32>,
}

impl ActorController {
    /// Creates a controller from the simulation settings
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            move_velocity: config.move_velocity,
            jump_velocity: config.jump_velocity,
            air_control_factor: config
                .has(EngineFeatures::AIR_CONTROL)
                .then_some(config.air_control_factor),
        }
    }

    /// Adds the forces `intent` produces on `body` this tick
    ///
    /// Needs the current contacts; an airborne jump is dropped.
    pub fn apply(&self, body: &mut Body, intent: ActorIntent) {
        if body.is_fixed() {
            return;
        }

        let mass = body.get_mass();
        if body.is_grounded() {
            if intent.jump {
                body.apply_force(Vector2::new(0.0, -mass * self.jump_velocity));
            }
            if intent.move_intent != 0.0 {
                self.steer(body, self.move_velocity * intent.move_intent);
            }
        } else if let Some(factor) = self.air_control_factor {
            if intent.move_intent != 0.0 {
                self.steer(body, self.move_velocity * intent.move_intent * factor);
            }
        }
    }

    fn steer(&self, body: &mut Body, target: f32) {
        let vx = body.get_velocity().x;
        if vx * target <= 0.0 || vx.abs() < target.abs() {
            body.apply_force(Vector2::new(body.get_mass() * (target - vx), 0.0));
        }
    }
}
