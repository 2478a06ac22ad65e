use crate::bodies::ContactFlags;
use crate::core::BodyHandle;
use crate::forces::ActorIntent;
use crate::math::{Rect, Vector2};
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// What a renderer needs to draw one body
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyView {
    pub handle: BodyHandle,
    pub tag: String,
    pub position: Vector2,
    pub size: Vector2,
    pub fixed: bool,
    pub one_way: bool,
}

impl BodyView {
    /// The body's rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

/// Debug overlay data for the player
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct PlayerDebug {
    pub handle: BodyHandle,
    pub position: Vector2,
    pub velocity: Vector2,
    pub contacts: ContactFlags,

    /// Intent waiting for the next tick
    pub intent: ActorIntent,
}

impl fmt::Display for PlayerDebug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "v=({:+7.2}, {:+7.2}), x=({:+6.2}, {:+6.2}), jump={}, move={}, contact={}",
            self.velocity.x,
            self.velocity.y,
            self.position.x,
            self.position.y,
            self.intent.jump,
            self.intent.move_intent,
            self.contacts.arrows(),
        )
    }
}

/// A consistent copy of the world between two ticks
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct WorldSnapshot {
    /// Number of completed ticks
    pub tick: u64,

    /// Simulated seconds
    pub time: f32,

    /// Every body, in registry order
    pub bodies: Vec<BodyView>,

    /// The player, if one is registered
    pub player: Option<PlayerDebug>,
}
