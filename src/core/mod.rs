pub mod world;
pub mod config;
pub mod storage;
pub mod clock;
pub mod snapshot;

pub use self::world::{World, StepReport};
pub use self::config::{SimulationConfig, EngineFeatures, GravityScaling};
pub use self::storage::{BodyRegistry, Collider};
pub use self::clock::StepClock;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A unique identifier for a body in the physics world
///
/// Handles are registry indices. Bodies are never removed, so a handle stays
/// valid for the lifetime of the world that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyHandle(pub(crate) u32);

impl BodyHandle {
    /// Handle for the body at `index`, for code that builds colliders by hand
    #[inline]
    pub fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Position of the body in the registry
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
