pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod forces;
pub mod integration;
pub mod stage;

/// Re-export common types for easier usage
pub use crate::core::{World, SimulationConfig, EngineFeatures, GravityScaling, BodyHandle, StepClock, StepReport};
pub use crate::core::snapshot::{WorldSnapshot, BodyView, PlayerDebug};
pub use crate::bodies::{Body, Material, Contacts, ContactFlags, Direction};
pub use crate::forces::ActorIntent;
pub use crate::math::{Rect, Vector2};
pub use crate::stage::{Stage, StageLoader};

/// Error types for the physics engine
pub mod error {
    use crate::core::BodyHandle;
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("No body tagged {tag:?}")]
        NotFound { tag: String },

        #[error("Body with handle {0:?} not found")]
        InvalidHandle(BodyHandle),

        #[error("Invalid mass {mass}: mass must be positive and finite")]
        InvalidMass { mass: f32 },

        #[error("Invalid size {width}x{height}: both sides must be positive and finite")]
        InvalidSize { width: f32, height: f32 },

        #[error("Invalid friction ({friction_x}, {friction_y}): coefficients must lie in [0, 1]")]
        InvalidFriction { friction_x: f32, friction_y: f32 },

        #[error("Invalid time step {0}: must be finite and non-negative")]
        InvalidTimeStep(f32),

        #[error("Penetration resolver diverged: body {body:?} still overlaps {obstacle:?} after {iterations} iterations")]
        ResolverDivergence {
            body: BodyHandle,
            obstacle: BodyHandle,
            iterations: u32,
        },

        #[error("Invalid stage: {0}")]
        InvalidStage(String),

        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
