mod force_generator;
mod gravity;
mod actor;

pub use self::force_generator::ForceGenerator;
pub use self::gravity::GravityForce;
pub use self::actor::{ActorController, ActorIntent};
