mod integrator;
mod euler;
mod friction;

pub use self::integrator::Integrator;
pub use self::euler::{clamp_into_contacts, EulerIntegrator};
pub use self::friction::FrictionCoupler;
