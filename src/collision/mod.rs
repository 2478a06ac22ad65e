pub mod sensor;
pub mod resolver;

pub use self::sensor::ContactSensor;
pub use self::resolver::PenetrationResolver;
