use crate::bodies::Body;

/// Trait for numerical integration algorithms
///
/// The tick calls the two halves separately because friction runs between
/// them.
pub trait Integrator: std::fmt::Debug {
    /// Turns the pending force into a velocity change, then stops velocity
    /// pointing into a sensed contact
    fn integrate_velocity(&self, body: &mut Body);

    /// Moves the body along its velocity for `dt` seconds
    fn integrate_position(&self, body: &mut Body, dt: f32);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
