use crate::bodies::Body;

/// Something that adds force to movable bodies once per tick
pub trait ForceGenerator: std::fmt::Debug {
    /// Returns the type name of the force generator
    fn generator_type(&self) -> &'static str;

    /// Adds this tick's force to `body`'s pending force
    ///
    /// Called after contact sensing, so `body.get_contacts()` is current.
    fn apply_force(&self, body: &mut Body, dt: f32);
}
