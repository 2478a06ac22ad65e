use crate::bodies::{Body, Material};
use crate::core::BodyHandle;
use crate::math::Vector2;

/// Damps velocity tangential to the surfaces a body touches
///
/// The surface normal decides the damped axis: a floor or ceiling contact
/// (y side) damps `vx` by the surface's `friction_x`, a wall contact (x side)
/// damps `vy` by its `friction_y`. Each axis is damped once per tick even when
/// both opposite sides touch something; the `+` side wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrictionCoupler;

impl FrictionCoupler {
    /// Creates a new friction coupler
    pub fn new() -> Self {
        Self
    }

    /// Velocity multipliers for `body`, given a way to look up contacted materials
    pub fn damping<'a, F>(&self, body: &Body, material_of: F) -> Vector2
    where
        F: Fn(BodyHandle) -> Option<&'a Material>,
    {
        let contacts = body.get_contacts();
        let x = contacts
            .vertical()
            .and_then(&material_of)
            .map_or(1.0, |material| 1.0 - material.friction_x);
        let y = contacts
            .horizontal()
            .and_then(&material_of)
            .map_or(1.0, |material| 1.0 - material.friction_y);
        Vector2::new(x, y)
    }

    /// Applies precomputed multipliers
    pub fn apply(&self, body: &mut Body, damping: Vector2) {
        let v = body.get_velocity();
        body.set_velocity(Vector2::new(v.x * damping.x, v.y * damping.y));
    }
}
