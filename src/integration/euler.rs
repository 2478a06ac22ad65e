use crate::bodies::{Body, Contacts};
use crate::integration::Integrator;
use crate::math::Vector2;

/// Forward Euler integrator with per-tick impulses
///
/// Velocity grows by `pending_force / mass` with no Δt factor: force
/// generators hand in impulses already sized for the tick. Position grows by
/// `velocity * dt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerIntegrator;

impl EulerIntegrator {
    /// Creates a new Euler integrator
    pub fn new() -> Self {
        Self
    }
}

/// Zeroes velocity components that point into a contacted side
pub fn clamp_into_contacts(velocity: Vector2, contacts: &Contacts) -> Vector2 {
    let mut v = velocity;
    if (contacts.x_pos.is_some() && v.x > 0.0) || (contacts.x_neg.is_some() && v.x < 0.0) {
        v.x = 0.0;
    }
    if (contacts.y_pos.is_some() && v.y > 0.0) || (contacts.y_neg.is_some() && v.y < 0.0) {
        v.y = 0.0;
    }
    v
}

impl Integrator for EulerIntegrator {
    fn integrate_velocity(&self, body: &mut Body) {
        if body.is_fixed() {
            return;
        }

        let acceleration = body.take_acceleration();
        let velocity = clamp_into_contacts(body.get_velocity() + acceleration, body.get_contacts());
        body.set_velocity(velocity);
    }

    fn integrate_position(&self, body: &mut Body, dt: f32) {
        if body.is_fixed() {
            return;
        }

        body.set_position(body.get_position() + body.get_velocity() * dt);
    }

    fn name(&self) -> &str {
        "Euler"
    }
}
