use crate::bodies::{Body, Contacts, Direction};
use crate::core::{BodyHandle, Collider, EngineFeatures, SimulationConfig};

/// Finds the terrain directly adjacent to a movable body
///
/// A side is in contact when nudging the body by the probe distance toward
/// that side makes it overlap a collider it did not overlap before. Bodies
/// already overlapping a collider never report it as a contact.
#[derive(Debug, Clone, Copy)]
pub struct ContactSensor {
    probe_distance: f32,
    one_way_platforms: bool,
}

impl ContactSensor {
    /// Creates a sensor with an explicit probe distance
    pub fn new(probe_distance: f32, one_way_platforms: bool) -> Self {
        Self {
            probe_distance,
            one_way_platforms,
        }
    }

    /// Creates a sensor from the simulation settings
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(
            config.probe_distance,
            config.has(EngineFeatures::ONE_WAY_PLATFORMS),
        )
    }

    /// Whether a collider can be contacted by `body` at all this tick
    ///
    /// A rising body (`vy < 0`) ignores one-way platforms on every side. The
    /// test reads the instantaneous velocity sign, not the approach history,
    /// so a body that starts falling while level with a platform can catch it.
    #[inline]
    fn is_candidate(&self, body: &Body, collider: &Collider) -> bool {
        !(self.one_way_platforms && collider.one_way && body.get_velocity().y < 0.0)
    }

    /// Returns the first collider adjacent to `body` in `direction`
    pub fn sense(&self, body: &Body, direction: Direction, colliders: &[Collider]) -> Option<BodyHandle> {
        let rect = body.get_rect();
        let probe = rect.shifted(direction.axis(), direction.sign() * self.probe_distance);

        colliders
            .iter()
            .filter(|collider| self.is_candidate(body, collider))
            .find(|collider| !rect.overlaps(&collider.rect) && probe.overlaps(&collider.rect))
            .map(|collider| collider.handle)
    }

    /// Senses all four sides
    pub fn sense_all(&self, body: &Body, colliders: &[Collider]) -> Contacts {
        let mut contacts = Contacts::none();
        for direction in Direction::ALL {
            contacts.set(direction, self.sense(body, direction, colliders));
        }
        contacts
    }
}
