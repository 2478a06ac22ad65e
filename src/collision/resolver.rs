use crate::bodies::Body;
use crate::core::{BodyHandle, Collider, EngineFeatures, SimulationConfig};
use crate::error::PhysicsError;
use crate::math::Rect;
use crate::Result;
use tracing::error;

/// Undoes penetration introduced by a position update
///
/// A body that moved into terrain it was clear of is walked back along its
/// own velocity in small steps (`velocity * dt * resolve_factor`) until it no
/// longer touches the obstacle. Overlap here is inclusive, so the body ends
/// with a gap the contact sensor can pick up on the next tick.
#[derive(Debug, Clone, Copy)]
pub struct PenetrationResolver {
    resolve_factor: f32,
    max_iterations: u32,
    one_way_platforms: bool,
}

impl PenetrationResolver {
    /// Creates a resolver from the simulation settings
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            resolve_factor: config.resolve_factor,
            max_iterations: config.max_resolve_iterations(),
            one_way_platforms: config.has(EngineFeatures::ONE_WAY_PLATFORMS),
        }
    }

    /// Iteration cap for one body/obstacle pair
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Resolves `body` against every collider; returns the iterations spent
    pub fn resolve(
        &self,
        handle: BodyHandle,
        body: &mut Body,
        before: Rect,
        colliders: &[Collider],
        dt: f32,
    ) -> Result<u32> {
        let mut total = 0;
        for collider in colliders {
            total += self.resolve_against(handle, body, before, collider, dt)?;
        }
        Ok(total)
    }

    /// Resolves `body` against a single collider; returns the iterations spent
    ///
    /// Movers that are resting on or rising through a one-way platform
    /// (`vy <= 0`) are left where they are.
    pub fn resolve_against(
        &self,
        handle: BodyHandle,
        body: &mut Body,
        before: Rect,
        collider: &Collider,
        dt: f32,
    ) -> Result<u32> {
        if self.one_way_platforms && collider.one_way && body.get_velocity().y <= 0.0 {
            return Ok(0);
        }
        if before.overlaps_inclusive(&collider.rect) || !body.get_rect().overlaps_inclusive(&collider.rect) {
            return Ok(0);
        }

        let step = body.get_velocity() * (dt * self.resolve_factor);
        let mut iterations = 0;
        let diverged = |iterations| {
            error!(?handle, obstacle = ?collider.handle, iterations, "penetration resolver diverged");
            PhysicsError::ResolverDivergence {
                body: handle,
                obstacle: collider.handle,
                iterations,
            }
        };

        if (step.x == 0.0 && step.y == 0.0) || !step.is_finite() {
            return Err(diverged(iterations));
        }

        while body.get_rect().overlaps_inclusive(&collider.rect) {
            if iterations >= self.max_iterations {
                return Err(diverged(iterations));
            }
            body.set_position(body.get_position() - step);
            iterations += 1;
        }

        Ok(iterations)
    }
}
