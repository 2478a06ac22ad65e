use crate::bodies::Body;
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::math::Rect;
use crate::Result;

/// Owner of every body in a world
///
/// Bodies are stored in insertion order and addressed by index, so handles
/// stay stable and iteration order is deterministic. Tag lookup is a linear
/// scan, which is fine for the worlds a stage produces.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
}

/// A fixed body reduced to what collision queries need
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    pub handle: BodyHandle,
    pub rect: Rect,
    pub one_way: bool,
}

impl BodyRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Adds a body and returns its handle
    pub fn add(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.bodies.len() as u32);
        self.bodies.push(body);
        handle
    }

    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies
            .get(handle.index())
            .ok_or(PhysicsError::InvalidHandle(handle))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies
            .get_mut(handle.index())
            .ok_or(PhysicsError::InvalidHandle(handle))
    }

    /// Returns the first body carrying `tag`
    pub fn find_by_tag(&self, tag: &str) -> Result<BodyHandle> {
        self.iter()
            .find(|(_, body)| body.get_tag() == tag)
            .map(|(handle, _)| handle)
            .ok_or_else(|| PhysicsError::NotFound { tag: tag.to_string() })
    }

    /// Returns every body carrying `tag`, in insertion order
    pub fn find_all_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = BodyHandle> + 'a {
        self.iter()
            .filter(move |(_, body)| body.get_tag() == tag)
            .map(|(handle, _)| handle)
    }

    /// Returns the number of bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterates over all bodies
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyHandle(i as u32), body))
    }

    /// Iterates mutably over all bodies
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> + '_ {
        self.bodies
            .iter_mut()
            .enumerate()
            .map(|(i, body)| (BodyHandle(i as u32), body))
    }

    /// Iterates over terrain
    pub fn iter_fixed(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.iter().filter(|(_, body)| body.is_fixed())
    }

    /// Iterates over actors
    pub fn iter_movable(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.iter().filter(|(_, body)| !body.is_fixed())
    }

    /// Iterates mutably over actors
    pub fn iter_movable_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut Body)> + '_ {
        self.iter_mut().filter(|(_, body)| !body.is_fixed())
    }

    /// Handles of all actors
    pub fn movable_handles(&self) -> Vec<BodyHandle> {
        self.iter_movable().map(|(handle, _)| handle).collect()
    }

    /// Snapshot of the terrain for collision queries
    pub fn fixed_colliders(&self) -> Vec<Collider> {
        self.iter_fixed()
            .map(|(handle, body)| Collider {
                handle,
                rect: body.get_rect(),
                one_way: body.is_bridge(),
            })
            .collect()
    }

    /// Copies another registry into this one, reusing the allocation
    pub fn copy_from(&mut self, other: &Self) {
        self.bodies.clone_from(&other.bodies);
    }
}
