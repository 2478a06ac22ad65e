use crate::bodies::{body_flags::BodyFlags, tags, Contacts, Material};
use crate::error::PhysicsError;
use crate::math::{Rect, Vector2};
use crate::Result;

/// A rectangular simulated entity: terrain (fixed) or an actor (movable)
#[derive(Debug, Clone)]
pub struct Body {
    /// Category label used for lookup, not unique
    tag: String,

    /// Top-left corner and size
    rect: Rect,

    /// The body's velocity in units per second
    velocity: Vector2,

    /// The body's mass
    mass: f32,

    /// Forces accumulated during the current tick
    pending_force: Vector2,

    /// Surface friction seen by bodies touching this one
    material: Material,

    /// The body's flags
    flags: BodyFlags,

    /// Adjacent bodies found by the latest sensing pass
    contacts: Contacts,
}

impl Body {
    /// Creates a new body with unit mass and the default material
    pub fn new(tag: impl Into<String>, position: Vector2, size: Vector2, fixed: bool) -> Result<Self> {
        if !(size.x > 0.0 && size.y > 0.0 && size.is_finite()) {
            return Err(PhysicsError::InvalidSize { width: size.x, height: size.y });
        }
        if !position.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!("non-finite position {}", position)));
        }

        let mut flags = BodyFlags::empty();
        flags.set(BodyFlags::FIXED, fixed);

        Ok(Self {
            tag: tag.into(),
            rect: Rect::new(position, size),
            velocity: Vector2::zero(),
            mass: 1.0,
            pending_force: Vector2::zero(),
            material: Material::default(),
            flags,
            contacts: Contacts::none(),
        })
    }

    /// Creates a new terrain body
    pub fn new_fixed(tag: impl Into<String>, position: Vector2, size: Vector2) -> Result<Self> {
        Self::new(tag, position, size, true)
    }

    /// Creates a new movable body
    pub fn new_movable(tag: impl Into<String>, position: Vector2, size: Vector2) -> Result<Self> {
        Self::new(tag, position, size, false)
    }

    /// Creates a one-way platform tagged "bridge"
    pub fn new_bridge(position: Vector2, size: Vector2) -> Result<Self> {
        let mut body = Self::new(tags::BRIDGE, position, size, true)?;
        body.flags.insert(BodyFlags::ONE_WAY);
        Ok(body)
    }

    /// Replaces the mass, validating it
    pub fn with_mass(mut self, mass: f32) -> Result<Self> {
        self.set_mass(mass)?;
        Ok(self)
    }

    /// Replaces the material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Sets the initial velocity (ignored for fixed bodies)
    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.set_velocity(velocity);
        self
    }

    /// Returns the body's tag
    pub fn get_tag(&self) -> &str {
        &self.tag
    }

    /// Returns whether the body is terrain
    pub fn is_fixed(&self) -> bool {
        self.flags.contains(BodyFlags::FIXED)
    }

    /// Returns whether the body is a one-way platform
    pub fn is_bridge(&self) -> bool {
        self.flags.contains(BodyFlags::ONE_WAY)
    }

    /// Returns the body's flags
    pub fn get_flags(&self) -> BodyFlags {
        self.flags
    }

    /// Returns the body's rectangle
    pub fn get_rect(&self) -> Rect {
        self.rect
    }

    /// Returns the body's top-left corner
    pub fn get_position(&self) -> Vector2 {
        self.rect.position
    }

    /// Moves the body (ignored for fixed bodies)
    pub fn set_position(&mut self, position: Vector2) {
        if !self.is_fixed() {
            self.rect.position = position;
        }
    }

    /// Returns the body's size
    pub fn get_size(&self) -> Vector2 {
        self.rect.size
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the body's velocity (ignored for fixed bodies)
    pub fn set_velocity(&mut self, velocity: Vector2) {
        if !self.is_fixed() {
            self.velocity = velocity;
        }
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Sets the body's mass; zero, negative and non-finite masses are rejected
    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(PhysicsError::InvalidMass { mass });
        }
        self.mass = mass;
        Ok(())
    }

    /// Returns the body's material
    pub fn get_material(&self) -> &Material {
        &self.material
    }

    /// Sets the body's material
    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    /// Returns the forces accumulated so far this tick
    pub fn get_pending_force(&self) -> Vector2 {
        self.pending_force
    }

    /// Adds a force for the next velocity integration (ignored for fixed bodies)
    pub fn apply_force(&mut self, force: Vector2) {
        if !self.is_fixed() {
            self.pending_force += force;
        }
    }

    /// Converts pending forces to an acceleration and clears them
    pub fn take_acceleration(&mut self) -> Vector2 {
        let acceleration = self.pending_force / self.mass;
        self.pending_force = Vector2::zero();
        acceleration
    }

    /// Returns the contacts of the latest sensing pass
    pub fn get_contacts(&self) -> &Contacts {
        &self.contacts
    }

    /// Overwrites the contacts
    pub fn set_contacts(&mut self, contacts: Contacts) {
        self.contacts = contacts;
    }

    /// Returns whether something is directly below the body
    pub fn is_grounded(&self) -> bool {
        self.contacts.is_grounded()
    }
}
