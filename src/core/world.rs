use crate::bodies::{tags, Body, Contacts};
use crate::collision::{ContactSensor, PenetrationResolver};
use crate::core::snapshot::{BodyView, PlayerDebug, WorldSnapshot};
use crate::core::{BodyHandle, BodyRegistry, EngineFeatures, SimulationConfig, StepClock};
use crate::error::PhysicsError;
use crate::forces::{ActorController, ActorIntent, ForceGenerator, GravityForce};
use crate::integration::{EulerIntegrator, FrictionCoupler, Integrator};
use crate::math::Rect;
use crate::Result;
use tracing::{debug, trace, warn};

/// Summary of one completed tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    /// Number of the tick, starting at 1
    pub tick: u64,

    /// The Δt actually integrated, after clamping
    pub dt: f32,

    /// Resolver iterations spent across all bodies
    pub resolver_iterations: u32,
}

/// The physics world: owns the bodies and advances them tick by tick
///
/// Bodies live in two registries. A tick runs on the back copy and is swapped
/// in only when every stage succeeded, so readers of the world never observe
/// a partially updated tick and a failed tick leaves no trace on the bodies.
#[derive(Debug)]
pub struct World {
    /// Bodies as of the last completed tick
    front: BodyRegistry,

    /// Scratch copy the running tick mutates
    back: BodyRegistry,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Velocity and position integration
    integrator: Box<dyn Integrator>,

    /// The body the actor intent drives
    player: Option<BodyHandle>,

    /// Intent for the next tick
    intent: ActorIntent,

    /// The total elapsed simulation time
    time: f32,

    /// Completed ticks
    tick: u64,
}

impl World {
    /// Creates a new physics world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new physics world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            front: BodyRegistry::new(),
            back: BodyRegistry::new(),
            config,
            integrator: Box::new(EulerIntegrator::new()),
            player: None,
            intent: ActorIntent::idle(),
            time: 0.0,
            tick: 0,
        }
    }

    /// Replaces the integrator
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns the number of completed ticks
    pub fn get_tick(&self) -> u64 {
        self.tick
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns a mutable reference to the simulation configuration
    pub fn get_config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    /// Adds a body to the world and returns its handle
    ///
    /// The first movable body tagged "player" becomes the player unless one
    /// was registered already.
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let is_player = !body.is_fixed() && body.get_tag() == tags::PLAYER;
        let handle = self.front.add(body);
        if is_player && self.player.is_none() {
            self.player = Some(handle);
        }
        handle
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.front.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.front.get_body_mut(handle)
    }

    /// Returns the first body carrying `tag`
    pub fn find_by_tag(&self, tag: &str) -> Result<BodyHandle> {
        self.front.find_by_tag(tag)
    }

    /// Read-only view of all bodies as of the last completed tick
    pub fn bodies(&self) -> &BodyRegistry {
        &self.front
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.front.len()
    }

    /// Returns the player handle, if any
    pub fn get_player(&self) -> Option<BodyHandle> {
        self.player
    }

    /// Makes `handle` the body the actor intent drives
    pub fn set_player(&mut self, handle: BodyHandle) -> Result<()> {
        if self.front.get_body(handle)?.is_fixed() {
            return Err(PhysicsError::InvalidParameter(format!(
                "fixed body {:?} cannot be the player",
                handle
            )));
        }
        self.player = Some(handle);
        Ok(())
    }

    /// Sets the intent the next tick consumes
    pub fn set_intent(&mut self, intent: ActorIntent) {
        self.intent = intent;
    }

    /// Returns the intent the next tick will consume
    pub fn get_intent(&self) -> ActorIntent {
        self.intent
    }

    /// Runs one tick using the time measured by `clock`
    pub fn advance(&mut self, clock: &mut StepClock) -> Result<StepReport> {
        let dt = clock.tick();
        self.step(dt)
    }

    /// Runs one tick of `dt` seconds
    ///
    /// The pending intent is consumed whether or not the tick succeeds. On
    /// error the bodies are exactly as they were before the call.
    pub fn step(&mut self, dt: f32) -> Result<StepReport> {
        let intent = std::mem::take(&mut self.intent);

        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }
        let dt = match self.config.max_time_step {
            Some(max) if dt > max => {
                warn!(measured = dt, clamped = max, "time step clamped");
                max
            }
            _ => dt,
        };

        self.back.copy_from(&self.front);
        let resolver_iterations = run_tick(
            &mut self.back,
            &self.config,
            self.integrator.as_ref(),
            self.player,
            intent,
            dt,
        )?;

        if let Some(player) = self.player {
            let was_grounded = self.front.get_body(player)?.is_grounded();
            let is_grounded = self.back.get_body(player)?.is_grounded();
            if was_grounded != is_grounded {
                debug!(tick = self.tick + 1, grounded = is_grounded, "player ground contact changed");
            }
        }

        std::mem::swap(&mut self.front, &mut self.back);
        self.time += dt;
        self.tick += 1;
        trace!(tick = self.tick, dt, resolver_iterations, "tick complete");

        Ok(StepReport {
            tick: self.tick,
            dt,
            resolver_iterations,
        })
    }

    /// Copies out everything a renderer or debug overlay reads
    pub fn snapshot(&self) -> WorldSnapshot {
        let bodies = self
            .front
            .iter()
            .map(|(handle, body)| BodyView {
                handle,
                tag: body.get_tag().to_string(),
                position: body.get_position(),
                size: body.get_size(),
                fixed: body.is_fixed(),
                one_way: body.is_bridge(),
            })
            .collect();

        let player = self.player.and_then(|handle| {
            self.front.get_body(handle).ok().map(|body| PlayerDebug {
                handle,
                position: body.get_position(),
                velocity: body.get_velocity(),
                contacts: body.get_contacts().flags(),
                intent: self.intent,
            })
        });

        WorldSnapshot {
            tick: self.tick,
            time: self.time,
            bodies,
            player,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Advances every movable body in `bodies` by one tick
///
/// Order: sense contacts, inject gravity and actor forces, integrate
/// velocity (with the contact clamp), apply friction, integrate position,
/// resolve penetration. Returns the resolver iterations spent.
fn run_tick(
    bodies: &mut BodyRegistry,
    config: &SimulationConfig,
    integrator: &dyn Integrator,
    player: Option<BodyHandle>,
    intent: ActorIntent,
    dt: f32,
) -> Result<u32> {
    let colliders = bodies.fixed_colliders();
    let movers = bodies.movable_handles();

    // Contacts are rebuilt from scratch every tick
    let sensor = config
        .has(EngineFeatures::CONTACTS)
        .then(|| ContactSensor::from_config(config));
    for (_, body) in bodies.iter_movable_mut() {
        let contacts = match &sensor {
            Some(sensor) => sensor.sense_all(body, &colliders),
            None => Contacts::none(),
        };
        body.set_contacts(contacts);
    }

    let gravity = GravityForce::from_config(config);
    let controller = ActorController::from_config(config);
    for (handle, body) in bodies.iter_movable_mut() {
        gravity.apply_force(body, dt);
        if player == Some(handle) {
            controller.apply(body, intent);
        }
    }

    for (_, body) in bodies.iter_movable_mut() {
        integrator.integrate_velocity(body);
    }

    if config.has(EngineFeatures::FRICTION) {
        let coupler = FrictionCoupler::new();
        for &handle in &movers {
            let damping = {
                let registry = &*bodies;
                let body = registry.get_body(handle)?;
                coupler.damping(body, |contact| {
                    registry.get_body(contact).ok().map(Body::get_material)
                })
            };
            coupler.apply(bodies.get_body_mut(handle)?, damping);
        }
    }

    let before = movers
        .iter()
        .map(|&handle| bodies.get_body(handle).map(Body::get_rect))
        .collect::<Result<Vec<Rect>>>()?;
    for (_, body) in bodies.iter_movable_mut() {
        integrator.integrate_position(body, dt);
    }

    let mut resolver_iterations = 0;
    if config.has(EngineFeatures::RESOLVE_PENETRATION) {
        let resolver = PenetrationResolver::from_config(config);
        for (&handle, &rect) in movers.iter().zip(&before) {
            let body = bodies.get_body_mut(handle)?;
            resolver_iterations += resolver.resolve(handle, body, rect, &colliders, dt)?;
        }
    }

    Ok(resolver_iterations)
}
