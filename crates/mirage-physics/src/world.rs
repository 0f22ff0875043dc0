//! Physics world
//!
//! Owns every body and drives the per-frame tick: gravity accumulation,
//! pairwise collision resolution, Verlet integration, then writing body
//! positions back into the scene registry. The whole tick is synchronous and
//! single-threaded; the scene is only mutated between phases, never while a
//! phase iterates it.

use crate::body::VerletBody;
use crate::error::{PhysicsError, Result};
use crate::solver::{self, SolverConfig};
use glam::Vec3;
use mirage_core::scene::{Scene, ShapeId};

/// Stable handle to a body.
///
/// Bodies live in slots: despawning one leaves a hole instead of shifting
/// later bodies, so a held `BodyId` never silently re-targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// The default gravity of the frame loop
pub const GRAVITY: Vec3 = Vec3::new(0.0, -1.2, 0.0);

/// All bodies plus the tick configuration.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    bodies: Vec<Option<VerletBody>>,
    /// Acceleration applied to every dynamic body each sub-step
    pub gravity: Vec3,
    /// Sub-steps per `step` call; more sub-steps, more stability
    pub sub_steps: u32,
    /// Contact search tuning
    pub solver: SolverConfig,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            gravity: GRAVITY,
            sub_steps: 2,
            solver: SolverConfig::default(),
        }
    }

    // === Body lifecycle ===

    /// Bind a new body to an existing scene shape. The body starts at rest
    /// at the shape's current position.
    pub fn spawn(&mut self, scene: &Scene, collider: ShapeId, is_static: bool) -> Result<BodyId> {
        let position = scene.shape(collider)?.position;
        let id = BodyId(self.bodies.len() as u32);
        self.bodies
            .push(Some(VerletBody::new(position, collider, is_static)));
        Ok(id)
    }

    /// Remove a body. Its slot stays empty; other handles are unaffected.
    pub fn despawn(&mut self, id: BodyId) -> Result<()> {
        let slot = self
            .bodies
            .get_mut(id.0 as usize)
            .ok_or(PhysicsError::UnknownBody(id))?;
        if slot.take().is_none() {
            return Err(PhysicsError::UnknownBody(id));
        }
        Ok(())
    }

    pub fn body(&self, id: BodyId) -> Result<&VerletBody> {
        self.bodies
            .get(id.0 as usize)
            .and_then(Option::as_ref)
            .ok_or(PhysicsError::UnknownBody(id))
    }

    pub fn body_mut(&mut self, id: BodyId) -> Result<&mut VerletBody> {
        self.bodies
            .get_mut(id.0 as usize)
            .and_then(Option::as_mut)
            .ok_or(PhysicsError::UnknownBody(id))
    }

    /// Live bodies, in spawn order.
    pub fn bodies(&self) -> impl Iterator<Item = &VerletBody> {
        self.bodies.iter().flatten()
    }

    // === Frame tick ===

    /// Advance the simulation by `dt`, split over the configured sub-steps:
    /// gravity, collision resolution, integration, scene sync.
    pub fn step(&mut self, scene: &mut Scene, dt: f32) {
        if self.sub_steps == 0 {
            return;
        }
        let sub_dt = dt / self.sub_steps as f32;

        for _ in 0..self.sub_steps {
            self.apply_gravity();
            self.resolve_collisions(scene);
            self.integrate(scene, sub_dt);
        }
    }

    fn apply_gravity(&mut self) {
        let gravity = self.gravity;
        for body in self.bodies.iter_mut().flatten() {
            body.accelerate(gravity);
        }
    }

    /// Detect and resolve penetration for every unordered pair with at least
    /// one dynamic member. Each accepted contact pushes the bodies apart
    /// along the other collider's surface normal, proportional to depth;
    /// static bodies stay put.
    fn resolve_collisions(&mut self, scene: &Scene) {
        for i in 0..self.bodies.len() {
            for j in (i + 1)..self.bodies.len() {
                let (Some(a), Some(b)) = (self.bodies[i], self.bodies[j]) else {
                    continue;
                };
                if a.is_static && b.is_static {
                    continue;
                }

                let Some(contact) =
                    solver::find_contact(scene, a.collider, b.collider, a.position, &self.solver)
                else {
                    continue;
                };

                // Each body leaves along the gradient of the *other* field:
                // away from what it is buried in.
                if !a.is_static {
                    let away = scene.normal(b.collider, contact.point);
                    if let Some(body) = self.bodies[i].as_mut() {
                        body.position += away * contact.depth;
                    }
                }
                if !b.is_static {
                    let away = scene.normal(a.collider, contact.point);
                    if let Some(body) = self.bodies[j].as_mut() {
                        body.position += away * contact.depth;
                    }
                }
            }
        }
    }

    fn integrate(&mut self, scene: &mut Scene, dt: f32) {
        for body in self.bodies.iter_mut().flatten() {
            body.integrate(dt);
            // Keep the collider shape riding on the body
            if !body.is_static {
                let _ = scene.set_position(body.collider, body.position);
            }
        }
    }
}
