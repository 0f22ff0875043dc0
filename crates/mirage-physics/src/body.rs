//! Verlet point masses
//!
//! Position-based Verlet integration: a body stores its current and previous
//! positions instead of an explicit velocity. Acceleration accumulates
//! between integrations (gravity once per sub-step, plus whatever the
//! collision solver adds) and is consumed by `integrate`.

use glam::Vec3;
use mirage_core::scene::ShapeId;

/// A point mass bound to an SDF collider shape.
///
/// Two states only: dynamic bodies integrate and accumulate force; static
/// bodies do neither but still participate as collision targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerletBody {
    /// Position this sub-step
    pub position: Vec3,
    /// Position last sub-step; the difference is the implicit velocity
    pub position_old: Vec3,
    /// Acceleration accumulated since the last integration
    pub acceleration: Vec3,
    /// The scene shape acting as this body's collider
    pub collider: ShapeId,
    /// Static bodies never move
    pub is_static: bool,
}

impl VerletBody {
    /// Create a body at rest.
    pub fn new(position: Vec3, collider: ShapeId, is_static: bool) -> Self {
        Self {
            position,
            position_old: position,
            acceleration: Vec3::ZERO,
            collider,
            is_static,
        }
    }

    /// Implicit velocity: distance covered in the last sub-step.
    pub fn velocity(&self) -> Vec3 {
        self.position - self.position_old
    }

    /// Accumulate acceleration for the next integration. No-op for static
    /// bodies.
    pub fn accelerate(&mut self, acceleration: Vec3) {
        if self.is_static {
            return;
        }
        self.acceleration += acceleration;
    }

    /// Advance one sub-step and reset the accumulator. No-op for static
    /// bodies.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_static {
            return;
        }
        let velocity = self.position - self.position_old;
        self.position_old = self.position;
        self.position += velocity + self.acceleration * dt * dt;
        self.acceleration = Vec3::ZERO;
    }
}
