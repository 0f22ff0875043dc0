//! Sphere tracing
//!
//! Classic sphere tracing against every visible top-level shape: step along
//! the ray by the minimum combined distance until a surface is within
//! epsilon, the travel budget is spent, or the step budget runs out.
//! Absorbed CSG operands are not independent candidates; they are reached
//! only through their parent's combined field.
//!
//! This query serves interactive picking. Per-pixel rendering is the
//! external renderer's job, driven by the flattened records in
//! [`export`](crate::export).

use crate::scene::{Scene, ShapeId};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tracer tuning knobs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Distance below which the march counts as a surface hit
    pub epsilon: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { epsilon: 0.01 }
    }
}

/// A successful sphere-trace result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The closest surface crossed
    pub shape: ShapeId,
    /// Distance traveled along the ray to the hit
    pub traveled: f32,
    /// World-space hit point
    pub point: Vec3,
}

impl Scene {
    /// March a ray and return the nearest visible shape it hits, if any.
    pub fn raymarch(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        max_steps: u32,
    ) -> Option<ShapeId> {
        self.raymarch_hit(origin, direction, max_distance, max_steps)
            .map(|hit| hit.shape)
    }

    /// March a ray, keeping the full hit record.
    pub fn raymarch_hit(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        max_steps: u32,
    ) -> Option<RayHit> {
        let epsilon = TraceConfig::default().epsilon;
        self.raymarch_with(origin, direction, max_distance, max_steps, epsilon)
    }

    /// March a ray with an explicit hit epsilon.
    pub fn raymarch_with(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        max_steps: u32,
        epsilon: f32,
    ) -> Option<RayHit> {
        let mut traveled = 0.0f32;

        for _ in 0..max_steps {
            let pos = origin + direction * traveled;

            let mut distance = max_distance;
            let mut closest = None;
            for node in self.shapes().filter(|n| n.visible) {
                let d = self.distance(node.id, pos);
                if d < distance {
                    distance = d;
                    closest = Some(node.id);
                }
            }

            if distance < epsilon {
                return closest.map(|shape| RayHit {
                    shape,
                    traveled,
                    point: pos,
                });
            }

            traveled += distance;
            if traveled > max_distance {
                return None;
            }
        }

        None
    }
}
