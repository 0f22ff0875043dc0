//! Combined SDF evaluation
//!
//! A node's distance field is its primitive distance folded with the fields
//! of its operand chain: each node may absorb one operand, which may itself
//! absorb another, terminating at a leaf. Folding is right-associative (the
//! deepest operand folds first) and allocation-free apart from the visited
//! guard.

use crate::scene::{Scene, ShapeId};
use crate::shape::Operation;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Finite-difference step for normal estimation
const NORMAL_STEP: f32 = 0.01;

/// CSG blend settings shared by every smooth combine in a scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CsgConfig {
    /// Blend radius `k` for the smooth operations; as `k` approaches zero
    /// the smooth variants converge to their hard counterparts.
    pub smooth_k: f32,
}

impl Default for CsgConfig {
    fn default() -> Self {
        Self { smooth_k: 0.5 }
    }
}

// ============================================================================
// CSG operators
// ============================================================================

/// Union: combine two fields (OR)
pub fn union(a: f32, b: f32) -> f32 {
    a.min(b)
}

/// Intersection: keep only where both overlap (AND)
pub fn intersection(a: f32, b: f32) -> f32 {
    a.max(b)
}

/// Subtraction: cut `b` out of `a`
pub fn subtract(a: f32, b: f32) -> f32 {
    a.max(-b)
}

/// Smooth union with polynomial blending
pub fn smooth_union(a: f32, b: f32, k: f32) -> f32 {
    let h = (0.5 + 0.5 * (b - a) / k).clamp(0.0, 1.0);
    lerp(b, a, h) - k * h * (1.0 - h)
}

/// Smooth intersection
pub fn smooth_intersection(a: f32, b: f32, k: f32) -> f32 {
    let h = (0.5 - 0.5 * (b - a) / k).clamp(0.0, 1.0);
    lerp(b, a, h) + k * h * (1.0 - h)
}

/// Smooth subtraction
pub fn smooth_subtract(a: f32, b: f32, k: f32) -> f32 {
    let h = (0.5 - 0.5 * (b + a) / k).clamp(0.0, 1.0);
    lerp(a, -b, h) + k * h * (1.0 - h)
}

impl Operation {
    /// Fold two distances with this operation.
    pub fn apply(self, a: f32, b: f32, k: f32) -> f32 {
        match self {
            Self::Union => union(a, b),
            Self::Intersection => intersection(a, b),
            Self::Subtract => subtract(a, b),
            Self::SmoothUnion => smooth_union(a, b, k),
            Self::SmoothIntersection => smooth_intersection(a, b, k),
            Self::SmoothSubtract => smooth_subtract(a, b, k),
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ============================================================================
// Scene evaluation
// ============================================================================

impl Scene {
    /// Combined signed distance of a shape (primitive folded with its operand
    /// chain) at a world point.
    ///
    /// Unknown handles evaluate to `f32::MAX` so a stale id degrades to
    /// "infinitely far away" instead of poisoning a march.
    pub fn distance(&self, id: ShapeId, world_point: Vec3) -> f32 {
        let Ok(node) = self.shape(id) else {
            return f32::MAX;
        };
        // Leaf nodes skip the visited guard entirely; the fold only
        // allocates when there is a chain to walk.
        if node.combine.is_none() {
            return node.distance_primitive(world_point);
        }
        let mut visited = Vec::with_capacity(4);
        self.distance_guarded(id, world_point, &mut visited)
    }

    fn distance_guarded(&self, id: ShapeId, p: Vec3, visited: &mut Vec<ShapeId>) -> f32 {
        let Ok(node) = self.shape(id) else {
            return f32::MAX;
        };
        if visited.contains(&id) {
            // The registry rejects cycles at combine(); reaching one here
            // means invariants were bypassed. Stop the fold instead of
            // looping forever.
            tracing::error!(?id, "cycle in operand chain, truncating fold");
            return f32::MAX;
        }
        visited.push(id);

        let d = node.distance_primitive(p);
        match node.combine {
            None => d,
            Some((op, operand)) => {
                let operand_d = self.distance_guarded(operand, p, visited);
                if operand_d == f32::MAX {
                    d
                } else {
                    op.apply(d, operand_d, self.csg.smooth_k)
                }
            }
        }
    }

    /// Surface normal of a shape's combined field at a world point.
    ///
    /// Forward-difference gradient with a fixed small step, normalized.
    /// Returns zero at a degenerate (zero-gradient) point.
    pub fn normal(&self, id: ShapeId, world_point: Vec3) -> Vec3 {
        let d = self.distance(id, world_point);
        let grad = Vec3::new(
            d - self.distance(id, world_point - Vec3::new(NORMAL_STEP, 0.0, 0.0)),
            d - self.distance(id, world_point - Vec3::new(0.0, NORMAL_STEP, 0.0)),
            d - self.distance(id, world_point - Vec3::new(0.0, 0.0, NORMAL_STEP)),
        );
        grad.normalize_or_zero()
    }
}
