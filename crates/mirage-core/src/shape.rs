//! Shape nodes and primitive distance functions
//!
//! A [`ShapeNode`] is one placed, rotated primitive plus an optional CSG link
//! to another node. All primitive distances are evaluated in the shape's
//! local frame: the world point has the node position subtracted and the
//! node rotation inverted (about the origin offset) before measuring.

use crate::material::MaterialId;
use crate::rotation::inverse_rotate_euler;
use crate::scene::ShapeId;
use glam::Vec3;

/// Minimum squared capsule axis length before the segment degenerates to a
/// point and the capsule is evaluated as a sphere.
const DEGENERATE_AXIS_SQ: f32 = 1e-8;

/// The geometric primitive carried by a shape node.
///
/// Exactly one kind per node, immutable after creation except through the
/// scene's explicit setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Sphere centered on the node position
    Sphere { radius: f32 },
    /// Box centered on the node position
    Box { half_extents: Vec3 },
    /// Capsule from the node position to `point_b` (local frame)
    Capsule { point_b: Vec3, radius: f32 },
    /// Infinite plane; `normal` is normalized on evaluation
    Plane { normal: Vec3, offset: f32 },
}

impl ShapeKind {
    /// Signed distance from a point in the shape's local frame.
    ///
    /// Negative inside, zero on the boundary, positive outside.
    pub fn distance_local(&self, p: Vec3) -> f32 {
        match *self {
            Self::Sphere { radius } => p.length() - radius,

            Self::Box { half_extents } => {
                let q = p.abs() - half_extents;
                q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
            }

            Self::Capsule { point_b, radius } => {
                let ba = point_b;
                let ba_len_sq = ba.length_squared();
                if ba_len_sq < DEGENERATE_AXIS_SQ {
                    // Zero-length axis: fall back to a sphere rather than
                    // dividing by ~0 and emitting NaN.
                    return p.length() - radius;
                }
                let h = (p.dot(ba) / ba_len_sq).clamp(0.0, 1.0);
                (p - ba * h).length() - radius
            }

            Self::Plane { normal, offset } => {
                // Zero-length normal degrades to ground-plane orientation.
                let n = normal.try_normalize().unwrap_or(Vec3::Y);
                p.dot(n) + offset
            }
        }
    }
}

/// CSG operation linking a shape to its absorbed operand.
///
/// Smooth variants blend with the scene-wide radius from
/// [`CsgConfig`](crate::eval::CsgConfig). Leaf nodes carry no operation at
/// all (`ShapeNode::combine` is `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Union,
    Intersection,
    Subtract,
    SmoothUnion,
    SmoothIntersection,
    SmoothSubtract,
}

/// One placed primitive in the scene.
#[derive(Debug, Clone)]
pub struct ShapeNode {
    /// Stable handle, equal to insertion order
    pub id: ShapeId,
    /// World position
    pub position: Vec3,
    /// Euler rotation in radians, applied X then Y then Z
    pub rotation_euler: Vec3,
    /// Pivot for rotation, relative to position
    pub origin_offset: Vec3,
    /// The primitive
    pub kind: ShapeKind,
    /// Material handle (identity semantics; many nodes may share one)
    pub material: MaterialId,
    /// Whether this node is an independent ray-hit target. Forced false
    /// when the node is absorbed as a CSG operand.
    pub visible: bool,
    /// Optional CSG link to an earlier node
    pub combine: Option<(Operation, ShapeId)>,
}

impl ShapeNode {
    pub(crate) fn new(id: ShapeId, kind: ShapeKind, position: Vec3, rotation_euler: Vec3) -> Self {
        Self {
            id,
            position,
            rotation_euler,
            origin_offset: Vec3::ZERO,
            kind,
            material: MaterialId::DEFAULT,
            visible: true,
            combine: None,
        }
    }

    /// Signed distance of this node's own primitive at a world point,
    /// ignoring any CSG link.
    pub fn distance_primitive(&self, world_point: Vec3) -> f32 {
        let p = world_point - self.position;
        let p = if self.rotation_euler == Vec3::ZERO {
            p
        } else {
            inverse_rotate_euler(p - self.origin_offset, self.rotation_euler) + self.origin_offset
        };
        self.kind.distance_local(p)
    }
}
