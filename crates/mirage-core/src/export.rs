//! Flat renderer export
//!
//! The external renderer does its own per-pixel marching on the GPU; all it
//! needs from the scene is a flat, insertion-ordered array of shape records.
//! [`ShapeRecord`] is `#[repr(C)]` and `Pod` so the whole array can be
//! uploaded as one buffer write.
//!
//! Absorbed CSG operands are exported too (the renderer evaluates them
//! through their parent) but flagged non-primary.

use crate::scene::Scene;
use crate::shape::{Operation, ShapeKind};
use bytemuck::{Pod, Zeroable};

/// Kind discriminants on the wire (0 is reserved for "invalid")
pub const KIND_SPHERE: i32 = 1;
pub const KIND_BOX: i32 = 2;
pub const KIND_CAPSULE: i32 = 3;
pub const KIND_PLANE: i32 = 4;

/// Operation discriminants on the wire (0 = no operation, leaf node)
pub const OP_NONE: i32 = 0;

/// One shape node, flattened for the renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShapeRecord {
    /// World position
    pub position: [f32; 3],
    /// Kind discriminant ([`KIND_SPHERE`] ..)
    pub kind: i32,
    /// Euler rotation, radians
    pub rotation: [f32; 3],
    /// Operation discriminant (0 when the node is a leaf)
    pub operation: i32,
    /// First kind parameter block (radius / half extents / endpoint / normal)
    pub param1: [f32; 3],
    /// Operand record index, or -1 for a leaf
    pub operand_index: i32,
    /// Second kind parameter block
    pub param2: [f32; 3],
    /// 1 if the node is an independent hit target, 0 for absorbed operands
    pub primary: u32,
    /// Material albedo, RGBA
    pub albedo: [f32; 4],
    pub roughness: f32,
    pub metallic: f32,
    pub emissive: u32,
    pub _pad: u32,
}

fn pack_kind(kind: ShapeKind) -> (i32, [f32; 3], [f32; 3]) {
    match kind {
        ShapeKind::Sphere { radius } => (KIND_SPHERE, [radius, 0.0, 0.0], [0.0; 3]),
        ShapeKind::Box { half_extents } => (KIND_BOX, half_extents.to_array(), [0.0; 3]),
        ShapeKind::Capsule { point_b, radius } => {
            (KIND_CAPSULE, point_b.to_array(), [radius, 0.0, 0.0])
        }
        ShapeKind::Plane { normal, offset } => {
            (KIND_PLANE, normal.to_array(), [offset, 0.0, 0.0])
        }
    }
}

fn pack_operation(op: Operation) -> i32 {
    match op {
        Operation::Union => 1,
        Operation::Intersection => 2,
        Operation::Subtract => 3,
        Operation::SmoothUnion => 4,
        Operation::SmoothIntersection => 5,
        Operation::SmoothSubtract => 6,
    }
}

impl Scene {
    /// Flatten every shape node, in registry insertion order.
    pub fn export_records(&self) -> Vec<ShapeRecord> {
        self.shapes()
            .map(|node| {
                let (kind, param1, param2) = pack_kind(node.kind);
                let (operation, operand_index) = match node.combine {
                    None => (OP_NONE, -1),
                    Some((op, operand)) => (pack_operation(op), operand.0 as i32),
                };
                let material = self
                    .material(node.material)
                    .copied()
                    .unwrap_or_default();

                ShapeRecord {
                    position: node.position.to_array(),
                    kind,
                    rotation: node.rotation_euler.to_array(),
                    operation,
                    param1,
                    operand_index,
                    param2,
                    primary: u32::from(node.visible),
                    albedo: material.albedo.to_array(),
                    roughness: material.roughness,
                    metallic: material.metallic,
                    emissive: u32::from(material.emissive),
                    _pad: 0,
                }
            })
            .collect()
    }
}
