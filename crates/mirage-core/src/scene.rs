//! Scene registry
//!
//! The [`Scene`] owns every shape node and material, mints their handles and
//! is the only place either can be mutated. Stores are append-only and
//! insertion-ordered: handles equal insertion order and are never reused,
//! so a `ShapeId` stays valid for the life of the scene. Bulk teardown
//! happens by dropping the scene; there is no per-node deletion in the hot
//! loop.

use crate::error::{Error, Result};
use crate::eval::CsgConfig;
use crate::material::{Material, MaterialId};
use crate::shape::{Operation, ShapeKind, ShapeNode};
use glam::Vec3;

/// Stable handle to a shape node in the scene registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u32);

/// Owned registry of shape nodes and materials.
///
/// Explicitly passed by reference instead of living in process-wide statics,
/// so multiple scenes can coexist (and be tested) independently.
#[derive(Debug, Clone)]
pub struct Scene {
    shapes: Vec<ShapeNode>,
    materials: Vec<Material>,
    /// CSG blend settings shared by every smooth combine in this scene
    pub csg: CsgConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene holding only the default material.
    pub fn new() -> Self {
        Self::with_config(CsgConfig::default())
    }

    /// Create an empty scene with explicit CSG blend settings.
    pub fn with_config(csg: CsgConfig) -> Self {
        Self {
            shapes: Vec::new(),
            materials: vec![Material::default()],
            csg,
        }
    }

    // === Creation ===

    /// Add a shape node; returns its stable handle.
    pub fn add_shape(&mut self, kind: ShapeKind, position: Vec3, rotation: Vec3) -> ShapeId {
        let id = ShapeId(self.shapes.len() as u32);
        self.shapes.push(ShapeNode::new(id, kind, position, rotation));
        id
    }

    /// Add a sphere at `position`.
    pub fn add_sphere(&mut self, position: Vec3, radius: f32) -> ShapeId {
        self.add_shape(ShapeKind::Sphere { radius }, position, Vec3::ZERO)
    }

    /// Add a box at `position` with the given Euler rotation.
    pub fn add_box(&mut self, position: Vec3, rotation: Vec3, half_extents: Vec3) -> ShapeId {
        self.add_shape(ShapeKind::Box { half_extents }, position, rotation)
    }

    /// Add a capsule between two world points.
    pub fn add_capsule(&mut self, point_a: Vec3, point_b: Vec3, radius: f32) -> ShapeId {
        self.add_shape(
            ShapeKind::Capsule {
                point_b: point_b - point_a,
                radius,
            },
            point_a,
            Vec3::ZERO,
        )
    }

    /// Add an infinite plane. `normal` need not be normalized.
    pub fn add_plane(&mut self, normal: Vec3, offset: f32) -> ShapeId {
        self.add_shape(ShapeKind::Plane { normal, offset }, Vec3::ZERO, Vec3::ZERO)
    }

    /// Register a material; returns its stable handle.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(material);
        id
    }

    // === Access ===

    /// Look up a shape node.
    pub fn shape(&self, id: ShapeId) -> Result<&ShapeNode> {
        self.shapes.get(id.0 as usize).ok_or(Error::UnknownShape(id))
    }

    fn shape_mut(&mut self, id: ShapeId) -> Result<&mut ShapeNode> {
        self.shapes
            .get_mut(id.0 as usize)
            .ok_or(Error::UnknownShape(id))
    }

    /// Look up a material.
    pub fn material(&self, id: MaterialId) -> Result<&Material> {
        self.materials
            .get(id.0 as usize)
            .ok_or(Error::UnknownMaterial(id))
    }

    /// All shape nodes in insertion order.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeNode> {
        self.shapes.iter()
    }

    /// Number of shape nodes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    // === Mutation ===

    pub fn set_position(&mut self, id: ShapeId, position: Vec3) -> Result<()> {
        self.shape_mut(id)?.position = position;
        Ok(())
    }

    pub fn set_rotation(&mut self, id: ShapeId, rotation: Vec3) -> Result<()> {
        self.shape_mut(id)?.rotation_euler = rotation;
        Ok(())
    }

    /// Set the rotation pivot, relative to the node position.
    pub fn set_origin(&mut self, id: ShapeId, origin: Vec3) -> Result<()> {
        self.shape_mut(id)?.origin_offset = origin;
        Ok(())
    }

    pub fn set_material(&mut self, id: ShapeId, material: MaterialId) -> Result<()> {
        self.material(material)?;
        self.shape_mut(id)?.material = material;
        Ok(())
    }

    pub fn set_visible(&mut self, id: ShapeId, visible: bool) -> Result<()> {
        self.shape_mut(id)?.visible = visible;
        Ok(())
    }

    /// Link `operand` into `parent` with a CSG operation.
    ///
    /// The operand is absorbed: its `visible` flag is forced false and it is
    /// no longer an independent ray-hit or collision target, only part of the
    /// parent's combined field. Self-reference and any edge that would close
    /// a cycle through the operand chain are rejected with the registry left
    /// unchanged.
    pub fn combine(&mut self, parent: ShapeId, operand: ShapeId, op: Operation) -> Result<()> {
        if parent == operand {
            return Err(Error::SelfCombine(parent));
        }
        self.shape(parent)?;
        self.shape(operand)?;

        // Walking the operand chain from `operand` must never reach `parent`,
        // or the fold would loop.
        let mut cursor = operand;
        loop {
            let Some((_, next)) = self.shape(cursor)?.combine else {
                break;
            };
            if next == parent {
                return Err(Error::CombineCycle { parent, operand });
            }
            cursor = next;
        }

        self.shape_mut(parent)?.combine = Some((op, operand));
        self.shape_mut(operand)?.visible = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn ids_follow_insertion_order() {
        let mut scene = Scene::new();
        let a = scene.add_sphere(Vec3::ZERO, 1.0);
        let b = scene.add_plane(Vec3::Y, 0.0);
        assert_eq!(a, ShapeId(0));
        assert_eq!(b, ShapeId(1));
        assert_eq!(scene.shape_count(), 2);
    }

    #[test]
    fn default_material_occupies_slot_zero() {
        let mut scene = Scene::new();
        let id = scene.add_material(Material::new(Vec4::ONE, 0.1, 1.0));
        assert_eq!(id, MaterialId(1));
        assert!(scene.material(MaterialId::DEFAULT).is_ok());
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut scene = Scene::new();
        let id = scene.add_sphere(Vec3::ZERO, 1.0);
        scene.set_position(id, Vec3::new(0.0, 5.0, 0.0)).unwrap();
        scene.set_visible(id, false).unwrap();
        let node = scene.shape(id).unwrap();
        assert_eq!(node.position, Vec3::new(0.0, 5.0, 0.0));
        assert!(!node.visible);
    }

    #[test]
    fn unknown_handles_are_rejected() {
        let mut scene = Scene::new();
        let ghost = ShapeId(42);
        assert_eq!(
            scene.set_position(ghost, Vec3::ZERO),
            Err(Error::UnknownShape(ghost))
        );
        let id = scene.add_sphere(Vec3::ZERO, 1.0);
        assert_eq!(
            scene.set_material(id, MaterialId(9)),
            Err(Error::UnknownMaterial(MaterialId(9)))
        );
    }

    #[test]
    fn combine_absorbs_operand() {
        let mut scene = Scene::new();
        let a = scene.add_sphere(Vec3::ZERO, 1.0);
        let b = scene.add_sphere(Vec3::X, 1.0);
        scene.combine(a, b, Operation::Union).unwrap();
        assert!(!scene.shape(b).unwrap().visible);
        assert_eq!(scene.shape(a).unwrap().combine, Some((Operation::Union, b)));
    }

    #[test]
    fn combine_rejects_self_reference() {
        let mut scene = Scene::new();
        let a = scene.add_sphere(Vec3::ZERO, 1.0);
        assert_eq!(
            scene.combine(a, a, Operation::Union),
            Err(Error::SelfCombine(a))
        );
        assert!(scene.shape(a).unwrap().combine.is_none());
    }

    #[test]
    fn combine_rejects_direct_cycle() {
        let mut scene = Scene::new();
        let a = scene.add_sphere(Vec3::ZERO, 1.0);
        let b = scene.add_sphere(Vec3::X, 1.0);
        scene.combine(a, b, Operation::Union).unwrap();
        assert_eq!(
            scene.combine(b, a, Operation::Union),
            Err(Error::CombineCycle {
                parent: b,
                operand: a
            })
        );
        // Registry unchanged by the rejection
        assert!(scene.shape(b).unwrap().combine.is_none());
    }

    #[test]
    fn combine_rejects_cycle_through_chain() {
        let mut scene = Scene::new();
        let a = scene.add_sphere(Vec3::ZERO, 1.0);
        let b = scene.add_sphere(Vec3::X, 1.0);
        let c = scene.add_sphere(Vec3::Y, 1.0);
        scene.combine(a, b, Operation::Union).unwrap();
        scene.combine(b, c, Operation::Subtract).unwrap();
        // c -> (chain would run c..b..a) -> a closes the loop
        assert!(matches!(
            scene.combine(c, a, Operation::Union),
            Err(Error::CombineCycle { .. })
        ));
    }
}
