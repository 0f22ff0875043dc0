//! Surface materials
//!
//! Materials are shared by reference: many shape nodes may point at the same
//! [`MaterialId`], and equality between uses is handle identity, not value
//! equality. The scene seeds material id 0 with a default material so every
//! new node has something to render with.

use glam::Vec4;

/// Stable handle to a material in the scene registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

impl MaterialId {
    /// The default material every scene starts with
    pub const DEFAULT: MaterialId = MaterialId(0);
}

/// PBR-style surface description consumed by the external renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color, RGBA
    pub albedo: Vec4,
    /// Microfacet roughness in `[0, 1]`
    pub roughness: f32,
    /// Metalness in `[0, 1]`
    pub metallic: f32,
    /// Whether the surface emits light
    pub emissive: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vec4::new(0.8, 0.8, 0.8, 1.0),
            roughness: 0.5,
            metallic: 0.0,
            emissive: false,
        }
    }
}

impl Material {
    pub fn new(albedo: Vec4, roughness: f32, metallic: f32) -> Self {
        Self {
            albedo,
            roughness,
            metallic,
            emissive: false,
        }
    }

    /// Same material, marked emissive
    pub fn emissive(mut self) -> Self {
        self.emissive = true;
        self
    }
}
