//! # Mirage Core
//!
//! Scene model for an implicit-surface (SDF) engine: placed primitives,
//! CSG composition between them, combined distance/normal evaluation and
//! sphere-traced ray queries.
//!
//! Shapes live in a [`Scene`] registry and are addressed through stable
//! [`ShapeId`] handles. A shape may absorb another shape through a CSG
//! [`Operation`]; absorbed shapes stop being independent ray-hit targets and
//! are only evaluated through their parent's combined field.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mirage_core::prelude::*;
//!
//! let mut scene = Scene::new();
//! let ball = scene.add_sphere(Vec3::ZERO, 1.0);
//! let bar = scene.add_box(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Vec3::new(2.0, 0.2, 0.2));
//! scene.combine(ball, bar, Operation::SmoothUnion)?;
//!
//! let hit = scene.raymarch(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, 100.0, 128);
//! ```
//!
//! ## Units and Conventions
//!
//! - **Distances**: arbitrary units. Negative inside, zero on the surface,
//!   positive outside.
//! - **Angles**: radians, Euler angles applied X then Y then Z.
//! - **Precision**: `f32` throughout, for GPU compatibility.
//! - **Coordinate system**: right-handed, Y-up.

pub mod eval;
pub mod export;
pub mod material;
pub mod rotation;
pub mod scene;
pub mod shape;
pub mod trace;

mod error;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::eval::CsgConfig;
    pub use crate::export::ShapeRecord;
    pub use crate::material::{Material, MaterialId};
    pub use crate::scene::{Scene, ShapeId};
    pub use crate::shape::{Operation, ShapeKind, ShapeNode};
    pub use crate::trace::{RayHit, TraceConfig};

    // Math (re-export glam)
    pub use glam::{Quat, Vec2, Vec3, Vec4};

    // Error handling
    pub use crate::{Error, Result};
}
