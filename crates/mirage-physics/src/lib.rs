//! # Mirage Physics
//!
//! Verlet-integrated point masses whose colliders are SDF shapes from a
//! [`mirage_core::Scene`]. Each frame tick runs a fixed number of sub-steps;
//! every sub-step accumulates gravity, resolves penetration between body
//! pairs with a directional SDF march, then integrates and writes body
//! positions back into the scene.
//!
//! ## Example
//!
//! ```rust,ignore
//! use mirage_core::prelude::*;
//! use mirage_physics::prelude::*;
//!
//! let mut scene = Scene::new();
//! let floor = scene.add_sphere(Vec3::new(0.0, -3.0, 0.0), 2.0);
//! let ball = scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 1.0);
//!
//! let mut world = PhysicsWorld::new();
//! world.spawn(&scene, floor, true)?;
//! world.spawn(&scene, ball, false)?;
//!
//! world.step(&mut scene, 1.0 / 60.0);
//! ```

pub mod body;
pub mod solver;
pub mod world;

mod error;

pub use error::{PhysicsError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::body::VerletBody;
    pub use crate::solver::{Contact, SolverConfig};
    pub use crate::world::{BodyId, PhysicsWorld};
    pub use crate::{PhysicsError, Result};
}
