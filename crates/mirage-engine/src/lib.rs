//! # Mirage Engine
//!
//! The thin layer between a windowing/render host and the core: it turns a
//! held-key bitmask into camera motion, drives the physics tick, and answers
//! pointer-click picking queries with a sphere trace along the camera ray.
//!
//! The host owns the window, event loop and GPU pass; this crate only needs
//! the per-frame input mask and delta time it supplies, and hands back the
//! flat shape records the renderer consumes.

pub mod camera;
pub mod engine;
pub mod input;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::camera::{CameraTuning, FlyCamera};
    pub use crate::engine::Engine;
    pub use crate::input::InputState;
}
