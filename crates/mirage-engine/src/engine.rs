//! Engine facade
//!
//! Ties the scene, physics world and camera into one per-frame surface for
//! the host: `tick` consumes the input mask and delta time, `pick` answers a
//! pointer-click with the shape under the view center, and
//! `render_records` hands the renderer its flat shape array.

use crate::camera::FlyCamera;
use crate::input::InputState;
use mirage_core::export::ShapeRecord;
use mirage_core::scene::{Scene, ShapeId};
use mirage_core::trace::TraceConfig;
use mirage_physics::world::PhysicsWorld;

/// Default travel budget for picking rays
pub const PICK_MAX_DISTANCE: f32 = 100.0;
/// Default step budget for picking rays
pub const PICK_MAX_STEPS: u32 = 128;

/// The complete simulated state of one scene.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub scene: Scene,
    pub physics: PhysicsWorld,
    pub camera: FlyCamera,
    pub trace: TraceConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame: apply held input to the camera, then run the
    /// physics tick. Everything is synchronous; when this returns, the scene
    /// is stable for the renderer to read.
    pub fn tick(&mut self, input: InputState, dt: f32) {
        self.camera.apply_input(input, dt);
        self.physics.step(&mut self.scene, dt);
    }

    /// Shape under the view center, if any. Run synchronously on a
    /// pointer-click.
    pub fn pick(&self) -> Option<ShapeId> {
        self.pick_with(PICK_MAX_DISTANCE, PICK_MAX_STEPS)
    }

    /// Picking with explicit travel and step budgets.
    pub fn pick_with(&self, max_distance: f32, max_steps: u32) -> Option<ShapeId> {
        let (origin, direction) = self.camera.pick_ray();
        self.scene
            .raymarch_with(origin, direction, max_distance, max_steps, self.trace.epsilon)
            .map(|hit| hit.shape)
    }

    /// Flat shape array for the renderer, in insertion order.
    pub fn render_records(&self) -> Vec<ShapeRecord> {
        self.scene.export_records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn pick_finds_shape_ahead_of_camera() {
        let mut engine = Engine::new();
        engine.camera.position = Vec3::new(0.0, 0.0, -5.0);
        let ball = engine.scene.add_sphere(Vec3::ZERO, 1.0);

        assert_eq!(engine.pick(), Some(ball));
    }

    #[test]
    fn pick_misses_behind_camera() {
        let mut engine = Engine::new();
        engine.camera.position = Vec3::new(0.0, 0.0, 5.0);
        engine.scene.add_sphere(Vec3::ZERO, 1.0);

        // Looking +Z with the shape at -Z
        assert_eq!(engine.pick(), None);
    }

    #[test]
    fn tick_moves_camera_and_bodies() {
        let mut engine = Engine::new();
        let shape = engine.scene.add_sphere(Vec3::new(0.0, 10.0, 0.0), 1.0);
        engine.physics.spawn(&engine.scene, shape, false).unwrap();

        let mut input = InputState::new();
        input.press(InputState::FORWARD);
        engine.tick(input, 0.1);

        assert!(engine.camera.position.z > 0.0);
        assert!(engine.scene.shape(shape).unwrap().position.y < 10.0);
    }

    #[test]
    fn render_records_cover_every_shape() {
        let mut engine = Engine::new();
        engine.scene.add_sphere(Vec3::ZERO, 1.0);
        engine.scene.add_plane(Vec3::Y, 0.0);
        assert_eq!(engine.render_records().len(), 2);
    }
}
