//! Fly camera
//!
//! First-person free camera driven by the held-command bitmask. Walking
//! moves along the yawed look direction projected onto the ground plane, so
//! looking up while walking forward does not lift the camera; vertical
//! movement is always along world Y.

use crate::input::InputState;
use glam::Vec3;
use mirage_core::rotation::rotate_euler;
use serde::{Deserialize, Serialize};

/// Movement tuning, separable from the live camera state so hosts can load
/// it from settings files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraTuning {
    /// Walk speed, units per second
    pub walk_speed: f32,
    /// Look speed, radians per second
    pub look_speed: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            walk_speed: 3.0,
            look_speed: 0.7,
        }
    }
}

/// Free camera state plus movement tuning.
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    /// World position
    pub position: Vec3,
    /// Euler rotation, radians; x pitches, y yaws
    pub rotation_euler: Vec3,
    /// Movement speeds
    pub tuning: CameraTuning,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 0.0),
            rotation_euler: Vec3::ZERO,
            tuning: CameraTuning::default(),
        }
    }
}

impl FlyCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuning(tuning: CameraTuning) -> Self {
        Self {
            tuning,
            ..Self::default()
        }
    }

    /// Current look direction: +Z rotated by the camera rotation.
    pub fn look_dir(&self) -> Vec3 {
        rotate_euler(Vec3::Z, self.rotation_euler)
    }

    /// Origin and direction for a picking ray through the view center.
    pub fn pick_ray(&self) -> (Vec3, Vec3) {
        (self.position, self.look_dir().normalize_or_zero())
    }

    /// Apply one frame of held commands.
    pub fn apply_input(&mut self, input: InputState, dt: f32) {
        if input.is_idle() {
            return;
        }

        let look = self.look_dir();
        // Walk on the ground plane regardless of pitch
        let flat = Vec3::new(look.x, 0.0, look.z);
        let strafe = Vec3::new(flat.z, 0.0, -flat.x);
        let walk = dt * self.tuning.walk_speed;

        if input.is_held(InputState::FORWARD) {
            self.position += flat * walk;
        }
        if input.is_held(InputState::BACK) {
            self.position -= flat * walk;
        }
        if input.is_held(InputState::LEFT) {
            self.position -= strafe * walk;
        }
        if input.is_held(InputState::RIGHT) {
            self.position += strafe * walk;
        }
        if input.is_held(InputState::UP) {
            self.position += Vec3::Y * walk;
        }
        if input.is_held(InputState::DOWN) {
            self.position -= Vec3::Y * walk;
        }

        let turn = dt * self.tuning.look_speed;
        if input.is_held(InputState::LOOK_RIGHT) {
            self.rotation_euler.y += turn;
        }
        if input.is_held(InputState::LOOK_LEFT) {
            self.rotation_euler.y -= turn;
        }
        if input.is_held(InputState::LOOK_UP) {
            self.rotation_euler.x -= turn;
        }
        if input.is_held(InputState::LOOK_DOWN) {
            self.rotation_euler.x += turn;
        }
    }
}
