//! Euler rotation helpers
//!
//! Shapes and the fly camera carry Euler angles (radians) applied in X, Y, Z
//! order. SDF evaluation needs the inverse: rotate the sample point into the
//! shape's local frame before measuring distance.

use glam::{Quat, Vec3};

/// Build the rotation quaternion for Euler angles applied X, then Y, then Z.
pub fn euler_quat(rot: Vec3) -> Quat {
    Quat::from_rotation_z(rot.z) * Quat::from_rotation_y(rot.y) * Quat::from_rotation_x(rot.x)
}

/// Rotate a point by Euler angles (X, then Y, then Z).
pub fn rotate_euler(p: Vec3, rot: Vec3) -> Vec3 {
    euler_quat(rot) * p
}

/// Apply the inverse of [`rotate_euler`]: world direction into local frame.
pub fn inverse_rotate_euler(p: Vec3, rot: Vec3) -> Vec3 {
    euler_quat(rot).inverse() * p
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn rotation_order_is_x_then_y_then_z() {
        // Quarter turn about X takes +Y to +Z, then a quarter turn about Y
        // takes that +Z to +X.
        let p = rotate_euler(Vec3::Y, Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0));
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn inverse_undoes_rotation() {
        let rot = Vec3::new(0.3, -1.2, 2.5);
        let p = Vec3::new(1.0, -2.0, 0.5);
        let back = inverse_rotate_euler(rotate_euler(p, rot), rot);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-5);
    }

    #[test]
    fn zero_rotation_is_identity() {
        let p = Vec3::new(4.0, 5.0, 6.0);
        assert_relative_eq!(rotate_euler(p, Vec3::ZERO).x, p.x);
        assert_relative_eq!(rotate_euler(p, Vec3::ZERO).y, p.y);
        assert_relative_eq!(rotate_euler(p, Vec3::ZERO).z, p.z);
    }
}
