//! Full-loop test: a dynamic ball falls under gravity onto a static floor
//! sphere and ends up resting on it instead of passing through.

use glam::Vec3;
use mirage_engine::prelude::*;

#[test]
fn ball_drops_onto_static_floor_sphere() {
    let mut engine = Engine::new();

    // Floor: big static sphere whose top surface sits at y = 0
    let floor = engine.scene.add_sphere(Vec3::new(0.0, -2.0, 0.0), 2.0);
    // Ball: dropped from above, resting position is y = 1
    let ball = engine.scene.add_sphere(Vec3::new(0.0, 3.0, 0.0), 1.0);

    engine.physics.spawn(&engine.scene, floor, true).unwrap();
    let ball_body = engine.physics.spawn(&engine.scene, ball, false).unwrap();

    let mut min_y = f32::MAX;
    let mut max_y = f32::MIN;
    for _ in 0..600 {
        engine.tick(InputState::new(), 1.0 / 60.0);
        let y = engine.physics.body(ball_body).unwrap().position.y;
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }

    // It fell...
    assert!(min_y < 2.0, "ball never fell (min_y = {min_y})");
    // ...but never tunneled through the floor...
    assert!(min_y > 0.2, "ball passed through the floor (min_y = {min_y})");
    // ...and the bounces never gained energy
    assert!(max_y < 4.0, "ball gained energy (max_y = {max_y})");

    // The scene shape tracked the body the whole way
    let shape_y = engine.scene.shape(ball).unwrap().position.y;
    let body_y = engine.physics.body(ball_body).unwrap().position.y;
    assert!((shape_y - body_y).abs() < 1e-5);

    // Looking down at the stack from above picks the ball, not the floor
    engine.camera.position = Vec3::new(0.0, 8.0, 0.0);
    engine.camera.rotation_euler = Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0);
    assert_eq!(engine.pick(), Some(ball));
}
