//! SDF contact search and resolution
//!
//! Contact between two SDF colliders is found by a directional march: probe
//! offsets step through A's interior toward B, always keeping the probe on
//! or inside A's surface, until the distance to B stops improving. The
//! accepted point lies on/inside both fields; penetration depth is how far
//! inside A it sits.
//!
//! This is a heuristic local search, not a global minimum: it can miss
//! contacts for highly non-convex combined shapes or deep interpenetration,
//! and the iteration cap guarantees termination rather than success. A
//! missed contact is simply no collision this sub-step; overlap usually
//! resolves on a later one.

use glam::Vec3;
use mirage_core::scene::{Scene, ShapeId};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Tuning for the contact search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Surface tolerance for probe validity and contact acceptance
    pub epsilon: f32,
    /// Hard cap on march iterations
    pub max_iterations: u32,
    /// Evaluate the probe star on the rayon pool instead of inline.
    /// Deterministic either way: ties break toward the lowest probe index.
    pub parallel_probes: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            max_iterations: 16,
            parallel_probes: false,
        }
    }
}

/// An accepted contact between two colliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// World-space contact point, on/inside both surfaces
    pub point: Vec3,
    /// Penetration depth: distance the point sits inside A
    pub depth: f32,
}

const FRAC_1_SQRT_3: f32 = 0.577_350_26;

/// The fixed probe star: six axis directions plus four diagonals.
const PROBE_DIRECTIONS: [Vec3; 10] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(FRAC_1_SQRT_3, FRAC_1_SQRT_3, FRAC_1_SQRT_3),
    Vec3::new(-FRAC_1_SQRT_3, FRAC_1_SQRT_3, -FRAC_1_SQRT_3),
    Vec3::new(FRAC_1_SQRT_3, -FRAC_1_SQRT_3, -FRAC_1_SQRT_3),
    Vec3::new(-FRAC_1_SQRT_3, -FRAC_1_SQRT_3, FRAC_1_SQRT_3),
];

/// Search for a contact between collider `a` and collider `b`, marching from
/// `a_pos` (A's body position) through A's interior toward B.
pub fn find_contact(
    scene: &Scene,
    a: ShapeId,
    b: ShapeId,
    a_pos: Vec3,
    config: &SolverConfig,
) -> Option<Contact> {
    let mut offset = Vec3::ZERO;
    let mut min_dist = scene.distance(b, a_pos);

    let mut iterations = 0;
    while min_dist > config.epsilon {
        if iterations >= config.max_iterations {
            tracing::debug!(?a, ?b, min_dist, "contact search hit iteration cap");
            return None;
        }
        iterations += 1;

        let Some((best_offset, best_dist)) =
            best_probe(scene, a, b, a_pos, offset, min_dist, config)
        else {
            // Every probe left A's interior: B is out of reach from here.
            break;
        };

        if best_dist >= min_dist {
            break; // local minimum
        }
        offset = best_offset;
        min_dist = best_dist;
    }

    let point = a_pos + offset;
    let depth_a = scene.distance(a, point);

    // A true contact lies on/inside both surfaces.
    if depth_a < config.epsilon && min_dist <= config.epsilon {
        Some(Contact {
            point,
            depth: depth_a.abs(),
        })
    } else {
        None
    }
}

/// Evaluate the probe star around `offset`, scaled by the current distance
/// to B. Returns the valid probe (still on/inside A) closest to B, ties
/// broken by lowest probe index.
fn best_probe(
    scene: &Scene,
    a: ShapeId,
    b: ShapeId,
    a_pos: Vec3,
    offset: Vec3,
    scale: f32,
    config: &SolverConfig,
) -> Option<(Vec3, f32)> {
    let probe = |dir: &Vec3| -> Option<(Vec3, f32)> {
        let candidate = offset + *dir * scale;
        let p = a_pos + candidate;
        if scene.distance(a, p) > config.epsilon {
            return None; // probe left A, not a usable path
        }
        Some((candidate, scene.distance(b, p)))
    };

    if config.parallel_probes {
        // Immutable scene view per frame; merge by (distance, index) so the
        // result matches the sequential order exactly.
        PROBE_DIRECTIONS
            .par_iter()
            .enumerate()
            .filter_map(|(i, dir)| probe(dir).map(|(c, d)| (i, c, d)))
            .min_by(|(i1, _, d1), (i2, _, d2)| {
                d1.total_cmp(d2).then_with(|| i1.cmp(i2))
            })
            .map(|(_, c, d)| (c, d))
    } else {
        let mut best: Option<(Vec3, f32)> = None;
        for dir in &PROBE_DIRECTIONS {
            if let Some((candidate, d)) = probe(dir) {
                // Strict < keeps the lowest index on ties
                if best.map_or(true, |(_, bd)| d < bd) {
                    best = Some((candidate, d));
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mirage_core::shape::Operation;

    fn two_spheres(separation: f32) -> (Scene, ShapeId, ShapeId) {
        let mut scene = Scene::new();
        let a = scene.add_sphere(Vec3::ZERO, 1.0);
        let b = scene.add_sphere(Vec3::new(separation, 0.0, 0.0), 1.0);
        (scene, a, b)
    }

    #[test]
    fn overlapping_spheres_make_contact() {
        let (scene, a, b) = two_spheres(1.5);
        let contact = find_contact(&scene, a, b, Vec3::ZERO, &SolverConfig::default())
            .expect("overlap depth 0.5 must be found");

        // Contact lands on the overlap segment, near its midpoint
        assert!((contact.point - Vec3::new(0.75, 0.0, 0.0)).length() < 0.3);
        assert_relative_eq!(contact.point.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(contact.depth, 0.5, epsilon = 0.05);
    }

    #[test]
    fn separated_spheres_do_not_collide() {
        let (scene, a, b) = two_spheres(3.0);
        assert_eq!(
            find_contact(&scene, a, b, Vec3::ZERO, &SolverConfig::default()),
            None
        );
    }

    #[test]
    fn touching_is_within_epsilon() {
        // Exactly touching surfaces sit inside the acceptance tolerance
        let (scene, a, b) = two_spheres(2.0);
        let contact = find_contact(&scene, a, b, Vec3::ZERO, &SolverConfig::default());
        assert!(contact.is_some());
        assert!(contact.unwrap().depth < 0.05);
    }

    #[test]
    fn sphere_resting_in_plane_makes_contact() {
        let mut scene = Scene::new();
        let ball = scene.add_sphere(Vec3::new(0.0, 0.5, 0.0), 1.0);
        let floor = scene.add_plane(Vec3::Y, 0.0);

        let contact = find_contact(
            &scene,
            ball,
            floor,
            Vec3::new(0.0, 0.5, 0.0),
            &SolverConfig::default(),
        )
        .expect("half-sunk sphere must contact the plane");
        assert!(contact.point.y <= 0.01 + 1e-3);
        assert!(contact.depth > 0.0);
    }

    #[test]
    fn combined_collider_uses_folded_field() {
        // A's collider is a union of two spheres; only the absorbed lobe
        // reaches B.
        let mut scene = Scene::new();
        let a = scene.add_sphere(Vec3::ZERO, 1.0);
        let lobe = scene.add_sphere(Vec3::new(3.0, 0.0, 0.0), 1.0);
        scene.combine(a, lobe, Operation::Union).unwrap();
        let b = scene.add_sphere(Vec3::new(4.5, 0.0, 0.0), 1.0);

        let contact = find_contact(&scene, a, b, Vec3::ZERO, &SolverConfig::default());
        assert!(contact.is_some());
    }

    #[test]
    fn parallel_probes_match_sequential() {
        let (scene, a, b) = two_spheres(1.5);
        let sequential = find_contact(&scene, a, b, Vec3::ZERO, &SolverConfig::default());
        let parallel = find_contact(
            &scene,
            a,
            b,
            Vec3::ZERO,
            &SolverConfig {
                parallel_probes: true,
                ..SolverConfig::default()
            },
        );
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn iteration_cap_terminates_search() {
        let (scene, a, b) = two_spheres(1.5);
        // Zero iterations allowed: the search must give up cleanly
        let contact = find_contact(
            &scene,
            a,
            b,
            Vec3::ZERO,
            &SolverConfig {
                max_iterations: 0,
                ..SolverConfig::default()
            },
        );
        assert_eq!(contact, None);
    }
}
