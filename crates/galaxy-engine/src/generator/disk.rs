//! Spiral-arm star disk and the static backdrop.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::core::bodies::{BodyDetails, CelestialBody};
use super::GalaxyParams;

/// Upper planar-distance bound of each star band (exclusive).
pub const SUPERGIANT_LIMIT: f32 = 15.0;
pub const GIANT_LIMIT: f32 = 30.0;
pub const MAIN_SEQUENCE_LIMIT: f32 = 50.0;
pub const WHITE_DWARF_LIMIT: f32 = 70.0;

/// Normalized distance below which stars are drawn blue-white.
const INNER_DISK_FRACTION: f32 = 0.6;

/// Rendered point size of a disk star.
pub const STAR_POINT_SIZE: f32 = 0.8;

/// Uniform sample in [lo, hi). Tolerates an empty range.
#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

/// Star band for a planar distance from the galactic center.
pub fn classify_star(distance: f32) -> &'static str {
    if distance < SUPERGIANT_LIMIT {
        "Supergiant"
    } else if distance < GIANT_LIMIT {
        "Giant"
    } else if distance < MAIN_SEQUENCE_LIMIT {
        "Main Sequence"
    } else if distance < WHITE_DWARF_LIMIT {
        "White Dwarf"
    } else {
        "Red Dwarf"
    }
}

/// Jittered color for a star at `distance`:
/// warm core, blue-white inner disk, red-orange rim.
pub fn star_color<R: Rng + ?Sized>(distance: f32, disk_radius: f32, rng: &mut R) -> [f32; 3] {
    if distance < SUPERGIANT_LIMIT {
        [1.0, uniform(rng, 0.9, 1.0), uniform(rng, 0.6, 1.0)]
    } else if distance / disk_radius < INNER_DISK_FRACTION {
        [uniform(rng, 0.7, 1.0), uniform(rng, 0.7, 1.0), 1.0]
    } else {
        [1.0, uniform(rng, 0.4, 0.8), uniform(rng, 0.2, 0.5)]
    }
}

/// Place one star along a randomly chosen arm.
fn spiral_position<R: Rng + ?Sized>(params: &GalaxyParams, rng: &mut R) -> Vec3 {
    let arms = params.arm_count.max(1);
    let arm = rng.gen_range(0..arms);
    let arm_angle = (arm as f32 / arms as f32) * TAU;

    let radius = uniform(rng, params.radius_min, params.radius_max);
    let spiral_angle = arm_angle + (radius / params.disk_radius) * params.spiral_tightness;

    let scatter_x = uniform(rng, -params.scatter, params.scatter);
    let scatter_z = uniform(rng, -params.scatter, params.scatter);
    let half_thickness = params.thickness / 2.0;

    Vec3::new(
        spiral_angle.cos() * radius + scatter_x,
        uniform(rng, -half_thickness, half_thickness),
        spiral_angle.sin() * radius + scatter_z,
    )
}

/// Generate `params.star_count` disk stars.
pub fn generate_disk<R: Rng + ?Sized>(params: &GalaxyParams, rng: &mut R) -> Vec<CelestialBody> {
    let mut stars = Vec::with_capacity(params.star_count);
    for i in 0..params.star_count {
        let position = spiral_position(params, rng);
        let distance = (position.x * position.x + position.z * position.z).sqrt();
        let color = star_color(distance, params.disk_radius, rng);

        let details = BodyDetails::Star {
            mass_solar: uniform(rng, 0.5, 2.5),
            temperature_k: uniform(rng, 3000.0, 23000.0).floor(),
            age_gyr: uniform(rng, 0.1, 13.1),
        };

        stars.push(
            CelestialBody::new(format!("GX-{i:05}"), classify_star(distance), details)
                .with_position(position)
                .with_color(color)
                .with_radius(STAR_POINT_SIZE),
        );
    }
    stars
}

/// Uniform points filling a cube centered on the origin.
pub fn generate_background<R: Rng + ?Sized>(params: &GalaxyParams, rng: &mut R) -> Vec<Vec3> {
    let half = params.background_extent / 2.0;
    (0..params.background_count)
        .map(|_| {
            Vec3::new(
                uniform(rng, -half, half),
                uniform(rng, -half, half),
                uniform(rng, -half, half),
            )
        })
        .collect()
}
