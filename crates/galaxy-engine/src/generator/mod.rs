//! Procedural galaxy generation.
//!
//! Pure functions over an injected RNG: the same seed always produces the
//! same galaxy. Counts, arm geometry and the named catalog are fixed; per-body
//! jitter and metadata come from the RNG.

pub mod catalog;
pub mod disk;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::bodies::CelestialBody;

/// Seedable generator used for every session.
pub type GalaxyRng = ChaCha8Rng;

/// Build the session RNG from a seed.
pub fn seeded_rng(seed: u64) -> GalaxyRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Structural parameters of the generated galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyParams {
    /// Stars in the spiral disk.
    pub star_count: usize,
    /// Points in the static backdrop.
    pub background_count: usize,
    pub arm_count: u32,
    /// Radians of extra winding at `disk_radius`.
    pub spiral_tightness: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Radius used to normalize spiral winding and color bands.
    pub disk_radius: f32,
    /// Half-width of the planar scatter applied to each axis.
    pub scatter: f32,
    /// Full thickness of the disk along Y.
    pub thickness: f32,
    /// Edge length of the backdrop cube.
    pub background_extent: f32,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            star_count: 50_000,
            background_count: 10_000,
            arm_count: 4,
            spiral_tightness: 3.0,
            radius_min: 10.0,
            radius_max: 90.0,
            disk_radius: 80.0,
            scatter: 5.0,
            thickness: 5.0,
            background_extent: 2000.0,
        }
    }
}

/// Output of one generation pass.
#[derive(Debug, Clone)]
pub struct GeneratedGalaxy {
    pub stars: Vec<CelestialBody>,
    pub background: Vec<Vec3>,
    pub planets: Vec<CelestialBody>,
    pub nebulae: Vec<CelestialBody>,
}

/// Generate all four datasets, drawing from `rng` in a fixed order.
pub fn generate<R: Rng + ?Sized>(params: &GalaxyParams, rng: &mut R) -> GeneratedGalaxy {
    let stars = disk::generate_disk(params, rng);
    let background = disk::generate_background(params, rng);
    let planets = catalog::generate_planets(rng);
    let nebulae = catalog::generate_nebulae(rng);
    log::info!(
        "generated galaxy: {} stars, {} backdrop points, {} planets, {} nebulae",
        stars.len(),
        background.len(),
        planets.len(),
        nebulae.len()
    );
    GeneratedGalaxy {
        stars,
        background,
        planets,
        nebulae,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> GalaxyParams {
        GalaxyParams {
            star_count: 500,
            background_count: 100,
            ..GalaxyParams::default()
        }
    }

    #[test]
    fn counts_follow_params() {
        let g = generate(&small(), &mut seeded_rng(1));
        assert_eq!(g.stars.len(), 500);
        assert_eq!(g.background.len(), 100);
        assert_eq!(g.planets.len(), 5);
        assert_eq!(g.nebulae.len(), 4);
    }

    #[test]
    fn same_seed_same_galaxy() {
        let a = generate(&small(), &mut seeded_rng(42));
        let b = generate(&small(), &mut seeded_rng(42));
        for (x, y) in a.stars.iter().zip(&b.stars) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.details, y.details);
        }
        assert_eq!(a.background, b.background);
        for (x, y) in a.planets.iter().zip(&b.planets) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.details, y.details);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate(&small(), &mut seeded_rng(1));
        let b = generate(&small(), &mut seeded_rng(2));
        let same = a
            .stars
            .iter()
            .zip(&b.stars)
            .filter(|(x, y)| x.position == y.position)
            .count();
        assert!(same < a.stars.len());
    }

    #[test]
    fn every_body_has_a_classification() {
        let g = generate(&small(), &mut seeded_rng(9));
        for body in g.stars.iter().chain(&g.planets).chain(&g.nebulae) {
            assert!(!body.classification.is_empty(), "{} unclassified", body.name);
        }
    }

    #[test]
    fn default_params() {
        let p = GalaxyParams::default();
        assert_eq!(p.star_count, 50_000);
        assert_eq!(p.background_count, 10_000);
        assert_eq!(p.arm_count, 4);
    }
}
