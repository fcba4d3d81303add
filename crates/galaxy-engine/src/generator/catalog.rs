//! Named planets and nebulae.
//!
//! Structure (names, orbits, positions, colors) is fixed; mass, temperature,
//! age and the planets' vertical offset are rolled per session.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::core::bodies::{BodyDetails, CelestialBody};
use super::disk::uniform;

/// One entry of the planet catalog.
pub struct PlanetSpec {
    pub name: &'static str,
    pub kind: &'static str,
    /// Orbit radius around the galactic center, light years.
    pub orbit_radius: f32,
    pub color: u32,
    pub size: f32,
}

pub const PLANET_COUNT: usize = 5;

pub const PLANETS: [PlanetSpec; PLANET_COUNT] = [
    PlanetSpec { name: "Kepler-442b",  kind: "Exoplanet",    orbit_radius: 45.0, color: 0x4444ff, size: 0.8 },
    PlanetSpec { name: "HD 40307g",    kind: "Super Earth",  orbit_radius: 55.0, color: 0x44ff44, size: 1.2 },
    PlanetSpec { name: "Gliese 667Cc", kind: "Rocky Planet", orbit_radius: 35.0, color: 0xff8844, size: 0.9 },
    PlanetSpec { name: "Wolf 1061c",   kind: "Terrestrial",  orbit_radius: 65.0, color: 0xff4444, size: 0.7 },
    PlanetSpec { name: "Proxima b",    kind: "Earth-like",   orbit_radius: 25.0, color: 0x44ffff, size: 0.95 },
];

/// Max vertical offset of a planet from the disk plane.
pub const PLANET_VERTICAL_JITTER: f32 = 5.0;

/// One entry of the nebula catalog.
pub struct NebulaSpec {
    pub name: &'static str,
    pub color: u32,
    pub position: [f32; 3],
}

pub const NEBULA_COUNT: usize = 4;

pub const NEBULAE: [NebulaSpec; NEBULA_COUNT] = [
    NebulaSpec { name: "Orion Nebula",     color: 0xff4444, position: [30.0, 15.0, 40.0] },
    NebulaSpec { name: "Eagle Nebula",     color: 0x4444ff, position: [-40.0, -20.0, 35.0] },
    NebulaSpec { name: "Crab Nebula",      color: 0x44ff44, position: [25.0, -30.0, -45.0] },
    NebulaSpec { name: "Horsehead Nebula", color: 0xff8844, position: [-35.0, 25.0, -30.0] },
];

pub const NEBULA_RADIUS: f32 = 8.0;
pub const NEBULA_COMPOSITION: &str = "Hydrogen, Helium, Dust";

/// `0xRRGGBB` to linear [0, 1] channels.
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Planets at equal angular spacing, each on its own orbit radius.
pub fn generate_planets<R: Rng + ?Sized>(rng: &mut R) -> Vec<CelestialBody> {
    PLANETS
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let angle = (i as f32 / PLANET_COUNT as f32) * TAU;
            let position = Vec3::new(
                angle.cos() * entry.orbit_radius,
                uniform(rng, -PLANET_VERTICAL_JITTER, PLANET_VERTICAL_JITTER),
                angle.sin() * entry.orbit_radius,
            );
            let details = BodyDetails::Planet {
                orbit_radius_ly: entry.orbit_radius,
                mass_earth: uniform(rng, 0.5, 5.5),
                temperature_k: uniform(rng, 200.0, 700.0),
                age_gyr: uniform(rng, 0.1, 5.1),
            };
            CelestialBody::new(entry.name, entry.kind, details)
                .with_position(position)
                .with_color(hex_to_rgb(entry.color))
                .with_radius(entry.size)
        })
        .collect()
}

/// Nebulae at their fixed positions.
pub fn generate_nebulae<R: Rng + ?Sized>(rng: &mut R) -> Vec<CelestialBody> {
    NEBULAE
        .iter()
        .map(|entry| {
            let position = Vec3::from_array(entry.position);
            let details = BodyDetails::Nebula {
                distance_ly: position.length(),
                composition: NEBULA_COMPOSITION,
                age_myr: uniform(rng, 1.0, 11.0),
            };
            CelestialBody::new(entry.name, "Nebula", details)
                .with_position(position)
                .with_color(hex_to_rgb(entry.color))
                .with_radius(NEBULA_RADIUS)
        })
        .collect()
}
