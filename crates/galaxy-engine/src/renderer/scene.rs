//! Scene builder: generated data → render layers.
//!
//! Point clouds are static and built once. Mesh instances are rebuilt every
//! frame from the arena so planet orbits and highlights stay current.

use glam::Vec3;
use serde::Serialize;

use crate::api::types::BodyId;
use crate::core::bodies::CelestialBody;
use crate::generator::catalog::hex_to_rgb;
use crate::renderer::instance::{BlendMode, MeshInstance, MeshKind, PointVertex, RenderGroup};

/// Material settings shared by every point of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointStyle {
    pub size: f32,
    pub opacity: f32,
    pub blend: BlendMode,
}

/// A static point cloud.
#[derive(Debug, Clone)]
pub struct PointLayer {
    pub points: Vec<PointVertex>,
    pub style: PointStyle,
}

impl PointLayer {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Raw pointer to vertex data for shared-memory reads.
    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

/// Scene lighting, serialized for the renderer once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Light {
    Ambient { color: [f32; 3], intensity: f32 },
    Point { position: [f32; 3], color: [f32; 3], intensity: f32, range: f32 },
}

/// Everything that does not change after startup.
#[derive(Debug, Clone)]
pub struct SceneLayers {
    /// Spiral disk, in the galaxy group.
    pub disk: PointLayer,
    /// Backdrop, never transformed.
    pub background: PointLayer,
    /// Black hole and accretion disk, in the galaxy group.
    pub decorations: Vec<MeshInstance>,
    pub lights: Vec<Light>,
}

pub const BLACK_HOLE_RADIUS: f32 = 2.0;
pub const ACCRETION_INNER_RADIUS: f32 = 2.5;
pub const ACCRETION_OUTER_RADIUS: f32 = 8.0;

const DISK_STYLE: PointStyle = PointStyle {
    size: 0.8,
    opacity: 0.8,
    blend: BlendMode::Additive,
};

const BACKGROUND_STYLE: PointStyle = PointStyle {
    size: 0.1,
    opacity: 0.8,
    blend: BlendMode::Alpha,
};

const PLANET_OPACITY: f32 = 0.95;
const NEBULA_OPACITY: f32 = 0.3;

pub fn build_disk_layer(stars: &[CelestialBody]) -> PointLayer {
    let points = stars
        .iter()
        .map(|s| PointVertex {
            x: s.position.x,
            y: s.position.y,
            z: s.position.z,
            r: s.color[0],
            g: s.color[1],
            b: s.color[2],
        })
        .collect();
    PointLayer {
        points,
        style: DISK_STYLE,
    }
}

pub fn build_background_layer(points: &[Vec3]) -> PointLayer {
    let points = points
        .iter()
        .map(|p| PointVertex {
            x: p.x,
            y: p.y,
            z: p.z,
            r: 1.0,
            g: 1.0,
            b: 1.0,
        })
        .collect();
    PointLayer {
        points,
        style: BACKGROUND_STYLE,
    }
}

/// Black hole and its accretion disk at the galactic center.
pub fn build_decorations() -> Vec<MeshInstance> {
    let galaxy = RenderGroup::Galaxy.to_wire();
    let [r, g, b] = hex_to_rgb(0xff4444);
    vec![
        MeshInstance {
            radius: BLACK_HOLE_RADIUS,
            opacity: 0.9,
            body: -1.0,
            kind: MeshKind::BlackHole.to_wire(),
            blend: BlendMode::Alpha.to_wire(),
            group: galaxy,
            ..MeshInstance::default()
        },
        MeshInstance {
            radius: ACCRETION_OUTER_RADIUS,
            inner_radius: ACCRETION_INNER_RADIUS,
            r,
            g,
            b,
            opacity: 0.6,
            body: -1.0,
            kind: MeshKind::AccretionDisk.to_wire(),
            blend: BlendMode::Alpha.to_wire(),
            group: galaxy,
            ..MeshInstance::default()
        },
    ]
}

pub fn build_lights() -> Vec<Light> {
    vec![
        Light::Ambient {
            color: hex_to_rgb(0x404040),
            intensity: 0.4,
        },
        Light::Point {
            position: [0.0, 0.0, 0.0],
            color: [1.0, 1.0, 1.0],
            intensity: 2.0,
            range: 1000.0,
        },
    ]
}

pub fn build_scene(stars: &[CelestialBody], background: &[Vec3]) -> SceneLayers {
    SceneLayers {
        disk: build_disk_layer(stars),
        background: build_background_layer(background),
        decorations: build_decorations(),
        lights: build_lights(),
    }
}

/// Mesh instance for a planet or nebula, carrying only its arena index.
pub fn body_instance(id: BodyId, body: &CelestialBody, kind: MeshKind, highlight: f32) -> MeshInstance {
    let (group, opacity, blend) = match kind {
        MeshKind::Nebula => (RenderGroup::Nebulae, NEBULA_OPACITY, BlendMode::Additive),
        _ => (RenderGroup::Planets, PLANET_OPACITY, BlendMode::Alpha),
    };
    MeshInstance {
        x: body.position.x,
        y: body.position.y,
        z: body.position.z,
        radius: body.radius,
        r: body.color[0],
        g: body.color[1],
        b: body.color[2],
        opacity,
        body: id.0 as f32,
        kind: kind.to_wire(),
        blend: blend.to_wire(),
        group: group.to_wire(),
        inner_radius: 0.0,
        highlight,
        _pad: [0.0; 2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bodies::BodyDetails;

    fn planet() -> CelestialBody {
        CelestialBody::new(
            "Proxima b",
            "Earth-like",
            BodyDetails::Planet { orbit_radius_ly: 25.0, mass_earth: 1.0, temperature_k: 300.0, age_gyr: 1.0 },
        )
        .with_position(Vec3::new(25.0, 1.0, 0.0))
        .with_radius(0.95)
    }

    #[test]
    fn disk_layer_copies_positions_and_colors() {
        let star = CelestialBody::new(
            "GX-00000",
            "Giant",
            BodyDetails::Star { mass_solar: 1.0, temperature_k: 5000.0, age_gyr: 1.0 },
        )
        .with_position(Vec3::new(1.0, 2.0, 3.0))
        .with_color([0.1, 0.2, 0.3]);
        let layer = build_disk_layer(&[star]);
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.points[0], PointVertex { x: 1.0, y: 2.0, z: 3.0, r: 0.1, g: 0.2, b: 0.3 });
        assert_eq!(layer.style.blend, BlendMode::Additive);
    }

    #[test]
    fn background_is_white() {
        let layer = build_background_layer(&[Vec3::ONE, Vec3::NEG_ONE]);
        assert!(layer.points.iter().all(|p| p.r == 1.0 && p.g == 1.0 && p.b == 1.0));
    }

    #[test]
    fn body_instance_carries_only_index() {
        let inst = body_instance(BodyId(42), &planet(), MeshKind::Planet, 0.0);
        assert_eq!(inst.body, 42.0);
        assert_eq!(inst.group, RenderGroup::Planets.to_wire());
        assert_eq!(inst.radius, 0.95);
    }

    #[test]
    fn decorations_are_not_bodies() {
        let decorations = build_decorations();
        assert_eq!(decorations.len(), 2);
        assert!(decorations.iter().all(|d| d.body < 0.0));
    }

    #[test]
    fn lights_serialize_with_type_tag() {
        let json = serde_json::to_string(&build_lights()).unwrap();
        assert!(json.contains("\"type\":\"ambient\""));
        assert!(json.contains("\"type\":\"point\""));
    }
}
