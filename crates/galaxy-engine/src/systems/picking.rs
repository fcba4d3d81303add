use glam::Vec3;

use crate::api::types::BodyId;
use crate::renderer::camera::Ray;

/// A sphere that can be hit by a pointer ray, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickTarget {
    pub id: BodyId,
    pub center: Vec3,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: BodyId,
    /// Distance along the ray to the entry point.
    pub distance: f32,
}

/// Distance to where `ray` enters the sphere, if it does.
///
/// Only front faces count: a ray that starts inside the sphere, or a sphere
/// entirely behind the origin, is a miss.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let c = oc.length_squared() - radius * radius;
    if c < 0.0 {
        return None;
    }
    let b = oc.dot(ray.direction);
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    if t < 0.0 {
        return None;
    }
    Some(t)
}

/// Nearest target hit by `ray`.
/// Only a strictly nearer hit replaces the current best, so on a tie the
/// earlier target wins.
pub fn pick_nearest<I>(ray: &Ray, targets: I) -> Option<PickHit>
where
    I: IntoIterator<Item = PickTarget>,
{
    let mut best: Option<PickHit> = None;
    for target in targets {
        if let Some(distance) = intersect_sphere(ray, target.center, target.radius) {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PickHit { id: target.id, distance });
            }
        }
    }
    best
}
