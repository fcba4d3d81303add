use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Fixed camera height above the disk.
    pub height: f32,
    /// Camera z at zoom 1. Camera z is `base_distance / zoom`.
    pub base_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 10_000.0,
            height: 50.0,
            base_distance: 100.0,
        }
    }
}

/// A half-line in world space. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Perspective camera with a fixed orientation.
///
/// The camera looks at the origin once at construction; zooming only slides
/// it along world Z, so the view direction never changes.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    forward: Vec3,
    base_distance: f32,
}

impl PerspectiveCamera {
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        let position = Vec3::new(0.0, config.height, config.base_distance);
        Self {
            position,
            fov_y: config.fov_deg.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            forward: (Vec3::ZERO - position).normalize_or_zero(),
            base_distance: config.base_distance,
        }
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Update the aspect ratio (e.g. on window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Slide the camera to `base_distance / zoom` along Z.
    pub fn apply_zoom(&mut self, zoom: f32) {
        self.position.z = self.base_distance / zoom.max(f32::EPSILON);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World position to NDC (x, y in [-1, 1] when on screen, z depth).
    pub fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    /// Ray from the camera through a point given in NDC, built from the camera basis.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let right = self.forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(self.forward);
        let half_h = (self.fov_y / 2.0).tan();
        let half_w = half_h * self.aspect;
        let direction = self.forward + right * (ndc.x * half_w) + up * (ndc.y * half_h);
        Ray::new(self.position, direction)
    }
}
