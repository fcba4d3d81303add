use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::api::types::BodyId;
use crate::core::time::DeepScan;

/// Multiplicative zoom applied per wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomStep {
    /// Scroll up: target zoom × 0.92.
    In,
    /// Scroll down: target zoom × 1.08.
    Out,
}

impl ZoomStep {
    pub fn factor(self) -> f32 {
        match self {
            ZoomStep::In => 0.92,
            ZoomStep::Out => 1.08,
        }
    }
}

/// Zoom clamp range and interpolation rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
    /// Fraction of the remaining gap closed per second (capped at 1 per tick).
    pub rate: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 8.0,
            rate: 3.0,
        }
    }
}

/// Browser viewport in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Last known pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Normalized device coordinates: x right, y up, both in [-1, 1].
    pub ndc: Vec2,
    /// Raw CSS pixel coordinates, origin top-left.
    pub px: Vec2,
}

impl PointerState {
    /// Convert a pixel position to NDC for the given viewport.
    pub fn from_pixels(px: Vec2, viewport: Viewport) -> Self {
        let ndc = Vec2::new(
            (px.x / viewport.width) * 2.0 - 1.0,
            -(px.y / viewport.height) * 2.0 + 1.0,
        );
        Self { ndc, px }
    }

    /// Pointer parked at the viewport center.
    pub fn centered(viewport: Viewport) -> Self {
        Self::from_pixels(viewport.center(), viewport)
    }
}

/// User-facing view state. Mutated only by commands and the frame loop.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Smoothed zoom actually used for the camera. Always > 0.
    pub current_zoom: f32,
    target_zoom: f32,
    limits: ZoomLimits,
    pub auto_rotate: bool,
    pub show_planets: bool,
    pub show_nebulae: bool,
    pub selected: Option<BodyId>,
    pub hovered: Option<BodyId>,
    /// Rotation of the galaxy group about +Y, radians.
    pub galaxy_rotation: f32,
    /// Rotation of the nebula group about +Y, radians.
    pub nebula_rotation: f32,
    pub deep_scan: DeepScan,
}

impl ViewState {
    pub fn new(limits: ZoomLimits, deep_scan_secs: f32) -> Self {
        Self {
            current_zoom: 1.0,
            target_zoom: 1.0_f32.clamp(limits.min, limits.max),
            limits,
            auto_rotate: true,
            show_planets: false,
            show_nebulae: false,
            selected: None,
            hovered: None,
            galaxy_rotation: 0.0,
            nebula_rotation: 0.0,
            deep_scan: DeepScan::new(deep_scan_secs),
        }
    }

    pub fn target_zoom(&self) -> f32 {
        self.target_zoom
    }

    /// Apply one wheel notch to the target zoom, clamped to the limits.
    pub fn zoom(&mut self, step: ZoomStep) {
        self.set_target_zoom(self.target_zoom * step.factor());
    }

    pub fn set_target_zoom(&mut self, zoom: f32) {
        self.target_zoom = zoom.clamp(self.limits.min, self.limits.max);
    }

    /// Exponential approach toward the target; never overshoots.
    pub fn interpolate_zoom(&mut self, dt: f32) {
        let k = (dt * self.limits.rate).clamp(0.0, 1.0);
        self.current_zoom += (self.target_zoom - self.current_zoom) * k;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ZoomLimits::default(), 3.0)
    }
}
