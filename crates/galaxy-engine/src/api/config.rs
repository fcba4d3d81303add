use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::view::{Viewport, ZoomLimits};
use crate::generator::GalaxyParams;
use crate::renderer::camera::CameraConfig;

/// Seed used when the config does not pin one.
pub const DEFAULT_SEED: u64 = 0x6a1a_c7c0;

/// Errors that can occur while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Explorer configuration. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// RNG seed. `None` falls back to `DEFAULT_SEED`; the web bridge fills it
    /// with fresh entropy per session.
    pub seed: Option<u64>,
    pub galaxy: GalaxyParams,
    pub camera: CameraConfig,
    pub zoom: ZoomLimits,
    /// Galaxy rotation per tick, radians.
    pub rotation_speed: f32,
    /// Nebula counter-rotation as a fraction of `rotation_speed`.
    pub nebula_parallax: f32,
    pub deep_scan_secs: f32,
    pub loading_hold_secs: f32,
    pub loading_fade_secs: f32,
    pub viewport: Viewport,
    /// Maximum mesh instances per frame.
    pub max_meshes: usize,
    /// Maximum HUD events per frame.
    pub max_events: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            galaxy: GalaxyParams::default(),
            camera: CameraConfig::default(),
            zoom: ZoomLimits::default(),
            rotation_speed: 0.001,
            nebula_parallax: 0.2,
            deep_scan_secs: 3.0,
            loading_hold_secs: 3.0,
            loading_fade_secs: 1.0,
            viewport: Viewport::default(),
            max_meshes: 64,
            max_events: 16,
        }
    }
}

impl ExplorerConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn seed_or_default(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Reject values the generator or camera cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.galaxy;
        if g.arm_count == 0 {
            return Err(ConfigError::Invalid("arm_count must be at least 1".into()));
        }
        if g.radius_min > g.radius_max {
            return Err(ConfigError::Invalid(format!(
                "radius_min ({}) exceeds radius_max ({})",
                g.radius_min, g.radius_max
            )));
        }
        if g.disk_radius <= 0.0 {
            return Err(ConfigError::Invalid("disk_radius must be positive".into()));
        }
        if self.zoom.min <= 0.0 || self.zoom.max <= 0.0 {
            return Err(ConfigError::Invalid("zoom limits must be positive".into()));
        }
        if self.zoom.min > self.zoom.max {
            return Err(ConfigError::Invalid(format!(
                "zoom min ({}) exceeds zoom max ({})",
                self.zoom.min, self.zoom.max
            )));
        }
        if self.camera.base_distance <= 0.0 || self.camera.fov_deg <= 0.0 || self.camera.fov_deg >= 180.0 {
            return Err(ConfigError::Invalid("camera needs a positive distance and a fov in (0, 180)".into()));
        }
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return Err(ConfigError::Invalid("viewport must have a positive size".into()));
        }
        Ok(())
    }
}
