use galaxy_engine::{Explorer, ExplorerConfig, InputEvent};
use glam::Vec2;
use serde::Serialize;

/// Owns the explorer for the wasm exports.
///
/// wasm-bindgen cannot export methods on a `thread_local!` value, so
/// `lib.rs` keeps one runner in a `RefCell` and forwards free functions here.
pub struct ExplorerRunner {
    explorer: Explorer,
}

impl ExplorerRunner {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            explorer: Explorer::new(config),
        }
    }

    /// Parse `json` into a config, falling back to defaults on error.
    pub fn config_from_json(json: Option<&str>) -> ExplorerConfig {
        match json {
            None => ExplorerConfig::default(),
            Some(json) => ExplorerConfig::from_json(json).unwrap_or_else(|err| {
                log::error!("{err}; using default config");
                ExplorerConfig::default()
            }),
        }
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.explorer.push_input(event);
    }

    pub fn tick(&mut self, dt: f32) {
        self.explorer.tick(dt);
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.explorer.frame_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.explorer.frame_len()
    }

    pub fn disk_points_ptr(&self) -> *const f32 {
        self.explorer.disk_points_ptr()
    }

    pub fn disk_point_count(&self) -> u32 {
        self.explorer.disk_point_count()
    }

    pub fn background_points_ptr(&self) -> *const f32 {
        self.explorer.background_points_ptr()
    }

    pub fn background_point_count(&self) -> u32 {
        self.explorer.background_point_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.explorer.events_ptr()
    }

    pub fn events_len(&self) -> u32 {
        self.explorer.events_len()
    }

    // ---- Capacity accessors ----

    pub fn max_meshes(&self) -> u32 {
        self.explorer.layout().max_meshes as u32
    }

    pub fn max_events(&self) -> u32 {
        self.explorer.layout().max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.explorer.layout().buffer_total_floats as u32
    }

    // ---- Presenter payloads ----

    pub fn hud_json(&self) -> String {
        to_json(&self.explorer.hud_snapshot())
    }

    pub fn selection_json(&self) -> String {
        to_json(&self.explorer.selection_panel())
    }

    /// Tooltip for a box of `width` × `height` pixels, or `null` when
    /// nothing is hovered.
    pub fn tooltip_json(&self, width: f32, height: f32) -> String {
        to_json(&self.explorer.tooltip(Vec2::new(width, height)))
    }

    pub fn scene_json(&self) -> String {
        let scene = self.explorer.scene();
        to_json(&SceneDescription {
            lights: &scene.lights,
            disk_point_size: scene.disk.style.size,
            disk_opacity: scene.disk.style.opacity,
            background_point_size: scene.background.style.size,
            background_opacity: scene.background.style.opacity,
        })
    }
}

/// Static render settings the presenter reads once at startup.
#[derive(Serialize)]
struct SceneDescription<'a> {
    lights: &'a [galaxy_engine::Light],
    disk_point_size: f32,
    disk_opacity: f32,
    background_point_size: f32,
    background_opacity: f32,
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("failed to serialize presenter payload: {err}");
        "null".to_string()
    })
}
