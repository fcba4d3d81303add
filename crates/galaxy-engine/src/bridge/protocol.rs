/// Frame buffer layout.
/// The JavaScript renderer reads the frame with these same offsets.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Meshes: max_meshes × 16 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Point clouds are static and exposed through their own pointers.

use crate::api::config::ExplorerConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_CAMERA_X: usize = 1;
pub const HEADER_CAMERA_Y: usize = 2;
pub const HEADER_CAMERA_Z: usize = 3;
pub const HEADER_ZOOM: usize = 4;
pub const HEADER_GALAXY_ROTATION: usize = 5;
pub const HEADER_NEBULA_ROTATION: usize = 6;
pub const HEADER_FLAGS: usize = 7;
pub const HEADER_MESH_COUNT: usize = 8;
pub const HEADER_HOVERED: usize = 9;
pub const HEADER_SELECTED: usize = 10;
pub const HEADER_FPS: usize = 11;
pub const HEADER_LOADING_PHASE: usize = 12;
pub const HEADER_PROTOCOL_VERSION: usize = 13;
pub const HEADER_ASPECT: usize = 14;
pub const HEADER_EVENT_COUNT: usize = 15;

/// Bits of `HEADER_FLAGS`.
pub const FLAG_AUTO_ROTATE: u32 = 1;
pub const FLAG_PLANETS: u32 = 2;
pub const FLAG_NEBULAE: u32 = 4;
pub const FLAG_DEEP_SCAN: u32 = 8;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per mesh instance (wire format — never changes).
pub const MESH_FLOATS: usize = 16;

/// Floats per HUD event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum mesh instances per frame.
    pub max_meshes: usize,
    /// Maximum HUD events per frame.
    pub max_events: usize,

    /// Size of mesh data section in floats.
    pub mesh_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where mesh data begins.
    pub mesh_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_meshes: usize, max_events: usize) -> Self {
        let mesh_data_floats = max_meshes * MESH_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let mesh_data_offset = HEADER_FLOATS;
        let event_data_offset = mesh_data_offset + mesh_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_meshes,
            max_events,
            mesh_data_floats,
            event_data_floats,
            mesh_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an ExplorerConfig.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.max_meshes, config.max_events)
    }
}

/// Pack view toggles into the header bitfield.
pub fn encode_flags(auto_rotate: bool, planets: bool, nebulae: bool, deep_scan: bool) -> f32 {
    let mut flags = 0;
    if auto_rotate {
        flags |= FLAG_AUTO_ROTATE;
    }
    if planets {
        flags |= FLAG_PLANETS;
    }
    if nebulae {
        flags |= FLAG_NEBULAE;
    }
    if deep_scan {
        flags |= FLAG_DEEP_SCAN;
    }
    flags as f32
}
