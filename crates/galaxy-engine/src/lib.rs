pub mod api;
pub mod core;
pub mod generator;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{ConfigError, ExplorerConfig};
pub use api::explorer::Explorer;
pub use api::types::{BodyId, Category, HudEvent};
pub use core::bodies::{BodyArena, BodyDetails, CelestialBody};
pub use core::time::{Countdown, DeepScan, LoadingPhase, LoadingScreen};
pub use core::view::{PointerState, ViewState, Viewport, ZoomLimits, ZoomStep};
pub use generator::{GalaxyParams, GeneratedGalaxy};
pub use renderer::camera::{CameraConfig, PerspectiveCamera, Ray};
pub use renderer::instance::{MeshBuffer, MeshInstance, PointVertex};
pub use renderer::scene::{Light, PointLayer, SceneLayers};
pub use input::command::Command;
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use systems::hud::{FpsMeter, HudSnapshot};
pub use systems::info::{InfoPanel, Tooltip};
pub use systems::picking::{PickHit, PickTarget};
