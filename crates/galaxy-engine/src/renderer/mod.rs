pub mod camera;
pub mod instance;
pub mod scene;

pub use camera::{CameraConfig, PerspectiveCamera, Ray};
pub use instance::{BlendMode, MeshBuffer, MeshInstance, MeshKind, PointVertex, RenderGroup};
pub use scene::{Light, PointLayer, PointStyle, SceneLayers};
