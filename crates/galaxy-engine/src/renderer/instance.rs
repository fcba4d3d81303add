use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Blend mode for a render primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BlendMode {
    /// Standard alpha blending (src-alpha, one-minus-src-alpha).
    #[default]
    Alpha,
    /// Additive blending for glow (src-alpha, one).
    Additive,
}

impl BlendMode {
    pub fn to_wire(self) -> f32 {
        match self {
            BlendMode::Alpha => 0.0,
            BlendMode::Additive => 1.0,
        }
    }
}

/// Scene-graph group a primitive belongs to. The renderer applies the group
/// transform (rotation, visibility) from the frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderGroup {
    Galaxy,
    Planets,
    Nebulae,
}

impl RenderGroup {
    pub fn to_wire(self) -> f32 {
        match self {
            RenderGroup::Galaxy => 0.0,
            RenderGroup::Planets => 1.0,
            RenderGroup::Nebulae => 2.0,
        }
    }
}

/// Shape of a mesh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    Planet,
    Nebula,
    BlackHole,
    /// Flat ring in the disk plane; uses `inner_radius`.
    AccretionDisk,
}

impl MeshKind {
    pub fn to_wire(self) -> f32 {
        match self {
            MeshKind::Planet => 0.0,
            MeshKind::Nebula => 1.0,
            MeshKind::BlackHole => 2.0,
            MeshKind::AccretionDisk => 3.0,
        }
    }
}

/// One point of a point cloud: position + color.
/// Wire format: 6 floats = 24 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl PointVertex {
    pub const FLOATS: usize = 6;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-instance mesh data for the frame buffer.
/// Wire format: 16 floats = 64 bytes stride.
///
/// The only link back to simulation data is `body`, the arena index
/// (-1 for decorations that are not bodies).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Position in the local space of `group`.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Outer radius in world units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    /// Arena index, or -1.
    pub body: f32,
    /// `MeshKind` wire value.
    pub kind: f32,
    /// `BlendMode` wire value.
    pub blend: f32,
    /// `RenderGroup` wire value.
    pub group: f32,
    /// Inner radius for rings, zero otherwise.
    pub inner_radius: f32,
    /// 1.0 when hovered, 2.0 when selected, 0.0 otherwise.
    pub highlight: f32,
    pub _pad: [f32; 2],
}

impl MeshInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Mesh instances of the current frame.
pub struct MeshBuffer {
    pub instances: Vec<MeshInstance>,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Flat float view of the instances.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_sizes() {
        assert_eq!(std::mem::size_of::<PointVertex>(), PointVertex::STRIDE_BYTES);
        assert_eq!(std::mem::size_of::<MeshInstance>(), MeshInstance::STRIDE_BYTES);
    }

    #[test]
    fn mesh_buffer_flattens() {
        let mut buf = MeshBuffer::new();
        buf.push(MeshInstance { x: 1.0, body: 3.0, ..MeshInstance::default() });
        buf.push(MeshInstance::default());
        assert_eq!(buf.instance_count(), 2);
        let floats = buf.as_floats();
        assert_eq!(floats.len(), 2 * MeshInstance::FLOATS);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[8], 3.0);
    }
}
