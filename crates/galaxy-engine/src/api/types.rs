use bytemuck::{Pod, Zeroable};
use serde::Serialize;

/// Stable handle into the body arena.
/// Handles are never reused: bodies live for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Wire encoding used in the frame header: the index, or -1.0 for none.
    pub fn to_wire(id: Option<BodyId>) -> f32 {
        id.map(|b| b.0 as f32).unwrap_or(-1.0)
    }
}

/// Broad kind of a celestial body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Star,
    Planet,
    Nebula,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Star => "Star",
            Category::Planet => "Planet",
            Category::Nebula => "Nebula",
        }
    }
}

/// A HUD event communicated from Rust to the presenter through the frame buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct HudEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl HudEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
