use glam::Vec2;

use crate::core::view::ZoomStep;
use crate::input::queue::InputEvent;

/// Custom event kinds sent by the control buttons.
pub const CUSTOM_TOGGLE_AUTO_ROTATE: u32 = 1;
pub const CUSTOM_TOGGLE_PLANETS: u32 = 2;
pub const CUSTOM_TOGGLE_NEBULAE: u32 = 3;
pub const CUSTOM_TOGGLE_DEEP_SCAN: u32 = 4;

/// A typed user intent. Applied by `Explorer::apply`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer moved to a CSS pixel position; updates hover.
    PointerMoved { px: Vec2 },
    Zoom(ZoomStep),
    /// Click at the current pointer position; updates selection.
    Select,
    ToggleAutoRotate,
    TogglePlanets,
    ToggleNebulae,
    ToggleDeepScan,
    Resize { width: f32, height: f32 },
}

impl Command {
    /// Translate a raw event. Unknown custom kinds yield `None`.
    pub fn from_event(event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::PointerMove { x, y } => Some(Command::PointerMoved { px: Vec2::new(x, y) }),
            InputEvent::Wheel { delta_y } => Some(Command::Zoom(if delta_y > 0.0 {
                ZoomStep::Out
            } else {
                ZoomStep::In
            })),
            InputEvent::Click => Some(Command::Select),
            InputEvent::Resize { width, height } => Some(Command::Resize { width, height }),
            InputEvent::Custom { kind, .. } => match kind {
                CUSTOM_TOGGLE_AUTO_ROTATE => Some(Command::ToggleAutoRotate),
                CUSTOM_TOGGLE_PLANETS => Some(Command::TogglePlanets),
                CUSTOM_TOGGLE_NEBULAE => Some(Command::ToggleNebulae),
                CUSTOM_TOGGLE_DEEP_SCAN => Some(Command::ToggleDeepScan),
                other => {
                    log::debug!("ignoring custom event kind {other}");
                    None
                }
            },
        }
    }
}
