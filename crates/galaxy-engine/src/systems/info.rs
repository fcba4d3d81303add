//! Text for the selection panel and the hover tooltip.

use glam::Vec2;
use serde::Serialize;

use crate::core::bodies::{BodyDetails, CelestialBody};
use crate::core::view::Viewport;

/// Gap between pointer and tooltip, pixels.
pub const TOOLTIP_OFFSET: f32 = 18.0;
/// Minimum distance kept from the viewport edge, pixels.
pub const TOOLTIP_PADDING: f32 = 12.0;

const PLACEHOLDER: &str = "-";

/// Contents of the persistent selection panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoPanel {
    pub name: String,
    pub kind: String,
    /// Mass, or composition for nebulae.
    pub mass: String,
    pub temperature: String,
    pub age: String,
}

impl InfoPanel {
    /// Panel shown when nothing is selected.
    pub fn empty() -> Self {
        Self {
            name: "None".to_string(),
            kind: PLACEHOLDER.to_string(),
            mass: PLACEHOLDER.to_string(),
            temperature: PLACEHOLDER.to_string(),
            age: PLACEHOLDER.to_string(),
        }
    }

    pub fn for_body(body: &CelestialBody) -> Self {
        let (mass, temperature) = match &body.details {
            BodyDetails::Nebula { composition, .. } => (composition.to_string(), PLACEHOLDER.to_string()),
            details => (
                mass_text(details).unwrap_or_else(|| PLACEHOLDER.to_string()),
                temperature_text(details).unwrap_or_else(|| PLACEHOLDER.to_string()),
            ),
        };
        Self {
            name: body.name.clone(),
            kind: body.classification.to_string(),
            mass,
            temperature,
            age: age_text(&body.details),
        }
    }
}

/// Contents and placement of the hover tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub name: String,
    /// Classification, uppercased.
    pub kind: String,
    pub distance: String,
    pub magnitude: String,
    pub left: f32,
    pub top: f32,
}

impl Tooltip {
    pub fn for_body(body: &CelestialBody, anchor: Vec2) -> Self {
        Self {
            name: body.name.clone(),
            kind: body.classification.to_uppercase(),
            distance: distance_text(&body.details).unwrap_or_else(|| PLACEHOLDER.to_string()),
            magnitude: mass_text(&body.details).unwrap_or_else(|| PLACEHOLDER.to_string()),
            left: anchor.x,
            top: anchor.y,
        }
    }
}

/// Top-left corner for a tooltip of `size` next to `pointer`.
///
/// Sits below-right of the pointer; on each axis where it would come within
/// `TOOLTIP_PADDING` of the viewport edge it flips to the other side.
pub fn place_tooltip(pointer: Vec2, size: Vec2, viewport: Viewport) -> Vec2 {
    let mut left = pointer.x + TOOLTIP_OFFSET;
    let mut top = pointer.y + TOOLTIP_OFFSET;
    if left + size.x + TOOLTIP_PADDING > viewport.width {
        left = pointer.x - size.x - TOOLTIP_OFFSET;
    }
    if top + size.y + TOOLTIP_PADDING > viewport.height {
        top = pointer.y - size.y - TOOLTIP_OFFSET;
    }
    Vec2::new(left, top)
}

fn mass_text(details: &BodyDetails) -> Option<String> {
    match details {
        BodyDetails::Star { mass_solar, .. } => Some(format!("{mass_solar:.2} M☉")),
        BodyDetails::Planet { mass_earth, .. } => Some(format!("{mass_earth:.2} Earth masses")),
        BodyDetails::Nebula { .. } => None,
    }
}

fn temperature_text(details: &BodyDetails) -> Option<String> {
    match details {
        BodyDetails::Star { temperature_k, .. } => Some(format!("{temperature_k:.0}K")),
        BodyDetails::Planet { temperature_k, .. } => Some(format!("{temperature_k:.0} K")),
        BodyDetails::Nebula { .. } => None,
    }
}

fn age_text(details: &BodyDetails) -> String {
    match details {
        BodyDetails::Star { age_gyr, .. } | BodyDetails::Planet { age_gyr, .. } => {
            format!("{age_gyr:.2} Gyr")
        }
        BodyDetails::Nebula { age_myr, .. } => format!("{age_myr:.1} million years"),
    }
}

fn distance_text(details: &BodyDetails) -> Option<String> {
    match details {
        BodyDetails::Planet { orbit_radius_ly, .. } => Some(format!("{orbit_radius_ly} ly")),
        BodyDetails::Nebula { distance_ly, .. } => Some(format!("{distance_ly:.1} ly")),
        BodyDetails::Star { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet() -> CelestialBody {
        CelestialBody::new(
            "Kepler-442b",
            "Exoplanet",
            BodyDetails::Planet { orbit_radius_ly: 45.0, mass_earth: 2.345, temperature_k: 412.6, age_gyr: 3.1 },
        )
    }

    fn nebula() -> CelestialBody {
        CelestialBody::new(
            "Orion Nebula",
            "Nebula",
            BodyDetails::Nebula { distance_ly: 52.2015, composition: "Hydrogen, Helium, Dust", age_myr: 4.26 },
        )
    }

    #[test]
    fn empty_panel_placeholders() {
        let panel = InfoPanel::empty();
        assert_eq!(panel.name, "None");
        assert_eq!(panel.kind, "-");
        assert_eq!(panel.mass, "-");
        assert_eq!(panel.temperature, "-");
        assert_eq!(panel.age, "-");
    }

    #[test]
    fn planet_panel() {
        let panel = InfoPanel::for_body(&planet());
        assert_eq!(panel.name, "Kepler-442b");
        assert_eq!(panel.kind, "Exoplanet");
        assert_eq!(panel.mass, "2.35 Earth masses");
        assert_eq!(panel.temperature, "413 K");
        assert_eq!(panel.age, "3.10 Gyr");
    }

    #[test]
    fn nebula_panel_shows_composition() {
        let panel = InfoPanel::for_body(&nebula());
        assert_eq!(panel.mass, "Hydrogen, Helium, Dust");
        assert_eq!(panel.temperature, "-");
        assert_eq!(panel.age, "4.3 million years");
    }

    #[test]
    fn star_panel() {
        let star = CelestialBody::new(
            "GX-00001",
            "Red Dwarf",
            BodyDetails::Star { mass_solar: 1.5, temperature_k: 12345.0, age_gyr: 10.0 },
        );
        let panel = InfoPanel::for_body(&star);
        assert_eq!(panel.mass, "1.50 M☉");
        assert_eq!(panel.temperature, "12345K");
        assert_eq!(panel.age, "10.00 Gyr");
    }

    #[test]
    fn tooltip_text() {
        let tip = Tooltip::for_body(&planet(), Vec2::new(10.0, 20.0));
        assert_eq!(tip.kind, "EXOPLANET");
        assert_eq!(tip.distance, "45 ly");
        assert_eq!(tip.magnitude, "2.35 Earth masses");

        let tip = Tooltip::for_body(&nebula(), Vec2::ZERO);
        assert_eq!(tip.kind, "NEBULA");
        assert_eq!(tip.distance, "52.2 ly");
        assert_eq!(tip.magnitude, "-");
    }

    #[test]
    fn tooltip_sits_below_right() {
        let pos = place_tooltip(Vec2::new(100.0, 100.0), Vec2::new(200.0, 80.0), Viewport::new(1280.0, 720.0));
        assert_eq!(pos, Vec2::new(118.0, 118.0));
    }

    #[test]
    fn tooltip_flips_near_edges() {
        let viewport = Viewport::new(1280.0, 720.0);
        let size = Vec2::new(200.0, 80.0);
        let pos = place_tooltip(Vec2::new(1200.0, 100.0), size, viewport);
        assert_eq!(pos, Vec2::new(1200.0 - 200.0 - 18.0, 118.0));
        let pos = place_tooltip(Vec2::new(100.0, 700.0), size, viewport);
        assert_eq!(pos, Vec2::new(118.0, 700.0 - 80.0 - 18.0));
    }

    #[test]
    fn tooltip_flip_threshold_includes_padding() {
        let viewport = Viewport::new(1000.0, 1000.0);
        let size = Vec2::new(100.0, 100.0);
        // 870 + 18 + 100 + 12 = 1000: fits exactly.
        assert_eq!(place_tooltip(Vec2::new(870.0, 0.0), size, viewport).x, 888.0);
        assert_eq!(place_tooltip(Vec2::new(871.0, 0.0), size, viewport).x, 753.0);
    }
}
