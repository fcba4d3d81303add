use glam::Vec3;
use crate::api::types::{BodyId, Category};

/// Category-specific descriptive fields.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyDetails {
    Star {
        /// Solar masses.
        mass_solar: f32,
        /// Kelvin, whole degrees.
        temperature_k: f32,
        /// Billions of years.
        age_gyr: f32,
    },
    Planet {
        /// Light years from the galactic center.
        orbit_radius_ly: f32,
        /// Earth masses.
        mass_earth: f32,
        temperature_k: f32,
        age_gyr: f32,
    },
    Nebula {
        distance_ly: f32,
        composition: &'static str,
        /// Millions of years.
        age_myr: f32,
    },
}

impl BodyDetails {
    pub fn category(&self) -> Category {
        match self {
            BodyDetails::Star { .. } => Category::Star,
            BodyDetails::Planet { .. } => Category::Planet,
            BodyDetails::Nebula { .. } => Category::Nebula,
        }
    }
}

/// A star, planet or nebula.
/// Everything but `position` is fixed after generation.
#[derive(Debug, Clone)]
pub struct CelestialBody {
    /// Display name.
    pub name: String,
    /// Never empty. Derived from the generation parameters.
    pub classification: &'static str,
    /// Position in the local space of the body's render group.
    pub position: Vec3,
    /// Linear RGB in [0, 1].
    pub color: [f32; 3],
    /// Render and pick radius in world units.
    pub radius: f32,
    pub details: BodyDetails,
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, classification: &'static str, details: BodyDetails) -> Self {
        Self {
            name: name.into(),
            classification,
            position: Vec3::ZERO,
            color: [1.0, 1.0, 1.0],
            radius: 1.0,
            details,
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }
}

/// Flat storage for every body of the session.
/// A `BodyId` is the index of its body; bodies are never removed.
pub struct BodyArena {
    bodies: Vec<CelestialBody>,
}

impl BodyArena {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Add a body and return its handle.
    pub fn insert(&mut self, body: CelestialBody) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body);
        id
    }

    /// Add many bodies, returning their handles in insertion order.
    pub fn extend(&mut self, bodies: impl IntoIterator<Item = CelestialBody>) -> Vec<BodyId> {
        bodies.into_iter().map(|b| self.insert(b)).collect()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id.index())
    }

    /// Iterate over all bodies with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyId(i as u32), b))
    }

    /// Handles of all bodies in a category, in arena order.
    pub fn ids_of(&self, category: Category) -> Vec<BodyId> {
        self.iter()
            .filter(|(_, b)| b.category() == category)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn count(&self, category: Category) -> usize {
        self.bodies.iter().filter(|b| b.category() == category).count()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for BodyArena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nebula(name: &str) -> CelestialBody {
        CelestialBody::new(
            name,
            "Nebula",
            BodyDetails::Nebula { distance_ly: 10.0, composition: "Dust", age_myr: 2.0 },
        )
    }

    #[test]
    fn insert_returns_sequential_handles() {
        let mut arena = BodyArena::new();
        let a = arena.insert(nebula("a"));
        let b = arena.insert(nebula("b"));
        assert_eq!(a, BodyId(0));
        assert_eq!(b, BodyId(1));
        assert_eq!(arena.get(b).unwrap().name, "b");
    }

    #[test]
    fn missing_handle_resolves_to_none() {
        let arena = BodyArena::new();
        assert!(arena.get(BodyId(3)).is_none());
    }

    #[test]
    fn ids_of_filters_by_category() {
        let mut arena = BodyArena::new();
        arena.insert(CelestialBody::new(
            "GX-00000",
            "Giant",
            BodyDetails::Star { mass_solar: 1.0, temperature_k: 5000.0, age_gyr: 4.0 },
        ));
        let neb = arena.insert(nebula("n"));
        assert_eq!(arena.ids_of(Category::Nebula), vec![neb]);
        assert_eq!(arena.count(Category::Star), 1);
        assert_eq!(arena.count(Category::Planet), 0);
    }

    #[test]
    fn position_is_mutable_through_handle() {
        let mut arena = BodyArena::new();
        let id = arena.insert(nebula("n"));
        arena.get_mut(id).unwrap().position = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(arena.get(id).unwrap().position, Vec3::new(1.0, 2.0, 3.0));
    }
}
