use glam::{Quat, Vec2, Vec3};
use rand::Rng;

use crate::api::config::{ConfigError, ExplorerConfig};
use crate::api::types::{BodyId, Category, HudEvent};
use crate::bridge::protocol::{self, ProtocolLayout};
use crate::core::bodies::BodyArena;
use crate::core::time::{LoadingPhase, LoadingScreen};
use crate::core::view::{PointerState, ViewState, Viewport};
use crate::generator::{self, seeded_rng};
use crate::input::command::Command;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::{MeshBuffer, MeshKind};
use crate::renderer::scene::{self, SceneLayers};
use crate::systems::hud::{self, FpsMeter, HudSnapshot};
use crate::systems::info::{self, InfoPanel, Tooltip};
use crate::systems::picking::{self, PickHit, PickTarget};

/// HUD event kinds written after the mesh section.
/// a = fps, b = star count, c = particle count.
pub const EVENT_STATS: f32 = 1.0;
/// a = current zoom, b = rotation bar percent, c = flags bitfield.
pub const EVENT_VIEW: f32 = 2.0;
/// a = selected index (-1 for none).
pub const EVENT_SELECTION: f32 = 3.0;
/// a = loading phase.
pub const EVENT_LOADING: f32 = 4.0;
/// a = 1 when the deep scan turned on, 0 when it turned off.
pub const EVENT_DEEP_SCAN: f32 = 5.0;

/// Base angular step of the innermost planet, radians per tick.
pub const PLANET_ORBIT_BASE: f32 = 0.001;
/// Extra angular step per catalog index, radians per tick.
pub const PLANET_ORBIT_STEP: f32 = 0.0005;

/// Angular step of planet `index`, radians per tick.
pub fn planet_orbit_speed(index: usize) -> f32 {
    PLANET_ORBIT_BASE + index as f32 * PLANET_ORBIT_STEP
}

/// The galaxy explorer: generated bodies, view state, camera and the
/// buffers the renderer reads. Driven by `tick(dt)` once per frame.
pub struct Explorer {
    config: ExplorerConfig,
    arena: BodyArena,
    planet_ids: Vec<BodyId>,
    nebula_ids: Vec<BodyId>,
    star_count: usize,
    scene: SceneLayers,
    view: ViewState,
    pointer: PointerState,
    viewport: Viewport,
    camera: PerspectiveCamera,
    fps: FpsMeter,
    loading: LoadingScreen,
    input: InputQueue,
    meshes: MeshBuffer,
    events: Vec<HudEvent>,
    layout: ProtocolLayout,
    frame: Vec<f32>,
    frame_counter: u64,
}

impl Explorer {
    /// Build an explorer, seeding generation from the config.
    pub fn new(config: ExplorerConfig) -> Self {
        let mut rng = seeded_rng(config.seed_or_default());
        Self::with_rng(config, &mut rng)
    }

    /// Parse a JSON config and build an explorer from it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(ExplorerConfig::from_json(json)?))
    }

    /// Build an explorer drawing every random value from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(config: ExplorerConfig, rng: &mut R) -> Self {
        let galaxy = generator::generate(&config.galaxy, rng);
        let scene = scene::build_scene(&galaxy.stars, &galaxy.background);

        let mut arena = BodyArena::with_capacity(
            galaxy.stars.len() + galaxy.planets.len() + galaxy.nebulae.len(),
        );
        arena.extend(galaxy.stars);
        arena.extend(galaxy.planets);
        arena.extend(galaxy.nebulae);
        let star_count = arena.count(Category::Star);
        let planet_ids = arena.ids_of(Category::Planet);
        let nebula_ids = arena.ids_of(Category::Nebula);

        let viewport = config.viewport;
        let camera = PerspectiveCamera::new(&config.camera, viewport.aspect());
        let layout = ProtocolLayout::from_config(&config);
        let frame = vec![0.0; layout.buffer_total_floats];

        let mut explorer = Self {
            view: ViewState::new(config.zoom, config.deep_scan_secs),
            pointer: PointerState::centered(viewport),
            loading: LoadingScreen::new(config.loading_hold_secs, config.loading_fade_secs),
            fps: FpsMeter::new(),
            input: InputQueue::new(),
            meshes: MeshBuffer::new(),
            events: Vec::with_capacity(layout.max_events),
            arena,
            planet_ids,
            nebula_ids,
            star_count,
            scene,
            viewport,
            camera,
            layout,
            frame,
            frame_counter: 0,
            config,
        };
        explorer.camera.apply_zoom(explorer.view.current_zoom);
        explorer.rebuild_frame();
        log::info!(
            "explorer ready: {} bodies, {} frame floats",
            explorer.arena.len(),
            explorer.layout.buffer_total_floats
        );
        explorer
    }

    /// Queue a raw event; it is applied at the start of the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply one command immediately.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::PointerMoved { px } => {
                self.pointer = PointerState::from_pixels(px, self.viewport);
                self.view.hovered = self.pick_at(self.pointer.ndc).map(|hit| hit.id);
            }
            Command::Zoom(step) => self.view.zoom(step),
            Command::Select => {
                self.view.selected = self.pick_at(self.pointer.ndc).map(|hit| hit.id);
                match self.view.selected.and_then(|id| self.arena.get(id)) {
                    Some(body) => log::debug!("selected {}", body.name),
                    None => log::debug!("selection cleared"),
                }
                self.emit(HudEvent::new(EVENT_SELECTION, BodyId::to_wire(self.view.selected), 0.0, 0.0));
            }
            Command::ToggleAutoRotate => self.view.auto_rotate = !self.view.auto_rotate,
            Command::TogglePlanets => {
                self.view.show_planets = !self.view.show_planets;
                if !self.view.show_planets {
                    self.release_hidden(Category::Planet);
                }
            }
            Command::ToggleNebulae => {
                self.view.show_nebulae = !self.view.show_nebulae;
                if !self.view.show_nebulae {
                    self.release_hidden(Category::Nebula);
                }
            }
            Command::ToggleDeepScan => {
                self.view.deep_scan.toggle();
                let active = self.view.deep_scan.is_active();
                self.emit(HudEvent::new(EVENT_DEEP_SCAN, if active { 1.0 } else { 0.0 }, 0.0, 0.0));
            }
            Command::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                self.camera.set_aspect(self.viewport.aspect());
                self.pointer = PointerState::from_pixels(self.pointer.px, self.viewport);
            }
        }
    }

    /// Run one frame.
    pub fn tick(&mut self, dt: f32) {
        self.events.clear();

        for event in self.input.drain() {
            if let Some(command) = Command::from_event(event) {
                self.apply(command);
            }
        }

        let was_scanning = self.view.deep_scan.is_active();
        self.view.deep_scan.advance(dt);
        if was_scanning && !self.view.deep_scan.is_active() {
            self.emit(HudEvent::new(EVENT_DEEP_SCAN, 0.0, 0.0, 0.0));
        }

        let phase = self.loading.phase();
        self.loading.advance(dt);
        if self.loading.phase() != phase {
            self.emit(HudEvent::new(EVENT_LOADING, self.loading.phase().to_wire(), 0.0, 0.0));
        }

        self.view.interpolate_zoom(dt);
        self.camera.apply_zoom(self.view.current_zoom);

        if self.view.auto_rotate {
            self.view.galaxy_rotation += self.config.rotation_speed;
            self.view.nebula_rotation -= self.config.rotation_speed * self.config.nebula_parallax;
        }

        if self.view.show_planets {
            self.advance_orbits();
        }

        self.frame_counter += 1;
        self.fps.record(dt);
        self.emit(HudEvent::new(
            EVENT_STATS,
            self.fps.fps(),
            self.star_count as f32,
            self.particle_count() as f32,
        ));
        self.emit(HudEvent::new(
            EVENT_VIEW,
            self.view.current_zoom,
            hud::rotation_percent(self.config.rotation_speed),
            self.flags(),
        ));

        self.rebuild_frame();
    }

    /// Drop hover and selection on bodies of a group that was just hidden.
    fn release_hidden(&mut self, category: Category) {
        let in_group = |id: Option<BodyId>, arena: &BodyArena| {
            id.and_then(|id| arena.get(id))
                .is_some_and(|body| body.category() == category)
        };
        if in_group(self.view.hovered, &self.arena) {
            self.view.hovered = None;
        }
        if in_group(self.view.selected, &self.arena) {
            self.view.selected = None;
            log::debug!("selection cleared, {category:?} hidden");
            self.emit(HudEvent::new(EVENT_SELECTION, BodyId::to_wire(None), 0.0, 0.0));
        }
    }

    fn advance_orbits(&mut self) {
        for (index, id) in self.planet_ids.iter().enumerate() {
            if let Some(planet) = self.arena.get_mut(*id) {
                let step = Quat::from_rotation_y(planet_orbit_speed(index));
                planet.position = step * planet.position;
            }
        }
    }

    fn emit(&mut self, event: HudEvent) {
        if self.events.len() < self.layout.max_events {
            self.events.push(event);
        } else {
            log::warn!("event buffer full, dropping event kind {}", event.kind);
        }
    }

    /// Nearest visible planet or nebula under the given NDC point.
    pub fn pick_at(&self, ndc: Vec2) -> Option<PickHit> {
        let ray = self.camera.ray_from_ndc(ndc);
        let planets: &[BodyId] = if self.view.show_planets { &self.planet_ids } else { &[] };
        let nebulae: &[BodyId] = if self.view.show_nebulae { &self.nebula_ids } else { &[] };
        let targets = planets.iter().chain(nebulae).filter_map(|&id| {
            let body = self.arena.get(id)?;
            Some(PickTarget {
                id,
                center: self.world_position(id)?,
                radius: body.radius,
            })
        });
        picking::pick_nearest(&ray, targets)
    }

    /// World-space position of a body, with its group rotation applied.
    pub fn world_position(&self, id: BodyId) -> Option<Vec3> {
        let body = self.arena.get(id)?;
        let rotation = match body.category() {
            Category::Star => self.view.galaxy_rotation,
            Category::Planet => 0.0,
            Category::Nebula => self.view.nebula_rotation,
        };
        Some(Quat::from_rotation_y(rotation) * body.position)
    }

    fn flags(&self) -> f32 {
        protocol::encode_flags(
            self.view.auto_rotate,
            self.view.show_planets,
            self.view.show_nebulae,
            self.view.deep_scan.is_active(),
        )
    }

    fn highlight(&self, id: BodyId) -> f32 {
        if self.view.selected == Some(id) {
            2.0
        } else if self.view.hovered == Some(id) {
            1.0
        } else {
            0.0
        }
    }

    fn rebuild_frame(&mut self) {
        self.meshes.clear();
        for decoration in &self.scene.decorations {
            self.meshes.push(*decoration);
        }
        for (ids, kind) in [(&self.planet_ids, MeshKind::Planet), (&self.nebula_ids, MeshKind::Nebula)] {
            for &id in ids.iter() {
                if let Some(body) = self.arena.get(id) {
                    let instance = scene::body_instance(id, body, kind, self.highlight(id));
                    self.meshes.push(instance);
                }
            }
        }

        let max_meshes = self.layout.max_meshes;
        if self.meshes.instances.len() > max_meshes {
            log::warn!(
                "{} meshes exceed capacity {}, truncating",
                self.meshes.instances.len(),
                max_meshes
            );
            self.meshes.instances.truncate(max_meshes);
        }

        let header = [
            self.frame_counter as f32,
            self.camera.position.x,
            self.camera.position.y,
            self.camera.position.z,
            self.view.current_zoom,
            self.view.galaxy_rotation,
            self.view.nebula_rotation,
            self.flags(),
            self.meshes.instance_count() as f32,
            BodyId::to_wire(self.view.hovered),
            BodyId::to_wire(self.view.selected),
            self.fps.fps(),
            self.loading.phase().to_wire(),
            protocol::PROTOCOL_VERSION,
            self.camera.aspect(),
            self.events.len() as f32,
        ];
        self.frame[..protocol::HEADER_FLOATS].copy_from_slice(&header);

        let mesh_floats = self.meshes.as_floats();
        let mesh_start = self.layout.mesh_data_offset;
        self.frame[mesh_start..mesh_start + mesh_floats.len()].copy_from_slice(mesh_floats);

        let event_floats: &[f32] = bytemuck::cast_slice(&self.events);
        let event_start = self.layout.event_data_offset;
        self.frame[event_start..event_start + event_floats.len()].copy_from_slice(event_floats);
    }

    // ---- Presenter payloads ----

    pub fn hud_snapshot(&self) -> HudSnapshot {
        HudSnapshot {
            frame: self.frame_counter,
            fps: self.fps.fps(),
            star_count: hud::format_count(self.star_count),
            particle_count: hud::format_count(self.particle_count()),
            zoom: hud::format_zoom(self.view.current_zoom),
            rotation_percent: hud::rotation_percent(self.config.rotation_speed),
            auto_rotate: self.view.auto_rotate,
            show_planets: self.view.show_planets,
            show_nebulae: self.view.show_nebulae,
            deep_scan: self.view.deep_scan.is_active(),
            loading: self.loading.phase(),
        }
    }

    pub fn selection_panel(&self) -> InfoPanel {
        self.view
            .selected
            .and_then(|id| self.arena.get(id))
            .map(InfoPanel::for_body)
            .unwrap_or_else(InfoPanel::empty)
    }

    /// Tooltip for the hovered body, placed for a box of `size` pixels.
    pub fn tooltip(&self, size: Vec2) -> Option<Tooltip> {
        let body = self.arena.get(self.view.hovered?)?;
        let anchor = info::place_tooltip(self.pointer.px, size, self.viewport);
        Some(Tooltip::for_body(body, anchor))
    }

    // ---- Accessors ----

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn arena(&self) -> &BodyArena {
        &self.arena
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn scene(&self) -> &SceneLayers {
        &self.scene
    }

    pub fn planet_ids(&self) -> &[BodyId] {
        &self.planet_ids
    }

    pub fn nebula_ids(&self) -> &[BodyId] {
        &self.nebula_ids
    }

    pub fn star_count(&self) -> usize {
        self.star_count
    }

    /// Disk stars plus backdrop points.
    pub fn particle_count(&self) -> usize {
        self.star_count + self.scene.background.len()
    }

    pub fn fps(&self) -> f32 {
        self.fps.fps()
    }

    pub fn loading_phase(&self) -> LoadingPhase {
        self.loading.phase()
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    /// HUD events of the last tick.
    pub fn events(&self) -> &[HudEvent] {
        &self.events
    }

    pub fn meshes(&self) -> &MeshBuffer {
        &self.meshes
    }

    /// Header, meshes and events of the last tick.
    pub fn frame(&self) -> &[f32] {
        &self.frame
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame.len() as u32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn disk_points_ptr(&self) -> *const f32 {
        self.scene.disk.points_ptr()
    }

    pub fn disk_point_count(&self) -> u32 {
        self.scene.disk.len() as u32
    }

    pub fn background_points_ptr(&self) -> *const f32 {
        self.scene.background.points_ptr()
    }

    pub fn background_point_count(&self) -> u32 {
        self.scene.background.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GalaxyParams;

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            seed: Some(11),
            galaxy: GalaxyParams {
                star_count: 200,
                background_count: 50,
                ..GalaxyParams::default()
            },
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn arena_order_is_stars_planets_nebulae() {
        let explorer = Explorer::new(small_config());
        assert_eq!(explorer.star_count(), 200);
        assert_eq!(explorer.planet_ids(), &[200, 201, 202, 203, 204].map(BodyId));
        assert_eq!(explorer.nebula_ids(), &[205, 206, 207, 208].map(BodyId));
        assert_eq!(explorer.particle_count(), 250);
    }

    #[test]
    fn initial_frame_header() {
        let explorer = Explorer::new(small_config());
        let frame = explorer.frame();
        assert_eq!(frame.len(), explorer.layout().buffer_total_floats);
        assert_eq!(frame[protocol::HEADER_FRAME_COUNTER], 0.0);
        assert_eq!(frame[protocol::HEADER_CAMERA_Y], 50.0);
        assert!((frame[protocol::HEADER_CAMERA_Z] - 100.0).abs() < 1e-4);
        assert_eq!(frame[protocol::HEADER_MESH_COUNT], 11.0);
        assert_eq!(frame[protocol::HEADER_HOVERED], -1.0);
        assert_eq!(frame[protocol::HEADER_SELECTED], -1.0);
        assert_eq!(frame[protocol::HEADER_FLAGS], protocol::FLAG_AUTO_ROTATE as f32);
        assert_eq!(frame[protocol::HEADER_PROTOCOL_VERSION], protocol::PROTOCOL_VERSION);
    }

    #[test]
    fn frame_carries_body_indices() {
        let explorer = Explorer::new(small_config());
        let meshes = &explorer.meshes().instances;
        let bodies: Vec<f32> = meshes.iter().map(|m| m.body).collect();
        assert_eq!(&bodies[..2], &[-1.0, -1.0]);
        assert_eq!(bodies[2], 200.0);
        assert_eq!(bodies[10], 208.0);
        let offset = explorer.layout().mesh_data_offset;
        assert_eq!(explorer.frame()[offset + 2 * protocol::MESH_FLOATS + 8], 200.0);
    }

    #[test]
    fn mesh_capacity_truncates() {
        let config = ExplorerConfig { max_meshes: 4, ..small_config() };
        let explorer = Explorer::new(config);
        assert_eq!(explorer.meshes().instance_count(), 4);
        assert_eq!(explorer.frame().len(), 16 + 4 * 16 + 16 * 4);
    }

    #[test]
    fn tick_emits_stats_and_view_events() {
        let mut explorer = Explorer::new(small_config());
        explorer.tick(1.0 / 60.0);
        let kinds: Vec<f32> = explorer.events().iter().map(|e| e.kind).collect();
        assert!(kinds.contains(&EVENT_STATS));
        assert!(kinds.contains(&EVENT_VIEW));
        let stats = explorer.events().iter().find(|e| e.kind == EVENT_STATS).unwrap();
        assert_eq!(stats.b, 200.0);
        assert_eq!(stats.c, 250.0);
        assert_eq!(explorer.frame()[protocol::HEADER_EVENT_COUNT], explorer.events().len() as f32);
    }

    #[test]
    fn queued_input_applies_on_tick() {
        let mut explorer = Explorer::new(small_config());
        explorer.push_input(InputEvent::Custom { kind: 2, a: 0.0, b: 0.0, c: 0.0 });
        assert!(!explorer.view().show_planets);
        explorer.tick(0.016);
        assert!(explorer.view().show_planets);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut explorer = Explorer::new(small_config());
        explorer.apply(Command::Resize { width: 800.0, height: 800.0 });
        assert!((explorer.camera().aspect() - 1.0).abs() < 1e-6);
        assert_eq!(explorer.viewport(), Viewport::new(800.0, 800.0));
    }

    #[test]
    fn loading_event_on_phase_change() {
        let mut explorer = Explorer::new(small_config());
        explorer.tick(3.0);
        let loading = explorer.events().iter().find(|e| e.kind == EVENT_LOADING).unwrap();
        assert_eq!(loading.a, LoadingPhase::Fading.to_wire());
        explorer.tick(0.1);
        assert!(explorer.events().iter().all(|e| e.kind != EVENT_LOADING));
    }
}
