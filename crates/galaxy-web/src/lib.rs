pub mod runner;

pub use runner::ExplorerRunner;

use std::cell::RefCell;

use galaxy_engine::InputEvent;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<ExplorerRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut ExplorerRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().expect("Explorer not initialized. Call galaxy_init() first.");
        f(runner)
    })
}

/// 64 bits of per-session entropy from the host.
fn session_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[wasm_bindgen]
pub fn galaxy_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut config = ExplorerRunner::config_from_json(config_json.as_deref());
    if config.seed.is_none() {
        config.seed = Some(session_seed());
    }
    let runner = ExplorerRunner::new(config);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("galaxy explorer: initialized");
}

#[wasm_bindgen]
pub fn galaxy_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn galaxy_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn galaxy_wheel(delta_y: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta_y }));
}

#[wasm_bindgen]
pub fn galaxy_click() {
    with_runner(|r| r.push_input(InputEvent::Click));
}

#[wasm_bindgen]
pub fn galaxy_custom_event(kind: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
}

#[wasm_bindgen]
pub fn galaxy_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len())
}

#[wasm_bindgen]
pub fn get_disk_points_ptr() -> *const f32 {
    with_runner(|r| r.disk_points_ptr())
}

#[wasm_bindgen]
pub fn get_disk_point_count() -> u32 {
    with_runner(|r| r.disk_point_count())
}

#[wasm_bindgen]
pub fn get_background_points_ptr() -> *const f32 {
    with_runner(|r| r.background_points_ptr())
}

#[wasm_bindgen]
pub fn get_background_point_count() -> u32 {
    with_runner(|r| r.background_point_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_meshes() -> u32 {
    with_runner(|r| r.max_meshes())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}

// ---- Presenter payloads ----

#[wasm_bindgen]
pub fn get_hud_json() -> String {
    with_runner(|r| r.hud_json())
}

#[wasm_bindgen]
pub fn get_selection_json() -> String {
    with_runner(|r| r.selection_json())
}

#[wasm_bindgen]
pub fn get_tooltip_json(width: f32, height: f32) -> String {
    with_runner(|r| r.tooltip_json(width, height))
}

#[wasm_bindgen]
pub fn get_scene_json() -> String {
    with_runner(|r| r.scene_json())
}
