use serde::Serialize;

use crate::core::time::LoadingPhase;

/// Smoothed frames-per-second estimate, refreshed every `interval` ticks.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    fps: f32,
    frames: u64,
    interval: u64,
}

impl FpsMeter {
    pub const INITIAL_FPS: f32 = 60.0;
    pub const INTERVAL: u64 = 10;

    pub fn new() -> Self {
        Self {
            fps: Self::INITIAL_FPS,
            frames: 0,
            interval: Self::INTERVAL,
        }
    }

    /// Count one frame. Returns true when the estimate was refreshed.
    pub fn record(&mut self, dt: f32) -> bool {
        self.frames += 1;
        if self.frames % self.interval != 0 || dt <= 0.0 {
            return false;
        }
        let instant = (1.0 / dt).round();
        self.fps = (self.fps * 0.9 + instant * 0.1).round();
        true
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FpsMeter {
    fn default() -> Self {
        Self::new()
    }
}

/// `50000` → `"50,000"`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1.5` → `"1.50x"`.
pub fn format_zoom(zoom: f32) -> String {
    format!("{zoom:.2}x")
}

/// Width of the rotation bar, in percent.
pub fn rotation_percent(speed: f32) -> f32 {
    (speed.abs() * 10_000.0).min(100.0)
}

/// Everything the HUD shows, as the presenter consumes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub frame: u64,
    pub fps: f32,
    pub star_count: String,
    pub particle_count: String,
    pub zoom: String,
    pub rotation_percent: f32,
    pub auto_rotate: bool,
    pub show_planets: bool,
    pub show_nebulae: bool,
    pub deep_scan: bool,
    pub loading: LoadingPhase,
}
