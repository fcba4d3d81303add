use serde::Serialize;

/// Remaining time below which a countdown counts as expired, seconds.
/// Absorbs the rounding of frame deltas like `1.0 / 60.0`.
const EXPIRY_EPSILON: f64 = 1e-4;

/// One-shot countdown driven by frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    remaining: f64,
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: f64::from(duration),
        }
    }

    /// Advance by `dt` seconds. Returns true only on the call that expires it.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.is_finished() {
            return false;
        }
        self.remaining -= f64::from(dt.max(0.0));
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= EXPIRY_EPSILON
    }
}

/// The "deep scan" overlay: switched on by the user, switches itself off
/// after a fixed duration.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepScan {
    duration: f32,
    timer: Option<Countdown>,
}

impl DeepScan {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            timer: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    /// Inactive → active for `duration`; active → inactive immediately.
    pub fn toggle(&mut self) {
        self.timer = match self.timer {
            Some(_) => None,
            None => Some(Countdown::new(self.duration)),
        };
    }

    pub fn advance(&mut self, dt: f32) {
        if let Some(timer) = self.timer.as_mut() {
            if timer.advance(dt) {
                self.timer = None;
                log::debug!("deep scan expired");
            }
        }
    }
}

/// Startup loading screen state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadingPhase {
    Visible,
    Fading,
    Hidden,
}

impl LoadingPhase {
    pub fn to_wire(self) -> f32 {
        match self {
            LoadingPhase::Visible => 0.0,
            LoadingPhase::Fading => 1.0,
            LoadingPhase::Hidden => 2.0,
        }
    }
}

/// Two chained delays: hold the loading screen, then fade it out.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingScreen {
    hold: Countdown,
    fade: Countdown,
}

impl LoadingScreen {
    pub fn new(hold_secs: f32, fade_secs: f32) -> Self {
        Self {
            hold: Countdown::new(hold_secs),
            fade: Countdown::new(fade_secs),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if !self.hold.is_finished() {
            if self.hold.advance(dt) {
                log::info!("loading screen fading out");
            }
            return;
        }
        if self.fade.advance(dt) {
            log::info!("loading screen hidden");
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        if !self.hold.is_finished() {
            LoadingPhase::Visible
        } else if !self.fade.is_finished() {
            LoadingPhase::Fading
        } else {
            LoadingPhase::Hidden
        }
    }
}
