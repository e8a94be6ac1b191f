//! Initialization diagnostics and the error overlay.
//!
//! Tracks how far startup has progressed, collects non-fatal errors, and
//! drives the fallback error overlay: a watchdog raises it when the app is
//! not ready within [`INIT_WATCHDOG_SECS`], uncaught init failures raise
//! it immediately, and re-display is suppressed for
//! [`ERROR_COOLDOWN_SECS`] to avoid rapid-fire error loops. The overlay
//! offers retry (tear the scene down and set up again) or continue
//! (degraded: dismiss and keep the minimal loop running).

use bevy_ecs::prelude::Resource;
use log::error;

/// Seconds the app may spend initializing before the watchdog fires.
pub const INIT_WATCHDOG_SECS: f64 = 25.0;
/// Minimum seconds between two error overlay displays.
pub const ERROR_COOLDOWN_SECS: f64 = 10.0;

/// Startup progression, recorded as each step completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum InitStage {
    Boot,
    ConfigLoaded,
    WindowReady,
    SceneBuilding,
    AssetsLoading,
    Ready,
}

impl InitStage {
    pub fn label(&self) -> &'static str {
        match self {
            InitStage::Boot => "BOOT",
            InitStage::ConfigLoaded => "CONFIG_LOADED",
            InitStage::WindowReady => "WINDOW_READY",
            InitStage::SceneBuilding => "SCENE_BUILDING",
            InitStage::AssetsLoading => "ASSETS_LOADING",
            InitStage::Ready => "READY",
        }
    }
}

/// Diagnostic state driving the fallback overlay.
#[derive(Resource, Clone, Debug)]
pub struct Diagnostics {
    pub stage: InitStage,
    /// Host platform, shown on the overlay.
    pub device: &'static str,
    /// Rolling list of recorded errors (messages only).
    pub errors: Vec<String>,
    /// Running in degraded mode after a "continue anyway".
    pub degraded: bool,
    started_at: f64,
    watchdog_fired: bool,
    overlay_code: Option<&'static str>,
    last_error_shown: Option<f64>,
}

impl Diagnostics {
    /// `started_at` is the wall-clock time (seconds) init began.
    pub fn new(started_at: f64) -> Self {
        Self {
            stage: InitStage::Boot,
            device: std::env::consts::OS,
            errors: Vec::new(),
            degraded: false,
            started_at,
            watchdog_fired: false,
            overlay_code: None,
            last_error_shown: None,
        }
    }

    pub fn set_stage(&mut self, stage: InitStage) {
        log::debug!("init stage: {}", stage.label());
        self.stage = stage;
    }

    pub fn is_ready(&self) -> bool {
        self.stage == InitStage::Ready
    }

    /// Record a non-fatal error without raising the overlay.
    pub fn record_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        error!("DIAGNOSTIC: {} - {}", self.stage.label(), message);
        self.errors.push(message);
    }

    /// Raise the error overlay, honoring the re-display cooldown.
    ///
    /// Returns `false` when a previous overlay was shown less than
    /// [`ERROR_COOLDOWN_SECS`] ago.
    pub fn show_error(&mut self, code: &'static str, now: f64) -> bool {
        if let Some(last) = self.last_error_shown {
            if now - last < ERROR_COOLDOWN_SECS {
                error!(
                    "Preventing error loop - last error was {:.0}ms ago",
                    (now - last) * 1000.0
                );
                return false;
            }
        }
        self.last_error_shown = Some(now);
        self.overlay_code = Some(code);
        true
    }

    /// Fire the init watchdog if startup has stalled.
    ///
    /// Returns `true` the one time the watchdog raises the overlay.
    pub fn check_watchdog(&mut self, now: f64) -> bool {
        if self.is_ready() || self.watchdog_fired {
            return false;
        }
        if now - self.started_at < INIT_WATCHDOG_SECS {
            return false;
        }
        self.watchdog_fired = true;
        self.record_error("LOADING_STUCK");
        self.show_error("T1", now)
    }

    /// The active overlay error code, if the overlay is up.
    pub fn overlay(&self) -> Option<&'static str> {
        self.overlay_code
    }

    /// Retry: clear the overlay and restart the init timeline. The caller
    /// tears down and rebuilds the scene.
    pub fn retry(&mut self, now: f64) {
        self.overlay_code = None;
        self.watchdog_fired = false;
        self.errors.clear();
        self.started_at = now;
        self.stage = InitStage::SceneBuilding;
    }

    /// Continue anyway: dismiss the overlay and run degraded.
    pub fn continue_degraded(&mut self) {
        self.overlay_code = None;
        self.degraded = true;
        self.stage = InitStage::Ready;
        log::warn!("Continuing with degraded functionality due to initialization errors");
    }
}
