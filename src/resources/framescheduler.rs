//! Foreground/background loop cadence state machine.
//!
//! The main loop runs one unified frame function; this resource decides
//! the cadence (target-fps vs timer-throttled) and whether the current
//! tick renders. Exactly one mode is active at a time and a visibility
//! change transitions the machine at most once, so neither cadence can be
//! double-scheduled.

use bevy_ecs::prelude::Resource;

/// Which cadence drives the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameMode {
    /// Window visible: vsync/target-fps driven, renders every frame.
    Foreground,
    /// Window hidden: timer-throttled, renders a fraction of ticks.
    Background,
}

/// Cadence state machine plus the per-tick render decision.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FrameScheduler {
    mode: FrameMode,
    /// Whether the render system draws this tick.
    pub render_this_frame: bool,
    /// Background ticks since the last mode change.
    background_ticks: u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self {
            mode: FrameMode::Foreground,
            render_this_frame: true,
            background_ticks: 0,
        }
    }
}

impl FrameScheduler {
    pub fn mode(&self) -> FrameMode {
        self.mode
    }

    /// Feed the current window visibility.
    ///
    /// Returns the new mode only when an actual transition happened;
    /// repeated calls with the same visibility return `None`, so a cadence
    /// can never be started twice.
    pub fn handle_visibility_change(&mut self, visible: bool) -> Option<FrameMode> {
        let wanted = if visible {
            FrameMode::Foreground
        } else {
            FrameMode::Background
        };
        if wanted == self.mode {
            return None;
        }
        self.mode = wanted;
        self.background_ticks = 0;
        Some(wanted)
    }

    /// Begin a foreground tick; always renders.
    pub fn begin_foreground_tick(&mut self) {
        self.render_this_frame = true;
    }

    /// Begin a background tick.
    ///
    /// `render_roll` is a uniform sample in [0, 1); the tick renders when
    /// it falls below `render_rate`. The rate is a tunable constant, not a
    /// semantic contract.
    pub fn begin_background_tick(&mut self, render_roll: f32, render_rate: f32) {
        self.background_ticks += 1;
        self.render_this_frame = render_roll < render_rate;
    }

    pub fn background_ticks(&self) -> u64 {
        self.background_ticks
    }
}
