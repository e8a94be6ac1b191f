//! Application configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [camera]
//! fov_y = 75
//! ui_distance = 25
//!
//! [physics]
//! gravity_x = 0.0
//! gravity_y = -9.8
//! allow_sleep = true
//! linear_sleep_threshold = 0.2
//! angular_sleep_threshold = 0.4
//! solver_iterations = 4
//!
//! [background]
//! render_rate = 0.1
//! frame_interval_ms = 100
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_FOV_Y: f32 = 75.0;
const DEFAULT_UI_DISTANCE: f32 = 25.0;
const DEFAULT_GRAVITY_X: f32 = 0.0;
const DEFAULT_GRAVITY_Y: f32 = -9.8;
const DEFAULT_ALLOW_SLEEP: bool = true;
const DEFAULT_LINEAR_SLEEP_THRESHOLD: f32 = 0.2;
const DEFAULT_ANGULAR_SLEEP_THRESHOLD: f32 = 0.4;
const DEFAULT_SOLVER_ITERATIONS: u32 = 4;
const DEFAULT_BACKGROUND_RENDER_RATE: f32 = 0.1;
const DEFAULT_BACKGROUND_FRAME_INTERVAL_MS: u64 = 100;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_MANIFEST_PATH: &str = "./props.json";

/// Application configuration resource.
///
/// Stores window settings, the UI camera model, physics tuning, and the
/// background-cadence parameters. All values are plain data read once at
/// startup.
#[derive(Resource, Debug, Clone)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second for the foreground cadence.
    pub target_fps: u32,
    /// Vertical field of view of the modeled UI camera, in degrees.
    pub fov_y: f32,
    /// Distance from the camera to the UI plane, in world units.
    pub ui_distance: f32,
    /// Gravity vector applied to the physics world.
    pub gravity_x: f32,
    pub gravity_y: f32,
    /// Whether dynamic bodies may sleep.
    pub allow_sleep: bool,
    /// Sleep thresholds forwarded to body activation.
    pub linear_sleep_threshold: f32,
    pub angular_sleep_threshold: f32,
    /// Solver iteration count for the physics step.
    pub solver_iterations: u32,
    /// Fraction of background ticks that render (0.0..=1.0).
    pub background_render_rate: f32,
    /// Sleep interval between background ticks, in milliseconds.
    pub background_frame_interval_ms: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
    /// Path to the prop manifest (set from the CLI, not the INI file).
    pub manifest_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fov_y: DEFAULT_FOV_Y,
            ui_distance: DEFAULT_UI_DISTANCE,
            gravity_x: DEFAULT_GRAVITY_X,
            gravity_y: DEFAULT_GRAVITY_Y,
            allow_sleep: DEFAULT_ALLOW_SLEEP,
            linear_sleep_threshold: DEFAULT_LINEAR_SLEEP_THRESHOLD,
            angular_sleep_threshold: DEFAULT_ANGULAR_SLEEP_THRESHOLD,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
            background_render_rate: DEFAULT_BACKGROUND_RENDER_RATE,
            background_frame_interval_ms: DEFAULT_BACKGROUND_FRAME_INTERVAL_MS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [camera] section
        if let Some(fov) = config.getfloat("camera", "fov_y").ok().flatten() {
            self.fov_y = fov as f32;
        }
        if let Some(dist) = config.getfloat("camera", "ui_distance").ok().flatten() {
            self.ui_distance = dist as f32;
        }

        // [physics] section
        if let Some(gx) = config.getfloat("physics", "gravity_x").ok().flatten() {
            self.gravity_x = gx as f32;
        }
        if let Some(gy) = config.getfloat("physics", "gravity_y").ok().flatten() {
            self.gravity_y = gy as f32;
        }
        if let Some(sleep) = config.getbool("physics", "allow_sleep").ok().flatten() {
            self.allow_sleep = sleep;
        }
        if let Some(lin) = config
            .getfloat("physics", "linear_sleep_threshold")
            .ok()
            .flatten()
        {
            self.linear_sleep_threshold = lin as f32;
        }
        if let Some(ang) = config
            .getfloat("physics", "angular_sleep_threshold")
            .ok()
            .flatten()
        {
            self.angular_sleep_threshold = ang as f32;
        }
        if let Some(iters) = config
            .getuint("physics", "solver_iterations")
            .ok()
            .flatten()
        {
            self.solver_iterations = iters as u32;
        }

        // [background] section
        if let Some(rate) = config.getfloat("background", "render_rate").ok().flatten() {
            self.background_render_rate = (rate as f32).clamp(0.0, 1.0);
        }
        if let Some(interval) = config
            .getuint("background", "frame_interval_ms")
            .ok()
            .flatten()
        {
            self.background_frame_interval_ms = interval;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, fov={}, ui_distance={}, gravity=({}, {})",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.fov_y,
            self.ui_distance,
            self.gravity_x,
            self.gravity_y
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("camera", "fov_y", Some(self.fov_y.to_string()));
        config.set("camera", "ui_distance", Some(self.ui_distance.to_string()));

        config.set("physics", "gravity_x", Some(self.gravity_x.to_string()));
        config.set("physics", "gravity_y", Some(self.gravity_y.to_string()));
        config.set("physics", "allow_sleep", Some(self.allow_sleep.to_string()));
        config.set(
            "physics",
            "linear_sleep_threshold",
            Some(self.linear_sleep_threshold.to_string()),
        );
        config.set(
            "physics",
            "angular_sleep_threshold",
            Some(self.angular_sleep_threshold.to_string()),
        );
        config.set(
            "physics",
            "solver_iterations",
            Some(self.solver_iterations.to_string()),
        );

        config.set(
            "background",
            "render_rate",
            Some(self.background_render_rate.to_string()),
        );
        config.set(
            "background",
            "frame_interval_ms",
            Some(self.background_frame_interval_ms.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_safe() {
        let cfg = AppConfig::new();
        assert!(cfg.window_width > 0);
        assert!(cfg.window_height > 0);
        assert!(cfg.target_fps > 0);
        assert!(cfg.fov_y > 0.0 && cfg.fov_y < 180.0);
        assert!(cfg.ui_distance > 0.0);
        assert!(cfg.solver_iterations > 0);
        assert!((0.0..=1.0).contains(&cfg.background_render_rate));
    }

    #[test]
    fn test_with_path_keeps_defaults() {
        let cfg = AppConfig::with_path("/tmp/other.ini");
        assert_eq!(cfg.config_path, PathBuf::from("/tmp/other.ini"));
        assert_eq!(cfg.window_width, AppConfig::new().window_width);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let mut cfg = AppConfig::with_path("/definitely/not/here.ini");
        assert!(cfg.load_from_file().is_err());
    }
}
