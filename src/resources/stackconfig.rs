//! Viewer configuration resource.
//!
//! Settings are loaded from an INI file. Missing keys keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playback]
//! ticks_per_second = 60
//!
//! [sprite]
//! scale = 4.0
//! rotation_speed = 1.0
//!
//! [window]
//! width = 640
//! height = 480
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;
const DEFAULT_SCALE: f32 = 1.0;
const DEFAULT_ROTATION_SPEED: f32 = 1.0;
const DEFAULT_WINDOW_WIDTH: u32 = 640;
const DEFAULT_WINDOW_HEIGHT: u32 = 480;
const DEFAULT_CONFIG_PATH: &str = "./staxie.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StackConfig {
    /// Logical updates per second. Each update steps every cursor once.
    pub ticks_per_second: u32,
    /// Scale applied to spawned sprite stacks.
    pub scale: f32,
    /// Degrees added to each sprite stack's rotation per update.
    pub rotation_speed: f32,
    pub window_width: u32,
    pub window_height: u32,
    pub config_path: PathBuf,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StackConfig {
    pub fn new() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            scale: DEFAULT_SCALE,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Time units passed to every cursor step: `1000 / ticks_per_second`.
    pub fn frame_rate(&self) -> u32 {
        1000 / self.ticks_per_second.max(1)
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [playback] section
        if let Some(tps) = config.getuint("playback", "ticks_per_second").ok().flatten() {
            self.ticks_per_second = (tps as u32).max(1);
        }

        // [sprite] section
        if let Some(scale) = config.getfloat("sprite", "scale").ok().flatten() {
            self.scale = scale as f32;
        }
        if let Some(speed) = config.getfloat("sprite", "rotation_speed").ok().flatten() {
            self.rotation_speed = speed as f32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }

        info!(
            "Loaded config: tps={}, scale={}, rotation_speed={}, {}x{} window",
            self.ticks_per_second,
            self.scale,
            self.rotation_speed,
            self.window_width,
            self.window_height
        );

        Ok(())
    }

    /// Save configuration to the INI file, creating it if needed.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set(
            "playback",
            "ticks_per_second",
            Some(self.ticks_per_second.to_string()),
        );
        config.set("sprite", "scale", Some(self.scale.to_string()));
        config.set(
            "sprite",
            "rotation_speed",
            Some(self.rotation_speed.to_string()),
        );
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
