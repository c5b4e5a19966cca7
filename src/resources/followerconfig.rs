//! Follower configuration resource.
//!
//! Manages movement, animation and simulation settings loaded from an INI
//! configuration file. Provides defaults for safe startup and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! move_speed = 2.0
//! rotation_speed = 5.0
//! waypoint_threshold = 0.1
//!
//! [animation]
//! frame_rate = 0.2
//!
//! [debug]
//! path = true
//!
//! [simulation]
//! tick_delta = 0.016666668
//! ticks = 600
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::animation::DEFAULT_FRAME_RATE;
use crate::components::follower::{
    DEFAULT_MOVE_SPEED, DEFAULT_ROTATION_SPEED, DEFAULT_WAYPOINT_THRESHOLD, MovementSettings,
};

/// Default safe values for startup
const DEFAULT_DEBUG_PATH: bool = true;
const DEFAULT_TICK_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_TICKS: u64 = 600;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Follower configuration resource.
///
/// Values here are the defaults applied to every follower spawned from a
/// scene; individual scene entries may override the movement and animation
/// settings.
#[derive(Resource, Debug, Clone)]
pub struct FollowerConfig {
    /// Distance travelled per second.
    pub move_speed: f32,
    /// Turn blend factor per second.
    pub rotation_speed: f32,
    /// Distance at which a waypoint counts as reached.
    pub waypoint_threshold: f32,
    /// Seconds each animation frame is shown.
    pub frame_rate: f32,
    /// Produce closed path geometry for the debug overlay.
    pub debug_path: bool,
    /// Fixed delta used by the headless runner, in seconds.
    pub tick_delta: f32,
    /// Number of ticks the headless runner simulates.
    pub ticks: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl FollowerConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            waypoint_threshold: DEFAULT_WAYPOINT_THRESHOLD,
            frame_rate: DEFAULT_FRAME_RATE,
            debug_path: DEFAULT_DEBUG_PATH,
            tick_delta: DEFAULT_TICK_DELTA,
            ticks: DEFAULT_TICKS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn movement_settings(&self) -> MovementSettings {
        MovementSettings {
            move_speed: self.move_speed,
            rotation_speed: self.rotation_speed,
            waypoint_threshold: self.waypoint_threshold,
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
        self.apply(&config);

        info!(
            "Loaded config {:?}: move_speed={}, rotation_speed={}, threshold={}, frame_rate={}, debug_path={}, tick_delta={}, ticks={}",
            self.config_path,
            self.move_speed,
            self.rotation_speed,
            self.waypoint_threshold,
            self.frame_rate,
            self.debug_path,
            self.tick_delta,
            self.ticks
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [movement] section
        if let Some(v) = config.getfloat("movement", "move_speed").ok().flatten() {
            self.move_speed = v as f32;
        }
        if let Some(v) = config.getfloat("movement", "rotation_speed").ok().flatten() {
            self.rotation_speed = v as f32;
        }
        if let Some(v) = config
            .getfloat("movement", "waypoint_threshold")
            .ok()
            .flatten()
        {
            self.waypoint_threshold = v as f32;
        }

        // [animation] section
        if let Some(v) = config.getfloat("animation", "frame_rate").ok().flatten() {
            self.frame_rate = v as f32;
        }

        // [debug] section
        if let Some(v) = config.getbool("debug", "path").ok().flatten() {
            self.debug_path = v;
        }

        // [simulation] section
        if let Some(v) = config.getfloat("simulation", "tick_delta").ok().flatten() {
            self.tick_delta = v as f32;
        }
        if let Some(v) = config.getuint("simulation", "ticks").ok().flatten() {
            self.ticks = v;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [movement] section
        config.set("movement", "move_speed", Some(self.move_speed.to_string()));
        config.set(
            "movement",
            "rotation_speed",
            Some(self.rotation_speed.to_string()),
        );
        config.set(
            "movement",
            "waypoint_threshold",
            Some(self.waypoint_threshold.to_string()),
        );

        // [animation] section
        config.set("animation", "frame_rate", Some(self.frame_rate.to_string()));

        // [debug] section
        config.set("debug", "path", Some(self.debug_path.to_string()));

        // [simulation] section
        config.set("simulation", "tick_delta", Some(self.tick_delta.to_string()));
        config.set("simulation", "ticks", Some(self.ticks.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FollowerConfig::new();
        assert_eq!(config.movement_settings(), MovementSettings::default());
        assert_eq!(config.frame_rate, 0.2);
        assert!(config.debug_path);
        assert_eq!(config.ticks, 600);
    }

    #[test]
    fn test_partial_ini_keeps_defaults() {
        let mut config = FollowerConfig::new();
        config
            .load_from_str("[movement]\nmove_speed = 4.5\n\n[debug]\npath = false\n")
            .unwrap();
        assert_eq!(config.move_speed, 4.5);
        assert_eq!(config.rotation_speed, DEFAULT_ROTATION_SPEED);
        assert!(!config.debug_path);
        assert_eq!(config.frame_rate, DEFAULT_FRAME_RATE);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = FollowerConfig::with_path("/nonexistent/snailpath/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.move_speed, DEFAULT_MOVE_SPEED);
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!(
            "snailpath_config_test_{}.ini",
            std::process::id()
        ));
        let mut saved = FollowerConfig::with_path(&path);
        saved.move_speed = 7.0;
        saved.ticks = 42;
        saved.debug_path = false;
        saved.save_to_file().unwrap();

        let mut loaded = FollowerConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.move_speed, 7.0);
        assert_eq!(loaded.ticks, 42);
        assert!(!loaded.debug_path);
    }
}
