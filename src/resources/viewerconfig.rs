//! Viewer configuration resource.
//!
//! Settings for the `spriteview` tool, loaded from an INI file. Missing keys
//! keep their defaults so a partial (or absent) file is fine.
//!
//! # Configuration File Format
//!
//! ```ini
//! [package]
//! manifest = ./assets/actors.json
//!
//! [window]
//! width = 960
//! height = 540
//! target_fps = 60
//! zoom = 4
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_MANIFEST_PATH: &str = "./assets/actors.json";
const DEFAULT_WINDOW_WIDTH: u32 = 960;
const DEFAULT_WINDOW_HEIGHT: u32 = 540;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ZOOM: f32 = 4.0;
pub const DEFAULT_CONFIG_PATH: &str = "./spriteview.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Actor package manifest.
    pub manifest_path: PathBuf,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    /// Screen pixels per frame pixel.
    pub zoom: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerConfig {
    pub fn new() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            zoom: DEFAULT_ZOOM,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Returns an error if the
    /// file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [package] section
        if let Some(manifest) = config.get("package", "manifest") {
            self.manifest_path = PathBuf::from(manifest);
        }

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
        if let Some(zoom) = config
            .getfloat("window", "zoom")
            .ok()
            .flatten()
            .filter(|zoom| *zoom > 0.0)
        {
            self.zoom = zoom as f32;
        }

        info!(
            "Loaded config: manifest {:?}, {}x{} window, fps={}, zoom={}",
            self.manifest_path, self.window_width, self.window_height, self.target_fps, self.zoom
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set(
            "package",
            "manifest",
            Some(self.manifest_path.display().to_string()),
        );

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "zoom", Some(self.zoom.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("actorsprites_{}_{}.ini", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::new();
        assert_eq!(config.window_size(), (960, 540));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.config_path, PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let mut config = ViewerConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (960, 540));
    }

    #[test]
    fn test_partial_file_overrides_only_present_keys() {
        let path = temp_path("partial");
        std::fs::write(&path, "[window]\nwidth = 320\nzoom = 2.5\n").unwrap();
        let mut config = ViewerConfig::with_path(&path);
        config.load_from_file().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.window_width, 320);
        assert_eq!(config.window_height, 540);
        assert_eq!(config.zoom, 2.5);
        assert_eq!(config.manifest_path, PathBuf::from(DEFAULT_MANIFEST_PATH));
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved");
        let mut config = ViewerConfig::with_path(&path);
        config.manifest_path = PathBuf::from("other.json");
        config.target_fps = 30;
        config.save_to_file().unwrap();

        let mut loaded = ViewerConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
