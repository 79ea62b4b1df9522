//! Settings file
//!
//! Uses RON (Rusty Object Notation) so the file stays hand-editable.
//! Every field has a default, so a file only needs the values it changes.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::input::MoveSpeeds;
use crate::ui::ButtonStyle;

/// File name looked up in the working directory when no path is given
pub const DEFAULT_SETTINGS_FILE: &str = "tilewalk.ron";

/// Validation limits for hand-edited files
pub mod limits {
    /// Largest logical screen dimension
    pub const MAX_SCREEN_DIM: u32 = 16384;
    /// Largest tick rate
    pub const MAX_TICK_RATE: u32 = 1000;
    /// Largest button size, spacing or margin
    pub const MAX_BUTTON_DIM: i32 = MAX_SCREEN_DIM as i32;
    /// Smallest tile side
    pub const MIN_TILE_SIZE: u32 = 4;
    /// Most overscan tiles past each screen edge
    pub const MAX_OVERSCAN: u32 = 64;
    /// Most tiles generated in one frame
    pub const MAX_VISIBLE_TILES: u64 = 1 << 20;
}

/// Error type for settings loading and saving
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid settings: {0}")]
    Invalid(String),
}

impl SettingsError {
    /// True when the file simply isn't there
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Logical screen width
    pub width: u32,
    /// Logical screen height
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "Tilewalk - Infinite Map Demo".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// World units per second; divided by the tick rate for the per-tick step
    pub speed_per_second: f64,
    /// Side of the player square in pixels
    pub size: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed_per_second: 200.0,
            size: 28.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// World units per tick while a pan button is held
    pub pan_speed: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self { pan_speed: 8.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Tile side in pixels (and world units)
    pub tile_size: u32,
    /// Tiles generated past each screen edge
    pub overscan: u32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            tile_size: 48,
            overscan: 4,
        }
    }
}

/// All user-tunable settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    /// Update ticks per second
    pub tick_rate: u32,
    pub player: PlayerSettings,
    pub camera: CameraSettings,
    pub grid: GridSettings,
    pub buttons: ButtonStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            tick_rate: 60,
            player: PlayerSettings::default(),
            camera: CameraSettings::default(),
            grid: GridSettings::default(),
            buttons: ButtonStyle::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from RON text
    pub fn from_ron_str(contents: &str) -> Result<Self, SettingsError> {
        let settings: Settings = ron::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron_str(&contents)
    }

    /// Save settings as pretty RON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        let ron_string = ron::ser::to_string_pretty(self, config)?;
        fs::write(path, ron_string)?;
        Ok(())
    }

    /// Check ranges a hand-edited file could get wrong
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| Err(SettingsError::Invalid(msg));

        let w = &self.window;
        if !(1..=limits::MAX_SCREEN_DIM).contains(&w.width) || !(1..=limits::MAX_SCREEN_DIM).contains(&w.height) {
            return invalid(format!(
                "window size {}x{} outside 1..={}",
                w.width, w.height, limits::MAX_SCREEN_DIM
            ));
        }
        if !(1..=limits::MAX_TICK_RATE).contains(&self.tick_rate) {
            return invalid(format!("tick_rate {} outside 1..={}", self.tick_rate, limits::MAX_TICK_RATE));
        }
        if !is_valid_speed(self.player.speed_per_second) {
            return invalid(format!("player.speed_per_second = {}", self.player.speed_per_second));
        }
        if !(self.player.size.is_finite() && self.player.size > 0.0) {
            return invalid(format!("player.size = {}", self.player.size));
        }
        if !is_valid_speed(self.camera.pan_speed) {
            return invalid(format!("camera.pan_speed = {}", self.camera.pan_speed));
        }
        let g = &self.grid;
        if g.tile_size < limits::MIN_TILE_SIZE {
            return invalid(format!("grid.tile_size {} below {}", g.tile_size, limits::MIN_TILE_SIZE));
        }
        if g.overscan > limits::MAX_OVERSCAN {
            return invalid(format!("grid.overscan {} above {}", g.overscan, limits::MAX_OVERSCAN));
        }
        let tiles = visible_tile_count(w.width, w.height, g);
        if tiles > limits::MAX_VISIBLE_TILES {
            return invalid(format!(
                "{} tiles per frame for {}x{} at tile_size {} (max {})",
                tiles, w.width, w.height, g.tile_size, limits::MAX_VISIBLE_TILES
            ));
        }
        let b = &self.buttons;
        let max = limits::MAX_BUTTON_DIM;
        if !(1..=max).contains(&b.size) || !(0..=max).contains(&b.spacing) || !(0..=max).contains(&b.margin) {
            return invalid(format!(
                "buttons size={} spacing={} margin={} (size 1..={max}, others 0..={max})",
                b.size, b.spacing, b.margin
            ));
        }
        Ok(())
    }

    /// Per-tick movement speeds
    pub fn speeds(&self) -> MoveSpeeds {
        MoveSpeeds {
            player: self.player.speed_per_second / f64::from(self.tick_rate),
            camera: self.camera.pan_speed,
        }
    }

    /// Target duration of one tick in seconds
    pub fn tick_period(&self) -> f64 {
        1.0 / f64::from(self.tick_rate)
    }
}

/// Tiles generated per frame: `(2 * ext + 1)` per axis, `ext = ceil(dim / tile) + overscan`
fn visible_tile_count(width: u32, height: u32, grid: &GridSettings) -> u64 {
    let side = |dim: u32| 2 * (u64::from(dim.div_ceil(grid.tile_size)) + u64::from(grid.overscan)) + 1;
    side(width) * side(height)
}

fn is_valid_speed(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.grid.tile_size, 48);
        assert_eq!(settings.buttons, ButtonStyle { size: 48, spacing: 8, margin: 12 });
    }

    #[test]
    fn test_default_player_step() {
        let speeds = Settings::default().speeds();
        assert!((speeds.player - 200.0 / 60.0).abs() < 1e-9);
        assert_eq!(speeds.camera, 8.0);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_ron_str("(camera: (pan_speed: 4.0), window: (width: 1024))").unwrap();
        assert_eq!(settings.camera.pan_speed, 4.0);
        assert_eq!(settings.window.width, 1024);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.tick_rate, 60);
    }

    #[test]
    fn test_empty_struct_is_default() {
        assert_eq!(Settings::from_ron_str("()").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_error() {
        let err = Settings::from_ron_str("(tick_rate: \"fast\")").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        for text in [
            "(tick_rate: 0)",
            "(window: (width: 0))",
            "(grid: (tile_size: 0))",
            "(grid: (tile_size: 3))",
            "(grid: (overscan: 4000000000))",
            "(grid: (overscan: 65))",
            "(window: (width: 16384, height: 16384), grid: (tile_size: 4))",
            "(buttons: (size: 1000000000))",
            "(buttons: (spacing: 16385))",
            "(buttons: (margin: 2147483647))",
            "(player: (speed_per_second: -1.0))",
            "(player: (size: 0.0))",
            "(camera: (pan_speed: -8.0))",
            "(buttons: (size: 0))",
            "(buttons: (spacing: -1))",
        ] {
            let err = Settings::from_ron_str(text).unwrap_err();
            assert!(matches!(err, SettingsError::Invalid(_)), "{text}: {err}");
        }
    }

    #[test]
    fn test_largest_accepted_values_stay_usable() {
        let text = "(window: (width: 16384, height: 16384), \
                    grid: (tile_size: 48, overscan: 64), \
                    buttons: (size: 16384, spacing: 16384, margin: 16384))";
        let settings = Settings::from_ron_str(text).unwrap();

        let layout = crate::ui::ButtonLayout::compute(settings.window.height as i32, &settings.buttons);
        for (_, r) in layout.buttons() {
            assert!(r.right() > r.x && r.bottom() > r.y);
        }
        assert!(visible_tile_count(16384, 16384, &settings.grid) <= limits::MAX_VISIBLE_TILES);
    }

    #[test]
    fn test_default_tile_count() {
        // (2 * (17 + 4) + 1) x (2 * (13 + 4) + 1)
        assert_eq!(visible_tile_count(800, 600, &GridSettings::default()), 43 * 35);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("nope.ron")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);

        let mut settings = Settings::default();
        settings.tick_rate = 30;
        settings.buttons.margin = 20;
        settings.window.title = "Custom".to_string();
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert!((loaded.speeds().player - 200.0 / 30.0).abs() < 1e-9);
    }
}
