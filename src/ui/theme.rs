//! Shared colors and text sizes

use macroquad::prelude::Color;

// =============================================================================
// World
// =============================================================================

/// Tiles where (tile_x + tile_y) is even
pub const TILE_LIGHT: Color = Color::new(0.902, 0.902, 0.902, 1.0); // 230, 230, 230

/// Tiles where (tile_x + tile_y) is odd
pub const TILE_DARK: Color = Color::new(0.824, 0.824, 0.824, 1.0); // 210, 210, 210

/// Player square
pub const PLAYER_COLOR: Color = Color::new(0.196, 0.627, 1.0, 1.0); // 50, 160, 255

// =============================================================================
// Pan buttons
// =============================================================================

pub const BUTTON_IDLE: Color = Color::new(0.392, 0.392, 0.392, 0.784); // 100, 100, 100, 200

pub const BUTTON_HOVER: Color = Color::new(0.314, 0.549, 0.314, 0.863); // 80, 140, 80, 220

pub const BUTTON_PRESSED: Color = Color::new(0.235, 0.627, 0.235, 0.863); // 60, 160, 60, 220

// =============================================================================
// Text
// =============================================================================

/// Button glyphs
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Debug overlay, drawn over light tiles
pub const OVERLAY_TEXT: Color = Color::new(0.08, 0.08, 0.1, 1.0);

/// Debug overlay text size
pub const FONT_SIZE_OVERLAY: f32 = 16.0;

/// Button glyph text size
pub const FONT_SIZE_GLYPH: f32 = 20.0;
