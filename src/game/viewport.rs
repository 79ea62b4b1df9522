//! World to screen projection
//!
//! The camera offset maps to the screen center. Tiles are generated around
//! the camera each frame with a fixed overscan ring, and carry no state:
//! a tile's shade depends only on its world tile coordinate.

use super::world::CameraState;

/// Checkerboard shade of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileShade {
    Light,
    Dark,
}

/// Shade for a world tile coordinate. `(tile_x + tile_y)` even is light.
pub fn tile_shade(tile_x: f64, tile_y: f64) -> TileShade {
    if (tile_x + tile_y).rem_euclid(2.0) == 0.0 {
        TileShade::Light
    } else {
        TileShade::Dark
    }
}

/// One visible tile for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileView {
    /// World tile coordinate (integral)
    pub tile_x: f64,
    pub tile_y: f64,
    /// Top-left corner on screen
    pub screen_x: f64,
    pub screen_y: f64,
    pub shade: TileShade,
}

/// Fixed-size screen looking into world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub tile_size: f64,
    /// Extra tiles generated past each screen edge
    pub overscan: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, tile_size: f64, overscan: u32) -> Self {
        Self { width, height, tile_size, overscan }
    }

    /// Screen center in pixels
    pub fn half(&self) -> (f64, f64) {
        (f64::from(self.width / 2), f64::from(self.height / 2))
    }

    /// Tiles generated on each side of the camera tile, per axis
    pub fn half_extent(&self) -> (i64, i64) {
        let tiles = |dim: u32| (f64::from(dim) / self.tile_size).ceil() as i64 + i64::from(self.overscan);
        (tiles(self.width), tiles(self.height))
    }

    /// Project a world point to the screen
    pub fn world_to_screen(&self, wx: f64, wy: f64, camera: &CameraState) -> (f64, f64) {
        let (hx, hy) = self.half();
        ((wx - camera.x) + hx, (wy - camera.y) + hy)
    }

    /// World tile coordinate containing a world position on one axis
    pub fn tile_index(&self, world: f64) -> f64 {
        (world / self.tile_size).floor()
    }

    /// Every tile in the visible range, column by column
    pub fn visible_tiles(&self, camera: &CameraState) -> impl Iterator<Item = TileView> {
        let size = self.tile_size;
        let (ext_x, ext_y) = self.half_extent();
        let (hx, hy) = self.half();

        let base_x = self.tile_index(camera.x);
        let base_y = self.tile_index(camera.y);
        // Camera offset within its own tile, in [0, size)
        let phase_x = camera.x - base_x * size;
        let phase_y = camera.y - base_y * size;

        (-ext_x..=ext_x).flat_map(move |dx| {
            (-ext_y..=ext_y).map(move |dy| {
                let (dx, dy) = (dx as f64, dy as f64);
                let tile_x = base_x + dx;
                let tile_y = base_y + dy;
                TileView {
                    tile_x,
                    tile_y,
                    screen_x: dx * size - phase_x + hx,
                    screen_y: dy * size - phase_y + hy,
                    shade: tile_shade(tile_x, tile_y),
                }
            })
        })
    }
}
