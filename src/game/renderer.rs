//! Draw passes
//!
//! Every pass reads world state and issues filled rectangles and text to a
//! `RenderSink`. Nothing here mutates game state.

use macroquad::prelude::{draw_rectangle, draw_text, Color};
use crate::input::InputSnapshot;
use crate::ui::{theme, ButtonLayout, Rect};
use super::viewport::{TileShade, Viewport};
use super::world::WorldState;

/// Destination for draw calls. Positions are screen pixels, top-left anchored.
pub trait RenderSink {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

/// Draws straight to the macroquad screen
pub struct MacroquadSink;

impl RenderSink for MacroquadSink {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        // macroquad positions text by its baseline
        draw_text(text, x, y + font_size * 0.75, font_size, color);
    }
}

pub fn shade_color(shade: TileShade) -> Color {
    match shade {
        TileShade::Light => theme::TILE_LIGHT,
        TileShade::Dark => theme::TILE_DARK,
    }
}

/// Checkerboard tiles around the camera
pub fn draw_tiles(sink: &mut impl RenderSink, viewport: &Viewport, world: &WorldState) {
    let size = viewport.tile_size as f32;
    for tile in viewport.visible_tiles(&world.camera) {
        sink.fill_rect(
            tile.screen_x as f32,
            tile.screen_y as f32,
            size,
            size,
            shade_color(tile.shade),
        );
    }
}

/// Player square centered on its projected position
pub fn draw_player(sink: &mut impl RenderSink, viewport: &Viewport, world: &WorldState, size: f32) {
    let (sx, sy) = viewport.world_to_screen(world.player.x, world.player.y, &world.camera);
    let half = f64::from(size) / 2.0;
    sink.fill_rect((sx - half) as f32, (sy - half) as f32, size, size, theme::PLAYER_COLOR);
}

/// Position readout and controls hint
pub fn overlay_text(world: &WorldState) -> String {
    format!(
        "Player: {:.1}, {:.1}  Camera: {:.1}, {:.1}  (Arrows/WASD to move player, Esc to exit)",
        world.player.x, world.player.y, world.camera.x, world.camera.y
    )
}

pub fn draw_overlay(sink: &mut impl RenderSink, world: &WorldState) {
    sink.text(&overlay_text(world), 0.0, 0.0, theme::FONT_SIZE_OVERLAY, theme::OVERLAY_TEXT);
}

/// Fill color for a button given the pointer state
pub fn button_color(rect: &Rect, input: &InputSnapshot) -> Color {
    let (px, py) = input.pointer;
    match (rect.contains(px, py), input.pointer_down) {
        (true, true) => theme::BUTTON_PRESSED,
        (true, false) => theme::BUTTON_HOVER,
        _ => theme::BUTTON_IDLE,
    }
}

/// The pan button cross and its glyphs
pub fn draw_buttons(sink: &mut impl RenderSink, layout: &ButtonLayout, input: &InputSnapshot) {
    for (dir, r) in layout.buttons() {
        sink.fill_rect(r.x as f32, r.y as f32, r.w as f32, r.h as f32, button_color(&r, input));
        sink.text(
            dir.glyph(),
            (r.x + 6) as f32,
            (r.y + 6) as f32,
            theme::FONT_SIZE_GLYPH,
            theme::TEXT_COLOR,
        );
    }
}
