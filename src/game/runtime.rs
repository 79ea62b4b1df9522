//! Frame loop state
//!
//! `GameState` owns everything that survives between ticks. The host calls
//! `update` then `draw` once per frame with the same input snapshot.

use tracing::{debug, info};
use crate::config::Settings;
use crate::input::{map_input, InputSnapshot, MoveSpeeds};
use crate::ui::ButtonLayout;
use super::renderer::{self, RenderSink};
use super::viewport::Viewport;
use super::world::WorldState;

/// What the host should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Exit was requested; stop the loop normally
    Terminate,
}

pub struct GameState {
    pub world: WorldState,
    viewport: Viewport,
    settings: Settings,
    speeds: MoveSpeeds,
    /// Whether the camera moved last tick (for pan start/stop logging)
    panning: bool,
}

impl GameState {
    pub fn new(settings: Settings) -> Self {
        let viewport = Viewport::new(
            settings.window.width,
            settings.window.height,
            f64::from(settings.grid.tile_size),
            settings.grid.overscan,
        );
        Self {
            world: WorldState::new(),
            viewport,
            speeds: settings.speeds(),
            settings,
            panning: false,
        }
    }

    #[cfg(test)]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Fixed logical screen size
    pub fn screen_size(&self) -> (u32, u32) {
        (self.viewport.width, self.viewport.height)
    }

    /// Pan button layout for this screen. Both phases call this.
    pub fn layout(&self) -> ButtonLayout {
        ButtonLayout::compute(self.viewport.height as i32, &self.settings.buttons)
    }

    /// Advance world state by one tick
    pub fn update(&mut self, input: &InputSnapshot) -> TickOutcome {
        let frame = map_input(input, &self.layout(), self.speeds);
        self.world.step(&frame);
        if frame.exit {
            info!("exit requested");
            return TickOutcome::Terminate;
        }

        let panning = !frame.camera.is_zero();
        if panning != self.panning {
            debug!(panning, camera_x = self.world.camera.x, camera_y = self.world.camera.y, "camera pan");
            self.panning = panning;
        }
        TickOutcome::Continue
    }

    /// Draw the current state: tiles, player, overlay, buttons
    pub fn draw(&self, input: &InputSnapshot, sink: &mut impl RenderSink) {
        renderer::draw_tiles(sink, &self.viewport, &self.world);
        renderer::draw_player(sink, &self.viewport, &self.world, self.settings.player.size);
        renderer::draw_overlay(sink, &self.world);
        renderer::draw_buttons(sink, &self.layout(), input);
    }
}
