//! World state: the player position and the camera offset
//!
//! Both live in unbounded world space. Neither is clamped, and the two are
//! only combined when projecting to the screen.

use crate::input::{Delta, FrameInput};

/// Player position in world units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerState {
    pub x: f64,
    pub y: f64,
}

/// World point shown at the center of the screen
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraState {
    pub x: f64,
    pub y: f64,
}

impl PlayerState {
    pub fn moved(self, delta: Delta) -> Self {
        Self { x: self.x + delta.dx, y: self.y + delta.dy }
    }
}

impl CameraState {
    pub fn moved(self, delta: Delta) -> Self {
        Self { x: self.x + delta.dx, y: self.y + delta.dy }
    }
}

/// The two records owned by the frame loop
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldState {
    pub player: PlayerState,
    pub camera: CameraState,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next state for one tick of input. An exit tick still moves the
    /// player but stops before the camera pans.
    pub fn stepped(&self, input: &FrameInput) -> Self {
        let player = self.player.moved(input.player);
        if input.exit {
            return Self { player, camera: self.camera };
        }
        Self {
            player,
            camera: self.camera.moved(input.camera),
        }
    }

    pub fn step(&mut self, input: &FrameInput) {
        *self = self.stepped(input);
    }
}
