//! Input snapshot to per-tick movement
//!
//! Player movement comes from held keys; camera panning comes from holding
//! the pointer button over one of the on-screen pan buttons. The two never
//! feed into each other.

use crate::ui::ButtonLayout;
use super::{Action, InputSnapshot};

/// World-space displacement for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub const ZERO: Delta = Delta { dx: 0.0, dy: 0.0 };

    #[cfg(test)]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Speeds in world units per tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSpeeds {
    pub player: f64,
    pub camera: f64,
}

/// Everything the update phase needs from one tick of input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub player: Delta,
    pub camera: Delta,
    /// Cooperative stop request
    pub exit: bool,
}

/// Sum of the held movement keys, each contributing `speed` on its axis.
/// Diagonals are not normalized.
pub fn player_delta(input: &InputSnapshot, speed: f64) -> Delta {
    let mut delta = Delta::ZERO;

    if input.action_down(Action::MoveUp) {
        delta.dy -= speed;
    }
    if input.action_down(Action::MoveDown) {
        delta.dy += speed;
    }
    if input.action_down(Action::MoveLeft) {
        delta.dx -= speed;
    }
    if input.action_down(Action::MoveRight) {
        delta.dx += speed;
    }

    delta
}

/// Pan from the buttons under a held pointer. Every matching button applies.
pub fn camera_delta(input: &InputSnapshot, layout: &ButtonLayout, speed: f64) -> Delta {
    if !input.pointer_down {
        return Delta::ZERO;
    }

    let (px, py) = input.pointer;
    layout.hits(px, py).fold(Delta::ZERO, |mut delta, dir| {
        let (ux, uy) = dir.unit();
        delta.dx += ux * speed;
        delta.dy += uy * speed;
        delta
    })
}

/// Map a full snapshot for the update phase
pub fn map_input(input: &InputSnapshot, layout: &ButtonLayout, speeds: MoveSpeeds) -> FrameInput {
    FrameInput {
        player: player_delta(input, speeds.player),
        camera: camera_delta(input, layout, speeds.camera),
        exit: input.action_down(Action::Exit),
    }
}
