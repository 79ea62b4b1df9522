//! Per-tick input capture
//!
//! Input is polled from macroquad once per frame into a plain snapshot.
//! Both the update and draw phases read the same snapshot, and tests build
//! snapshots by hand without a window.

use macroquad::prelude::*;
use super::{Action, ActionSet};

/// Raw input for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Actions whose keys are currently held
    pub held: ActionSet,
    /// Pointer position in screen pixels
    pub pointer: (i32, i32),
    /// Primary (left) pointer button held
    pub pointer_down: bool,
}

impl InputSnapshot {
    #[cfg(test)]
    /// Snapshot with the given keys held and the pointer parked at the origin
    pub fn keys(held: ActionSet) -> Self {
        Self { held, ..Self::default() }
    }

    #[cfg(test)]
    /// Snapshot with the pointer at `pointer`, button held or not
    pub fn pointer(pointer: (i32, i32), pointer_down: bool) -> Self {
        Self { pointer, pointer_down, ..Self::default() }
    }

    pub fn action_down(&self, action: Action) -> bool {
        self.held.contains(action)
    }
}

/// Reads keyboard and mouse state from macroquad
#[derive(Debug, Default)]
pub struct InputState;

impl InputState {
    pub fn new() -> Self {
        Self
    }

    /// Call once per frame, before update
    pub fn poll(&self) -> InputSnapshot {
        let held = Action::ALL
            .into_iter()
            .filter(|a| Self::keyboard_down(*a))
            .collect();

        let (mx, my) = mouse_position();

        InputSnapshot {
            held,
            // Whole pixels, like the hit rectangles
            pointer: (mx as i32, my as i32),
            pointer_down: is_mouse_button_down(MouseButton::Left),
        }
    }

    fn keyboard_down(action: Action) -> bool {
        action.keys().iter().any(|k| is_key_down(*k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_idle() {
        let snap = InputSnapshot::default();
        assert!(snap.held.is_empty());
        assert!(!snap.pointer_down);
        assert_eq!(snap.pointer, (0, 0));
    }

    #[test]
    fn test_constructors() {
        let snap = InputSnapshot::keys(ActionSet::EMPTY.with(Action::MoveLeft));
        assert!(snap.action_down(Action::MoveLeft));
        assert!(!snap.pointer_down);

        let snap = InputSnapshot::pointer((92, 452), true);
        assert!(snap.pointer_down);
        assert!(snap.held.is_empty());
    }
}
