//! Keyboard action definitions
//!
//! Arrow keys and WASD are both bound to movement; Escape exits.

use macroquad::prelude::KeyCode;

/// Every keyboard-driven action the program reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Player movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // System
    Exit,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Exit,
    ];

    /// Keys that trigger this action (any one is enough)
    pub fn keys(self) -> &'static [KeyCode] {
        match self {
            Action::MoveUp => &[KeyCode::Up, KeyCode::W],
            Action::MoveDown => &[KeyCode::Down, KeyCode::S],
            Action::MoveLeft => &[KeyCode::Left, KeyCode::A],
            Action::MoveRight => &[KeyCode::Right, KeyCode::D],
            Action::Exit => &[KeyCode::Escape],
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of actions held during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const EMPTY: ActionSet = ActionSet(0);

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    /// Builder-style insert
    #[cfg(test)]
    pub fn with(mut self, action: Action) -> Self {
        self.insert(action);
        self
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::EMPTY;
        for action in iter {
            set.insert(action);
        }
        set
    }
}
