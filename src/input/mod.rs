//! Keyboard and mouse input
//!
//! macroquad is polled once per frame into an `InputSnapshot`; the mapper
//! turns a snapshot into player/camera deltas and the exit request.

mod actions;
mod mapping;
mod state;

pub use actions::*;
pub use mapping::*;
pub use state::*;
