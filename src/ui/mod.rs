//! Screen-space UI pieces: hit rectangles, the pan button cross, colors
//!
//! Immediate mode: nothing here is retained between frames.

mod rect;
mod buttons;
pub mod theme;

pub use rect::*;
pub use buttons::*;
