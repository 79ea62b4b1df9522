//! Game core
//!
//! One player square and one camera on an unbounded tile grid.
//!
//! Key pieces:
//! - World: the player position and camera offset, stepped once per tick
//! - Viewport: world/screen projection and the procedural checkerboard
//! - Renderer: draw passes over a `RenderSink`
//! - Runtime: the update/draw pair the host calls every frame

pub mod world;
pub mod viewport;
pub mod renderer;
pub mod runtime;

pub use renderer::MacroquadSink;
pub use runtime::{GameState, TickOutcome};
