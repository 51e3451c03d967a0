//! Terminal presentation: framebuffer, renderer, and one pure view per game.
//!
//! Views only read snapshots; nothing in this module mutates simulation
//! state.

pub mod blocks_view;
pub mod fb;
pub mod fighter_view;
pub mod renderer;
pub mod shooter_view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
