//! Input layer: pure key mapping plus held-key tracking with an
//! auto-release timeout.

pub mod held;
pub mod map;

pub use held::HeldKeys;
pub use map::{blocks_action, fighter_inputs, is_close, is_press, is_restart, should_quit};
