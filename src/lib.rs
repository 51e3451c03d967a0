//! Terminal arcade: three self-contained game simulations behind one
//! crossterm front end.
//!
//! The simulation modules (`blocks`, `shooter`, `fighter`) are pure state
//! machines advanced frame by frame; `term` renders their read-only
//! snapshots; `clock` and `input` are shared plumbing; the binary in
//! `main.rs` mounts one game at a time.

pub mod blocks;
pub mod clock;
pub mod fighter;
pub mod input;
pub mod rng;
pub mod shooter;
pub mod term;
