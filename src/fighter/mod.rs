//! Two-character fighting game: selection screen, one round against the AI,
//! rematch loop.

pub mod archetype;
#[allow(clippy::module_inception)]
pub mod fighter;
pub mod game;

pub use archetype::{Archetype, SpecialKind, ROSTER};
pub use fighter::{Fighter, FighterInputs, FIGHTER_H, FIGHTER_W, GROUND_Y, STAGE_H, STAGE_W};
pub use game::{FighterGame, FighterSnapshot, MeleeKind, Phase, PowerProjectile, Spark};
