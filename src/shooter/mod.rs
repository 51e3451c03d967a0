//! Vertical shooter: pointer-driven ship, falling enemies, power-ups.

pub mod entities;
pub mod game;

pub use entities::{Enemy, EnemyKind, Particle, Player, Powerup, PowerupKind, Projectile, PLAYER_HALF};
pub use game::{ShooterGame, ShooterSnapshot, WORLD_H, WORLD_W};
