//! Entity records for the vertical shooter.
//!
//! Plain data with public fields; all behavior lives in the per-frame update
//! in [`super::game`]. Positions are world coordinates with y growing
//! downward, measured at the entity center.

/// Player ship half-extent for collision and wall clamping.
pub const PLAYER_HALF: f32 = 15.0;

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub hp: i32,
    /// Remaining invulnerability frames.
    pub shield_frames: u32,
    /// Remaining double-shot frames.
    pub double_frames: u32,
}

/// Enemy behavior class, fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    /// Falls straight down, 1 hp.
    Normal,
    /// Homes horizontally toward the player, 3 hp.
    Chaser,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    /// Side length of the collision box.
    pub size: f32,
    /// Downward fall speed per frame.
    pub speed: f32,
    pub hp: i32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn half(&self) -> f32 {
        self.size / 2.0
    }
}

/// Player shot, travels straight up.
#[derive(Debug, Clone)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerupKind {
    Shield,
    DoubleShot,
    Heal,
}

#[derive(Debug, Clone)]
pub struct Powerup {
    pub x: f32,
    pub y: f32,
    pub kind: PowerupKind,
}

/// Explosion debris; purely cosmetic.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Fades from 1.0 to 0, then the particle is pruned.
    pub life: f32,
}
