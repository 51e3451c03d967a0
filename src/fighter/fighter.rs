//! Per-round fighter state and the stage physics applied to it.

use super::archetype::Archetype;

pub const STAGE_W: f32 = 1024.0;
pub const STAGE_H: f32 = 600.0;
/// Floor height; a grounded fighter's feet rest here, so its top edge sits
/// at `GROUND_Y - FIGHTER_H`.
pub const GROUND_Y: f32 = 400.0;
pub const FIGHTER_W: f32 = 50.0;
pub const FIGHTER_H: f32 = 100.0;

pub const GRAVITY: f32 = 0.8;
pub const JUMP_VY: f32 = -18.0;
pub const WALK_SPEED: f32 = 5.0;
pub const AI_WALK_SPEED: f32 = 3.0;
const FRICTION: f32 = 0.8;

/// One frame's control intent, already mapped from keys (or the AI policy).
#[derive(Debug, Clone, Copy, Default)]
pub struct FighterInputs {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub punch: bool,
    pub kick: bool,
    pub power: bool,
}

#[derive(Debug, Clone)]
pub struct Fighter {
    pub archetype: Archetype,
    /// Top-left corner of the 50x100 body box.
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub hp: i32,
    pub energy: i32,
    pub facing_right: bool,
    pub attack_cooldown: u32,
    pub power_cooldown: u32,
    pub stun_frames: u32,
    pub frozen_frames: u32,
    /// True for the active portion of a swing; display only.
    pub attacking: bool,
}

impl Fighter {
    pub fn spawn(archetype: Archetype, x: f32, facing_right: bool) -> Self {
        Self {
            archetype,
            x,
            y: 300.0,
            vx: 0.0,
            vy: 0.0,
            hp: 100,
            energy: 0,
            facing_right,
            attack_cooldown: 0,
            power_cooldown: 0,
            stun_frames: 0,
            frozen_frames: 0,
            attacking: false,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.y + FIGHTER_H >= GROUND_Y
    }

    /// Frozen or stunned fighters cannot act.
    pub fn can_act(&self) -> bool {
        self.frozen_frames == 0 && self.stun_frames == 0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + FIGHTER_W / 2.0, self.y + FIGHTER_H / 2.0)
    }

    /// Apply walk intent, or friction when idle or unable to act. A frozen
    /// fighter keeps sliding on its knockback momentum; it just cannot steer.
    pub fn steer(&mut self, left: bool, right: bool, speed: f32) {
        if !self.can_act() {
            self.vx *= FRICTION;
            return;
        }
        if left {
            self.vx = -speed;
            self.facing_right = false;
        } else if right {
            self.vx = speed;
            self.facing_right = true;
        } else {
            self.vx *= FRICTION;
        }
    }

    pub fn try_jump(&mut self) {
        if self.can_act() && self.on_ground() {
            self.vy = JUMP_VY;
        }
    }

    /// Gravity, integration, ground and wall clamps.
    pub fn integrate(&mut self) {
        self.vy += GRAVITY;
        self.x += self.vx;
        self.y += self.vy;
        if self.y + FIGHTER_H > GROUND_Y {
            self.y = GROUND_Y - FIGHTER_H;
            self.vy = 0.0;
        }
        self.x = self.x.clamp(0.0, STAGE_W - FIGHTER_W);
    }

    /// Damage plus stun plus knockback in the attacker's facing direction.
    pub fn take_hit(&mut self, damage: i32, stun: u32, push_right: bool) {
        self.hp = (self.hp - damage).max(0);
        self.stun_frames = stun;
        self.vx = if push_right { 10.0 } else { -10.0 };
        self.vy = -5.0;
    }

    pub fn gain_energy(&mut self, amount: i32) {
        self.energy = (self.energy + amount).min(100);
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(100);
    }

    /// Per-frame timer decay. The swing display flag drops once the attack
    /// cooldown falls under 10 frames.
    pub fn tick_timers(&mut self) {
        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
        self.power_cooldown = self.power_cooldown.saturating_sub(1);
        self.stun_frames = self.stun_frames.saturating_sub(1);
        self.frozen_frames = self.frozen_frames.saturating_sub(1);
        if self.attack_cooldown < 10 {
            self.attacking = false;
        }
    }
}
