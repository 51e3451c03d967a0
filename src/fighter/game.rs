//! Fighting game round flow and combat resolution.
//!
//! `CharacterSelect -> Fighting -> RoundOver`, with RoundOver offering a
//! rematch (same pairing) or a return to selection. Combat runs at one
//! update per frame, paused wholesale while hit-stop frames drain.

use std::time::Instant;

use crate::clock::FrameClock;
use crate::rng::GameRng;

use super::archetype::{Archetype, SpecialKind, ROSTER};
use super::fighter::{
    Fighter, FighterInputs, AI_WALK_SPEED, FIGHTER_W, STAGE_W, WALK_SPEED,
};

pub const PUNCH_REACH: f32 = 50.0;
pub const PUNCH_DAMAGE: i32 = 5;
pub const KICK_REACH: f32 = 70.0;
pub const KICK_DAMAGE: i32 = 8;
/// Vertical tolerance for melee and the electric shock.
pub const VERTICAL_WINDOW: f32 = 50.0;
pub const MELEE_COOLDOWN: u32 = 25;
pub const AI_MELEE_COOLDOWN: u32 = 40;
pub const MELEE_STUN: u32 = 15;
pub const MELEE_HIT_STOP: u32 = 4;
pub const SWING_ENERGY: i32 = 5;

pub const POWER_COST: i32 = 30;
pub const POWER_COOLDOWN: u32 = 60;

const FIRE_SPEED: f32 = 12.0;
const FIRE_DAMAGE: i32 = 15;
const FIRE_STUN: u32 = 20;
const ICE_SPEED: f32 = 8.0;
const ICE_DAMAGE: i32 = 5;
pub const FREEZE_FRAMES: u32 = 120;
const DASH_DISTANCE: f32 = 250.0;
const SHOCK_RANGE: f32 = 50.0;
const SHOCK_DAMAGE: i32 = 10;
const SHOCK_STUN: u32 = 30;
const TELEPORT_GAP: f32 = 80.0;
const NATURE_HEAL: i32 = 20;
const PROJECTILE_HIT_STOP: u32 = 5;

/// AI walks in until this close, then holds ground.
const AI_ENGAGE_DIST: f32 = 60.0;
/// AI considers attacking inside this distance.
const AI_ATTACK_DIST: f32 = 70.0;
const AI_ATTACK_CHANCE: f32 = 0.05;
const AI_POWER_CHANCE: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleeKind {
    Punch,
    Kick,
}

impl MeleeKind {
    fn stats(self) -> (f32, i32) {
        match self {
            MeleeKind::Punch => (PUNCH_REACH, PUNCH_DAMAGE),
            MeleeKind::Kick => (KICK_REACH, KICK_DAMAGE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Select { hovered: usize },
    Fighting,
    RoundOver { player_won: bool },
}

/// In-flight fire or ice shot.
#[derive(Debug, Clone)]
pub struct PowerProjectile {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub kind: SpecialKind,
    pub from_player: bool,
}

/// Hit flash debris; display only.
#[derive(Debug, Clone)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: f32,
}

#[derive(Debug, Clone)]
pub struct FighterSnapshot {
    pub phase: Phase,
    pub player: Fighter,
    pub cpu: Fighter,
    pub projectiles: Vec<PowerProjectile>,
    pub sparks: Vec<Spark>,
    pub hit_stop: u32,
}

#[derive(Debug, Clone)]
pub struct FighterGame {
    phase: Phase,
    player: Fighter,
    cpu: Fighter,
    projectiles: Vec<PowerProjectile>,
    sparks: Vec<Spark>,
    hit_stop: u32,
    rng: GameRng,
    clock: FrameClock,
}

impl FighterGame {
    pub fn new(seed: u32) -> Self {
        Self {
            phase: Phase::Select { hovered: 0 },
            player: Fighter::spawn(ROSTER[0], 100.0, true),
            cpu: Fighter::spawn(ROSTER[0], 600.0, false),
            projectiles: Vec::new(),
            sparks: Vec::new(),
            hit_stop: 0,
            rng: GameRng::new(seed),
            clock: FrameClock::new(),
        }
    }

    pub fn close(&mut self) {
        self.clock.cancel();
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Fighter {
        &self.player
    }

    pub fn cpu(&self) -> &Fighter {
        &self.cpu
    }

    /// Direct state access for scenario setup.
    pub fn player_mut(&mut self) -> &mut Fighter {
        &mut self.player
    }

    pub fn cpu_mut(&mut self) -> &mut Fighter {
        &mut self.cpu
    }

    pub fn projectiles(&self) -> &[PowerProjectile] {
        &self.projectiles
    }

    // --- selection screen ---

    pub fn hovered(&self) -> Option<usize> {
        match self.phase {
            Phase::Select { hovered } => Some(hovered),
            _ => None,
        }
    }

    pub fn select_prev(&mut self) {
        if let Phase::Select { hovered } = self.phase {
            self.phase = Phase::Select {
                hovered: (hovered + ROSTER.len() - 1) % ROSTER.len(),
            };
        }
    }

    pub fn select_next(&mut self) {
        if let Phase::Select { hovered } = self.phase {
            self.phase = Phase::Select {
                hovered: (hovered + 1) % ROSTER.len(),
            };
        }
    }

    /// Commit the hovered archetype; the opponent is drawn at random.
    pub fn confirm_selection(&mut self, now: Instant) {
        let Phase::Select { hovered } = self.phase else {
            return;
        };
        let cpu_pick = ROSTER[self.rng.next_range(ROSTER.len() as u32) as usize];
        self.begin_round(ROSTER[hovered], cpu_pick, now);
    }

    /// Fresh round with the same pairing.
    pub fn rematch(&mut self, now: Instant) {
        if let Phase::RoundOver { .. } = self.phase {
            self.begin_round(self.player.archetype, self.cpu.archetype, now);
        }
    }

    pub fn back_to_select(&mut self) {
        if let Phase::RoundOver { .. } = self.phase {
            self.phase = Phase::Select { hovered: 0 };
        }
    }

    fn begin_round(&mut self, player_pick: Archetype, cpu_pick: Archetype, now: Instant) {
        self.player = Fighter::spawn(player_pick, 100.0, true);
        self.cpu = Fighter::spawn(cpu_pick, 600.0, false);
        self.projectiles.clear();
        self.sparks.clear();
        self.hit_stop = 0;
        self.phase = Phase::Fighting;
        self.clock.start(now);
    }

    // --- per-frame update ---

    pub fn step(&mut self, inputs: FighterInputs) {
        if self.phase != Phase::Fighting {
            return;
        }
        if self.hit_stop > 0 {
            self.hit_stop -= 1;
            return;
        }
        // Round resolution comes before any other work this frame.
        if self.player.hp <= 0 || self.cpu.hp <= 0 {
            self.phase = Phase::RoundOver {
                player_won: self.player.hp > 0,
            };
            self.clock.cancel();
            return;
        }

        self.player.steer(inputs.left, inputs.right, WALK_SPEED);
        if inputs.jump {
            self.player.try_jump();
        }
        if inputs.punch {
            self.swing(true, MeleeKind::Punch);
        } else if inputs.kick {
            self.swing(true, MeleeKind::Kick);
        }
        if inputs.power {
            self.unleash(true);
        }

        self.drive_ai();

        self.player.integrate();
        self.cpu.integrate();
        self.update_projectiles();
        self.update_sparks();
        self.player.tick_timers();
        self.cpu.tick_timers();
    }

    fn drive_ai(&mut self) {
        if !self.cpu.can_act() {
            self.cpu.steer(false, false, AI_WALK_SPEED);
            return;
        }
        let dist = self.player.x - self.cpu.x;
        if dist.abs() > AI_ENGAGE_DIST {
            self.cpu.steer(dist < 0.0, dist > 0.0, AI_WALK_SPEED);
        } else {
            self.cpu.steer(false, false, AI_WALK_SPEED);
            self.cpu.facing_right = dist > 0.0;
        }

        if dist.abs() < AI_ATTACK_DIST
            && self.cpu.attack_cooldown == 0
            && self.rng.chance(AI_ATTACK_CHANCE)
        {
            let kind = if self.rng.chance(0.5) {
                MeleeKind::Kick
            } else {
                MeleeKind::Punch
            };
            self.swing(false, kind);
        }
        if self.cpu.energy >= POWER_COST
            && self.cpu.power_cooldown == 0
            && self.rng.chance(AI_POWER_CHANCE)
        {
            self.unleash(false);
        }
    }

    fn pair_mut(&mut self, by_player: bool) -> (&mut Fighter, &mut Fighter) {
        if by_player {
            (&mut self.player, &mut self.cpu)
        } else {
            (&mut self.cpu, &mut self.player)
        }
    }

    /// Melee swing. Hit detection happens at activation only; the cooldown
    /// keeps the visible swing animation honest.
    fn swing(&mut self, by_player: bool, kind: MeleeKind) {
        let cooldown = if by_player {
            MELEE_COOLDOWN
        } else {
            AI_MELEE_COOLDOWN
        };
        let (attacker, target) = self.pair_mut(by_player);
        if !attacker.can_act() || attacker.attack_cooldown > 0 {
            return;
        }
        attacker.attacking = true;
        attacker.attack_cooldown = cooldown;
        attacker.gain_energy(SWING_ENERGY);

        let (reach, damage) = kind.stats();
        let in_reach = (attacker.x - target.x).abs() < reach
            && (attacker.y - target.y).abs() < VERTICAL_WINDOW;
        if in_reach {
            target.take_hit(damage, MELEE_STUN, attacker.facing_right);
            let (sx, sy) = (target.x + 25.0, target.y + 20.0);
            self.hit_stop = MELEE_HIT_STOP;
            self.burst(sx, sy);
        }
    }

    /// Spend energy on the archetype's power.
    fn unleash(&mut self, by_player: bool) {
        let (attacker, target) = self.pair_mut(by_player);
        if !attacker.can_act()
            || attacker.energy < POWER_COST
            || attacker.power_cooldown > 0
        {
            return;
        }
        attacker.energy -= POWER_COST;
        attacker.power_cooldown = POWER_COOLDOWN;

        let facing_right = attacker.facing_right;
        match attacker.archetype.special() {
            kind @ (SpecialKind::Fire | SpecialKind::Ice) => {
                let speed = if kind == SpecialKind::Fire {
                    FIRE_SPEED
                } else {
                    ICE_SPEED
                };
                let x = if facing_right {
                    attacker.x + 60.0
                } else {
                    attacker.x - 20.0
                };
                let y = attacker.y + 30.0;
                let vx = if facing_right { speed } else { -speed };
                self.projectiles.push(PowerProjectile {
                    x,
                    y,
                    vx,
                    kind,
                    from_player: by_player,
                });
            }
            SpecialKind::Electric => {
                attacker.x += if facing_right {
                    DASH_DISTANCE
                } else {
                    -DASH_DISTANCE
                };
                attacker.x = attacker.x.clamp(0.0, STAGE_W - FIGHTER_W);
                let shocked = (attacker.x - target.x).abs() < SHOCK_RANGE
                    && (attacker.y - target.y).abs() < VERTICAL_WINDOW;
                if shocked {
                    target.take_hit(SHOCK_DAMAGE, SHOCK_STUN, facing_right);
                    let (sx, sy) = (target.x + 25.0, target.y + 20.0);
                    self.hit_stop = PROJECTILE_HIT_STOP;
                    self.burst(sx, sy);
                }
            }
            SpecialKind::Dark => {
                // Lands behind the opponent's back.
                attacker.x = target.x
                    + if target.facing_right {
                        -TELEPORT_GAP
                    } else {
                        TELEPORT_GAP
                    };
                attacker.x = attacker.x.clamp(0.0, STAGE_W - FIGHTER_W);
                attacker.facing_right = !target.facing_right;
            }
            SpecialKind::Nature => {
                attacker.heal(NATURE_HEAL);
            }
        }
    }

    fn update_projectiles(&mut self) {
        let mut bursts: Vec<(f32, f32)> = Vec::new();
        let mut stops = 0;

        let mut projectiles = std::mem::take(&mut self.projectiles);
        projectiles.retain_mut(|p| {
            p.x += p.vx;

            let target = if p.from_player {
                &mut self.cpu
            } else {
                &mut self.player
            };
            let hit = (p.x - (target.x + 25.0)).abs() < 30.0
                && (p.y - (target.y + 50.0)).abs() < VERTICAL_WINDOW;
            if hit {
                match p.kind {
                    SpecialKind::Fire => {
                        target.take_hit(FIRE_DAMAGE, FIRE_STUN, p.vx > 0.0);
                    }
                    SpecialKind::Ice => {
                        target.hp = (target.hp - ICE_DAMAGE).max(0);
                        target.frozen_frames = FREEZE_FRAMES;
                    }
                    _ => {}
                }
                bursts.push((target.x + 25.0, target.y + 50.0));
                stops += PROJECTILE_HIT_STOP;
                return false;
            }
            p.x > -50.0 && p.x < STAGE_W + 50.0
        });
        self.projectiles = projectiles;

        self.hit_stop += stops;
        for (x, y) in bursts {
            self.burst(x, y);
        }
    }

    fn burst(&mut self, x: f32, y: f32) {
        for _ in 0..8 {
            let vx = self.rng.range_f32(-3.0, 3.0);
            let vy = self.rng.range_f32(-3.0, 3.0);
            self.sparks.push(Spark {
                x,
                y,
                vx,
                vy,
                life: 1.0,
            });
        }
    }

    fn update_sparks(&mut self) {
        for s in &mut self.sparks {
            s.x += s.vx;
            s.y += s.vy;
            s.life -= 0.05;
        }
        self.sparks.retain(|s| s.life > 0.0);
    }

    pub fn snapshot(&self) -> FighterSnapshot {
        FighterSnapshot {
            phase: self.phase,
            player: self.player.clone(),
            cpu: self.cpu.clone(),
            projectiles: self.projectiles.clone(),
            sparks: self.sparks.clone(),
            hit_stop: self.hit_stop,
        }
    }
}
