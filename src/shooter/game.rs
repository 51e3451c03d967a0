//! Vertical shooter state and per-frame rules.
//!
//! Pointer-bound player ship, timed enemy spawns, AABB collision on both the
//! projectile-enemy and player-enemy pairs, and frame-counted power-up
//! timers. One-way `Playing -> GameOver`; there is no pause.

use std::time::Instant;

use crate::clock::FrameClock;
use crate::rng::GameRng;

use super::entities::{
    Enemy, EnemyKind, Particle, Player, Powerup, PowerupKind, Projectile, PLAYER_HALF,
};

pub const WORLD_W: f32 = 400.0;
pub const WORLD_H: f32 = 600.0;

/// Frames between shots while the trigger is held.
pub const FIRE_PERIOD: u32 = 8;
/// Projectile upward travel per frame.
pub const PROJECTILE_SPEED: f32 = 10.0;
/// Frames between enemy spawns.
pub const SPAWN_PERIOD: u32 = 60;
/// Damage taken from enemy contact without a shield.
pub const CONTACT_DAMAGE: i32 = 20;
/// Score per destroyed enemy.
pub const KILL_SCORE: u32 = 100;

pub const SHIELD_FRAMES: u32 = 300;
pub const DOUBLE_FRAMES: u32 = 600;
pub const HEAL_AMOUNT: i32 = 20;

/// Power-ups fall at this speed; collected within this distance of the ship.
const POWERUP_SPEED: f32 = 2.0;
const COLLECT_DIST: f32 = 30.0;

/// Chaser lateral homing step per frame.
const CHASE_STEP: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct ShooterSnapshot {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub powerups: Vec<Powerup>,
    pub particles: Vec<Particle>,
    pub score: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct ShooterGame {
    player: Player,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    powerups: Vec<Powerup>,
    particles: Vec<Particle>,
    score: u32,
    frame: u32,
    firing: bool,
    fire_cooldown: u32,
    game_over: bool,
    rng: GameRng,
    clock: FrameClock,
}

impl ShooterGame {
    pub fn new(seed: u32) -> Self {
        Self {
            player: Player {
                x: WORLD_W / 2.0,
                y: WORLD_H - 80.0,
                hp: 100,
                shield_frames: 0,
                double_frames: 0,
            },
            enemies: Vec::new(),
            projectiles: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            score: 0,
            frame: 0,
            firing: false,
            fire_cooldown: 0,
            game_over: false,
            rng: GameRng::new(seed),
            clock: FrameClock::new(),
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.clock.start(now);
    }

    pub fn close(&mut self) {
        self.clock.cancel();
    }

    pub fn restart(&mut self, seed: u32, now: Instant) {
        *self = Self::new(seed);
        self.start(now);
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn powerups(&self) -> &[Powerup] {
        &self.powerups
    }

    /// Snap the ship to the pointer, clamped to the world.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        if self.game_over {
            return;
        }
        self.player.x = x.clamp(PLAYER_HALF, WORLD_W - PLAYER_HALF);
        self.player.y = y.clamp(PLAYER_HALF, WORLD_H - PLAYER_HALF);
    }

    pub fn set_firing(&mut self, firing: bool) {
        self.firing = firing;
    }

    /// Place an enemy directly. The timed spawner and scenario tests both
    /// route through here.
    pub fn spawn_enemy(&mut self, x: f32, y: f32, size: f32, speed: f32, kind: EnemyKind) {
        let hp = match kind {
            EnemyKind::Normal => 1,
            EnemyKind::Chaser => 3,
        };
        self.enemies.push(Enemy {
            x,
            y,
            size,
            speed,
            hp,
            kind,
        });
    }

    pub fn spawn_powerup(&mut self, x: f32, y: f32, kind: PowerupKind) {
        self.powerups.push(Powerup { x, y, kind });
    }

    /// Advance the simulation one frame.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }
        self.frame += 1;

        self.update_firing();
        self.update_projectiles();
        self.update_spawner();
        self.update_enemies();
        self.resolve_projectile_hits();
        self.resolve_contact();
        self.update_powerups();
        self.update_particles();
        self.update_timers();

        if self.player.hp <= 0 {
            self.player.hp = 0;
            self.game_over = true;
            self.clock.cancel();
        }
    }

    fn update_firing(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
        if !self.firing || self.fire_cooldown > 0 {
            return;
        }
        self.fire_cooldown = FIRE_PERIOD;

        let y = self.player.y - PLAYER_HALF;
        if self.player.double_frames > 0 {
            self.projectiles.push(Projectile {
                x: self.player.x - 10.0,
                y,
            });
            self.projectiles.push(Projectile {
                x: self.player.x + 10.0,
                y,
            });
        } else {
            self.projectiles.push(Projectile { x: self.player.x, y });
        }
    }

    fn update_projectiles(&mut self) {
        for p in &mut self.projectiles {
            p.y -= PROJECTILE_SPEED;
        }
        self.projectiles.retain(|p| p.y > -10.0);
    }

    fn update_spawner(&mut self) {
        if self.frame % SPAWN_PERIOD != 0 {
            return;
        }
        let size = self.rng.range_f32(20.0, 40.0);
        let x = self.rng.range_f32(size / 2.0, WORLD_W - size / 2.0);
        let speed = self.rng.range_f32(1.0, 3.0);
        let kind = if self.rng.chance(0.3) {
            EnemyKind::Chaser
        } else {
            EnemyKind::Normal
        };
        self.spawn_enemy(x, -size, size, speed, kind);
    }

    fn update_enemies(&mut self) {
        let player_x = self.player.x;
        for e in &mut self.enemies {
            e.y += e.speed;
            if e.kind == EnemyKind::Chaser {
                if player_x > e.x {
                    e.x += CHASE_STEP;
                } else {
                    e.x -= CHASE_STEP;
                }
            }
        }
        self.enemies.retain(|e| e.y < WORLD_H + e.size);
    }

    /// Each projectile consumes itself on its first overlapping enemy.
    fn resolve_projectile_hits(&mut self) {
        let mut killed: Vec<usize> = Vec::new();
        let mut projectiles = std::mem::take(&mut self.projectiles);
        projectiles.retain(|p| {
            for (i, e) in self.enemies.iter_mut().enumerate() {
                let hit = (p.x - e.x).abs() < e.half() + 2.0 && (p.y - e.y).abs() < e.half() + 5.0;
                if hit {
                    e.hp -= 1;
                    if e.hp <= 0 && !killed.contains(&i) {
                        killed.push(i);
                    }
                    return false;
                }
            }
            true
        });
        self.projectiles = projectiles;

        // Remove high indices first so the earlier ones stay valid.
        killed.sort_unstable_by(|a, b| b.cmp(a));
        for i in killed {
            let e = self.enemies.remove(i);
            self.score += KILL_SCORE;
            self.explode(e.x, e.y);
            if self.rng.chance(0.2) {
                let roll = self.rng.next_f32();
                let kind = if roll < 0.33 {
                    PowerupKind::Shield
                } else if roll < 0.66 {
                    PowerupKind::DoubleShot
                } else {
                    PowerupKind::Heal
                };
                self.spawn_powerup(e.x, e.y, kind);
            }
        }
    }

    /// Player-enemy contact destroys the enemy either way; the shield only
    /// prevents the damage.
    fn resolve_contact(&mut self) {
        let (px, py) = (self.player.x, self.player.y);
        let shielded = self.player.shield_frames > 0;
        let mut damage = 0;
        let mut explosions: Vec<(f32, f32)> = Vec::new();

        self.enemies.retain(|e| {
            let reach = e.half() + PLAYER_HALF;
            if (px - e.x).abs() < reach && (py - e.y).abs() < reach {
                explosions.push((e.x, e.y));
                if !shielded {
                    damage += CONTACT_DAMAGE;
                }
                false
            } else {
                true
            }
        });

        self.player.hp -= damage;
        for (x, y) in explosions {
            self.explode(x, y);
        }
    }

    fn update_powerups(&mut self) {
        let (px, py) = (self.player.x, self.player.y);
        let mut collected: Vec<PowerupKind> = Vec::new();

        for p in &mut self.powerups {
            p.y += POWERUP_SPEED;
        }
        self.powerups.retain(|p| {
            let dist = ((p.x - px).powi(2) + (p.y - py).powi(2)).sqrt();
            if dist < COLLECT_DIST {
                collected.push(p.kind);
                return false;
            }
            p.y < WORLD_H + 10.0
        });

        for kind in collected {
            match kind {
                PowerupKind::Shield => self.player.shield_frames = SHIELD_FRAMES,
                PowerupKind::DoubleShot => self.player.double_frames = DOUBLE_FRAMES,
                PowerupKind::Heal => {
                    self.player.hp = (self.player.hp + HEAL_AMOUNT).min(100);
                }
            }
        }
    }

    fn update_particles(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            p.life -= 0.05;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    fn update_timers(&mut self) {
        self.player.shield_frames = self.player.shield_frames.saturating_sub(1);
        self.player.double_frames = self.player.double_frames.saturating_sub(1);
    }

    fn explode(&mut self, x: f32, y: f32) {
        for _ in 0..10 {
            let vx = self.rng.range_f32(-2.0, 2.0);
            let vy = self.rng.range_f32(-2.0, 2.0);
            self.particles.push(Particle {
                x,
                y,
                vx,
                vy,
                life: 1.0,
            });
        }
    }

    pub fn snapshot(&self) -> ShooterSnapshot {
        ShooterSnapshot {
            player: self.player.clone(),
            enemies: self.enemies.clone(),
            projectiles: self.projectiles.clone(),
            powerups: self.powerups.clone(),
            particles: self.particles.clone(),
            score: self.score,
            game_over: self.game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> ShooterGame {
        ShooterGame::new(1)
    }

    #[test]
    fn contact_with_enemy_costs_20_hp_and_destroys_it() {
        let mut g = game();
        g.set_pointer(200.0, 300.0);
        // Close enough that one frame of falling keeps the boxes overlapping.
        g.spawn_enemy(200.0, 295.0, 30.0, 2.0, EnemyKind::Normal);
        g.step();

        assert_eq!(g.player().hp, 80);
        assert!(g.enemies().is_empty());
        // Contact spawns an explosion.
        assert_eq!(g.snapshot().particles.len(), 10);
        assert!(!g.game_over());
    }

    #[test]
    fn shield_blocks_contact_damage_but_enemy_still_dies() {
        let mut g = game();
        g.set_pointer(200.0, 300.0);
        g.spawn_powerup(200.0, 295.0, PowerupKind::Shield);
        g.step();
        assert!(g.player().shield_frames > 0);

        g.spawn_enemy(200.0, 295.0, 30.0, 2.0, EnemyKind::Normal);
        g.step();
        assert_eq!(g.player().hp, 100);
        assert!(g.enemies().is_empty());
    }

    #[test]
    fn projectile_kills_normal_in_one_hit_and_awards_score() {
        let mut g = game();
        g.set_pointer(200.0, 500.0);
        g.spawn_enemy(200.0, 100.0, 30.0, 0.0, EnemyKind::Normal);
        g.set_firing(true);
        // Enough frames for the first shot to travel up to the enemy.
        for _ in 0..45 {
            g.step();
        }
        assert!(g.enemies().is_empty());
        assert_eq!(g.score(), KILL_SCORE);
    }

    #[test]
    fn chaser_takes_three_hits_and_homes_toward_player() {
        let mut g = game();
        g.set_pointer(100.0, 500.0);
        g.spawn_enemy(300.0, 200.0, 30.0, 0.0, EnemyKind::Chaser);
        g.step();
        // One homing step toward the player's x.
        assert!((g.enemies()[0].x - 299.5).abs() < f32::EPSILON);

        let e = &mut g.enemies[0];
        e.hp -= 2;
        assert_eq!(g.enemies()[0].hp, 1);
    }

    #[test]
    fn double_shot_fires_two_projectiles() {
        let mut g = game();
        g.set_pointer(200.0, 500.0);
        g.spawn_powerup(200.0, 495.0, PowerupKind::DoubleShot);
        g.step();
        assert!(g.player().double_frames > 0);

        g.set_firing(true);
        g.step();
        assert_eq!(g.projectiles().len(), 2);
        let xs: Vec<f32> = g.projectiles().iter().map(|p| p.x).collect();
        assert!(xs.contains(&190.0) && xs.contains(&210.0));
    }

    #[test]
    fn held_trigger_fires_every_8_frames() {
        let mut g = game();
        g.set_firing(true);
        for _ in 0..24 {
            g.step();
        }
        // Shots at frames 1, 9, 17; all still on screen after 24 frames.
        assert_eq!(g.projectiles().len(), 3);
    }

    #[test]
    fn heal_caps_at_100() {
        let mut g = game();
        g.set_pointer(200.0, 300.0);
        g.player.hp = 95;
        g.spawn_powerup(200.0, 295.0, PowerupKind::Heal);
        g.step();
        assert_eq!(g.player().hp, 100);
    }

    #[test]
    fn hp_zero_ends_game_and_cancels_clock() {
        let mut g = game();
        g.start(Instant::now());
        g.set_pointer(200.0, 300.0);
        g.player.hp = 20;
        g.spawn_enemy(200.0, 295.0, 30.0, 2.0, EnemyKind::Normal);
        g.step();

        assert!(g.game_over());
        assert_eq!(g.player().hp, 0);
        assert!(!g.clock().is_running());

        // A stepped dead game stays inert.
        let before = g.snapshot().particles.len();
        g.step();
        assert_eq!(g.snapshot().particles.len(), before);
    }

    #[test]
    fn offscreen_entities_are_pruned() {
        let mut g = game();
        g.spawn_enemy(200.0, WORLD_H + 50.0, 30.0, 1.0, EnemyKind::Normal);
        g.projectiles.push(Projectile { x: 10.0, y: -5.0 });
        g.step();
        assert!(g.enemies().is_empty());
        assert!(g.projectiles().is_empty());
    }

    #[test]
    fn spawner_emits_enemy_every_60_frames() {
        let mut g = game();
        for _ in 0..60 {
            g.step();
        }
        assert_eq!(g.enemies().len(), 1);
        for _ in 0..60 {
            g.step();
        }
        // Slow spawns are still on screen.
        assert_eq!(g.enemies().len(), 2);
    }

    #[test]
    fn pointer_is_clamped_to_world() {
        let mut g = game();
        g.set_pointer(-50.0, 10_000.0);
        assert_eq!(g.player().x, PLAYER_HALF);
        assert_eq!(g.player().y, WORLD_H - PLAYER_HALF);
    }
}
