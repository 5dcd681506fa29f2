//! Session state and entity types
//!
//! Everything a single playthrough mutates lives in [`GameSession`].

use std::f32::consts::TAU;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::{Ruleset, Tuning};
use crate::{Rect, angle_deg, direction_deg, polar_to_cartesian};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Quota met or final level cleared
    Won,
    /// An enemy reached the player
    Lost,
}

impl GamePhase {
    /// Won and Lost freeze the simulation
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Movement keys held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Movement {
    /// Summed axis contributions (opposite keys cancel, y up)
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.up {
            axis.y += 1.0;
        }
        if self.down {
            axis.y -= 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        axis
    }
}

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Facing angle in degrees, toward the pointer
    pub angle: f32,
    pub radius: f32,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            angle: 0.0,
            radius,
        }
    }

    /// Move by the normalized input direction, clamp to the arena, then face the pointer
    pub fn update(&mut self, dt: f32, movement: Movement, pointer: Vec2, tuning: &Tuning) {
        let axis = movement.axis();
        if axis.length_squared() > 0.0 {
            let step = axis.normalize() * tuning.player_speed * dt;
            self.pos.x = (self.pos.x + step.x).clamp(0.0, tuning.arena_width);
            self.pos.y = (self.pos.y + step.y).clamp(0.0, tuning.arena_height);
        }
        self.angle = angle_deg(pointer - self.pos);
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Bullet {
    /// Bullet leaving `origin` along `angle` degrees
    pub fn fire(origin: Vec2, angle: f32, speed: f32, radius: f32) -> Self {
        Self {
            pos: origin,
            vel: direction_deg(angle) * speed,
            radius,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// True once the bullet is further than the margin past any arena edge
    pub fn is_offscreen(&self, tuning: &Tuning) -> bool {
        let margin = tuning.offscreen_margin;
        self.pos.x < -margin
            || self.pos.x > tuning.arena_width + margin
            || self.pos.y < -margin
            || self.pos.y > tuning.arena_height + margin
    }
}

/// A pursuing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Speed before the session's speed multiplier
    pub base_speed: f32,
    /// Current pursuit speed (units/s)
    pub speed: f32,
    pub radius: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, base_speed: f32, multiplier: f32, radius: f32) -> Self {
        Self {
            pos,
            base_speed,
            speed: base_speed * multiplier,
            radius,
        }
    }

    /// Enemy placed on a ring around `center` (angle in radians)
    pub fn on_ring(
        center: Vec2,
        angle: f32,
        distance: f32,
        base_speed: f32,
        multiplier: f32,
        radius: f32,
    ) -> Self {
        Self::new(center + polar_to_cartesian(distance, angle), base_speed, multiplier, radius)
    }

    /// Step straight toward the target (no inertia)
    pub fn update(&mut self, dt: f32, target: Vec2) {
        let to_target = target - self.pos;
        if to_target.length_squared() > 0.0 {
            self.pos += to_target.normalize() * self.speed * dt;
        }
    }

    pub fn apply_multiplier(&mut self, multiplier: f32) {
        self.speed = self.base_speed * multiplier;
    }
}

/// A recurring event gated by clock time since its last occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cadence {
    pub interval_ms: u64,
    /// Clock time of the last occurrence; `None` until the first
    pub last_ms: Option<u64>,
}

impl Cadence {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// Strictly more than the interval has passed (or it never fired)
    pub fn ready(&self, now_ms: u64) -> bool {
        self.last_ms
            .is_none_or(|last| now_ms.saturating_sub(last) > self.interval_ms)
    }

    pub fn trigger(&mut self, now_ms: u64) {
        self.last_ms = Some(now_ms);
    }
}

/// One playthrough's complete mutable state
#[derive(Debug, Clone)]
pub struct GameSession {
    pub tuning: Tuning,
    /// Seed this session was created with
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub kills: u32,
    /// Enemies spawned toward the current quota
    pub spawned: u32,
    /// Enemies to spawn before spawning stops (per level when leveled)
    pub spawn_quota: u32,
    /// Current level (1-based; stays 1 under the quota ruleset)
    pub level: u32,
    /// Seconds remaining (leveled) or elapsed (quota)
    pub timer: f32,
    /// Enemy speed multiplier (raised every N kills under the quota ruleset)
    pub speed_multiplier: f32,
    pub spawn_cadence: Cadence,
    pub fire_cadence: Cadence,
    /// Clock time at which the session reached Won or Lost
    pub ended_at_ms: Option<u64>,
}

impl GameSession {
    /// Create a fresh session with the given seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let (spawn_quota, timer) = match &tuning.ruleset {
            Ruleset::Quota(rules) => (rules.total_enemies, 0.0),
            Ruleset::Leveled(rules) => (rules.base_enemies, rules.level_time(1)),
        };

        Self {
            player: Player::new(tuning.arena_center(), tuning.player_radius),
            spawn_cadence: Cadence::new(tuning.spawn_interval_ms),
            fire_cadence: Cadence::new(tuning.shoot_delay_ms),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            bullets: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            kills: 0,
            spawned: 0,
            spawn_quota,
            level: 1,
            timer,
            speed_multiplier: 1.0,
            ended_at_ms: None,
            tuning,
        }
    }

    /// Replace this session with a fresh one (same tuning, next seed)
    pub fn reset(&mut self) {
        let seed: u64 = self.rng.random();
        *self = GameSession::new(self.tuning.clone(), seed);
    }

    /// Base speed (before multiplier) for an enemy spawned now
    pub fn enemy_base_speed(&self) -> f32 {
        match &self.tuning.ruleset {
            Ruleset::Quota(_) => self.tuning.enemy_base_speed,
            Ruleset::Leveled(rules) => {
                self.tuning.enemy_base_speed + self.level as f32 * rules.speed_per_level
            }
        }
    }

    /// Spawn an enemy at a random point on the spawn ring
    pub fn spawn_enemy(&mut self) -> Vec2 {
        let angle = self.rng.random_range(0.0..TAU);
        let distance = if self.tuning.spawn_ring_max > self.tuning.spawn_ring_min {
            self.rng
                .random_range(self.tuning.spawn_ring_min..=self.tuning.spawn_ring_max)
        } else {
            self.tuning.spawn_ring_min
        };
        let enemy = Enemy::on_ring(
            self.tuning.arena_center(),
            angle,
            distance,
            self.enemy_base_speed(),
            self.speed_multiplier,
            self.tuning.enemy_radius,
        );
        let pos = enemy.pos;
        self.enemies.push(enemy);
        self.spawned += 1;
        pos
    }

    /// Fire a bullet from the player along its facing
    pub fn fire_bullet(&mut self) {
        self.bullets.push(Bullet::fire(
            self.player.pos,
            self.player.angle,
            self.tuning.bullet_speed,
            self.tuning.bullet_radius,
        ));
    }

    /// Restart hit-region, present only when the ruleset supports restarting
    pub fn restart_button(&self) -> Option<Rect> {
        match &self.tuning.ruleset {
            Ruleset::Quota(rules) => Some(rules.restart_button),
            Ruleset::Leveled(_) => None,
        }
    }

    /// Enter a terminal phase
    pub(crate) fn finish(&mut self, phase: GamePhase, now_ms: u64) {
        self.phase = phase;
        self.ended_at_ms = Some(now_ms);
        log::info!(
            "Session {:?}: score={}, kills={}, level={}",
            phase,
            self.score,
            self.kills,
            self.level
        );
    }
}
