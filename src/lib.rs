//! Arena Shooter - A top-down arena shooter
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (entities, collisions, session state)
//! - `tuning`: Data-driven game balance and rulesets
//! - `platform`: Frame clock and input polling shared by native and web
//! - `renderer`: WebGPU rendering pipeline

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{LevelRules, QuotaRules, Ruleset, Tuning, TuningError};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (world units, y up)
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 700.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 320.0;
    pub const PLAYER_RADIUS: f32 = 24.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 900.0;
    pub const BULLET_RADIUS: f32 = 5.0;
    /// Distance past an arena edge before a bullet is discarded
    pub const OFFSCREEN_MARGIN: f32 = 20.0;

    /// Enemy defaults
    pub const ENEMY_BASE_SPEED: f32 = 80.0;
    pub const ENEMY_RADIUS: f32 = 18.0;
    /// Spawn ring band, measured from the arena center
    pub const SPAWN_RING_MIN: f32 = 600.0;
    pub const SPAWN_RING_MAX: f32 = 900.0;

    /// Cadences (milliseconds of clock time)
    pub const SHOOT_DELAY_MS: u64 = 180;
    pub const SPAWN_INTERVAL_MS: u64 = 900;

    /// Score awarded per kill
    pub const KILL_SCORE: u32 = 10;

    /// Quota ruleset
    pub const QUOTA_TOTAL_ENEMIES: u32 = 50;
    pub const KILLS_PER_SPEEDUP: u32 = 10;
    pub const SPEEDUP_FACTOR: f32 = 1.15;

    /// Leveled ruleset
    pub const LEVELS: u32 = 5;
    pub const BASE_ENEMIES: u32 = 20;
    pub const ENEMIES_PER_LEVEL: u32 = 5;
    pub const FIRST_LEVEL_TIME: f32 = 60.0;
    pub const LEVEL_TIME_STEP: f32 = 10.0;
    pub const MIN_LEVEL_TIME: f32 = 20.0;
    pub const SPEED_PER_LEVEL: f32 = 12.0;

    /// Nominal frame delta used when no previous frame exists
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
}

/// Axis-aligned rectangle in world units (origin at the bottom-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Inclusive point containment
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }
}

/// Two circles overlap when their centers are closer than the sum of radii
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Angle of a vector in degrees, in `[0, 360)`
#[inline]
pub fn angle_deg(v: Vec2) -> f32 {
    let deg = v.y.atan2(v.x).to_degrees();
    if deg < 0.0 { deg + 360.0 } else { deg }
}

/// Unit vector pointing along `deg` degrees
#[inline]
pub fn direction_deg(deg: f32) -> Vec2 {
    let rad = deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
