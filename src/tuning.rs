//! Game balance and rulesets
//!
//! Every number the simulation reads lives here, so alternate balance can be
//! loaded from JSON without touching the simulation.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rect;
use crate::consts::*;

/// Errors produced while loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Endless-quota rules: a fixed number of enemies for the whole session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotaRules {
    /// Enemies spawned over the whole session; killing all of them wins
    pub total_enemies: u32,
    /// Kills between speed-ups
    pub kills_per_speedup: u32,
    /// Multiplier applied to enemy speed at every speed-up
    pub speedup_factor: f32,
    /// Hit-region on the end screen that restarts the session
    pub restart_button: Rect,
}

impl Default for QuotaRules {
    fn default() -> Self {
        Self {
            total_enemies: QUOTA_TOTAL_ENEMIES,
            kills_per_speedup: KILLS_PER_SPEEDUP,
            speedup_factor: SPEEDUP_FACTOR,
            restart_button: Rect::centered(
                Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0 - 70.0),
                240.0,
                60.0,
            ),
        }
    }
}

/// Leveled rules: a countdown and an enemy quota per level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelRules {
    pub levels: u32,
    /// Enemy quota of the first level
    pub base_enemies: u32,
    /// Quota added on every level advance
    pub enemies_per_level: u32,
    /// Countdown of the first level (seconds)
    pub first_level_time: f32,
    /// Countdown shrinks by this much per level number
    pub level_time_step: f32,
    /// Countdown never drops below this
    pub min_level_time: f32,
    /// Enemy speed added per level number
    pub speed_per_level: f32,
}

impl Default for LevelRules {
    fn default() -> Self {
        Self {
            levels: LEVELS,
            base_enemies: BASE_ENEMIES,
            enemies_per_level: ENEMIES_PER_LEVEL,
            first_level_time: FIRST_LEVEL_TIME,
            level_time_step: LEVEL_TIME_STEP,
            min_level_time: MIN_LEVEL_TIME,
            speed_per_level: SPEED_PER_LEVEL,
        }
    }
}

impl LevelRules {
    /// Countdown for a level number (1-based)
    pub fn level_time(&self, level: u32) -> f32 {
        if level <= 1 {
            self.first_level_time
        } else {
            (self.first_level_time - level as f32 * self.level_time_step).max(self.min_level_time)
        }
    }
}

/// Which win condition and pacing the session runs under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    Quota(QuotaRules),
    Leveled(LevelRules),
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset::Quota(QuotaRules::default())
    }
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Quota(_) => "Quota",
            Ruleset::Leveled(_) => "Leveled",
        }
    }
}

/// Complete game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    pub player_speed: f32,
    pub player_radius: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub offscreen_margin: f32,
    pub shoot_delay_ms: u64,

    // === Enemies ===
    pub enemy_base_speed: f32,
    pub enemy_radius: f32,
    pub spawn_ring_min: f32,
    pub spawn_ring_max: f32,
    pub spawn_interval_ms: u64,

    // === Scoring ===
    pub kill_score: u32,

    pub ruleset: Ruleset,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_speed: PLAYER_SPEED,
            player_radius: PLAYER_RADIUS,

            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            offscreen_margin: OFFSCREEN_MARGIN,
            shoot_delay_ms: SHOOT_DELAY_MS,

            enemy_base_speed: ENEMY_BASE_SPEED,
            enemy_radius: ENEMY_RADIUS,
            spawn_ring_min: SPAWN_RING_MIN,
            spawn_ring_max: SPAWN_RING_MAX,
            spawn_interval_ms: SPAWN_INTERVAL_MS,

            kill_score: KILL_SCORE,

            ruleset: Ruleset::default(),
        }
    }
}

impl Tuning {
    /// Default balance with the leveled ruleset
    pub fn leveled() -> Self {
        Self {
            ruleset: Ruleset::Leveled(LevelRules::default()),
            ..Self::default()
        }
    }

    /// Arena center in world units
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Parse tuning from JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_speed", self.player_speed),
            ("player_radius", self.player_radius),
            ("bullet_speed", self.bullet_speed),
            ("bullet_radius", self.bullet_radius),
            ("enemy_base_speed", self.enemy_base_speed),
            ("enemy_radius", self.enemy_radius),
            ("spawn_ring_min", self.spawn_ring_min),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.offscreen_margin < 0.0 {
            return Err(TuningError::Invalid("offscreen_margin must not be negative".into()));
        }
        if self.spawn_ring_max < self.spawn_ring_min {
            return Err(TuningError::Invalid(format!(
                "spawn ring is inverted ({} > {})",
                self.spawn_ring_min, self.spawn_ring_max
            )));
        }

        match &self.ruleset {
            Ruleset::Quota(rules) => {
                if rules.total_enemies == 0 {
                    return Err(TuningError::Invalid("total_enemies must be at least 1".into()));
                }
                if rules.kills_per_speedup == 0 {
                    return Err(TuningError::Invalid("kills_per_speedup must be at least 1".into()));
                }
                if rules.speedup_factor < 1.0 {
                    return Err(TuningError::Invalid("speedup_factor must be >= 1".into()));
                }
            }
            Ruleset::Leveled(rules) => {
                if rules.levels == 0 {
                    return Err(TuningError::Invalid("levels must be at least 1".into()));
                }
                if rules.base_enemies == 0 {
                    return Err(TuningError::Invalid("base_enemies must be at least 1".into()));
                }
                if !(rules.first_level_time > 0.0) || !(rules.min_level_time > 0.0) {
                    return Err(TuningError::Invalid("level times must be positive".into()));
                }
            }
        }

        Ok(())
    }
}
