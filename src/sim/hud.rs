//! Read-only views of a session for presentation
//!
//! Renderers and HUD code only ever see these snapshots, never the session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameSession};
use crate::Rect;
use crate::tuning::Ruleset;

/// A circle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Player position and facing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    /// Degrees
    pub angle: f32,
    pub radius: f32,
}

/// HUD scalars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    /// (current, total) when playing the leveled ruleset
    pub level: Option<(u32, u32)>,
    /// Seconds remaining (leveled) or elapsed (quota)
    pub time: f32,
    pub time_counts_down: bool,
    pub enemies_alive: usize,
    pub kills: u32,
    /// Total kills needed to win under the quota ruleset
    pub kill_quota: Option<u32>,
    pub score: u32,
    pub speed_multiplier: f32,
}

impl Hud {
    /// Text lines for the HUD corner, top to bottom
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(4);
        if let Some((level, levels)) = self.level {
            lines.push(format!("Level: {}/{}", level, levels));
        }
        lines.push(format!("Time: {}", self.time as u32));
        match self.kill_quota {
            Some(quota) => {
                lines.push(format!("Kills: {}/{}", self.kills, quota));
                lines.push(format!("Speed: x{:.2}", self.speed_multiplier));
            }
            None => lines.push(format!("Enemies: {}", self.enemies_alive)),
        }
        lines.push(format!("Score: {}", self.score));
        lines
    }
}

/// Text for the end screen overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndScreen {
    pub won: bool,
    pub title: String,
    pub subtitle: String,
    /// What a click does here
    pub prompt: String,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub player: PlayerView,
    pub bullets: Vec<CircleView>,
    pub enemies: Vec<CircleView>,
    pub hud: Hud,
    /// Shown only on the end screen of a restartable ruleset
    pub restart_button: Option<Rect>,
}

impl GameSession {
    pub fn hud(&self) -> Hud {
        let (level, kill_quota) = match &self.tuning.ruleset {
            Ruleset::Leveled(rules) => (Some((self.level, rules.levels)), None),
            Ruleset::Quota(rules) => (None, Some(rules.total_enemies)),
        };
        Hud {
            level,
            time: self.timer,
            time_counts_down: level.is_some(),
            enemies_alive: self.enemies.len(),
            kills: self.kills,
            kill_quota,
            score: self.score,
            speed_multiplier: self.speed_multiplier,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            player: PlayerView {
                pos: self.player.pos,
                angle: self.player.angle,
                radius: self.player.radius,
            },
            bullets: self
                .bullets
                .iter()
                .map(|b| CircleView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| CircleView {
                    pos: e.pos,
                    radius: e.radius,
                })
                .collect(),
            hud: self.hud(),
            restart_button: if self.phase.is_terminal() {
                self.restart_button()
            } else {
                None
            },
        }
    }

    /// End screen text, if the session is over
    pub fn end_screen(&self) -> Option<EndScreen> {
        let won = match self.phase {
            GamePhase::Playing => return None,
            GamePhase::Won => true,
            GamePhase::Lost => false,
        };
        let leveled = matches!(self.tuning.ruleset, Ruleset::Leveled(_));

        let (title, subtitle) = match (won, leveled) {
            (true, true) => ("YOU WIN", "All levels survived"),
            (true, false) => ("YOU WIN", "All enemies destroyed"),
            (false, _) => ("GAME OVER", "You were caught"),
        };
        let prompt = if leveled { "Click to exit" } else { "RESTART" };

        Some(EndScreen {
            won,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            prompt: prompt.to_string(),
        })
    }
}
