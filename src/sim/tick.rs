//! Per-frame simulation step
//!
//! Movement integrates over the frame delta; spawning and firing are gated by
//! the clock so their rate does not depend on frame rate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{player_caught, resolve_bullet_hits};
use super::state::{GamePhase, GameSession, Movement};
use crate::tuning::Ruleset;

/// How long the autopilot lingers on the end screen before restarting
const AUTOPILOT_RESTART_DELAY_MS: u64 = 2000;
/// Enemies closer than this make the autopilot back away
const AUTOPILOT_DANGER_RADIUS: f32 = 220.0;

/// Input polled for a single frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub movement: Movement,
    /// Pointer position in world coordinates
    pub pointer: Vec2,
    /// Fire button held
    pub fire_held: bool,
    /// Fire button went down since the previous frame
    pub fire_pressed: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// Clock readings for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Monotonic clock (milliseconds)
    pub now_ms: u64,
    /// Seconds since the previous frame
    pub dt: f32,
}

impl FrameTime {
    pub fn new(now_ms: u64, dt: f32) -> Self {
        Self { now_ms, dt }
    }
}

/// Things that happened during a tick, for logging and presentation cues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { pos: Vec2 },
    ShotFired,
    EnemyKilled { score: u32 },
    SpeedUp { multiplier: f32 },
    LevelAdvanced { level: u32 },
    Won,
    Lost,
    Restarted,
    /// Leveled ruleset: the player dismissed the end screen
    ExitRequested,
}

/// Advance the session by one frame
pub fn tick(session: &mut GameSession, input: &TickInput, time: FrameTime) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let mut input = input.clone();
    if input.idle_mode {
        apply_autopilot(session, &mut input, time.now_ms);
    }
    let input = &input;

    // Frozen: only the end-screen press is handled
    if session.phase.is_terminal() {
        if input.fire_pressed {
            handle_terminal_press(session, input.pointer, &mut events);
        }
        return events;
    }

    let dt = time.dt;
    let now = time.now_ms;

    // Timer: countdown per level, or elapsed time
    match &session.tuning.ruleset {
        Ruleset::Leveled(_) => session.timer = (session.timer - dt).max(0.0),
        Ruleset::Quota(_) => session.timer += dt,
    }

    // Spawn enemies
    if session.spawned < session.spawn_quota && session.spawn_cadence.ready(now) {
        let pos = session.spawn_enemy();
        session.spawn_cadence.trigger(now);
        log::debug!("Spawned enemy {}/{} at {:?}", session.spawned, session.spawn_quota, pos);
        events.push(GameEvent::EnemySpawned { pos });
    }

    session
        .player
        .update(dt, input.movement, input.pointer, &session.tuning);

    // Shooting
    if input.fire_held && session.fire_cadence.ready(now) {
        session.fire_bullet();
        session.fire_cadence.trigger(now);
        events.push(GameEvent::ShotFired);
    }

    // Update bullets
    for i in (0..session.bullets.len()).rev() {
        session.bullets[i].update(dt);
        if session.bullets[i].is_offscreen(&session.tuning) {
            session.bullets.swap_remove(i);
        }
    }

    // Update enemies
    let target = session.player.pos;
    for enemy in &mut session.enemies {
        enemy.update(dt, target);
    }

    // Bullet-enemy collisions
    let kills = resolve_bullet_hits(&mut session.bullets, &mut session.enemies);
    if kills > 0 {
        let kills_before = session.kills;
        for _ in 0..kills {
            session.kills += 1;
            session.score += session.tuning.kill_score;
            events.push(GameEvent::EnemyKilled {
                score: session.score,
            });
        }
        apply_speedups(session, kills_before, &mut events);
    }

    // Player-enemy collisions end the step immediately
    if player_caught(&session.player, &session.enemies) {
        session.finish(GamePhase::Lost, now);
        events.push(GameEvent::Lost);
        return events;
    }

    check_progress(session, now, &mut events);

    events
}

/// Raise the speed multiplier once per threshold crossed and re-speed live enemies
fn apply_speedups(session: &mut GameSession, kills_before: u32, events: &mut Vec<GameEvent>) {
    let Ruleset::Quota(rules) = &session.tuning.ruleset else {
        return;
    };
    // Zero threshold disables speed-ups
    let (Some(after), Some(before)) = (
        session.kills.checked_div(rules.kills_per_speedup),
        kills_before.checked_div(rules.kills_per_speedup),
    ) else {
        return;
    };
    let steps = after - before;
    if steps == 0 {
        return;
    }

    let factor = rules.speedup_factor;
    for _ in 0..steps {
        session.speed_multiplier *= factor;
        events.push(GameEvent::SpeedUp {
            multiplier: session.speed_multiplier,
        });
    }
    let multiplier = session.speed_multiplier;
    for enemy in &mut session.enemies {
        enemy.apply_multiplier(multiplier);
    }
    log::info!("Speed up after {} kills: x{:.3}", session.kills, multiplier);
}

/// Level advance and win checks
fn check_progress(session: &mut GameSession, now: u64, events: &mut Vec<GameEvent>) {
    match session.tuning.ruleset.clone() {
        Ruleset::Quota(rules) => {
            if session.kills >= rules.total_enemies {
                session.finish(GamePhase::Won, now);
                events.push(GameEvent::Won);
            }
        }
        Ruleset::Leveled(rules) => {
            if session.timer > 0.0 || !session.enemies.is_empty() {
                return;
            }
            if session.level < rules.levels {
                session.level += 1;
                session.spawn_quota += rules.enemies_per_level;
                session.spawned = 0;
                session.timer = rules.level_time(session.level);
                log::info!(
                    "Level {}/{}: {} enemies, {}s",
                    session.level,
                    rules.levels,
                    session.spawn_quota,
                    session.timer
                );
                events.push(GameEvent::LevelAdvanced {
                    level: session.level,
                });
            } else {
                session.finish(GamePhase::Won, now);
                events.push(GameEvent::Won);
            }
        }
    }
}

/// Pointer press while the end screen is showing
fn handle_terminal_press(session: &mut GameSession, pointer: Vec2, events: &mut Vec<GameEvent>) {
    match session.restart_button() {
        Some(button) => {
            if button.contains(pointer) {
                session.reset();
                log::info!("Session restarted with seed: {}", session.seed);
                events.push(GameEvent::Restarted);
            }
        }
        None => {
            log::info!("Exit requested from end screen");
            events.push(GameEvent::ExitRequested);
        }
    }
}

/// Replace the polled input with the autopilot's choices
fn apply_autopilot(session: &GameSession, input: &mut TickInput, now_ms: u64) {
    if session.phase.is_terminal() {
        // Restart after a short pause on the end screen; a real click still counts
        if let (Some(button), Some(ended)) = (session.restart_button(), session.ended_at_ms) {
            if now_ms.saturating_sub(ended) >= AUTOPILOT_RESTART_DELAY_MS {
                input.pointer = button.center();
                input.fire_pressed = true;
            }
        }
        return;
    }

    let player = session.player.pos;
    let nearest = session.enemies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player)
            .partial_cmp(&b.pos.distance_squared(player))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    input.movement = Movement::default();
    match nearest {
        Some(enemy) => {
            input.pointer = enemy.pos;
            input.fire_held = true;

            let away = player - enemy.pos;
            if away.length() < AUTOPILOT_DANGER_RADIUS {
                input.movement = Movement {
                    up: away.y > 1.0,
                    down: away.y < -1.0,
                    left: away.x < -1.0,
                    right: away.x > 1.0,
                };
                // Pinned against a wall: slide along it toward open space
                if input.movement.axis() == Vec2::ZERO
                    || backed_into_wall(session, input.movement)
                {
                    let center = session.tuning.arena_center();
                    input.movement = Movement {
                        up: center.y > player.y,
                        down: center.y < player.y,
                        left: center.x < player.x,
                        right: center.x > player.x,
                    };
                }
            }
        }
        None => {
            input.fire_held = false;
        }
    }
}

/// True if every requested direction is blocked by the arena edge
fn backed_into_wall(session: &GameSession, movement: Movement) -> bool {
    let pos = session.player.pos;
    let margin = session.player.radius;
    let blocked_x = (movement.left && pos.x <= margin)
        || (movement.right && pos.x >= session.tuning.arena_width - margin)
        || (!movement.left && !movement.right);
    let blocked_y = (movement.down && pos.y <= margin)
        || (movement.up && pos.y >= session.tuning.arena_height - margin)
        || (!movement.up && !movement.down);
    blocked_x && blocked_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy};
    use crate::tuning::Tuning;

    const DT: f32 = 1.0 / 60.0;

    /// Session with spawning pushed into the future so tests control enemies
    fn quiet_session(tuning: Tuning) -> GameSession {
        let mut session = GameSession::new(tuning, 1);
        session.spawn_cadence.trigger(0);
        session
    }

    fn idle() -> TickInput {
        TickInput {
            pointer: Vec2::new(500.0, 600.0),
            ..Default::default()
        }
    }

    fn enemy_at(session: &GameSession, pos: Vec2) -> Enemy {
        Enemy::new(
            pos,
            session.enemy_base_speed(),
            session.speed_multiplier,
            session.tuning.enemy_radius,
        )
    }

    /// Bullet parked on top of an enemy far from the player
    fn stage_kill(session: &mut GameSession, pos: Vec2) {
        let enemy = enemy_at(session, pos);
        session.enemies.push(enemy);
        session.bullets.push(Bullet {
            pos,
            vel: Vec2::ZERO,
            radius: 5.0,
        });
    }

    #[test]
    fn test_first_frame_spawns_and_cadence_holds() {
        let mut session = GameSession::new(Tuning::default(), 5);
        let events = tick(&mut session, &idle(), FrameTime::new(10_000, DT));
        assert_eq!(session.enemies.len(), 1);
        assert!(matches!(events[0], GameEvent::EnemySpawned { .. }));

        // 900ms later is not strictly more than the interval
        tick(&mut session, &idle(), FrameTime::new(10_900, DT));
        assert_eq!(session.enemies.len(), 1);
        tick(&mut session, &idle(), FrameTime::new(10_901, DT));
        assert_eq!(session.enemies.len(), 2);
    }

    #[test]
    fn test_spawn_independent_of_frame_rate() {
        let mut fast = GameSession::new(Tuning::default(), 5);
        let mut slow = GameSession::new(Tuning::default(), 5);
        for ms in (0..=5000).step_by(5) {
            tick(&mut fast, &idle(), FrameTime::new(ms, 0.005));
        }
        for ms in (0..=5000).step_by(50) {
            tick(&mut slow, &idle(), FrameTime::new(ms, 0.05));
        }
        assert_eq!(fast.spawned, slow.spawned);
    }

    #[test]
    fn test_spawning_stops_at_quota() {
        let tuning = Tuning {
            ruleset: Ruleset::Quota(crate::tuning::QuotaRules {
                total_enemies: 3,
                ..Default::default()
            }),
            ..Tuning::default()
        };
        let mut session = GameSession::new(tuning, 5);
        for k in 0..10u64 {
            tick(&mut session, &idle(), FrameTime::new(k * 1000, 0.0));
        }
        assert_eq!(session.spawned, 3);
        assert_eq!(session.enemies.len(), 3);
    }

    #[test]
    fn test_fire_cooldown() {
        let mut session = quiet_session(Tuning::default());
        let input = TickInput {
            fire_held: true,
            ..idle()
        };
        let events = tick(&mut session, &input, FrameTime::new(100, DT));
        assert!(events.contains(&GameEvent::ShotFired));
        tick(&mut session, &input, FrameTime::new(200, DT));
        tick(&mut session, &input, FrameTime::new(280, DT));
        assert_eq!(session.bullets.len(), 1);
        tick(&mut session, &input, FrameTime::new(281, DT));
        assert_eq!(session.bullets.len(), 2);
    }

    #[test]
    fn test_bullet_fired_along_facing() {
        let mut session = quiet_session(Tuning::default());
        let input = TickInput {
            fire_held: true,
            pointer: Vec2::new(500.0, 700.0),
            ..Default::default()
        };
        tick(&mut session, &input, FrameTime::new(100, 0.0));
        let bullet = &session.bullets[0];
        assert!(bullet.vel.x.abs() < 1e-3);
        assert!((bullet.vel.y - 900.0).abs() < 1e-3);
    }

    #[test]
    fn test_offscreen_bullets_removed() {
        let mut session = quiet_session(Tuning::default());
        session.bullets.push(Bullet {
            pos: Vec2::new(1015.0, 350.0),
            vel: Vec2::new(900.0, 0.0),
            radius: 5.0,
        });
        session.bullets.push(Bullet {
            pos: Vec2::new(500.0, 600.0),
            vel: Vec2::new(0.0, 10.0),
            radius: 5.0,
        });
        tick(&mut session, &idle(), FrameTime::new(100, DT));
        assert_eq!(session.bullets.len(), 1);
        assert!(session.bullets[0].pos.x == 500.0);
    }

    #[test]
    fn test_kill_scores_ten() {
        let mut session = quiet_session(Tuning::default());
        stage_kill(&mut session, Vec2::new(100.0, 100.0));
        let events = tick(&mut session, &idle(), FrameTime::new(100, 0.0));
        assert_eq!(session.score, 10);
        assert_eq!(session.kills, 1);
        assert!(session.bullets.is_empty() && session.enemies.is_empty());
        assert!(events.contains(&GameEvent::EnemyKilled { score: 10 }));
    }

    #[test]
    fn test_n_kills_in_one_frame() {
        let mut session = quiet_session(Tuning::default());
        for k in 0..5 {
            stage_kill(&mut session, Vec2::new(100.0 + k as f32 * 60.0, 100.0));
        }
        tick(&mut session, &idle(), FrameTime::new(100, 0.0));
        assert_eq!(session.score, 50);
        assert_eq!(session.kills, 5);
        assert!(session.bullets.is_empty() && session.enemies.is_empty());
    }

    #[test]
    fn test_contact_loses_and_freezes() {
        let mut session = quiet_session(Tuning::default());
        let near = enemy_at(&session, Vec2::new(530.0, 350.0));
        session.enemies.push(near);
        let events = tick(&mut session, &idle(), FrameTime::new(100, DT));
        assert_eq!(session.phase, GamePhase::Lost);
        assert_eq!(events.last(), Some(&GameEvent::Lost));
        assert_eq!(session.ended_at_ms, Some(100));

        // Frozen: nothing moves, spawns, or fires
        let enemy_pos = session.enemies[0].pos;
        let input = TickInput {
            fire_held: true,
            movement: Movement {
                right: true,
                ..Default::default()
            },
            ..idle()
        };
        let events = tick(&mut session, &input, FrameTime::new(5000, 1.0));
        assert!(events.is_empty());
        assert_eq!(session.enemies[0].pos, enemy_pos);
        assert_eq!(session.player.pos, Vec2::new(500.0, 350.0));
        assert!(session.bullets.is_empty());
        assert_eq!(session.enemies.len(), 1);
    }

    #[test]
    fn test_enemy_from_ring_eventually_catches_player() {
        let mut session = quiet_session(Tuning::default());
        session.spawn_cadence.trigger(u64::MAX / 2);
        let enemy = Enemy::on_ring(
            session.tuning.arena_center(),
            0.0,
            700.0,
            80.0,
            1.0,
            18.0,
        );
        assert!((enemy.pos - Vec2::new(1200.0, 350.0)).length() < 1e-3);
        session.enemies.push(enemy);

        let mut last = f32::MAX;
        let mut now = 0;
        while session.phase == GamePhase::Playing {
            now += 16;
            tick(&mut session, &idle(), FrameTime::new(now, DT));
            if let Some(enemy) = session.enemies.first() {
                let dist = enemy.pos.distance(session.player.pos);
                assert!(dist < last);
                last = dist;
            }
            assert!(now < 20_000, "enemy never arrived");
        }
        assert_eq!(session.phase, GamePhase::Lost);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_speedup_every_ten_kills() {
        let mut session = quiet_session(Tuning::default());
        let survivor = enemy_at(&session, Vec2::new(900.0, 650.0));
        session.enemies.push(survivor);

        for k in 0..10 {
            stage_kill(&mut session, Vec2::new(60.0 + k as f32 * 40.0, 60.0));
        }
        let events = tick(&mut session, &idle(), FrameTime::new(100, 0.0));
        assert_eq!(session.kills, 10);
        assert!((session.speed_multiplier - 1.15).abs() < 1e-6);
        assert!(events.iter().any(|e| matches!(e, GameEvent::SpeedUp { .. })));
        assert_eq!(session.enemies.len(), 1);
        assert!((session.enemies[0].speed - 80.0 * 1.15).abs() < 1e-3);

        for k in 0..10 {
            stage_kill(&mut session, Vec2::new(60.0 + k as f32 * 40.0, 60.0));
        }
        tick(&mut session, &idle(), FrameTime::new(200, 0.0));
        assert_eq!(session.kills, 20);
        assert!((session.enemies[0].speed - 80.0 * 1.15 * 1.15).abs() < 1e-3);

        // New spawns inherit the multiplier
        session.spawn_enemy();
        assert!((session.enemies[1].speed - 80.0 * 1.15 * 1.15).abs() < 1e-3);
    }

    #[test]
    fn test_quota_win_and_restart() {
        let tuning = Tuning {
            ruleset: Ruleset::Quota(crate::tuning::QuotaRules {
                total_enemies: 2,
                ..Default::default()
            }),
            ..Tuning::default()
        };
        let mut session = quiet_session(tuning);
        stage_kill(&mut session, Vec2::new(100.0, 100.0));
        stage_kill(&mut session, Vec2::new(200.0, 100.0));
        let events = tick(&mut session, &idle(), FrameTime::new(100, DT));
        assert_eq!(session.phase, GamePhase::Won);
        assert!(events.contains(&GameEvent::Won));

        let button = session.restart_button().unwrap();

        // Outside the button: ignored
        let miss = TickInput {
            fire_pressed: true,
            pointer: Vec2::new(button.x - 10.0, button.y),
            ..Default::default()
        };
        assert!(tick(&mut session, &miss, FrameTime::new(200, DT)).is_empty());
        assert_eq!(session.phase, GamePhase::Won);

        // Held without a fresh press: ignored
        let held = TickInput {
            fire_held: true,
            pointer: button.center(),
            ..Default::default()
        };
        assert!(tick(&mut session, &held, FrameTime::new(300, DT)).is_empty());

        let hit = TickInput {
            fire_pressed: true,
            pointer: button.center(),
            ..Default::default()
        };
        let events = tick(&mut session, &hit, FrameTime::new(400, DT));
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.kills, 0);
        assert_eq!(session.timer, 0.0);
        assert_eq!(session.speed_multiplier, 1.0);
        assert!(session.enemies.is_empty() && session.bullets.is_empty());
        assert_eq!(session.player.pos, Vec2::new(500.0, 350.0));
    }

    #[test]
    fn test_quota_timer_counts_up() {
        let mut session = quiet_session(Tuning::default());
        for k in 0..30 {
            tick(&mut session, &idle(), FrameTime::new(k, 0.1));
        }
        assert!((session.timer - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_leveled_advance_and_win() {
        let tuning = Tuning {
            ruleset: Ruleset::Leveled(crate::tuning::LevelRules {
                levels: 2,
                ..Default::default()
            }),
            ..Tuning::default()
        };
        let mut session = quiet_session(tuning);
        session.spawn_cadence.trigger(u64::MAX / 2);

        // Timer runs out but an enemy is alive: no advance
        let straggler = enemy_at(&session, Vec2::new(900.0, 650.0));
        session.enemies.push(straggler);
        session.timer = 0.01;
        tick(&mut session, &idle(), FrameTime::new(100, DT));
        assert_eq!(session.timer, 0.0);
        assert_eq!(session.level, 1);

        session.enemies.clear();
        let events = tick(&mut session, &idle(), FrameTime::new(200, DT));
        assert_eq!(events, vec![GameEvent::LevelAdvanced { level: 2 }]);
        assert_eq!(session.level, 2);
        assert_eq!(session.spawn_quota, 25);
        assert_eq!(session.spawned, 0);
        assert_eq!(session.timer, 40.0);
        assert_eq!(session.enemy_base_speed(), 104.0);

        session.timer = 0.01;
        let events = tick(&mut session, &idle(), FrameTime::new(300, DT));
        assert_eq!(events, vec![GameEvent::Won]);
        assert_eq!(session.phase, GamePhase::Won);

        // Any press on the end screen asks to exit
        let press = TickInput {
            fire_pressed: true,
            ..Default::default()
        };
        let events = tick(&mut session, &press, FrameTime::new(400, DT));
        assert_eq!(events, vec![GameEvent::ExitRequested]);
        assert_eq!(session.phase, GamePhase::Won);
    }

    #[test]
    fn test_autopilot_aims_and_fires_at_nearest() {
        let mut session = quiet_session(Tuning::default());
        session.spawn_cadence.trigger(u64::MAX / 2);
        let far = enemy_at(&session, Vec2::new(950.0, 650.0));
        let near = enemy_at(&session, Vec2::new(500.0, 650.0));
        session.enemies.push(far);
        session.enemies.push(near);

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let events = tick(&mut session, &input, FrameTime::new(100, 0.0));
        assert!(events.contains(&GameEvent::ShotFired));
        assert!((session.player.angle - 90.0).abs() < 1.0);
    }

    #[test]
    fn test_autopilot_backs_away() {
        let mut session = quiet_session(Tuning::default());
        session.spawn_cadence.trigger(u64::MAX / 2);
        let close = enemy_at(&session, Vec2::new(650.0, 350.0));
        session.enemies.push(close);

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        tick(&mut session, &input, FrameTime::new(100, 0.1));
        assert!(session.player.pos.x < 500.0);
    }

    #[test]
    fn test_autopilot_restarts_after_delay() {
        let mut session = quiet_session(Tuning::default());
        let near = enemy_at(&session, Vec2::new(510.0, 350.0));
        session.enemies.push(near);
        tick(&mut session, &idle(), FrameTime::new(1000, DT));
        assert_eq!(session.phase, GamePhase::Lost);

        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        assert!(tick(&mut session, &input, FrameTime::new(2500, DT)).is_empty());
        let events = tick(&mut session, &input, FrameTime::new(3000, DT));
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_zero_speedup_threshold_never_speeds_up() {
        let tuning = Tuning {
            ruleset: Ruleset::Quota(crate::tuning::QuotaRules {
                kills_per_speedup: 0,
                ..Default::default()
            }),
            ..Tuning::default()
        };
        let mut session = quiet_session(tuning);
        stage_kill(&mut session, Vec2::new(100.0, 100.0));

        let events = tick(&mut session, &idle(), FrameTime::new(100, 0.0));
        assert_eq!(session.kills, 1);
        assert_eq!(session.speed_multiplier, 1.0);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::SpeedUp { .. })));
    }

    #[test]
    fn test_click_restarts_while_autopilot_waits() {
        let mut session = quiet_session(Tuning::default());
        let near = enemy_at(&session, Vec2::new(510.0, 350.0));
        session.enemies.push(near);
        tick(&mut session, &idle(), FrameTime::new(1000, DT));
        assert_eq!(session.phase, GamePhase::Lost);

        let button = session.restart_button().unwrap();
        let click = TickInput {
            idle_mode: true,
            fire_pressed: true,
            pointer: button.center(),
            ..Default::default()
        };
        let events = tick(&mut session, &click, FrameTime::new(1100, DT));
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(session.phase, GamePhase::Playing);
    }
}
