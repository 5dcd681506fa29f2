//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module has no rendering or platform
//! dependencies:
//! - Movement integrates over the frame delta (explicit Euler)
//! - Spawning and firing are gated by the monotonic clock
//! - Seeded RNG only

pub mod collision;
pub mod hud;
pub mod state;
pub mod tick;

pub use collision::{player_caught, resolve_bullet_hits};
pub use hud::{CircleView, EndScreen, Hud, PlayerView, Snapshot};
pub use state::{Bullet, Cadence, Enemy, GamePhase, GameSession, Movement, Player};
pub use tick::{FrameTime, GameEvent, TickInput, tick};
