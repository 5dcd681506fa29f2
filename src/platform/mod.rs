//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (`FrameClock`)
//! - Input events (`InputState`)
//! - Screen to world mapping (`Viewport`)

use glam::Vec2;

use crate::consts::NOMINAL_DT;
use crate::sim::{FrameTime, Movement, TickInput};

/// Turns raw monotonic timestamps into per-frame clock readings
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reading for a frame at `timestamp_ms`.
    ///
    /// The first frame gets a nominal delta; a timestamp that goes backwards
    /// yields a zero delta instead of a negative one.
    pub fn advance(&mut self, timestamp_ms: f64) -> FrameTime {
        let dt = match self.last_ms {
            Some(last) => (((timestamp_ms - last) / 1000.0) as f32).max(0.0),
            None => NOMINAL_DT,
        };
        let now = self.last_ms.map_or(timestamp_ms, |last| last.max(timestamp_ms));
        self.last_ms = Some(now);
        FrameTime::new(now.max(0.0) as u64, dt)
    }
}

/// Mapping between canvas pixels (y down) and arena units (y up), letterboxed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas size in pixels
    pub size: Vec2,
    /// Arena size in world units
    pub arena: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32, arena_width: f32, arena_height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            arena: Vec2::new(arena_width, arena_height),
        }
    }

    /// Track a new canvas size; the arena is unchanged
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.size = Vec2::new(width, height);
        }
    }

    /// Pixels per world unit
    pub fn scale(&self) -> f32 {
        (self.size.x / self.arena.x).min(self.size.y / self.arena.y)
    }

    /// Pixel offset of the arena's top-left corner
    pub fn offset(&self) -> Vec2 {
        (self.size - self.arena * self.scale()) / 2.0
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let scale = self.scale();
        let local = (screen - self.offset()) / scale;
        Vec2::new(local.x, self.arena.y - local.y)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let scale = self.scale();
        Vec2::new(world.x, self.arena.y - world.y) * scale + self.offset()
    }

    /// World position to normalized device coordinates (-1..1, y up)
    pub fn world_to_ndc(&self, world: Vec2) -> Vec2 {
        let screen = self.world_to_screen(world);
        Vec2::new(
            screen.x / self.size.x * 2.0 - 1.0,
            1.0 - screen.y / self.size.y * 2.0,
        )
    }
}

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    ToggleIdle,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" | "ArrowUp" => Some(Key::Up),
            "s" | "S" | "ArrowDown" => Some(Key::Down),
            "a" | "A" | "ArrowLeft" => Some(Key::Left),
            "d" | "D" | "ArrowRight" => Some(Key::Right),
            "i" | "I" => Some(Key::ToggleIdle),
            _ => None,
        }
    }
}

/// Input accumulated between frames from platform events
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub movement: Movement,
    /// Pointer in canvas pixels
    pub pointer_screen: Vec2,
    pub fire_held: bool,
    /// Latched until the next `end_frame`
    pub fire_pressed: bool,
    pub idle_mode: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Up => self.movement.up = true,
            Key::Down => self.movement.down = true,
            Key::Left => self.movement.left = true,
            Key::Right => self.movement.right = true,
            Key::ToggleIdle => {
                self.idle_mode = !self.idle_mode;
                log::info!("Idle mode: {}", self.idle_mode);
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.movement.up = false,
            Key::Down => self.movement.down = false,
            Key::Left => self.movement.left = false,
            Key::Right => self.movement.right = false,
            Key::ToggleIdle => {}
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer_screen = Vec2::new(x, y);
    }

    pub fn button_down(&mut self) {
        if !self.fire_held {
            self.fire_pressed = true;
        }
        self.fire_held = true;
    }

    pub fn button_up(&mut self) {
        self.fire_held = false;
    }

    /// Drop everything held (focus lost)
    pub fn release_all(&mut self) {
        self.movement = Movement::default();
        self.fire_held = false;
    }

    /// Input for this frame, with the pointer mapped into world space
    pub fn frame_input(&self, viewport: &Viewport) -> TickInput {
        TickInput {
            movement: self.movement,
            pointer: viewport.screen_to_world(self.pointer_screen),
            fire_held: self.fire_held,
            fire_pressed: self.fire_pressed,
            idle_mode: self.idle_mode,
        }
    }

    /// Clear one-shot inputs after the frame consumed them
    pub fn end_frame(&mut self) {
        self.fire_pressed = false;
    }
}
