//! WebGPU rendering module
//!
//! The scene is tessellated on the CPU in world coordinates and drawn as a
//! single flat-colored triangle list.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};

use crate::Rect;
use crate::sim::Snapshot;

/// Build the vertex list for one frame, back to front
pub fn scene_vertices(snapshot: &Snapshot, arena_width: f32, arena_height: f32) -> Vec<Vertex> {
    let mut vertices = shapes::rect(&Rect::new(0.0, 0.0, arena_width, arena_height), colors::ARENA);

    for enemy in &snapshot.enemies {
        vertices.extend(shapes::circle(
            enemy.pos,
            enemy.radius,
            colors::ENEMY,
            shapes::segments_for(enemy.radius),
        ));
    }

    for bullet in &snapshot.bullets {
        vertices.extend(shapes::circle(
            bullet.pos,
            bullet.radius,
            colors::BULLET,
            shapes::segments_for(bullet.radius),
        ));
    }

    let player = &snapshot.player;
    vertices.extend(shapes::facing_marker(
        player.pos,
        player.radius,
        player.angle,
        colors::PLAYER_FACING,
    ));
    vertices.extend(shapes::circle(
        player.pos,
        player.radius,
        colors::PLAYER,
        shapes::segments_for(player.radius),
    ));

    if snapshot.phase.is_terminal() {
        vertices.extend(shapes::rect(
            &Rect::new(0.0, 0.0, arena_width, arena_height),
            colors::DIM_OVERLAY,
        ));
        if let Some(button) = &snapshot.restart_button {
            vertices.extend(shapes::rect(button, colors::RESTART_BUTTON));
        }
    }

    vertices
}
