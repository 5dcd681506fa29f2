//! Circle collision checks between entity sets
//!
//! Removal happens while iterating, so both scans walk indices in reverse and
//! use `swap_remove`: the element swapped into a freed slot always comes from
//! the already-visited tail.

use super::state::{Bullet, Enemy, Player};
use crate::circles_overlap;

#[inline]
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    circles_overlap(bullet.pos, bullet.radius, enemy.pos, enemy.radius)
}

#[inline]
pub fn enemy_catches_player(enemy: &Enemy, player: &Player) -> bool {
    circles_overlap(enemy.pos, enemy.radius, player.pos, player.radius)
}

/// Remove every bullet/enemy pair that overlaps, returning the number of kills.
///
/// Each bullet stops scanning at its first hit, so one bullet kills at most
/// one enemy and no entity is removed twice.
pub fn resolve_bullet_hits(bullets: &mut Vec<Bullet>, enemies: &mut Vec<Enemy>) -> u32 {
    let mut kills = 0;

    for i in (0..bullets.len()).rev() {
        for j in (0..enemies.len()).rev() {
            if bullet_hits_enemy(&bullets[i], &enemies[j]) {
                bullets.swap_remove(i);
                enemies.swap_remove(j);
                kills += 1;
                break;
            }
        }
    }

    kills
}

/// True if any live enemy overlaps the player
pub fn player_caught(player: &Player, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|e| enemy_catches_player(e, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn bullet(x: f32, y: f32) -> Bullet {
        Bullet {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 5.0,
        }
    }

    fn enemy(x: f32, y: f32) -> Enemy {
        Enemy::new(Vec2::new(x, y), 80.0, 1.0, 18.0)
    }

    #[test]
    fn test_single_pair_removed() {
        let mut bullets = vec![bullet(100.0, 100.0)];
        let mut enemies = vec![enemy(110.0, 100.0)];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut enemies), 1);
        assert!(bullets.is_empty());
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        let mut bullets = vec![bullet(100.0, 100.0)];
        let mut enemies = vec![enemy(123.0, 100.0)];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut enemies), 0);
        assert_eq!(bullets.len(), 1);
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_n_disjoint_pairs_all_removed() {
        let mut bullets = Vec::new();
        let mut enemies = Vec::new();
        for k in 0..7 {
            let x = 100.0 + k as f32 * 100.0;
            bullets.push(bullet(x, 200.0));
            enemies.push(enemy(x + 3.0, 200.0));
        }
        // Interleave a miss on each side
        bullets.insert(3, bullet(50.0, 600.0));
        enemies.insert(0, enemy(900.0, 600.0));

        assert_eq!(resolve_bullet_hits(&mut bullets, &mut enemies), 7);
        assert_eq!(bullets.len(), 1);
        assert_eq!(enemies.len(), 1);
        assert_eq!(bullets[0].pos, Vec2::new(50.0, 600.0));
        assert_eq!(enemies[0].pos, Vec2::new(900.0, 600.0));
    }

    #[test]
    fn test_one_bullet_kills_one_of_two_enemies() {
        let mut bullets = vec![bullet(100.0, 100.0)];
        let mut enemies = vec![enemy(105.0, 100.0), enemy(95.0, 100.0)];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut enemies), 1);
        assert!(bullets.is_empty());
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_two_bullets_on_one_enemy() {
        let mut bullets = vec![bullet(100.0, 100.0), bullet(101.0, 100.0)];
        let mut enemies = vec![enemy(100.0, 100.0)];
        assert_eq!(resolve_bullet_hits(&mut bullets, &mut enemies), 1);
        assert_eq!(bullets.len(), 1);
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_player_caught() {
        let player = Player::new(Vec2::new(500.0, 350.0), 24.0);
        assert!(!player_caught(&player, &[]));
        assert!(!player_caught(&player, &[enemy(542.0, 350.0)]));
        assert!(player_caught(&player, &[enemy(900.0, 100.0), enemy(541.0, 350.0)]));
    }
}
