//! Enemy traffic: spawning, descent and retirement

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::vehicle::Vehicle;
use crate::Config;

/// Enemy cars always face down-screen
pub const ENEMY_HEADING: f32 = 180.0;

/// Live enemy cars, oldest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyRoster {
    enemies: Vec<Vehicle>,
    next_id: u32,
}

impl EnemyRoster {
    pub fn new() -> Self {
        Self {
            enemies: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Spawn one enemy at a random lane position above the visible road
    pub fn spawn(&mut self, rng: &mut impl Rng, config: &Config) -> u32 {
        let margin = config.spawn_margin;
        let right = (config.screen_width as u32).saturating_sub(margin).max(margin);
        let x = rng.random_range(margin..=right);
        self.spawn_at(Vec2::new(x as f32, config.spawn_y), config.sprite_size())
    }

    /// Spawn one enemy at an exact position
    pub fn spawn_at(&mut self, pos: Vec2, size: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies
            .push(Vehicle::new(id, pos, size).with_heading(ENEMY_HEADING));
        id
    }

    /// Move every enemy down-screen by a constant amount
    pub fn advance_all(&mut self, drift_speed: f32) {
        let delta = Vec2::new(0.0, drift_speed);
        for enemy in &mut self.enemies {
            enemy.drift(delta);
        }
    }

    /// Remove every enemy whose box has fully passed the bottom edge.
    ///
    /// Returns the IDs removed, oldest first.
    pub fn retire_offscreen(&mut self, playfield_height: f32) -> Vec<u32> {
        let mut retired = Vec::new();
        self.enemies.retain(|enemy| {
            let gone = enemy.bounds.top() > playfield_height;
            if gone {
                retired.push(enemy.id);
            }
            !gone
        });
        retired
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.enemies.iter()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_margins() {
        let config = Config::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut roster = EnemyRoster::new();

        for _ in 0..500 {
            roster.spawn(&mut rng, &config);
        }
        assert_eq!(roster.len(), 500);
        for enemy in roster.iter() {
            assert!(enemy.pos.x >= 100.0 && enemy.pos.x <= 700.0);
            assert_eq!(enemy.pos.x.fract(), 0.0);
            assert_eq!(enemy.pos.y, -100.0);
            assert_eq!(enemy.heading, 180.0);
            assert_eq!(enemy.velocity, 0.0);
            assert_eq!(enemy.steering, 0.0);
        }
    }

    #[test]
    fn test_ids_unique_in_spawn_order() {
        let mut roster = EnemyRoster::new();
        let size = Vec2::new(60.0, 100.0);
        let a = roster.spawn_at(Vec2::new(100.0, 0.0), size);
        let b = roster.spawn_at(Vec2::new(200.0, 0.0), size);
        let c = roster.spawn_at(Vec2::new(300.0, 0.0), size);
        assert!(a < b && b < c);
        let ids: Vec<u32> = roster.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn test_advance_all() {
        let mut roster = EnemyRoster::new();
        roster.spawn_at(Vec2::new(100.0, -100.0), Vec2::new(60.0, 100.0));
        roster.advance_all(5.0);
        roster.advance_all(5.0);
        let enemy = roster.iter().next().unwrap();
        assert_eq!(enemy.pos.y, -90.0);
        assert!((enemy.bounds.center().y + 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_retire_adjacent_offscreen_entities() {
        let size = Vec2::new(60.0, 100.0);
        let mut roster = EnemyRoster::new();
        // Top edges: 651, 651, 300, 700, 550
        let gone_a = roster.spawn_at(Vec2::new(100.0, 701.0), size);
        let gone_b = roster.spawn_at(Vec2::new(200.0, 701.0), size);
        roster.spawn_at(Vec2::new(300.0, 350.0), size);
        let gone_c = roster.spawn_at(Vec2::new(400.0, 750.0), size);
        roster.spawn_at(Vec2::new(500.0, 600.0), size);

        let retired = roster.retire_offscreen(600.0);
        assert_eq!(retired, vec![gone_a, gone_b, gone_c]);
        assert_eq!(roster.len(), 2);
        assert!(roster.iter().all(|e| e.bounds.top() <= 600.0));

        // Second pass has nothing left to do
        assert!(roster.retire_offscreen(600.0).is_empty());
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_top_exactly_at_edge_stays() {
        let mut roster = EnemyRoster::new();
        roster.spawn_at(Vec2::new(100.0, 650.0), Vec2::new(60.0, 100.0));
        assert!(roster.retire_offscreen(600.0).is_empty());
        roster.advance_all(1.0);
        assert_eq!(roster.retire_offscreen(600.0).len(), 1);
        assert!(roster.is_empty());
    }
}
