//! Game configuration
//!
//! One immutable value handed to every component. Loaded from JSON when the
//! player supplies a file; anything the file leaves out keeps its default.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Playfield ===
    /// Visible road width in world units
    pub screen_width: f32,
    /// Visible road height in world units
    pub screen_height: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,

    // === Player car ===
    /// Velocity added per tick while accelerating or reversing
    pub player_acceleration: f32,
    /// Velocity clamp, both directions
    pub player_max_speed: f32,
    /// Fraction of velocity lost every tick
    pub friction: f32,
    /// Degrees per tick of turn at full speed
    pub steering_rate: f32,
    /// Player spawns this far above the bottom edge
    pub player_start_offset: f32,

    // === Traffic ===
    /// Constant downward drift of enemy cars per tick
    pub enemy_speed: f32,
    /// Ticks between enemy spawns
    pub spawn_interval_ticks: u32,
    /// Enemies never spawn closer than this to either side
    pub spawn_margin: u32,
    /// Vertical spawn position (above the visible area)
    pub spawn_y: f32,
    /// Points for each enemy that leaves the bottom of the road
    pub score_per_enemy: u64,

    // === Sprites ===
    pub sprite_width: f32,
    pub sprite_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            tick_rate: 60,

            player_acceleration: 0.5,
            player_max_speed: 8.0,
            friction: 0.02,
            steering_rate: 3.0,
            player_start_offset: 100.0,

            enemy_speed: 5.0,
            spawn_interval_ticks: 60,
            spawn_margin: 100,
            spawn_y: -100.0,
            score_per_enemy: 10,

            sprite_width: 60.0,
            sprite_height: 100.0,
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("malformed config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.screen_width > 0.0 && self.screen_height > 0.0,
            "screen size must be positive (got {}x{})",
            self.screen_width,
            self.screen_height
        );
        ensure!(self.tick_rate > 0, "tick_rate must be positive");
        ensure!(
            self.player_max_speed > 0.0,
            "player_max_speed must be positive (got {})",
            self.player_max_speed
        );
        ensure!(
            (0.0..1.0).contains(&self.friction),
            "friction must be in [0, 1) (got {})",
            self.friction
        );
        ensure!(
            self.player_acceleration >= 0.0 && self.steering_rate >= 0.0,
            "acceleration and steering_rate must not be negative"
        );
        ensure!(self.enemy_speed > 0.0, "enemy_speed must be positive");
        ensure!(
            self.spawn_interval_ticks > 0,
            "spawn_interval_ticks must be positive"
        );
        ensure!(
            (self.spawn_margin as f32) * 2.0 <= self.screen_width,
            "spawn_margin {} leaves no room on a road {} wide",
            self.spawn_margin,
            self.screen_width
        );
        ensure!(
            self.sprite_width > 0.0 && self.sprite_height > 0.0,
            "sprite size must be positive"
        );
        Ok(())
    }

    /// Where the player car is placed at session start
    pub fn player_start(&self) -> Vec2 {
        Vec2::new(
            (self.screen_width / 2.0).floor(),
            self.screen_height - self.player_start_offset,
        )
    }

    /// Unrotated sprite footprint
    #[inline]
    pub fn sprite_size(&self) -> Vec2 {
        Vec2::new(self.sprite_width, self.sprite_height)
    }

    /// Wall-clock length of one tick. A zero rate counts as 1 Hz.
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.player_start(), Vec2::new(400.0, 500.0));
        assert_eq!(config.tick_period(), Duration::from_secs_f64(1.0 / 60.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json_str(r#"{ "enemy_speed": 7.5, "tick_rate": 30 }"#).unwrap();
        assert_eq!(config.enemy_speed, 7.5);
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.screen_width, 800.0);
        assert_eq!(config.score_per_enemy, 10);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_json_str(r#"{ "friction": 1.0 }"#).is_err());
        assert!(Config::from_json_str(r#"{ "player_max_speed": 0 }"#).is_err());
        assert!(Config::from_json_str(r#"{ "spawn_margin": 500 }"#).is_err());
        assert!(Config::from_json_str(r#"{ "spawn_interval_ticks": 0 }"#).is_err());
        assert!(Config::from_json_str("not json").is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config {
            friction: 0.1,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
