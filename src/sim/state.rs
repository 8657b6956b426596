//! Session state and core simulation types
//!
//! Everything one play session owns lives here. Created at session start,
//! discarded at session end.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::roster::EnemyRoster;
use super::vehicle::Vehicle;
use crate::Config;

/// Player car entity ID (enemy IDs start at 1)
pub const PLAYER_ID: u32 = 0;

/// Where the session stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Running,
    /// Window closed / quit signal
    QuitRequested,
    /// Escape pressed
    MenuRequested,
    /// Player hit an enemy
    Collided,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Running)
    }
}

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Forward throttle engaged
    EngineStarted,
    /// No throttle in either direction
    EngineStopped,
    EnemySpawned { id: u32 },
    /// Enemy left the bottom of the road and scored
    EnemyPassed { id: u32 },
    Crashed,
}

/// Complete state of one play session (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    pub player: Vehicle,
    pub enemies: EnemyRoster,
    /// Only grows, in steps of `score_per_enemy`
    pub score: u64,
    /// Shown on the HUD; nothing advances it yet
    pub lap_count: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    pub outcome: Outcome,
    /// Whether the engine loop is currently playing
    pub engine_running: bool,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl SessionState {
    /// Create a new session with the player parked at the start line
    pub fn new(config: &Config, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Vehicle::new(PLAYER_ID, config.player_start(), config.sprite_size()),
            enemies: EnemyRoster::new(),
            score: 0,
            lap_count: 0,
            time_ticks: 0,
            spawn_timer: 0,
            outcome: Outcome::Running,
            engine_running: false,
            events: Vec::new(),
        }
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Seconds of simulated play at the configured tick rate (at least 1 Hz)
    pub fn simulated_secs(&self, config: &Config) -> u64 {
        self.time_ticks / config.tick_rate.max(1) as u64
    }
}
