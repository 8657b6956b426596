//! Fixed timestep simulation tick
//!
//! One call is one frame of play: input, player kinematics, traffic,
//! scoring, collision.

use serde::{Deserialize, Serialize};

use super::collision::detect;
use super::state::{GameEvent, Outcome, SessionState};
use super::vehicle::Kinematics;
use crate::Config;

/// Input sampled once at the start of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Accelerate
    pub up: bool,
    /// Brake / reverse
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Window closed
    pub quit: bool,
    /// Escape: back to the menu
    pub cancel: bool,
}

/// Advance the session by one tick and report where it stands.
///
/// A session that has already ended is left untouched.
pub fn tick(state: &mut SessionState, input: &TickInput, config: &Config) -> Outcome {
    if state.outcome.is_terminal() {
        return state.outcome;
    }

    // Exit signals win over simulation
    if input.quit {
        state.outcome = Outcome::QuitRequested;
        return state.outcome;
    }
    if input.cancel {
        state.outcome = Outcome::MenuRequested;
        return state.outcome;
    }

    state.time_ticks += 1;

    apply_controls(state, input, config);
    state.player.step(Kinematics::from_config(config));

    state.spawn_timer += 1;
    if state.spawn_timer >= config.spawn_interval_ticks {
        let id = state.enemies.spawn(&mut state.rng, config);
        state.events.push(GameEvent::EnemySpawned { id });
        state.spawn_timer = 0;
    }

    state.enemies.advance_all(config.enemy_speed);
    for id in state.enemies.retire_offscreen(config.screen_height) {
        state.score += config.score_per_enemy;
        state.events.push(GameEvent::EnemyPassed { id });
    }

    if detect(&state.player.bounds, state.enemies.iter().map(|e| &e.bounds)) {
        log::trace!("Collision at tick {}", state.time_ticks);
        state.events.push(GameEvent::Crashed);
        state.outcome = Outcome::Collided;
    }

    state.outcome
}

/// Map held keys onto the player's acceleration and steering.
///
/// Opposing keys do not cancel: forward beats backward, left beats right.
fn apply_controls(state: &mut SessionState, input: &TickInput, config: &Config) {
    let player = &mut state.player;

    player.acceleration = if input.up {
        config.player_acceleration
    } else if input.down {
        -config.player_acceleration
    } else {
        0.0
    };

    player.steering = if input.left {
        config.steering_rate
    } else if input.right {
        -config.steering_rate
    } else {
        0.0
    };

    if input.up && !state.engine_running {
        state.engine_running = true;
        state.events.push(GameEvent::EngineStarted);
    } else if !input.up && !input.down && state.engine_running {
        state.engine_running = false;
        state.events.push(GameEvent::EngineStopped);
    }
}
