//! Real-time session loop
//!
//! Owns nothing but the collaborators; each tick runs strictly
//! input → simulate → sound → render → wait.

use std::time::Instant;

use crate::Config;
use crate::assets::AssetSet;
use crate::audio::{AudioManager, SoundEffect};
use crate::platform::{Hud, InputSource, Pacer, RenderSink, render_frame};
use crate::sim::{GameEvent, Outcome, SessionState, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    Quit,
    ReturnToMenu,
    Collided,
}

impl SessionExit {
    /// `None` while the session is still running
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Running => None,
            Outcome::QuitRequested => Some(SessionExit::Quit),
            Outcome::MenuRequested => Some(SessionExit::ReturnToMenu),
            Outcome::Collided => Some(SessionExit::Collided),
        }
    }
}

/// Final numbers of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub exit: SessionExit,
    pub score: u64,
    pub ticks: u64,
}

/// Everything the loop talks to besides the simulation
pub struct Platform {
    pub input: Box<dyn InputSource>,
    pub renderer: Box<dyn RenderSink>,
    pub pacer: Box<dyn Pacer>,
    pub audio: AudioManager,
    pub assets: AssetSet,
}

/// Play one session to its end
pub fn run_session(
    mut state: SessionState,
    config: &Config,
    platform: &mut Platform,
) -> SessionReport {
    let started = Instant::now();
    log::info!("Session started (seed {})", state.seed);

    loop {
        let input = platform.input.poll(&state);
        let outcome = tick(&mut state, &input, config);

        for event in state.drain_events() {
            if let GameEvent::EnemyPassed { id } = event {
                log::trace!("Enemy {} passed, score {}", id, state.score);
            }
            platform.audio.handle_event(&event);
        }

        if let Some(exit) = SessionExit::from_outcome(outcome) {
            if state.engine_running {
                platform.audio.stop(SoundEffect::EngineLoop);
            }
            log::info!(
                "Session ended: {:?} after {} ticks ({}s simulated), score {}",
                exit,
                state.time_ticks,
                state.simulated_secs(config),
                state.score
            );
            return SessionReport {
                exit,
                score: state.score,
                ticks: state.time_ticks,
            };
        }

        let hud = Hud {
            score: state.score,
            lap: state.lap_count,
            elapsed_secs: started.elapsed().as_secs(),
        };
        render_frame(platform.renderer.as_mut(), &state, &platform.assets, &hud);
        platform.pacer.wait();
    }
}
