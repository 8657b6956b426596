//! Road Rush - a top-down arcade driving game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (car kinematics, enemy traffic, collisions, session state)
//! - `session`: Real-time session loop driving `sim` at a fixed tick rate
//! - `app`: Top-level menu / session / game-over state machine
//! - `platform`: Input, render and pacing collaborators
//! - `audio`, `assets`: Best-effort collaborators consumed by the session
//! - `config`: Immutable game configuration

pub mod app;
pub mod assets;
pub mod audio;
pub mod config;
pub mod platform;
pub mod session;
pub mod sim;

pub use app::{App, AppState};
pub use config::Config;

/// Reduce an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-3.0) - 357.0).abs() < 1e-4);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-4);
        let tiny = normalize_degrees(-1e-7);
        assert!((0.0..360.0).contains(&tiny));
    }
}
