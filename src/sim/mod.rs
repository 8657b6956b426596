//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod roster;
pub mod state;
pub mod tick;
pub mod vehicle;

pub use collision::{Aabb, detect, rotated_extent};
pub use roster::{ENEMY_HEADING, EnemyRoster};
pub use state::{GameEvent, Outcome, PLAYER_ID, SessionState};
pub use tick::{TickInput, tick};
pub use vehicle::{Kinematics, Vehicle};
