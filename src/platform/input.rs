//! Input sources
//!
//! Sampled once at the start of every tick. The native build has no window,
//! so it drives the car with `Autopilot`; tests replay `Scripted` inputs.

use std::collections::VecDeque;

use crate::Config;
use crate::sim::{SessionState, TickInput};

/// Produces the input for the next tick
pub trait InputSource {
    fn poll(&mut self, state: &SessionState) -> TickInput;
}

/// Replays a fixed list of inputs, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    inputs: VecDeque<TickInput>,
}

impl Scripted {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl InputSource for Scripted {
    fn poll(&mut self, _state: &SessionState) -> TickInput {
        self.inputs.pop_front().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        })
    }
}

/// Heading the autopilot parks at: nose toward -x, so the throttle slides
/// the car across the road
const CRUISE_HEADING: f32 = 90.0;
/// Heading error tolerated before steering
const HEADING_DEADBAND: f32 = 1.0;
/// Heading error above which the car swings round instead of dodging
const TURN_THRESHOLD: f32 = 10.0;
/// Velocity asked for per unit of distance to the target column
const LATERAL_GAIN: f32 = 0.15;
/// Sideways cruising speed
const CRUISE_SPEED: f32 = 6.0;
/// Velocity error tolerated before touching the pedals
const SPEED_DEADBAND: f32 = 0.25;
/// Gap kept between the boxes when passing a car
const CLEARANCE: f32 = 5.0;
/// Only cars whose bottom edge is this close above us count as threats
const LOOKAHEAD: f32 = 500.0;
/// Cars this close are too near to slip across in front of
const NEAR: f32 = 250.0;
/// Penalty per unit of sideways travel when picking a column
const TRAVEL_COST: f32 = 0.01;
/// Penalty per unit of distance from the middle of the road
const CENTER_PULL: f32 = 0.005;
/// Spacing of the candidate columns
const COLUMN_STEP: f32 = 5.0;

/// Demo driver.
///
/// Swings the car round to face across the road, then uses the pedals to
/// slide it between columns: forward moves it toward -x, reverse toward +x.
/// Picks the nearest column that clears every car still coming down at it
/// without cutting across one that is already close.
///
/// Requests quit once a session has run `max_ticks` ticks.
#[derive(Debug, Clone)]
pub struct Autopilot {
    config: Config,
    max_ticks: u64,
}

impl Autopilot {
    pub fn new(config: Config, max_ticks: u64) -> Self {
        Self { config, max_ticks }
    }

    /// Column the car should slide to this tick
    fn target_x(&self, state: &SessionState) -> f32 {
        let player = &state.player;
        let half_width = player.bounds.size().x / 2.0;
        let center = self.config.screen_width / 2.0;

        // (blocked band, too close to cross) for every car not yet past us
        let threats: Vec<_> = state
            .enemies
            .iter()
            .filter_map(|e| {
                let gap = player.bounds.min.y - e.bounds.max.y;
                if e.bounds.min.y > player.bounds.max.y || gap >= LOOKAHEAD {
                    return None;
                }
                let reach = half_width + e.bounds.size().x / 2.0 + CLEARANCE;
                Some((e.pos.x - reach, e.pos.x + reach, gap < NEAR))
            })
            .collect();

        if threats.is_empty() {
            return center;
        }

        // 0 for a clear column, less the deeper it sits in a band; a close
        // band between us and the column rules it out
        let score = |x: f32| {
            let mut worst = 0.0f32;
            for &(lo, hi, near) in &threats {
                let depth = (lo - x).max(x - hi);
                worst = worst.min(depth);
                let inside = lo < player.pos.x && player.pos.x < hi;
                let crosses = player.pos.x.min(x) < hi && player.pos.x.max(x) > lo;
                if near && !inside && crosses {
                    worst = worst.min(-1000.0);
                }
            }
            worst - TRAVEL_COST * (x - player.pos.x).abs() - CENTER_PULL * (x - center).abs()
        };

        let left = half_width.min(center);
        let right = (self.config.screen_width - half_width).max(center);
        let columns = ((right - left) / COLUMN_STEP) as u32;

        let mut best = (player.pos.x.clamp(left, right), f32::NEG_INFINITY);
        for i in 0..=columns {
            let x = left + i as f32 * COLUMN_STEP;
            let s = score(x);
            if s > best.1 {
                best = (x, s);
            }
        }
        best.0
    }
}

/// Signed heading error in (-180, 180], flipped when reversing since the
/// wheel then turns the car the other way
fn steering_error(target: f32, heading: f32, velocity: f32) -> f32 {
    let mut error = (target - heading).rem_euclid(360.0);
    if error > 180.0 {
        error -= 360.0;
    }
    if velocity < 0.0 { -error } else { error }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &SessionState) -> TickInput {
        if state.time_ticks >= self.max_ticks {
            log::info!("Autopilot tick limit ({}) reached", self.max_ticks);
            return TickInput {
                quit: true,
                ..Default::default()
            };
        }

        let player = &state.player;
        let error = steering_error(CRUISE_HEADING, player.heading, player.velocity);

        // Steering needs speed, so swing round under throttle first
        if error.abs() > TURN_THRESHOLD {
            return TickInput {
                up: true,
                left: error > 0.0,
                right: error < 0.0,
                ..Default::default()
            };
        }

        let target = self.target_x(state);
        let wanted = ((player.pos.x - target) * LATERAL_GAIN).clamp(-CRUISE_SPEED, CRUISE_SPEED);

        TickInput {
            up: player.velocity < wanted - SPEED_DEADBAND,
            down: player.velocity > wanted + SPEED_DEADBAND,
            left: error > HEADING_DEADBAND,
            right: error < -HEADING_DEADBAND,
            ..Default::default()
        }
    }
}
