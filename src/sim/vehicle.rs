//! Arcade car kinematics
//!
//! Heading is in degrees with 0 pointing up-screen; a positive heading
//! rotates the nose toward -x. Screen y grows downward, so moving forward at
//! heading 0 decreases y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, rotated_extent};
use crate::normalize_degrees;

/// Per-tick kinematics parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// Fraction of velocity removed every tick, in [0, 1)
    pub friction: f32,
    /// Velocity clamp for both directions
    pub max_speed: f32,
}

impl Kinematics {
    pub fn from_config(config: &crate::Config) -> Self {
        Self {
            friction: config.friction,
            max_speed: config.player_max_speed,
        }
    }
}

/// A car on the road (player or traffic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: u32,
    /// Sub-pixel position of the car's center
    pub pos: Vec2,
    /// Degrees, always in [0, 360)
    pub heading: f32,
    /// Signed speed along the heading (forward positive)
    pub velocity: f32,
    /// Set by the controller every tick
    pub acceleration: f32,
    /// Set by the controller every tick, 0 when not turning
    pub steering: f32,
    /// Unrotated sprite footprint
    pub size: Vec2,
    /// Collision box, centered on the rounded position
    pub bounds: Aabb,
}

impl Vehicle {
    pub fn new(id: u32, pos: Vec2, size: Vec2) -> Self {
        let mut vehicle = Self {
            id,
            pos,
            heading: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            steering: 0.0,
            size,
            bounds: Aabb::from_center_size(pos, size),
        };
        vehicle.refresh_bounds();
        vehicle
    }

    pub fn with_heading(mut self, heading: f32) -> Self {
        self.heading = normalize_degrees(heading);
        self.refresh_bounds();
        self
    }

    /// Unit vector the car moves along at positive velocity
    #[inline]
    pub fn forward(&self) -> Vec2 {
        let (sin, cos) = self.heading.to_radians().sin_cos();
        Vec2::new(-sin, -cos)
    }

    /// Advance one tick using the current acceleration and steering inputs
    pub fn step(&mut self, kin: Kinematics) {
        self.velocity += self.acceleration;
        self.velocity *= 1.0 - kin.friction;
        self.velocity = self.velocity.clamp(-kin.max_speed, kin.max_speed);

        self.pos += self.forward() * self.velocity;

        // Turning authority scales with the fraction of top speed
        if self.velocity != 0.0 {
            self.heading += self.steering * (self.velocity / kin.max_speed);
        }
        self.heading = normalize_degrees(self.heading);

        self.refresh_bounds();
    }

    /// Constant-speed translation used by traffic
    pub fn drift(&mut self, delta: Vec2) {
        self.pos += delta;
        self.refresh_bounds();
    }

    /// Recompute the collision box from position and rotated footprint
    pub fn refresh_bounds(&mut self) {
        let extent = rotated_extent(self.size, self.heading);
        self.bounds = Aabb::from_center_size(self.pos.round(), extent);
    }
}
