//! Axis-aligned bounding boxes and the player/traffic collision test

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Top edge (smallest y)
    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Positive-area intersection test. Boxes sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Footprint of a `size` sprite rotated by `heading_deg`, as an axis-aligned box
pub fn rotated_extent(size: Vec2, heading_deg: f32) -> Vec2 {
    let (sin, cos) = heading_deg.to_radians().sin_cos();
    // Quarter turns are not exact in f32; keep 0/90/180/270 footprints exact
    let snap = |v: f32| {
        let v = v.abs();
        if v < 1e-6 {
            0.0
        } else if v > 1.0 - 1e-6 {
            1.0
        } else {
            v
        }
    };
    let (sin, cos) = (snap(sin), snap(cos));
    Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

/// True if the player box overlaps any enemy box. Stops at the first hit.
pub fn detect<'a>(player: &Aabb, enemies: impl IntoIterator<Item = &'a Aabb>) -> bool {
    enemies.into_iter().any(|enemy| player.overlaps(enemy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    #[test]
    fn test_overlap_by_one_unit() {
        let a = boxed(0.0, 0.0, 60.0, 100.0);
        // One unit of overlap on x
        assert!(a.overlaps(&boxed(59.0, 0.0, 60.0, 100.0)));
        // One unit of overlap on y
        assert!(a.overlaps(&boxed(0.0, 99.0, 60.0, 100.0)));
        // Symmetric
        assert!(boxed(59.0, 0.0, 60.0, 100.0).overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = boxed(0.0, 0.0, 60.0, 100.0);
        assert!(!a.overlaps(&boxed(60.0, 0.0, 60.0, 100.0)));
        assert!(!a.overlaps(&boxed(0.0, 100.0, 60.0, 100.0)));
        assert!(!a.overlaps(&boxed(60.0, 100.0, 10.0, 10.0)));
        assert!(!boxed(0.0, 100.0, 60.0, 100.0).overlaps(&a));
    }

    #[test]
    fn test_detect_any() {
        let player = boxed(100.0, 100.0, 60.0, 100.0);
        let far = boxed(400.0, 400.0, 60.0, 100.0);
        let near = boxed(150.0, 150.0, 60.0, 100.0);

        assert!(!detect(&player, std::iter::empty()));
        assert!(!detect(&player, [&far]));
        assert!(detect(&player, [&far, &near]));
    }

    #[test]
    fn test_rotated_extent() {
        let size = Vec2::new(60.0, 100.0);
        let upright = rotated_extent(size, 0.0);
        assert!((upright - size).length() < 1e-3);

        let flipped = rotated_extent(size, 180.0);
        assert!((flipped - size).length() < 1e-3);

        let sideways = rotated_extent(size, 90.0);
        assert!((sideways - Vec2::new(100.0, 60.0)).length() < 1e-3);

        // Diagonal footprint is larger than either side
        let diagonal = rotated_extent(size, 45.0);
        assert!(diagonal.x > 100.0 && diagonal.y > 100.0);
    }

    #[test]
    fn test_center_size() {
        let b = Aabb::from_center_size(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(b.min, Vec2::new(8.0, 17.0));
        assert_eq!(b.center(), Vec2::new(10.0, 20.0));
        assert_eq!(b.size(), Vec2::new(4.0, 6.0));
        assert_eq!(b.top(), 17.0);
    }
}
