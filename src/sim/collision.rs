//! Geometry helpers for circles and the screen rectangle

use glam::Vec2;

/// Axis-aligned rectangle (half-open on the far edges)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// The visible play area, anchored at the origin
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.min + self.size;
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

/// Unit vector pointing from `from` to `to`
///
/// Returns `None` when the two points coincide (or the difference is not
/// finite), so callers skip the move/shot instead of spreading NaN.
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    (to - from).try_normalize()
}

/// Strict circle-circle overlap: touching circles do not collide
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) < reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_to_is_unit_length() {
        let from = Vec2::new(1.0, 1.0);
        let dir = direction_to(from, Vec2::new(4.0, 5.0)).unwrap();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
        assert!((dir.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_direction_to_same_point() {
        let p = Vec2::new(400.0, 225.0);
        assert!(direction_to(p, p).is_none());
    }

    #[test]
    fn test_circles_overlap() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(8.0, 0.0), 4.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(20.0, 0.0), 4.0));
        // Exactly touching is not an overlap
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 4.0));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let screen = Rect::screen(800.0, 450.0);
        assert!(screen.contains(Vec2::ZERO));
        assert!(screen.contains(Vec2::new(799.9, 449.9)));
        assert!(!screen.contains(Vec2::new(800.0, 10.0)));
        assert!(!screen.contains(Vec2::new(10.0, 450.0)));
        assert!(!screen.contains(Vec2::new(-0.1, 10.0)));
    }
}
