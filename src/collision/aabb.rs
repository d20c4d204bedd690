// Defines an Axis-Aligned Bounding Box

use crate::math::vec2::Vec2;

/// An Axis-Aligned Bounding Box defined by its minimum and maximum corner points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec2,
    pub max: Vec2,
}

impl AABB {
    /// Creates a new AABB, swapping coordinates so that `min <= max` on both axes.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        AABB {
            min: Vec2::new(min.x.min(max.x), min.y.min(max.y)),
            max: Vec2::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    /// A box of half-extents `(half, half)` around `center`.
    pub fn around(center: Vec2, half: f64) -> Self {
        let h = Vec2::new(half, half);
        AABB::new(center - h, center + h)
    }

    /// Checks if this AABB overlaps with another AABB.
    pub fn overlaps(&self, other: &AABB) -> bool {
        let x_overlap = self.max.x > other.min.x && self.min.x < other.max.x;
        let y_overlap = self.max.y > other.min.y && self.min.y < other.max.y;
        x_overlap && y_overlap
    }

    /// Expands this AABB to contain `other` as well.
    pub fn merge(&mut self, other: &AABB) {
        self.min.x = self.min.x.min(other.min.x);
        self.min.y = self.min.y.min(other.min.y);
        self.max.x = self.max.x.max(other.max.x);
        self.max.y = self.max.y.max(other.max.y);
    }

    /// Creates an AABB that encompasses a set of points.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = AABB::new(*first, *first);
        for point in rest {
            bounds.merge(&AABB::new(*point, *point));
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new_orders_corners() {
        let aabb = AABB::new(Vec2::new(5.0, -1.0), Vec2::new(1.0, 3.0));
        assert_eq!(aabb.min, Vec2::new(1.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(5.0, 3.0));
        assert_eq!(aabb.width(), 4.0);
        assert_eq!(aabb.height(), 4.0);
    }

    #[test]
    fn test_aabb_overlaps() {
        let a = AABB::new(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0));
        let b = AABB::new(Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
        let c = AABB::new(Vec2::new(2.0, 0.0), Vec2::new(4.0, 2.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Touching edges do not count.
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_aabb_from_points() {
        assert_eq!(AABB::from_points(&[]), None);
        let aabb = AABB::from_points(&[
            Vec2::new(1.0, 5.0),
            Vec2::new(-2.0, 3.0),
            Vec2::new(4.0, -1.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec2::new(-2.0, -1.0));
        assert_eq!(aabb.max, Vec2::new(4.0, 5.0));
    }

    #[test]
    fn test_aabb_around() {
        let aabb = AABB::around(Vec2::new(10.0, 20.0), 5.0);
        assert_eq!(aabb.min, Vec2::new(5.0, 15.0));
        assert_eq!(aabb.max, Vec2::new(15.0, 25.0));
    }
}
