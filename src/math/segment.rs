use super::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: Vec2,
    pub b: Vec2,
}

impl LineSegment {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Calculates the squared length of the line segment.
    pub fn length_squared(&self) -> f64 {
        self.a.distance_squared(self.b)
    }

    /// Returns the direction vector of the line segment (from a to b).
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    /// Projects `point` onto the segment, clamped to its endpoints.
    /// Returns the closest point and its squared distance to `point`.
    pub fn closest_point(&self, point: Vec2) -> (Vec2, f64) {
        let ab = self.direction();
        let len_sq = ab.magnitude_squared();
        if len_sq <= 0.0 {
            return (self.a, point.distance_squared(self.a));
        }

        let t = ((point - self.a).dot(ab) / len_sq).clamp(0.0, 1.0);
        let closest = self.a + ab * t;
        (closest, point.distance_squared(closest))
    }
}
