use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::transform::Transform;

/// Tolerance shared by the narrow phase and the solver for "close enough to zero" decisions.
pub const EPSILON: f64 = 0.0005;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const UP: Vec2 = Vec2 { x: 0.0, y: 1.0 };
    pub const RIGHT: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the squared magnitude (length) of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a unit vector pointing the same way.
    ///
    /// Vectors whose magnitude is at most [`EPSILON`] are returned unchanged,
    /// so callers never divide by (nearly) zero.
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag <= EPSILON {
            self
        } else {
            self * (1.0 / mag)
        }
    }

    /// Calculates the squared distance between two vector points.
    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    /// Calculates the distance between two vector points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    /// Returns a vector perpendicular to this vector (90-degree counter-clockwise rotation).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Returns a vector perpendicular to this vector (90-degree clockwise rotation).
    pub fn left(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotates the vector by a given angle (in radians).
    pub fn rotate(self, angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// 2D analogue of `(a × b) × c`: a vector perpendicular to `c`, scaled by `a × b`.
    ///
    /// With `a = c = edge` and `b` a point, the result is perpendicular to the edge
    /// and points to the side of the edge where `b` lies (relative to the edge direction).
    pub fn triple_product(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
        let k = a.x * b.y - b.x * a.y;
        Vec2::new(-c.y * k, c.x * k)
    }

    /// True when both points are closer than [`EPSILON`].
    pub fn nearly_equals(self, other: Vec2) -> bool {
        self.distance_squared(other) < EPSILON * EPSILON
    }

    /// Maps a local-space point to world space.
    pub fn transform(self, transform: &Transform) -> Vec2 {
        transform.apply(self)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const TOLERANCE: f64 = 1e-10;

    #[test]
    fn test_vec2_arithmetic_does_not_touch_operands() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(3.0 * v1, Vec2::new(3.0, 6.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
        assert_eq!(v1, Vec2::new(1.0, 2.0));
        assert_eq!(v2, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_vec2_dot_and_cross() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert!((v1.dot(v2) - 11.0).abs() < TOLERANCE);
        assert!((v1.cross(v2) - -2.0).abs() < TOLERANCE);
        assert!((v2.cross(v1) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_vec2_magnitude() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.magnitude_squared() - 25.0).abs() < TOLERANCE);
        assert!((v.magnitude() - 5.0).abs() < TOLERANCE);
        assert!((v.distance(Vec2::ZERO) - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let norm_v = v.normalize();
        assert!((norm_v.magnitude() - 1.0).abs() < TOLERANCE);
        assert!((norm_v.x - 0.6).abs() < TOLERANCE);
        assert!((norm_v.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn test_vec2_normalize_tiny_vector_is_returned_unchanged() {
        let zero = Vec2::ZERO;
        assert_eq!(zero.normalize(), zero);

        let tiny = Vec2::new(EPSILON * 0.5, 0.0);
        assert_eq!(tiny.normalize(), tiny);
    }

    #[test]
    fn test_vec2_perpendicular_and_left() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.perpendicular(), Vec2::new(-4.0, 3.0));
        assert_eq!(v.left(), Vec2::new(4.0, -3.0));
        assert!(v.dot(v.perpendicular()).abs() < TOLERANCE);
        assert!(v.dot(v.left()).abs() < TOLERANCE);
        assert_eq!(v.left(), -v.perpendicular());
    }

    #[test]
    fn test_vec2_rotate() {
        let v = Vec2::new(1.0, 0.0);
        let v90 = v.rotate(PI / 2.0);
        assert!(v90.x.abs() < TOLERANCE);
        assert!((v90.y - 1.0).abs() < TOLERANCE);

        let v180 = v.rotate(PI);
        assert!((v180.x + 1.0).abs() < TOLERANCE);
        assert!(v180.y.abs() < TOLERANCE);
    }

    #[test]
    fn test_triple_product_points_towards_origin_side() {
        // Edge along +x at y = 1, origin below it.
        let a = Vec2::new(-1.0, 1.0);
        let b = Vec2::new(1.0, 1.0);
        let ab = b - a;
        let ao = -a;
        let towards_origin = Vec2::triple_product(ab, ao, ab);
        assert!(towards_origin.x.abs() < TOLERANCE);
        assert!(towards_origin.y < 0.0);
        assert!(towards_origin.dot(ab).abs() < TOLERANCE);
    }

    #[test]
    fn test_triple_product_matches_formula() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-3.0, 0.5);
        let c = Vec2::new(4.0, -1.0);
        let k = a.x * b.y - b.x * a.y;
        assert_eq!(Vec2::triple_product(a, b, c), Vec2::new(-c.y * k, c.x * k));
    }

    #[test]
    fn test_nearly_equals() {
        let p = Vec2::new(10.0, 10.0);
        assert!(p.nearly_equals(Vec2::new(10.0 + EPSILON * 0.1, 10.0)));
        assert!(!p.nearly_equals(Vec2::new(10.0 + EPSILON * 2.0, 10.0)));
    }
}
