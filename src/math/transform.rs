use super::vec2::Vec2;

/// Rigid transform (rotation then translation) with the rotation's sine and cosine cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    sin: f64,
    cos: f64,
}

impl Transform {
    /// Creates a new transform from a translation and an angle in radians.
    pub fn new(position: Vec2, rotation: f64) -> Self {
        let (sin, cos) = rotation.sin_cos();
        Self { position, sin, cos }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            sin: 0.0,
            cos: 1.0,
        }
    }

    pub fn sin(&self) -> f64 {
        self.sin
    }

    pub fn cos(&self) -> f64 {
        self.cos
    }

    /// Applies the transform (rotation then translation) to a point.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            self.cos * point.x - self.sin * point.y + self.position.x,
            self.sin * point.x + self.cos * point.y + self.position.y,
        )
    }

    /// Applies the inverse transform (inverse translation then inverse rotation) to a point.
    pub fn apply_inverse(&self, point: Vec2) -> Vec2 {
        let p = point - self.position;
        // cos(-a) = cos(a), sin(-a) = -sin(a)
        Vec2::new(
            self.cos * p.x + self.sin * p.y,
            -self.sin * p.x + self.cos * p.y,
        )
    }
}
