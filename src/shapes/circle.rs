use std::f64::consts::PI;

use crate::error::{ensure_positive, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self> {
        let radius = ensure_positive("radius", radius)?;
        Ok(Self { radius })
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(5.0).unwrap();
        assert_eq!(c.radius, 5.0);
        assert!((c.area() - 25.0 * PI).abs() < 1e-10);
    }

    #[test]
    fn test_circle_new_rejects_bad_radius() {
        assert!(Circle::new(-1.0).is_err());
        assert!(Circle::new(0.0).is_err());
        assert!(Circle::new(f64::NAN).is_err());
    }
}
