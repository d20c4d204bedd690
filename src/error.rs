//! Errors returned when caller-supplied input cannot describe a valid body or world.
//!
//! Degenerate geometry met *during* simulation (zero-length vectors, GJK or EPA
//! running out of iterations) is never an error; those cases have defined
//! fallbacks in the narrow phase.

/// Errors raised while validating bodies, shapes and world configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A size (radius, width, height, density...) was zero, negative or not finite.
    #[error("{name} must be finite and strictly positive, got {value}")]
    InvalidDimension {
        /// Which quantity was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A polygon needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// The vertex at this index has a NaN or infinite coordinate.
    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),

    /// All vertices are (nearly) collinear, so the polygon has no area.
    #[error("polygon has zero area")]
    DegeneratePolygon,

    /// A world or timestep setting is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A body index did not refer to a body in the world.
    #[error("body index {index} out of range (count={count})")]
    BodyIndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of bodies in the world.
        count: usize,
    },
}

pub type Result<T> = core::result::Result<T, PhysicsError>;

/// Rejects values that are not finite or not strictly positive.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PhysicsError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("radius", 2.0), Ok(2.0));
        assert!(matches!(
            ensure_positive("radius", 0.0),
            Err(PhysicsError::InvalidDimension { name: "radius", .. })
        ));
        assert!(ensure_positive("width", -1.0).is_err());
        assert!(ensure_positive("height", f64::NAN).is_err());
        assert!(ensure_positive("height", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PhysicsError::TooFewVertices(2).to_string(),
            "a polygon needs at least 3 vertices, got 2"
        );
        assert_eq!(
            PhysicsError::BodyIndexOutOfRange { index: 4, count: 2 }.to_string(),
            "body index 4 out of range (count=2)"
        );
    }
}
