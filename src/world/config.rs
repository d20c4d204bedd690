//! World settings.

use crate::collision::{ClippingSolver, ContactPointSolver, PointSegmentSolver};
use crate::error::{PhysicsError, Result};
use crate::math::Vec2;

/// Gravity in world units per second squared (y points up).
pub const DEFAULT_GRAVITY: Vec2 = Vec2 { x: 0.0, y: -300.0 };
/// Substeps per call to `PhysicsWorld::step`.
pub const DEFAULT_SUBSTEPS: usize = 20;

/// Which polygon–polygon contact generator the world uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum ContactSolverKind {
    /// Closest vertex/edge pairs.
    #[default]
    PointSegment,
    /// Reference/incident edge clipping.
    Clipping,
}

impl ContactSolverKind {
    pub fn solver(&self) -> Box<dyn ContactPointSolver> {
        match self {
            ContactSolverKind::PointSegment => Box::new(PointSegmentSolver),
            ContactSolverKind::Clipping => Box::new(ClippingSolver),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    pub gravity: Vec2,
    /// Number of substeps each `step(dt)` is split into. At least 1.
    pub substeps: usize,
    /// Bodies whose bounding box lies entirely below this height are removed
    /// after each step. `None` keeps every body.
    pub despawn_below: Option<f64>,
    pub contact_solver: ContactSolverKind,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            substeps: DEFAULT_SUBSTEPS,
            despawn_below: Some(0.0),
            contact_solver: ContactSolverKind::PointSegment,
        }
    }
}

impl WorldConfig {
    pub fn with_gravity(self, gravity: Vec2) -> Self {
        Self { gravity, ..self }
    }

    pub fn with_substeps(self, substeps: usize) -> Self {
        Self { substeps, ..self }
    }

    pub fn with_despawn_below(self, despawn_below: Option<f64>) -> Self {
        Self {
            despawn_below,
            ..self
        }
    }

    pub fn with_contact_solver(self, contact_solver: ContactSolverKind) -> Self {
        Self {
            contact_solver,
            ..self
        }
    }

    /// Checks the settings a world cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.substeps == 0 {
            return Err(PhysicsError::InvalidConfig("substeps must be at least 1"));
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig("gravity must be finite"));
        }
        if matches!(self.despawn_below, Some(limit) if !limit.is_finite()) {
            return Err(PhysicsError::InvalidConfig("despawn height must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WorldConfig::default();
        assert_eq!(config.gravity, Vec2::new(0.0, -300.0));
        assert_eq!(config.substeps, 20);
        assert_eq!(config.despawn_below, Some(0.0));
        assert_eq!(config.contact_solver, ContactSolverKind::PointSegment);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        let zero_substeps = WorldConfig::default().with_substeps(0);
        assert_eq!(
            zero_substeps.validate(),
            Err(PhysicsError::InvalidConfig("substeps must be at least 1"))
        );

        let nan_gravity = WorldConfig::default().with_gravity(Vec2::new(f64::NAN, 0.0));
        assert!(nan_gravity.validate().is_err());

        let bad_floor = WorldConfig::default().with_despawn_below(Some(f64::NEG_INFINITY));
        assert!(bad_floor.validate().is_err());

        let no_floor = WorldConfig::default().with_despawn_below(None);
        assert!(no_floor.validate().is_ok());
    }

    #[cfg(feature = "serde-serialize")]
    #[test]
    fn test_config_serde_derives() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<WorldConfig>();
        assert_serde::<ContactSolverKind>();
    }
}
