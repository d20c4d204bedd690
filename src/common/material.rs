//! Defines physical material properties.

/// Density used by the body factories when no material is given.
pub const DEFAULT_DENSITY: f64 = 0.5;
/// Restitution used by the body factories when no material is given.
pub const DEFAULT_RESTITUTION: f64 = 0.5;
pub const DEFAULT_STATIC_FRICTION: f64 = 0.6;
pub const DEFAULT_DYNAMIC_FRICTION: f64 = 0.4;

/// Represents the physical properties of a rigid body affecting mass and collisions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Mass per unit area.
    pub density: f64,
    /// Coefficient of restitution (bounciness). Range [0, 1].
    /// 0 = perfectly inelastic (no bounce), 1 = perfectly elastic.
    pub restitution: f64,
    /// Friction coefficient while the contact is not sliding.
    pub static_friction: f64,
    /// Friction coefficient once the contact slides.
    pub dynamic_friction: f64,
}

impl Material {
    /// Creates a new material. Restitution is clamped to [0, 1] and frictions to >= 0.
    pub fn new(density: f64, restitution: f64, static_friction: f64, dynamic_friction: f64) -> Self {
        Material {
            density,
            restitution: restitution.clamp(0.0, 1.0),
            static_friction: static_friction.max(0.0),
            dynamic_friction: dynamic_friction.max(0.0),
        }
    }

    pub fn with_restitution(self, restitution: f64) -> Self {
        Material {
            restitution: restitution.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn with_friction(self, static_friction: f64, dynamic_friction: f64) -> Self {
        Material {
            static_friction: static_friction.max(0.0),
            dynamic_friction: dynamic_friction.max(0.0),
            ..self
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material {
            density: DEFAULT_DENSITY,
            restitution: DEFAULT_RESTITUTION,
            static_friction: DEFAULT_STATIC_FRICTION,
            dynamic_friction: DEFAULT_DYNAMIC_FRICTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_clamps() {
        let m = Material::new(1.0, 1.5, -0.2, 0.3);
        assert_eq!(m.restitution, 1.0);
        assert_eq!(m.static_friction, 0.0);
        assert_eq!(m.dynamic_friction, 0.3);

        let bouncy = Material::default().with_restitution(-3.0);
        assert_eq!(bouncy.restitution, 0.0);
        assert_eq!(bouncy.density, DEFAULT_DENSITY);
    }

    #[test]
    fn test_material_default() {
        let m = Material::default();
        assert_eq!(m.density, 0.5);
        assert_eq!(m.restitution, 0.5);
        assert!(m.static_friction >= m.dynamic_friction);
    }
}
