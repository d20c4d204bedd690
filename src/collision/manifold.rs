use arrayvec::ArrayVec;

use crate::math::vec2::Vec2;

/// One or two world-space contact points.
pub type ContactPoints = ArrayVec<Vec2, 2>;

/// Minimum translation separating two overlapping shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Unit normal pointing from body A towards body B.
    pub normal: Vec2,
    /// How far B must move along `normal` to stop overlapping A. Never negative.
    pub depth: f64,
}

impl Penetration {
    pub fn new(normal: Vec2, depth: f64) -> Self {
        Self { normal, depth }
    }

    /// The same penetration seen from the other body.
    pub fn reversed(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }

    /// Translation to apply to body B to resolve the overlap.
    pub fn translation(&self) -> Vec2 {
        self.normal * self.depth
    }
}

/// Narrow-phase result for a pair of bodies, before contact points are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionData {
    /// Index of the first body involved in the collision.
    pub body_a_idx: usize,
    /// Index of the second body involved in the collision.
    pub body_b_idx: usize,
    pub penetration: Penetration,
}

/// A resolved contact between two bodies for a single substep.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifold {
    pub body_a_idx: usize,
    pub body_b_idx: usize,
    pub penetration: Penetration,
    pub contact_points: ContactPoints,
}

impl Manifold {
    pub fn new(collision: CollisionData, contact_points: ContactPoints) -> Self {
        Self {
            body_a_idx: collision.body_a_idx,
            body_b_idx: collision.body_b_idx,
            penetration: collision.penetration,
            contact_points,
        }
    }

    pub fn contact_count(&self) -> usize {
        self.contact_points.len()
    }
}
