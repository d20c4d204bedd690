use std::fmt;

use super::epa::epa;
use super::gjk::{gjk, GjkResult};
use super::manifold::{CollisionData, Penetration};
use crate::objects::rigid_body::RigidBody;

/// Narrow-phase overlap test for a pair of convex bodies.
pub trait CollisionDetector: fmt::Debug {
    /// Returns the penetration when the bodies overlap, with the normal
    /// pointing from `body_a` towards `body_b`.
    fn detect(&self, body_a: &RigidBody, body_b: &RigidBody) -> Option<Penetration>;
}

/// GJK for the overlap test, EPA for the penetration vector.
#[derive(Debug, Default, Clone, Copy)]
pub struct GjkEpa;

impl GjkEpa {
    /// Overlap test only; skips the EPA refinement.
    pub fn intersects(&self, body_a: &RigidBody, body_b: &RigidBody) -> bool {
        gjk(body_a, body_b).intersects()
    }
}

impl CollisionDetector for GjkEpa {
    fn detect(&self, body_a: &RigidBody, body_b: &RigidBody) -> Option<Penetration> {
        match gjk(body_a, body_b) {
            GjkResult::Separated { .. } => None,
            GjkResult::Intersecting { simplex, .. } => Some(epa(&simplex, body_a, body_b).penetration),
        }
    }
}

/// Runs `detector` on a pair of bodies and tags the result with their indices.
pub fn check_collision(
    detector: &dyn CollisionDetector,
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionData> {
    detector
        .detect(body_a, body_b)
        .map(|penetration| CollisionData {
            body_a_idx,
            body_b_idx,
            penetration,
        })
}
