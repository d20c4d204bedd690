//! Gilbert–Johnson–Keerthi overlap test for two convex bodies.
//!
//! The test searches the Minkowski difference `A - B` for a triangle that
//! encloses the origin. The enclosing triangle is handed to EPA to recover
//! the penetration vector.

use arrayvec::ArrayVec;

use crate::math::{Vec2, EPSILON};
use crate::objects::RigidBody;

/// Upper bound on support evaluations inside the search loop.
pub const GJK_MAX_ITERATIONS: usize = 30;

/// Ordered simplex, newest point last.
pub type Simplex = ArrayVec<Vec2, 3>;

#[derive(Debug, Clone, PartialEq)]
pub enum GjkResult {
    /// The origin cannot be enclosed, or the search ran out of iterations.
    Separated { iterations: usize },
    /// `simplex` is a triangle of Minkowski-difference points containing the origin.
    Intersecting { simplex: Simplex, iterations: usize },
}

impl GjkResult {
    pub fn intersects(&self) -> bool {
        matches!(self, GjkResult::Intersecting { .. })
    }

    /// Support evaluations performed by the search loop.
    pub fn iterations(&self) -> usize {
        match self {
            GjkResult::Separated { iterations } | GjkResult::Intersecting { iterations, .. } => {
                *iterations
            }
        }
    }
}

enum SimplexStep {
    Enclosed,
    Search(Vec2),
}

/// Support point of the Minkowski difference `A - B` along `direction`.
pub fn support(body_a: &RigidBody, body_b: &RigidBody, direction: Vec2) -> Vec2 {
    body_a.furthest_point(direction) - body_b.furthest_point(-direction)
}

/// Runs GJK on the two bodies' current poses.
pub fn gjk(body_a: &RigidBody, body_b: &RigidBody) -> GjkResult {
    let mut simplex = Simplex::new();
    let mut direction = Vec2::RIGHT;

    simplex.push(support(body_a, body_b, direction));
    direction = -simplex[0];

    for iteration in 1..=GJK_MAX_ITERATIONS {
        let point = support(body_a, body_b, direction);
        if point.dot(direction) <= 0.0 {
            return GjkResult::Separated {
                iterations: iteration,
            };
        }

        simplex.push(point);
        match evaluate_simplex(&mut simplex) {
            SimplexStep::Enclosed => {
                return GjkResult::Intersecting {
                    simplex,
                    iterations: iteration,
                }
            }
            SimplexStep::Search(next) => direction = next,
        }
    }

    log::debug!("GJK gave up after {GJK_MAX_ITERATIONS} iterations, treating pair as separated");
    GjkResult::Separated {
        iterations: GJK_MAX_ITERATIONS,
    }
}

/// Updates the simplex towards the origin. Holds 2 or 3 points on entry.
fn evaluate_simplex(simplex: &mut Simplex) -> SimplexStep {
    if simplex.len() == 2 {
        let a = simplex[1];
        let b = simplex[0];

        let ao = -a;
        let ab = b - a;

        let direction = Vec2::triple_product(ab, ao, ab);
        if direction.magnitude_squared() <= EPSILON {
            // The origin sits on (or very near) the line through AB.
            return SimplexStep::Search(ab.left());
        }
        return SimplexStep::Search(direction);
    }

    let a = simplex[2];
    let b = simplex[1];
    let c = simplex[0];

    let ao = -a;
    let ab = b - a;
    let ac = c - a;

    let ab_perp = Vec2::triple_product(ac, ab, ab);
    if ab_perp.dot(ao) > 0.0 {
        simplex.remove(0);
        return SimplexStep::Search(ab_perp);
    }

    let ac_perp = Vec2::triple_product(ab, ac, ac);
    if ac_perp.dot(ao) > 0.0 {
        simplex.remove(1);
        return SimplexStep::Search(ac_perp);
    }

    SimplexStep::Enclosed
}
