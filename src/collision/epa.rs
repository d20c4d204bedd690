//! Expanding Polytope Algorithm.
//!
//! Grows the GJK triangle towards the boundary of the Minkowski difference
//! until the edge closest to the origin stops moving. That edge's normal and
//! distance are the penetration normal and depth.

use crate::collision::gjk::support;
use crate::collision::manifold::Penetration;
use crate::math::{Vec2, EPSILON};
use crate::objects::RigidBody;

/// Upper bound on polytope expansions.
pub const EPA_MAX_ITERATIONS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpaResult {
    pub penetration: Penetration,
    /// Number of points inserted into the polytope.
    pub expansions: usize,
    /// False when the iteration cap was hit and `penetration` is a best effort.
    pub converged: bool,
}

#[derive(Debug, Clone, Copy)]
struct Edge {
    normal: Vec2,
    distance: f64,
    /// Insertion index for a new point splitting this edge.
    index: usize,
}

/// Computes the penetration of two overlapping bodies from a simplex that
/// encloses the origin (as produced by [`gjk`](crate::collision::gjk::gjk)).
///
/// The returned normal points from `body_a` towards `body_b`.
pub fn epa(simplex: &[Vec2], body_a: &RigidBody, body_b: &RigidBody) -> EpaResult {
    let mut polytope = simplex.to_vec();
    if polytope.len() < 3 {
        log::debug!("EPA called with a {}-point simplex", polytope.len());
        return EpaResult {
            penetration: Penetration::new(Vec2::ZERO, 0.0),
            expansions: 0,
            converged: false,
        };
    }

    let orientation = winding(&polytope);
    let mut best = Penetration::new(Vec2::ZERO, 0.0);
    let mut expansions = 0;

    for _ in 0..EPA_MAX_ITERATIONS {
        let edge = closest_edge(&polytope, orientation);
        let point = support(body_a, body_b, edge.normal);
        let distance = point.dot(edge.normal);
        best = Penetration::new(edge.normal, distance);

        if distance - edge.distance < EPSILON {
            return EpaResult {
                penetration: best,
                expansions,
                converged: true,
            };
        }

        polytope.insert(edge.index, point);
        expansions += 1;
    }

    log::debug!(
        "EPA did not converge after {EPA_MAX_ITERATIONS} expansions, depth {:.4}",
        best.depth
    );
    EpaResult {
        penetration: best,
        expansions,
        converged: false,
    }
}

/// Edge of the polytope nearest the origin, with its outward normal.
fn closest_edge(polytope: &[Vec2], winding: f64) -> Edge {
    let count = polytope.len();
    let mut closest = Edge {
        normal: Vec2::ZERO,
        distance: f64::INFINITY,
        index: 0,
    };

    for i in 0..count {
        let j = (i + 1) % count;
        let start = polytope[i];
        let edge = polytope[j] - start;
        if edge.magnitude_squared() <= f64::EPSILON {
            continue;
        }

        let mut normal = Vec2::triple_product(edge, start, edge).normalize();
        if normal.magnitude_squared() < 0.5 {
            // The origin lies on the edge's line; fall back to the winding.
            normal = outward_normal(edge, winding);
        }

        let mut distance = normal.dot(start);
        if distance < 0.0 {
            distance = -distance;
            normal = -normal;
        }

        if distance < closest.distance {
            closest = Edge {
                normal,
                distance,
                index: j,
            };
        }
    }

    closest
}

/// +1 for counter-clockwise point order, -1 for clockwise.
fn winding(points: &[Vec2]) -> f64 {
    let count = points.len();
    let twice_area: f64 = (0..count)
        .map(|i| points[i].cross(points[(i + 1) % count]))
        .sum();
    if twice_area >= 0.0 {
        1.0
    } else {
        -1.0
    }
}

fn outward_normal(edge: Vec2, winding: f64) -> Vec2 {
    if winding > 0.0 {
        edge.left().normalize()
    } else {
        edge.perpendicular().normalize()
    }
}
