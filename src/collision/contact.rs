//! Contact point generation for a detected penetration.

use std::fmt;

use arrayvec::ArrayVec;

use crate::collision::manifold::{ContactPoints, Penetration};
use crate::math::{LineSegment, Vec2, EPSILON};
use crate::objects::RigidBody;
use crate::shapes::Shape;

/// Derives world-space contact points for two overlapping bodies.
///
/// `penetration.normal` points from `body_a` towards `body_b`.
pub trait ContactPointSolver: fmt::Debug {
    fn find_contact_points(
        &self,
        body_a: &RigidBody,
        body_b: &RigidBody,
        penetration: &Penetration,
    ) -> ContactPoints;
}

/// Polygon pairs: closest vertex/edge pairs between the two outlines.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointSegmentSolver;

/// Polygon pairs: incident edge clipped against the reference edge.
///
/// Falls back to [`PointSegmentSolver`] when clipping leaves nothing usable.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClippingSolver;

impl ContactPointSolver for PointSegmentSolver {
    fn find_contact_points(
        &self,
        body_a: &RigidBody,
        body_b: &RigidBody,
        penetration: &Penetration,
    ) -> ContactPoints {
        dispatch(body_a, body_b, penetration, |a, b, _| {
            polygon_polygon_closest(a.transformed_vertices(), b.transformed_vertices())
        })
    }
}

impl ContactPointSolver for ClippingSolver {
    fn find_contact_points(
        &self,
        body_a: &RigidBody,
        body_b: &RigidBody,
        penetration: &Penetration,
    ) -> ContactPoints {
        dispatch(body_a, body_b, penetration, |a, b, penetration| {
            let va = a.transformed_vertices();
            let vb = b.transformed_vertices();
            let clipped = polygon_polygon_clipped(va, vb, penetration.normal);
            if clipped.is_empty() {
                polygon_polygon_closest(va, vb)
            } else {
                clipped
            }
        })
    }
}

fn dispatch<F>(
    body_a: &RigidBody,
    body_b: &RigidBody,
    penetration: &Penetration,
    polygon_polygon: F,
) -> ContactPoints
where
    F: FnOnce(&RigidBody, &RigidBody, &Penetration) -> ContactPoints,
{
    match (body_a.shape(), body_b.shape()) {
        (Shape::Circle(circle), Shape::Circle(_)) => {
            circle_circle(body_a.position(), circle.radius, penetration)
        }
        (Shape::Circle(_), Shape::Polygon(_)) => {
            circle_polygon(body_a.position(), body_b.transformed_vertices())
        }
        (Shape::Polygon(_), Shape::Circle(_)) => {
            circle_polygon(body_b.position(), body_a.transformed_vertices())
        }
        (Shape::Polygon(_), Shape::Polygon(_)) => polygon_polygon(body_a, body_b, penetration),
    }
}

/// Midpoint of the overlap along the normal.
pub fn circle_circle(center_a: Vec2, radius_a: f64, penetration: &Penetration) -> ContactPoints {
    let mut points = ContactPoints::new();
    points.push(center_a + penetration.normal * (radius_a - penetration.depth / 2.0));
    points
}

/// Point on the polygon outline closest to the circle centre.
pub fn circle_polygon(center: Vec2, vertices: &[Vec2]) -> ContactPoints {
    let mut points = ContactPoints::new();
    let closest = edges(vertices)
        .map(|edge| edge.closest_point(center))
        .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2));
    if let Some((point, _)) = closest {
        points.push(point);
    }
    points
}

/// Tests every vertex of each polygon against every edge of the other.
///
/// The closest candidate is the first contact; a second contact is any other
/// candidate at (nearly) the same distance that is not (nearly) the same point.
pub fn polygon_polygon_closest(vertices_a: &[Vec2], vertices_b: &[Vec2]) -> ContactPoints {
    let mut closest: Option<(Vec2, f64)> = None;
    let mut second: Option<Vec2> = None;

    for (points, outline) in [(vertices_a, vertices_b), (vertices_b, vertices_a)] {
        for &point in points {
            for edge in edges(outline) {
                let (candidate, dist_sq) = edge.closest_point(point);
                match closest {
                    None => closest = Some((candidate, dist_sq)),
                    Some((first, min_dist_sq)) => {
                        if (dist_sq - min_dist_sq).abs() < EPSILON {
                            if !candidate.nearly_equals(first) {
                                second = Some(candidate);
                            }
                        } else if dist_sq < min_dist_sq {
                            closest = Some((candidate, dist_sq));
                            second = None;
                        }
                    }
                }
            }
        }
    }

    let mut contacts = ContactPoints::new();
    if let Some((first, _)) = closest {
        contacts.push(first);
        if let Some(point) = second {
            contacts.push(point);
        }
    }
    contacts
}

/// An edge of a polygon together with its vertex furthest along the query normal.
#[derive(Debug, Clone, Copy)]
struct Feature {
    deepest: Vec2,
    start: Vec2,
    end: Vec2,
}

impl Feature {
    fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize()
    }
}

/// Edge of a counter-clockwise polygon most perpendicular to `normal`,
/// among the two edges adjacent to the vertex furthest along it.
fn best_edge(vertices: &[Vec2], normal: Vec2) -> Feature {
    let count = vertices.len();
    let mut index = 0;
    let mut max = f64::NEG_INFINITY;
    for (i, vertex) in vertices.iter().enumerate() {
        let projection = vertex.dot(normal);
        if projection > max {
            max = projection;
            index = i;
        }
    }

    let deepest = vertices[index];
    let prev = vertices[(index + count - 1) % count];
    let next = vertices[(index + 1) % count];

    let to_next = (deepest - next).normalize();
    let to_prev = (deepest - prev).normalize();
    if to_prev.dot(normal) <= to_next.dot(normal) {
        Feature {
            deepest,
            start: prev,
            end: deepest,
        }
    } else {
        Feature {
            deepest,
            start: deepest,
            end: next,
        }
    }
}

/// Keeps the part of segment `v1`-`v2` where `direction · p >= offset`.
fn clip(v1: Vec2, v2: Vec2, direction: Vec2, offset: f64) -> ArrayVec<Vec2, 2> {
    let mut points = ArrayVec::new();
    let d1 = direction.dot(v1) - offset;
    let d2 = direction.dot(v2) - offset;

    if d1 >= 0.0 {
        points.push(v1);
    }
    if d2 >= 0.0 {
        points.push(v2);
    }
    if d1 * d2 < 0.0 {
        let t = d1 / (d1 - d2);
        points.push(v1 + (v2 - v1) * t);
    }
    points
}

/// Reference/incident edge clipping. Returns no points when the clip degenerates.
pub fn polygon_polygon_clipped(vertices_a: &[Vec2], vertices_b: &[Vec2], normal: Vec2) -> ContactPoints {
    let mut contacts = ContactPoints::new();
    if vertices_a.len() < 3 || vertices_b.len() < 3 {
        return contacts;
    }

    let edge_a = best_edge(vertices_a, normal);
    let edge_b = best_edge(vertices_b, -normal);

    let (reference, incident) =
        if edge_a.direction().dot(normal).abs() <= edge_b.direction().dot(normal).abs() {
            (edge_a, edge_b)
        } else {
            (edge_b, edge_a)
        };

    let ref_dir = reference.direction();

    let lower = ref_dir.dot(reference.start);
    let clipped = clip(incident.start, incident.end, ref_dir, lower);
    if clipped.len() < 2 {
        return contacts;
    }

    let upper = ref_dir.dot(reference.end);
    let clipped = clip(clipped[0], clipped[1], -ref_dir, -upper);
    if clipped.len() < 2 {
        return contacts;
    }

    // Outward normal of a counter-clockwise edge.
    let face_normal = ref_dir.left();
    let face_offset = face_normal.dot(reference.deepest);
    for point in clipped {
        if face_normal.dot(point) - face_offset <= EPSILON {
            contacts.push(point);
        }
    }
    contacts
}

/// Cyclic edges of a polygon outline.
fn edges(vertices: &[Vec2]) -> impl Iterator<Item = LineSegment> + '_ {
    let count = vertices.len();
    (0..count).map(move |i| LineSegment::new(vertices[i], vertices[(i + 1) % count]))
}
