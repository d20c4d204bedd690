use crate::error::{ensure_positive, PhysicsError, Result};
use crate::math::vec2::Vec2;

/// A convex polygon defined by its vertices in local space, ordered counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from its vertices.
    ///
    /// Clockwise input is reversed so the stored winding is always counter-clockwise.
    /// Convexity is the caller's responsibility; the narrow phase only sees the
    /// convex hull of the vertices anyway.
    pub fn new(mut vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::TooFewVertices(vertices.len()));
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PhysicsError::NonFiniteVertex(index));
        }

        let signed_area = signed_area(&vertices);
        if signed_area.abs() < 1e-10 {
            return Err(PhysicsError::DegeneratePolygon);
        }
        if signed_area < 0.0 {
            vertices.reverse();
        }
        Ok(Polygon { vertices })
    }

    /// An axis-aligned `width` x `height` rectangle centred on the local origin.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        let hw = ensure_positive("width", width)? / 2.0;
        let hh = ensure_positive("height", height)? / 2.0;
        Ok(Polygon {
            vertices: vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
        })
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn calculate_area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Calculates the centroid (center of mass for uniform density) of the polygon.
    pub fn calculate_centroid(&self) -> Vec2 {
        let n = self.vertices.len();
        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;
        let origin = self.vertices[0];

        for i in 1..(n - 1) {
            let v2 = self.vertices[i];
            let v3 = self.vertices[i + 1];

            let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_signed_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
        }

        centroid / signed_area_sum
    }

    /// Second moment of area about the local origin (unit density).
    fn calculate_inertia_about_origin(&self) -> f64 {
        let n = self.vertices.len();
        let mut inertia_sum = 0.0;
        for i in 0..n {
            let v1 = self.vertices[i];
            let v2 = self.vertices[(i + 1) % n];
            inertia_sum +=
                v1.cross(v2) * (v1.magnitude_squared() + v1.dot(v2) + v2.magnitude_squared());
        }
        inertia_sum / 12.0
    }

    /// Moment of inertia about the centroid for the given density (parallel axis theorem).
    pub fn calculate_inertia(&self, density: f64) -> f64 {
        let mass = self.calculate_area() * density;
        let centroid = self.calculate_centroid();
        let inertia_origin = self.calculate_inertia_about_origin() * density;
        (inertia_origin - mass * centroid.magnitude_squared()).max(0.0)
    }

    /// Returns a copy whose centroid sits on the local origin, plus the offset that was removed.
    pub fn recentered(&self) -> (Polygon, Vec2) {
        let centroid = self.calculate_centroid();
        let vertices = self.vertices.iter().map(|&v| v - centroid).collect();
        (Polygon { vertices }, centroid)
    }
}

fn signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    let mut area = 0.0;
    for i in 0..n {
        area += vertices[i].cross(vertices[(i + 1) % n]);
    }
    area / 2.0
}
