use crate::collision::AABB;
use crate::common::Material;
use crate::error::{ensure_positive, Result};
use crate::integration::integrator;
use crate::math::{Transform, Vec2};
use crate::shapes::{Circle, Polygon, Shape};

/// A rigid body: one convex shape plus its mass properties and motion state.
///
/// Position and rotation are only reachable through mutators so that the cached
/// world-space vertices and bounding box always match the current pose.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Geometry
    shape: Shape,
    material: Material,

    // Primary state
    pub(crate) position: Vec2, // World position of the center of mass
    pub(crate) rotation: f64,  // Radians
    pub linear_velocity: Vec2,
    pub angular_velocity: f64, // Radians per second

    // Accumulators for forces/torques applied during a time step
    pub(crate) force: Vec2,
    pub(crate) torque: f64,

    // Physical properties, all 0.0 for static bodies
    mass: f64,
    inv_mass: f64,
    inertia: f64,
    inv_inertia: f64,
    is_static: bool,

    // Caches derived from the pose
    transformed_vertices: Vec<Vec2>,
    aabb: AABB,
}

impl RigidBody {
    /// Creates a circle of `radius` centred on `position` with the default material.
    pub fn create_circle(position: Vec2, radius: f64, is_static: bool) -> Result<Self> {
        let circle = Circle::new(radius)?;
        Ok(Self::from_shape(
            Shape::Circle(circle),
            position,
            Material::default(),
            is_static,
        ))
    }

    /// Creates an axis-aligned `width` x `height` box centred on `position` with the default material.
    pub fn create_box(position: Vec2, width: f64, height: f64, is_static: bool) -> Result<Self> {
        let rect = Polygon::rectangle(width, height)?;
        Ok(Self::from_shape(
            Shape::Polygon(rect),
            position,
            Material::default(),
            is_static,
        ))
    }

    /// Creates a convex polygon body.
    ///
    /// `vertices` are relative to `position`; the body's position becomes the
    /// polygon centroid and the stored vertices are re-centred on it.
    pub fn create_polygon(position: Vec2, vertices: Vec<Vec2>, is_static: bool) -> Result<Self> {
        let (polygon, centroid) = Polygon::new(vertices)?.recentered();
        Ok(Self::from_shape(
            Shape::Polygon(polygon),
            position + centroid,
            Material::default(),
            is_static,
        ))
    }

    /// Replaces the material, recomputing mass and inertia from its density.
    pub fn with_material(self, material: Material) -> Result<Self> {
        ensure_positive("density", material.density)?;
        let mut body = Self::from_shape(self.shape, self.position, material, self.is_static);
        body.rotation = self.rotation;
        body.linear_velocity = self.linear_velocity;
        body.angular_velocity = self.angular_velocity;
        body.update_cache();
        Ok(body)
    }

    fn from_shape(shape: Shape, position: Vec2, material: Material, is_static: bool) -> Self {
        let (mass, inertia) = if is_static {
            (0.0, 0.0)
        } else {
            mass_properties(&shape, material.density)
        };
        debug_assert!(
            is_static || (mass.is_finite() && mass > 0.0),
            "dynamic body needs a positive finite mass"
        );
        let inv_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };
        let inv_inertia = if inertia > 0.0 { 1.0 / inertia } else { 0.0 };

        let mut body = Self {
            shape,
            material,
            position,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            force: Vec2::ZERO,
            torque: 0.0,
            mass,
            inv_mass,
            inertia,
            inv_inertia,
            is_static,
            transformed_vertices: Vec::new(),
            aabb: AABB::new(position, position),
        };
        body.update_cache();
        body
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    pub fn torque(&self) -> f64 {
        self.torque
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inv_mass(&self) -> f64 {
        self.inv_mass
    }

    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    pub fn inv_inertia(&self) -> f64 {
        self.inv_inertia
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Radius for circles, `None` for polygons.
    pub fn radius(&self) -> Option<f64> {
        match &self.shape {
            Shape::Circle(circle) => Some(circle.radius),
            Shape::Polygon(_) => None,
        }
    }

    /// World-space polygon vertices; empty for circles.
    pub fn transformed_vertices(&self) -> &[Vec2] {
        &self.transformed_vertices
    }

    /// World-space bounding box for the current pose.
    pub fn aabb(&self) -> AABB {
        self.aabb
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation)
    }

    /// Translates the body by `delta`.
    pub fn move_by(&mut self, delta: Vec2) {
        self.position += delta;
        self.update_cache();
    }

    /// Places the body's center of mass at `position`.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
        self.update_cache();
    }

    /// Rotates the body by `radians` around its center of mass.
    pub fn rotate(&mut self, radians: f64) {
        self.rotation += radians;
        self.update_cache();
    }

    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation = radians;
        self.update_cache();
    }

    /// Support function: the point of the body furthest along `direction`.
    ///
    /// For polygons, ties go to the vertex with the lowest index.
    pub fn furthest_point(&self, direction: Vec2) -> Vec2 {
        match &self.shape {
            Shape::Circle(circle) => self.position + direction.normalize() * circle.radius,
            Shape::Polygon(_) => {
                let mut max = f64::NEG_INFINITY;
                let mut index = 0;
                for (i, vertex) in self.transformed_vertices.iter().enumerate() {
                    let dot = vertex.dot(direction);
                    if dot > max {
                        max = dot;
                        index = i;
                    }
                }
                self.transformed_vertices[index]
            }
        }
    }

    /// Applies a force at the center of mass.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Applies a force at a specific point (in world coordinates).
    /// This generates both linear force and torque.
    pub fn apply_force_at_point(&mut self, force: Vec2, point_world: Vec2) {
        self.force += force;
        let radius_vector = point_world - self.position;
        self.torque += radius_vector.cross(force);
    }

    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }

    /// Advances the body by `dt` under `gravity`. Static bodies do not move.
    pub fn step(&mut self, dt: f64, gravity: Vec2) {
        self.integrate_velocity(dt, gravity);
        self.integrate_position(dt);
    }

    pub fn integrate_velocity(&mut self, dt: f64, gravity: Vec2) {
        integrator::integrate_velocity(self, dt, gravity);
    }

    pub fn integrate_position(&mut self, dt: f64) {
        integrator::integrate_position(self, dt);
        self.update_cache();
    }

    pub(crate) fn update_cache(&mut self) {
        match &self.shape {
            Shape::Circle(circle) => {
                self.aabb = AABB::around(self.position, circle.radius);
            }
            Shape::Polygon(polygon) => {
                let transform = self.transform();
                self.transformed_vertices.clear();
                self.transformed_vertices
                    .extend(polygon.vertices().iter().map(|v| v.transform(&transform)));
                if let Some(aabb) = AABB::from_points(&self.transformed_vertices) {
                    self.aabb = aabb;
                }
            }
        }
    }
}

/// Mass and moment of inertia of `shape` for a uniform `density`.
fn mass_properties(shape: &Shape, density: f64) -> (f64, f64) {
    let mass = shape.area() * density;
    let inertia = match shape {
        Shape::Circle(circle) => mass * circle.radius * circle.radius / 12.0,
        Shape::Polygon(polygon) => polygon.calculate_inertia(density),
    };
    (mass, inertia)
}
