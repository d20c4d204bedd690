//! 2D rigid-body physics for circles and convex polygons.
//!
//! Overlap is found with GJK and measured with EPA, contact points are derived
//! from the penetration, and a sequential-impulse solver applies restitution
//! and Coulomb friction. [`PhysicsWorld`] drives the whole pipeline in
//! fixed substeps.

pub mod collision;
pub mod common;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{CollisionDetector, ContactPointSolver, Manifold, Penetration};
pub use common::Material;
pub use error::{PhysicsError, Result};
pub use math::{Transform, Vec2};
pub use objects::RigidBody;
pub use shapes::{Circle, Polygon, Shape};
pub use world::{FixedTimestep, PhysicsWorld, WorldConfig};
