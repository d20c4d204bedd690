pub mod aabb;
pub mod contact;
pub mod detection;
pub mod epa;
pub mod gjk;
pub mod manifold;

// Re-export key types
pub use aabb::AABB;
pub use contact::{ClippingSolver, ContactPointSolver, PointSegmentSolver};
pub use detection::{check_collision, CollisionDetector, GjkEpa};
pub use epa::{epa, EpaResult, EPA_MAX_ITERATIONS};
pub use gjk::{gjk, support, GjkResult, Simplex, GJK_MAX_ITERATIONS};
pub use manifold::{CollisionData, ContactPoints, Manifold, Penetration};
