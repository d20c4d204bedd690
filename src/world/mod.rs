pub mod config;
pub mod physics_world;
pub mod resolver;
pub mod timestep;

pub use config::{ContactSolverKind, WorldConfig};
pub use physics_world::PhysicsWorld;
pub use resolver::{friction_impulse, resolve_manifold, separate};
pub use timestep::FixedTimestep;
