pub mod segment;
pub mod transform;
pub mod vec2;

pub use segment::LineSegment;
pub use transform::Transform;
pub use vec2::{Vec2, EPSILON};
