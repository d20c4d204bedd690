pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

/// Geometric shape of a rigid body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.area(),
            Shape::Polygon(polygon) => polygon.calculate_area(),
        }
    }
}
