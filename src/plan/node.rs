use crate::math::{Coord, Point2};

/// A labeled point of the plan graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node<T: Coord = f64> {
    /// The 2D position of the node.
    pub point: Point2<T>,
}

impl<T: Coord> Node<T> {
    /// Creates a node at the given coordinates.
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self {
            point: Point2::new(x, y),
        }
    }
}

impl<T: Coord> From<Point2<T>> for Node<T> {
    fn from(point: Point2<T>) -> Self {
        Self { point }
    }
}
