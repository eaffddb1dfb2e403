use crate::math::Coord;

use super::ids::NodeId;

/// A straight wall between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall<T: Coord = f64> {
    /// Start node of the wall.
    pub start: NodeId,
    /// End node of the wall.
    pub end: NodeId,
    /// Wall thickness, never negative.
    pub thickness: T,
    /// Free-form classification, e.g. `"exterior"`.
    pub kind: String,
}

impl<T: Coord> Wall<T> {
    /// Creates a wall of zero thickness.
    #[must_use]
    pub fn new(start: NodeId, end: NodeId) -> Self {
        Self {
            start,
            end,
            thickness: nalgebra::zero(),
            kind: String::new(),
        }
    }

    /// Sets the wall thickness.
    #[must_use]
    pub fn with_thickness(mut self, thickness: T) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the wall kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Returns why the wall is unusable on its own, if it is: both ends on
    /// the same node, or a negative thickness.
    #[must_use]
    pub fn defect(&self) -> Option<&'static str> {
        if self.start == self.end {
            Some("start and end node are the same")
        } else if self.thickness < nalgebra::zero() {
            Some("negative thickness")
        } else {
            None
        }
    }

    /// Returns the `(source, target)` nodes when traversed in the given
    /// direction.
    #[must_use]
    pub fn endpoints(&self, forward: bool) -> (NodeId, NodeId) {
        if forward {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }
}
