use super::ids::WallId;

/// A declared region referencing the walls believed to enclose it.
///
/// The wall list is not required to form a simple loop: it may hold several
/// disjoint loops, repeated walls or dangling branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    /// Free-form classification, e.g. `"kitchen"`.
    pub kind: String,
    /// Walls bounding the room, in declaration order.
    pub wall_ids: Vec<WallId>,
}

impl Room {
    /// Creates a room from its wall ids.
    #[must_use]
    pub fn new(wall_ids: impl IntoIterator<Item = WallId>) -> Self {
        Self {
            kind: String::new(),
            wall_ids: wall_ids.into_iter().collect(),
        }
    }

    /// Sets the room kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Returns the distinct wall ids in ascending order.
    #[must_use]
    pub fn sorted_wall_ids(&self) -> Vec<WallId> {
        let mut ids = self.wall_ids.clone();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
