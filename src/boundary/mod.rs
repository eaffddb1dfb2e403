mod adjacency;
mod matcher;
mod orientation;
mod trace;

use tracing::debug;

use crate::error::Result;
use crate::math::polygon_2d::signed_area;
use crate::math::{Coord, Point2};
use crate::plan::{House, RoomId, WallId};

use adjacency::Adjacency;

/// A wall traversed in one specific direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectedEdge {
    /// The traversed wall.
    pub wall: WallId,
    /// If `true`, the wall is traversed from its start to its end node.
    /// If `false`, from its end to its start node.
    pub forward: bool,
}

impl DirectedEdge {
    /// Creates a new directed edge.
    #[must_use]
    pub fn new(wall: WallId, forward: bool) -> Self {
        Self { wall, forward }
    }

    /// Traversal from the wall's start node to its end node.
    #[must_use]
    pub fn forward(wall: WallId) -> Self {
        Self::new(wall, true)
    }

    /// Traversal from the wall's end node to its start node.
    #[must_use]
    pub fn reversed(wall: WallId) -> Self {
        Self::new(wall, false)
    }

    /// The same wall traversed the other way.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(self.wall, !self.forward)
    }
}

/// A directed edge as it appears in a [`RoomBoundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEdge {
    /// The traversal.
    pub edge: DirectedEdge,
    /// Set when the wall occurs more than once in the same boundary, i.e. the
    /// boundary touches itself along this wall.
    pub repeated: bool,
}

/// Which side of its traversal a boundary's interior lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Counter-clockwise around an enclosed face.
    Inward,
    /// Clockwise around the outside of a wall cluster.
    Outward,
    /// The boundary has no usable corner to decide on.
    Indeterminate,
}

/// A closed walk through the wall graph enclosing one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomBoundary {
    /// The room this boundary belongs to, `None` when no declared room
    /// contains all of its walls.
    pub room: Option<RoomId>,
    /// Edges in walk order; the last edge ends where the first one starts.
    pub edges: Vec<BoundaryEdge>,
    /// Orientation of the walk.
    pub orientation: Orientation,
}

impl RoomBoundary {
    /// Returns the distinct wall ids of the boundary in ascending order.
    #[must_use]
    pub fn wall_ids(&self) -> Vec<WallId> {
        let mut ids: Vec<WallId> = self.edges.iter().map(|e| e.edge.wall).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Returns the source point of every edge, in walk order.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a wall or node missing from
    /// `house`.
    pub fn vertices<T: Coord>(&self, house: &House<T>) -> Result<Vec<Point2<T>>> {
        let mut points = Vec::with_capacity(self.edges.len());
        for e in &self.edges {
            let (source, _) = house.endpoints(e.edge)?;
            points.push(house.node(source)?.point);
        }
        Ok(points)
    }

    /// Signed area enclosed by the walk: positive for inward boundaries,
    /// negative for outward ones.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a wall or node missing from
    /// `house`.
    pub fn signed_area<T: Coord>(&self, house: &House<T>) -> Result<T> {
        Ok(signed_area(&self.vertices(house)?))
    }

    /// Checks that consecutive edges connect and the last edge ends at the
    /// source of the first.
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a wall missing from `house`.
    pub fn is_closed<T: Coord>(&self, house: &House<T>) -> Result<bool> {
        let Some(first) = self.edges.first() else {
            return Ok(false);
        };
        let (start, mut at) = house.endpoints(first.edge)?;
        for e in &self.edges[1..] {
            let (source, target) = house.endpoints(e.edge)?;
            if source != at {
                return Ok(false);
            }
            at = target;
        }
        Ok(at == start)
    }
}

/// Extracts closed room boundaries from the walls of a house.
///
/// Either a single room's walls or the union of every room's walls is
/// decomposed into closed walks. In all-rooms mode each walk is assigned to
/// the first room (by ascending id) whose walls contain it.
#[derive(Debug, Clone, Copy)]
pub struct ExtractBoundaries {
    room: Option<RoomId>,
    keep_outward: bool,
}

impl ExtractBoundaries {
    /// Extraction over every declared room.
    #[must_use]
    pub fn all_rooms() -> Self {
        Self {
            room: None,
            keep_outward: false,
        }
    }

    /// Extraction over one room's walls only.
    #[must_use]
    pub fn room(room: RoomId) -> Self {
        Self {
            room: Some(room),
            keep_outward: false,
        }
    }

    /// Keeps outward boundaries (the outer silhouette of each wall cluster)
    /// in the result. They are dropped by default.
    #[must_use]
    pub fn keep_outward(mut self, keep: bool) -> Self {
        self.keep_outward = keep;
        self
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::RoomNotFound` if the requested room does not exist,
    /// `PlanError::WallNotFound`/`NodeNotFound` if the plan references missing
    /// entities, and `TraceError::MalformedGraph` if two loops of the wall
    /// graph share a single node.
    pub fn execute<T: Coord>(&self, house: &House<T>) -> Result<Vec<RoomBoundary>> {
        let walls: Vec<WallId> = match self.room {
            Some(id) => house.room(id)?.wall_ids.clone(),
            None => house
                .rooms()
                .flat_map(|(_, room)| room.wall_ids.iter().copied())
                .collect(),
        };
        if walls.is_empty() {
            debug!(room = ?self.room, "no walls to extract boundaries from");
            return Ok(Vec::new());
        }

        let mut adjacency = Adjacency::build(house, &walls)?;
        let half_edges = adjacency.len();
        let walks = trace::trace_walks(house, &mut adjacency)?;

        let mut boundaries = Vec::with_capacity(walks.len());
        for edges in walks {
            let orientation = orientation::classify(house, &edges)?;
            boundaries.push(RoomBoundary {
                room: self.room,
                edges,
                orientation,
            });
        }

        if self.room.is_none() {
            matcher::assign_rooms(house, &mut boundaries);
        }
        let closed = boundaries.len();
        if !self.keep_outward {
            boundaries.retain(|b| b.orientation != Orientation::Outward);
        }

        debug!(
            room = ?self.room,
            walls = walls.len(),
            half_edges,
            closed,
            returned = boundaries.len(),
            "extracted room boundaries"
        );
        Ok(boundaries)
    }
}

/// Computes the boundaries of one room, or of every room when `room` is
/// `None`, with outward boundaries dropped.
///
/// # Errors
///
/// See [`ExtractBoundaries::execute`].
pub fn compute_room_boundaries<T: Coord>(
    house: &House<T>,
    room: Option<RoomId>,
) -> Result<Vec<RoomBoundary>> {
    let extract = match room {
        Some(id) => ExtractBoundaries::room(id),
        None => ExtractBoundaries::all_rooms(),
    };
    extract.execute(house)
}
