use thiserror::Error;

use crate::plan::{NodeId, RoomId, WallId};

/// Top-level error type for floor plan processing.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Errors related to the plan data model and its referential integrity.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("{0} not found")]
    NodeNotFound(NodeId),

    #[error("{0} not found")]
    WallNotFound(WallId),

    #[error("{0} not found")]
    RoomNotFound(RoomId),

    #[error("{0} already exists")]
    DuplicateNode(NodeId),

    #[error("{0} already exists")]
    DuplicateWall(WallId),

    #[error("{0} already exists")]
    DuplicateRoom(RoomId),

    #[error("invalid {wall}: {reason}")]
    InvalidWall { wall: WallId, reason: &'static str },
}

/// Errors raised while tracing boundaries through a wall graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    /// A face walk left `node` twice along walls it walked only once: two
    /// loops of the wall graph share exactly that node. `wall` is the first
    /// such departure.
    #[error("malformed wall graph: separate loops meet at {node}, leaving through {wall}")]
    MalformedGraph { node: NodeId, wall: WallId },

    #[error("half-edge missing from adjacency")]
    MissingHalfEdge,
}

impl FloorplanError {
    /// Returns `true` if the error reports an unknown room id.
    #[must_use]
    pub fn is_room_not_found(&self) -> bool {
        matches!(self, Self::Plan(PlanError::RoomNotFound(_)))
    }
}

/// Convenience type alias for results using [`FloorplanError`].
pub type Result<T> = std::result::Result<T, FloorplanError>;
