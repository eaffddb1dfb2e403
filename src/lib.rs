pub mod boundary;
pub mod error;
pub mod math;
pub mod plan;

pub use boundary::{
    compute_room_boundaries, BoundaryEdge, DirectedEdge, ExtractBoundaries, Orientation,
    RoomBoundary,
};
pub use error::{FloorplanError, PlanError, Result, TraceError};
pub use plan::{House, Node, NodeId, Room, RoomId, Wall, WallId};
