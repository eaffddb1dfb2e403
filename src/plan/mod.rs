pub mod ids;
pub mod node;
pub mod room;
pub mod wall;

#[cfg(test)]
pub(crate) mod fixtures;

pub use ids::{NodeId, RoomId, WallId};
pub use node::Node;
pub use room::Room;
pub use wall::Wall;

use std::collections::BTreeMap;

use crate::boundary::DirectedEdge;
use crate::error::PlanError;
use crate::math::Coord;

/// A single floor plan: nodes, the walls connecting them and the rooms
/// declared over those walls.
///
/// Entities are keyed by caller-assigned ids and iterate in ascending id
/// order. Insertion checks referential integrity, so a room never references
/// a missing wall and a wall never references a missing node.
#[derive(Debug, Clone)]
pub struct House<T: Coord = f64> {
    /// Display name of the plan.
    pub name: String,
    nodes: BTreeMap<NodeId, Node<T>>,
    walls: BTreeMap<WallId, Wall<T>>,
    rooms: BTreeMap<RoomId, Room>,
}

impl<T: Coord> Default for House<T> {
    fn default() -> Self {
        Self {
            name: String::new(),
            nodes: BTreeMap::new(),
            walls: BTreeMap::new(),
            rooms: BTreeMap::new(),
        }
    }
}

impl<T: Coord> House<T> {
    /// Creates a new, empty house.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty house with a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if the house holds no nodes, walls or rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.walls.is_empty() && self.rooms.is_empty()
    }

    /// Removes every entity and clears the name.
    pub fn clear(&mut self) {
        self.name.clear();
        self.nodes.clear();
        self.walls.clear();
        self.rooms.clear();
    }

    // --- Node operations ---

    /// Inserts a node under the given id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DuplicateNode` if the id is taken.
    pub fn add_node(&mut self, id: NodeId, node: Node<T>) -> Result<(), PlanError> {
        if self.nodes.contains_key(&id) {
            return Err(PlanError::DuplicateNode(id));
        }
        self.nodes.insert(id, node);
        Ok(())
    }

    /// Returns the node with the given id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::NodeNotFound` if no such node exists.
    pub fn node(&self, id: NodeId) -> Result<&Node<T>, PlanError> {
        self.nodes.get(&id).ok_or(PlanError::NodeNotFound(id))
    }

    /// Iterates over all nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<T>)> {
        self.nodes.iter().map(|(&id, node)| (id, node))
    }

    // --- Wall operations ---

    /// Inserts a wall under the given id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DuplicateWall` if the id is taken,
    /// `PlanError::InvalidWall` if the wall is degenerate or has a negative
    /// thickness, and `PlanError::NodeNotFound` if an endpoint is missing.
    pub fn add_wall(&mut self, id: WallId, wall: Wall<T>) -> Result<(), PlanError> {
        if self.walls.contains_key(&id) {
            return Err(PlanError::DuplicateWall(id));
        }
        if let Some(reason) = wall.defect() {
            return Err(PlanError::InvalidWall { wall: id, reason });
        }
        self.node(wall.start)?;
        self.node(wall.end)?;
        self.walls.insert(id, wall);
        Ok(())
    }

    /// Returns the wall with the given id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::WallNotFound` if no such wall exists.
    pub fn wall(&self, id: WallId) -> Result<&Wall<T>, PlanError> {
        self.walls.get(&id).ok_or(PlanError::WallNotFound(id))
    }

    /// Iterates over all walls in ascending id order.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &Wall<T>)> {
        self.walls.iter().map(|(&id, wall)| (id, wall))
    }

    /// Resolves the `(source, target)` nodes of a directed wall traversal.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::WallNotFound` if the wall does not exist.
    pub fn endpoints(&self, edge: DirectedEdge) -> Result<(NodeId, NodeId), PlanError> {
        Ok(self.wall(edge.wall)?.endpoints(edge.forward))
    }

    // --- Room operations ---

    /// Inserts a room under the given id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DuplicateRoom` if the id is taken and
    /// `PlanError::WallNotFound` if the room references a missing wall.
    pub fn add_room(&mut self, id: RoomId, room: Room) -> Result<(), PlanError> {
        if self.rooms.contains_key(&id) {
            return Err(PlanError::DuplicateRoom(id));
        }
        for &wall_id in &room.wall_ids {
            self.wall(wall_id)?;
        }
        self.rooms.insert(id, room);
        Ok(())
    }

    /// Returns the room with the given id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::RoomNotFound` if no such room exists.
    pub fn room(&self, id: RoomId) -> Result<&Room, PlanError> {
        self.rooms.get(&id).ok_or(PlanError::RoomNotFound(id))
    }

    /// Iterates over all rooms in ascending id order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().map(|(&id, room)| (id, room))
    }
}
