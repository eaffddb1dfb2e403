use std::collections::BTreeMap;

use slotmap::SlotMap;

use crate::error::{Result, TraceError};
use crate::math::Coord;
use crate::plan::{House, NodeId, WallId};

use super::DirectedEdge;

slotmap::new_key_type! {
    /// Key of a half-edge in the adjacency arena.
    pub struct HalfEdgeKey;
}

/// One traversal direction of a wall, stored at its source node.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdge {
    pub edge: DirectedEdge,
    pub target: NodeId,
    pub used: bool,
}

/// Directed multigraph over the walls being decomposed.
///
/// Half-edges live in an arena; every node keeps its outgoing half-edges in
/// insertion order. Walks only flag half-edges as used, [`Self::prune_used`]
/// removes them afterwards.
#[derive(Debug, Default)]
pub struct Adjacency {
    half_edges: SlotMap<HalfEdgeKey, HalfEdge>,
    outgoing: BTreeMap<NodeId, Vec<HalfEdgeKey>>,
}

impl Adjacency {
    /// Expands each wall into a forward half-edge at its start node and a
    /// reversed one at its end node. A wall listed twice contributes its
    /// half-edges once.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::WallNotFound` or `PlanError::NodeNotFound` if a
    /// wall or one of its endpoints is missing from `house`.
    pub fn build<T: Coord>(house: &House<T>, walls: &[WallId]) -> Result<Self> {
        let mut adjacency = Self::default();
        for &wall_id in walls {
            let wall = house.wall(wall_id)?;
            house.node(wall.start)?;
            house.node(wall.end)?;
            let forward = DirectedEdge::forward(wall_id);
            adjacency.insert(forward, wall.start, wall.end);
            adjacency.insert(forward.opposite(), wall.end, wall.start);
        }
        Ok(adjacency)
    }

    fn insert(&mut self, edge: DirectedEdge, source: NodeId, target: NodeId) {
        let keys = self.outgoing.entry(source).or_default();
        let half_edges = &mut self.half_edges;
        if keys
            .iter()
            .any(|&k| half_edges.get(k).is_some_and(|h| h.edge == edge))
        {
            return;
        }
        keys.push(half_edges.insert(HalfEdge {
            edge,
            target,
            used: false,
        }));
    }

    /// Returns `true` once every half-edge has been pruned.
    pub fn is_empty(&self) -> bool {
        self.half_edges.is_empty()
    }

    /// Number of half-edges still in the arena.
    pub fn len(&self) -> usize {
        self.half_edges.len()
    }

    /// Lowest node id with an unused outgoing half-edge.
    pub fn first_open_node(&self) -> Option<NodeId> {
        self.outgoing
            .iter()
            .find(|(_, keys)| keys.iter().any(|&k| self.is_unused(k)))
            .map(|(&node, _)| node)
    }

    /// First unused half-edge leaving `node`, in insertion order.
    pub fn first_unused(&self, node: NodeId) -> Option<HalfEdgeKey> {
        self.outgoing
            .get(&node)?
            .iter()
            .copied()
            .find(|&k| self.is_unused(k))
    }

    /// All half-edges leaving `node`, used or not, in insertion order.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = (HalfEdgeKey, &HalfEdge)> {
        self.outgoing
            .get(&node)
            .into_iter()
            .flatten()
            .filter_map(|&k| self.half_edges.get(k).map(|h| (k, h)))
    }

    /// Returns a copy of the half-edge stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `TraceError::MissingHalfEdge` if `key` was pruned.
    pub fn half_edge(&self, key: HalfEdgeKey) -> Result<HalfEdge> {
        self.half_edges
            .get(key)
            .copied()
            .ok_or_else(|| TraceError::MissingHalfEdge.into())
    }

    /// Flags a half-edge as consumed by the current walk.
    ///
    /// # Errors
    ///
    /// Returns `TraceError::MissingHalfEdge` if `key` was pruned.
    pub fn mark_used(&mut self, key: HalfEdgeKey) -> Result<()> {
        let half = self
            .half_edges
            .get_mut(key)
            .ok_or(TraceError::MissingHalfEdge)?;
        half.used = true;
        Ok(())
    }

    /// Removes every used half-edge and drops nodes left without any.
    pub fn prune_used(&mut self) {
        let half_edges = &self.half_edges;
        self.outgoing.retain(|_, keys| {
            keys.retain(|&k| half_edges.get(k).is_some_and(|h| !h.used));
            !keys.is_empty()
        });
        self.half_edges.retain(|_, h| !h.used);
    }

    fn is_unused(&self, key: HalfEdgeKey) -> bool {
        self.half_edges.get(key).is_some_and(|h| !h.used)
    }
}
