use std::collections::{BTreeMap, HashMap};

use tracing::{trace, warn};

use crate::error::{Result, TraceError};
use crate::math::angle::increased_sin;
use crate::math::Coord;
use crate::plan::{House, NodeId, WallId};

use super::adjacency::{Adjacency, HalfEdgeKey};
use super::{BoundaryEdge, DirectedEdge};

/// How a single walk attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Walk {
    /// The walk came back to its first edge.
    Closed(Vec<DirectedEdge>),
    /// The walk ran into a node without unused outgoing edges.
    Stuck,
}

/// Decomposes every half-edge of `adjacency` into closed walks.
///
/// Walks start at the lowest node id that still has outgoing half-edges and
/// always continue along the leftmost turn, so each closed walk runs around
/// exactly one face with that face on its left. Dead-end walks are discarded.
/// Consumed half-edges are pruned after every attempt, which bounds the number
/// of attempts by the number of half-edges.
///
/// # Errors
///
/// Returns `TraceError::MalformedGraph` if a closed walk shows two loops
/// meeting at a single node, and propagates lookup failures from `house`.
pub fn trace_walks<T: Coord>(
    house: &House<T>,
    adjacency: &mut Adjacency,
) -> Result<Vec<Vec<BoundaryEdge>>> {
    let mut closed = Vec::new();
    while let Some(start) = adjacency.first_open_node() {
        match trace_one(house, adjacency, start)? {
            Walk::Closed(edges) => {
                let edges = flag_repeated(edges);
                check_shared_nodes(house, &edges)?;
                trace!(%start, edges = edges.len(), "walk closed");
                closed.push(edges);
            }
            Walk::Stuck => trace!(%start, "walk stuck, discarded"),
        }
        adjacency.prune_used();
    }
    debug_assert!(adjacency.is_empty());
    Ok(closed)
}

/// Wraps a closed walk's edges, flagging every wall that occurs more than once.
fn flag_repeated(walk: Vec<DirectedEdge>) -> Vec<BoundaryEdge> {
    let mut counts: HashMap<WallId, usize> = HashMap::new();
    for e in &walk {
        *counts.entry(e.wall).or_default() += 1;
    }
    walk.into_iter()
        .map(|edge| BoundaryEdge {
            edge,
            repeated: counts.get(&edge.wall).copied().unwrap_or(0) > 1,
        })
        .collect()
}

/// Rejects a closed walk that leaves one node twice through non-repeated
/// walls.
///
/// A face walk passes through a node more than once only where the node joins
/// separate parts of the graph. Dead-end chains and bridges are walked out and
/// back, so their walls are repeated. A second departure along a wall walked
/// once means a second loop hangs off the same node.
fn check_shared_nodes<T: Coord>(house: &House<T>, walk: &[BoundaryEdge]) -> Result<()> {
    let mut departures: BTreeMap<NodeId, Vec<WallId>> = BTreeMap::new();
    for e in walk.iter().filter(|e| !e.repeated) {
        let (source, _) = house.endpoints(e.edge)?;
        departures.entry(source).or_default().push(e.edge.wall);
    }
    if let Some((node, walls)) = departures.into_iter().find(|(_, w)| w.len() > 1) {
        let wall = walls[0];
        warn!(%node, %wall, "separate loops meet at a single node");
        return Err(TraceError::MalformedGraph { node, wall }.into());
    }
    Ok(())
}

/// Runs one walk from `start`, flagging every half-edge it consumes.
///
/// The first edge is flagged up front but stays selectable, since selecting it
/// again is what closes the walk.
fn trace_one<T: Coord>(
    house: &House<T>,
    adjacency: &mut Adjacency,
    start: NodeId,
) -> Result<Walk> {
    let Some(first) = adjacency.first_unused(start) else {
        return Ok(Walk::Stuck);
    };
    adjacency.mark_used(first)?;

    let mut walk = Vec::new();
    let mut last = start;
    let mut current = adjacency.half_edge(first)?.target;

    loop {
        let Some(next) = pick_next(house, adjacency, first, last, current)? else {
            return Ok(Walk::Stuck);
        };
        let half = adjacency.half_edge(next)?;
        walk.push(half.edge);

        if next == first {
            return Ok(Walk::Closed(walk));
        }

        adjacency.mark_used(next)?;
        last = current;
        current = half.target;
    }
}

/// Picks the outgoing half-edge at `current` with the largest
/// counter-clockwise turn from the ray back towards `last`.
///
/// Candidates are the unused half-edges plus the walk's `first` edge; ties go
/// to the earliest inserted.
fn pick_next<T: Coord>(
    house: &House<T>,
    adjacency: &Adjacency,
    first: HalfEdgeKey,
    last: NodeId,
    current: NodeId,
) -> Result<Option<HalfEdgeKey>> {
    let pivot = house.node(current)?.point;
    let back = house.node(last)?.point;

    let mut best: Option<(HalfEdgeKey, T)> = None;
    for (key, half) in adjacency.outgoing(current) {
        if half.used && key != first {
            continue;
        }
        let score = increased_sin(&pivot, &back, &house.node(half.target)?.point);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((key, score)),
        }
    }
    Ok(best.map(|(key, _)| key))
}
