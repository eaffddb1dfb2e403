use std::cmp::Ordering;

use tracing::trace;

use crate::math::Coord;
use crate::plan::{House, RoomId, WallId};

use super::RoomBoundary;

/// Assigns each boundary to the first room, in ascending room id order, whose
/// walls include every wall of the boundary. Boundaries no room contains are
/// left unassigned.
pub fn assign_rooms<T: Coord>(house: &House<T>, boundaries: &mut [RoomBoundary]) {
    let rooms: Vec<(RoomId, Vec<WallId>)> = house
        .rooms()
        .map(|(id, room)| (id, room.sorted_wall_ids()))
        .collect();

    for boundary in boundaries {
        let walls = boundary.wall_ids();
        if walls.is_empty() {
            continue;
        }
        boundary.room = rooms
            .iter()
            .find(|(_, room_walls)| contains_sorted(room_walls, &walls))
            .map(|&(id, _)| id);
        trace!(room = ?boundary.room, walls = walls.len(), "matched boundary");
    }
}

/// Checks whether every element of `subset` occurs in `superset`; both must be
/// sorted ascending.
fn contains_sorted<K: Ord>(superset: &[K], subset: &[K]) -> bool {
    let mut candidates = superset.iter();
    'outer: for wanted in subset {
        for have in candidates.by_ref() {
            match have.cmp(wanted) {
                Ordering::Less => {}
                Ordering::Equal => continue 'outer,
                Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}
