//! Sample plans shared by the unit tests.

#![allow(clippy::unwrap_used)]

use super::{House, Node, NodeId, Room, RoomId, Wall, WallId};

/// Installs a `tracing` subscriber honouring `RUST_LOG`; safe to call from
/// every test.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn add_nodes(house: &mut House, nodes: &[(u32, f64, f64)]) {
    for &(id, x, y) in nodes {
        house.add_node(NodeId(id), Node::new(x, y)).unwrap();
    }
}

fn add_walls(house: &mut House, walls: &[(u32, u32, u32)]) {
    for &(id, start, end) in walls {
        house
            .add_wall(
                WallId(id),
                Wall::new(NodeId(start), NodeId(end)).with_thickness(0.2),
            )
            .unwrap();
    }
}

fn wall_ids(ids: &[u32]) -> Vec<WallId> {
    ids.iter().copied().map(WallId).collect()
}

/// A 4 × 3 rectangle, walls 0..=3, declared as room 0.
pub fn rectangle() -> House {
    let mut house = House::named("rectangle");
    add_nodes(
        &mut house,
        &[(0, 0.0, 0.0), (1, 4.0, 0.0), (2, 4.0, 3.0), (3, 0.0, 3.0)],
    );
    add_walls(&mut house, &[(0, 0, 1), (1, 1, 2), (2, 2, 3), (3, 3, 0)]);
    house
        .add_room(RoomId(0), Room::new(wall_ids(&[0, 1, 2, 3])))
        .unwrap();
    house
}

/// The rectangle with a two-wall spur (walls 4 and 5) sticking out of its
/// bottom-right corner, all declared as room 0.
pub fn rectangle_with_spur() -> House {
    let mut house = House::named("rectangle with spur");
    add_nodes(
        &mut house,
        &[
            (0, 0.0, 0.0),
            (1, 4.0, 0.0),
            (2, 4.0, 3.0),
            (3, 0.0, 3.0),
            (4, 6.0, 0.0),
            (5, 8.0, 0.0),
        ],
    );
    add_walls(
        &mut house,
        &[(0, 0, 1), (1, 1, 2), (2, 2, 3), (3, 3, 0), (4, 1, 4), (5, 4, 5)],
    );
    house
        .add_room(RoomId(0), Room::new(wall_ids(&[0, 1, 2, 3, 4, 5])))
        .unwrap();
    house
}

/// The rectangle with a two-wall spur (walls 4 and 5) leaving node 0 through
/// `elbow` (node 4) to `tip` (node 5), all declared as room 0.
pub fn rectangle_with_origin_spur(elbow: (f64, f64), tip: (f64, f64)) -> House {
    let mut house = House::named("rectangle with origin spur");
    add_nodes(
        &mut house,
        &[
            (0, 0.0, 0.0),
            (1, 4.0, 0.0),
            (2, 4.0, 3.0),
            (3, 0.0, 3.0),
            (4, elbow.0, elbow.1),
            (5, tip.0, tip.1),
        ],
    );
    add_walls(
        &mut house,
        &[(0, 0, 1), (1, 1, 2), (2, 2, 3), (3, 3, 0), (4, 0, 4), (5, 4, 5)],
    );
    house
        .add_room(RoomId(0), Room::new(wall_ids(&[0, 1, 2, 3, 4, 5])))
        .unwrap();
    house
}

/// Two 2 × 2 rooms side by side sharing wall 6.
///
/// Room 1 is the left square (walls 0, 6, 4, 5), room 2 the right one
/// (walls 1, 2, 3, 6).
pub fn two_rooms() -> House {
    let mut house = House::named("two rooms");
    add_nodes(
        &mut house,
        &[
            (0, 0.0, 0.0),
            (1, 2.0, 0.0),
            (2, 4.0, 0.0),
            (3, 4.0, 2.0),
            (4, 2.0, 2.0),
            (5, 0.0, 2.0),
        ],
    );
    add_walls(
        &mut house,
        &[
            (0, 0, 1),
            (1, 1, 2),
            (2, 2, 3),
            (3, 3, 4),
            (4, 4, 5),
            (5, 5, 0),
            (6, 1, 4),
        ],
    );
    house
        .add_room(RoomId(1), Room::new(wall_ids(&[0, 6, 4, 5])).with_kind("bedroom"))
        .unwrap();
    house
        .add_room(RoomId(2), Room::new(wall_ids(&[1, 2, 3, 6])).with_kind("office"))
        .unwrap();
    house
}

/// Two unit squares touching only at node `shared`, declared as one room.
///
/// The other nodes are 1..=6; walls 0..=3 run around the upper right square,
/// walls 4..=7 around the lower left one.
pub fn bow_tie(shared: u32) -> House {
    let mut house = House::named("bow tie");
    add_nodes(
        &mut house,
        &[
            (shared, 0.0, 0.0),
            (1, 1.0, 0.0),
            (2, 1.0, 1.0),
            (3, 0.0, 1.0),
            (4, -1.0, 0.0),
            (5, -1.0, -1.0),
            (6, 0.0, -1.0),
        ],
    );
    add_walls(
        &mut house,
        &[
            (0, shared, 1),
            (1, 1, 2),
            (2, 2, 3),
            (3, 3, shared),
            (4, shared, 4),
            (5, 4, 5),
            (6, 5, 6),
            (7, 6, shared),
        ],
    );
    house
        .add_room(RoomId(0), Room::new(wall_ids(&[0, 1, 2, 3, 4, 5, 6, 7])))
        .unwrap();
    house
}

/// A single wall listed twice by room 0.
pub fn doubled_wall() -> House {
    let mut house = House::named("doubled wall");
    add_nodes(&mut house, &[(0, 0.0, 0.0), (1, 3.0, 0.0)]);
    add_walls(&mut house, &[(0, 0, 1)]);
    house.add_room(RoomId(0), Room::new(wall_ids(&[0, 0]))).unwrap();
    house
}

/// A 5 × 5 lattice of nodes with every lattice wall present and room 0
/// declared over an irregular subset of them.
///
/// Node `(x, y)` has id `10x + y`. Horizontal walls are numbered
/// `1000 + 100y + 10(x − 1) + x`, vertical ones `2000 + 100x + 10(y − 1) + y`.
/// The room's walls enclose four faces and leave several dangling chains.
pub fn grid() -> House {
    let mut house = House::named("grid");
    for y in 0..5_u32 {
        for x in 0..5_u32 {
            house
                .add_node(NodeId(x * 10 + y), Node::new(f64::from(x), f64::from(y)))
                .unwrap();
        }
    }
    for y in 0..5_u32 {
        for x in 0..5_u32 {
            if x > 0 {
                let id = 1000 + y * 100 + (x - 1) * 10 + x;
                house
                    .add_wall(WallId(id), Wall::new(NodeId((x - 1) * 10 + y), NodeId(x * 10 + y)))
                    .unwrap();
            }
            if y > 0 {
                let id = 2000 + x * 100 + (y - 1) * 10 + y;
                house
                    .add_wall(WallId(id), Wall::new(NodeId(x * 10 + y - 1), NodeId(x * 10 + y)))
                    .unwrap();
            }
        }
    }
    house
        .add_room(
            RoomId(0),
            Room::new(wall_ids(&[
                1012, 1034, 1101, 1112, 1123, 1201, 1234, 1312, 1323, 1423, 1434, 2001, 2012,
                2023, 2034, 2101, 2112, 2123, 2134, 2201, 2223, 2234, 2301, 2334, 2401, 2412,
                2423, 2434,
            ])),
        )
        .unwrap();
    house
}
