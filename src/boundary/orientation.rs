use crate::error::Result;
use crate::math::angle::increased_cos;
use crate::math::polygon_2d::leftmost_bottom;
use crate::math::{scalar, Coord, Point2, TOLERANCE};
use crate::plan::House;

use super::{BoundaryEdge, Orientation};

/// Classifies a closed walk by the turn it makes at its extreme vertex.
///
/// The pivot is the non-repeated edge whose source is lexicographically
/// smallest; that vertex lies on the convex hull of the walk, so the turn
/// from the pivot edge back to the nearest non-repeated edge entering the
/// pivot vertex is under 180° exactly when the walk runs counter-clockwise.
///
/// # Errors
///
/// Returns an error if an edge references a wall or node missing from
/// `house`.
pub fn classify<T: Coord>(house: &House<T>, edges: &[BoundaryEdge]) -> Result<Orientation> {
    let mut indices = Vec::with_capacity(edges.len());
    let mut sources: Vec<Point2<T>> = Vec::with_capacity(edges.len());
    for (i, e) in edges.iter().enumerate().filter(|(_, e)| !e.repeated) {
        let (source, _) = house.endpoints(e.edge)?;
        indices.push(i);
        sources.push(house.node(source)?.point);
    }
    let Some(extreme) = leftmost_bottom(&sources) else {
        return Ok(Orientation::Indeterminate);
    };
    let index = indices[extreme];
    let origin = sources[extreme];

    let (pivot_node, ahead) = house.endpoints(edges[index].edge)?;
    let n = edges.len();
    let mut behind = None;
    for step in 1..n {
        let e = &edges[(index + n - step) % n];
        if e.repeated {
            continue;
        }
        let (source, target) = house.endpoints(e.edge)?;
        if target == pivot_node {
            behind = Some(source);
            break;
        }
    }
    let Some(behind) = behind else {
        return Ok(Orientation::Indeterminate);
    };

    let score = increased_cos(
        &origin,
        &house.node(ahead)?.point,
        &house.node(behind)?.point,
    );
    Ok(if score <= scalar(TOLERANCE) {
        Orientation::Indeterminate
    } else if score <= scalar(2.0) {
        Orientation::Inward
    } else {
        Orientation::Outward
    })
}
