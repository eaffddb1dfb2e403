use std::cmp::Ordering;

use super::{scalar, Coord, Point2};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
#[must_use]
pub fn signed_area<T: Coord>(points: &[Point2<T>]) -> T {
    let n = points.len();
    if n < 3 {
        return nalgebra::zero();
    }
    let mut area = nalgebra::zero::<T>();
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        area += a.x * b.y - b.x * a.y;
    }
    area * scalar::<T>(0.5)
}

/// Orders points lexicographically: first by x, then by y.
///
/// Incomparable coordinates (NaN) compare as equal.
#[must_use]
pub fn lexicographic_cmp<T: Coord>(a: &Point2<T>, b: &Point2<T>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Returns the index of the leftmost-bottommost vertex, the first one on ties.
#[must_use]
pub fn leftmost_bottom<T: Coord>(points: &[Point2<T>]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, pt) in points.iter().enumerate() {
        match best {
            Some(b) if lexicographic_cmp(pt, &points[b]) != Ordering::Less => {}
            _ => best = Some(i),
        }
    }
    best
}
