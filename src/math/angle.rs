//! Angle-ordering metrics.
//!
//! Every metric takes an origin `o` and two points `a`, `b` and returns a
//! score that grows monotonically with the counter-clockwise angle swept from
//! ray `o → a` to ray `o → b`, over `[0°, 360°)`. [`angle`] is exact; the
//! `increased_*` variants avoid inverse trigonometry and are intended for
//! ranking candidates against each other.

use super::{scalar, Coord, Point2, Vector2};

/// Normalizes `v`, leaving zero-length and unit vectors untouched.
#[must_use]
pub fn normalized<T: Coord>(v: Vector2<T>) -> Vector2<T> {
    let len = v.norm();
    if len == nalgebra::zero::<T>() || len == nalgebra::one::<T>() {
        v
    } else {
        v / len
    }
}

/// Signed-area term `ax·by − ay·bx` of two vectors.
#[must_use]
pub fn cross<T: Coord>(a: &Vector2<T>, b: &Vector2<T>) -> T {
    a.perp(b)
}

/// Similarity term `ax·bx + ay·by` of two vectors.
#[must_use]
pub fn dot<T: Coord>(a: &Vector2<T>, b: &Vector2<T>) -> T {
    a.dot(b)
}

/// Returns `(sin, cos)` of the angle between the unit rays `o → a` and `o → b`.
fn sin_cos<T: Coord>(o: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> (T, T) {
    let ray_a = normalized(a - o);
    let ray_b = normalized(b - o);
    (cross(&ray_a, &ray_b), dot(&ray_a, &ray_b))
}

/// Exact counter-clockwise angle from `o → a` to `o → b`, in `[0, 2π)`.
#[must_use]
pub fn angle<T: Coord>(o: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> T {
    let (sin, cos) = sin_cos(o, a, b);
    let one = nalgebra::one::<T>();
    let cos = if cos > one {
        one
    } else if cos < -one {
        -one
    } else {
        cos
    };
    let theta = cos.acos();
    if sin < nalgebra::zero() && theta > nalgebra::zero() {
        T::two_pi() - theta
    } else {
        theta
    }
}

/// Sine-based ordering score in `[0, 4)`.
///
/// The first quadrant maps to `sin`, the second and third to `2 − sin`, the
/// fourth to `4 + sin`.
#[must_use]
pub fn increased_sin<T: Coord>(o: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> T {
    let (sin, cos) = sin_cos(o, a, b);
    let zero = nalgebra::zero::<T>();
    if cos < zero {
        scalar::<T>(2.0) - sin
    } else if sin < zero {
        scalar::<T>(4.0) + sin
    } else {
        sin
    }
}

/// Cosine-based ordering score in `[0, 4)`.
///
/// Half-turns up to 180° map to `1 − cos`, the rest to `3 + cos`.
#[must_use]
pub fn increased_cos<T: Coord>(o: &Point2<T>, a: &Point2<T>, b: &Point2<T>) -> T {
    let (sin, cos) = sin_cos(o, a, b);
    if sin < nalgebra::zero() {
        scalar::<T>(3.0) + cos
    } else {
        nalgebra::one::<T>() - cos
    }
}
