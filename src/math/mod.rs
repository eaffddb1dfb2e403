pub mod angle;
pub mod polygon_2d;

/// Scalar type usable for plan coordinates.
///
/// Any `nalgebra` real field that is `Copy` qualifies, which covers `f32`
/// and `f64`.
pub trait Coord: nalgebra::RealField + nalgebra::Scalar + Copy {}

impl<T: nalgebra::RealField + nalgebra::Scalar + Copy> Coord for T {}

/// 2D point type.
pub type Point2<T = f64> = nalgebra::Point2<T>;

/// 2D vector type.
pub type Vector2<T = f64> = nalgebra::Vector2<T>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts an `f64` constant into the scalar type `T`.
pub(crate) fn scalar<T: Coord>(value: f64) -> T {
    nalgebra::convert(value)
}
