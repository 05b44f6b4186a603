//! Scalar 2D vector helpers shared by the geometry routines.

use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Perp (2D cross) product: `a.x * b.y - a.y * b.x`.
///
/// Doubles as the signed area of the parallelogram spanned by `a` and `b`
/// and as the denominator in line-intersection solving.
#[must_use]
pub fn perp(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// True if `a` has a shorter way to cover rotating clockwise to reach `b`.
#[must_use]
pub fn are_clockwise(a: &Vector2, b: &Vector2) -> bool {
    perp(a, b) < 0.0
}

/// Rotates `v` counter-clockwise by `angle` radians.
#[must_use]
pub fn rotate(v: &Vector2, angle: f64) -> Vector2 {
    let (s, c) = angle.sin_cos();
    Vector2::new(c * v.x - s * v.y, s * v.x + c * v.y)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the right-pointing normal of a direction vector.
#[must_use]
pub fn right_normal(dir: &Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if the points coincide.
pub fn direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(d / len)
}
