use super::vector_2d::left_normal;
use super::{Point2, Vector2};

/// Returns the perpendicular distance from `point` to the infinite line
/// through `line_origin` along `line_dir`.
///
/// `line_dir` must be unit length; the function does not renormalize, so a
/// non-unit direction silently scales the result. Non-finite inputs
/// propagate as NaN.
#[must_use]
pub fn point_to_line_dist(point: &Point2, line_origin: &Point2, line_dir: &Vector2) -> f64 {
    left_normal(line_dir).dot(&(point - line_origin)).abs()
}
