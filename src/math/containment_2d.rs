//! Point-in-shape containment predicates.

use super::vector_2d::{are_clockwise, perp};
use super::Point2;

/// Tri-state sign used by the quad test so that on-edge points (sign 0)
/// never compare equal to interior signs.
fn sign(value: f64) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

/// Tests whether `point` lies strictly inside the triangle `v1, v2, v3`.
///
/// Winding-dependent: the triangle must be wound so that its interior lies
/// clockwise of every directed edge (per [`are_clockwise`]); the opposite
/// winding reports `false` for every point. Points on an edge are outside.
#[must_use]
pub fn point_in_triangle(point: &Point2, v1: &Point2, v2: &Point2, v3: &Point2) -> bool {
    are_clockwise(&(point - v1), &(v2 - v1))
        && are_clockwise(&(point - v2), &(v3 - v2))
        && are_clockwise(&(point - v3), &(v1 - v3))
}

/// Tests whether `point` lies inside the convex quad `q1, q2, q3, q4`.
///
/// The point is inside when the orientation sign is identical across all
/// four edges in sequence, so any consistently wound convex quad passes,
/// clockwise or counter-clockwise. Concave or self-intersecting input is not
/// validated and produces an unspecified result.
#[must_use]
pub fn point_in_quad(
    point: &Point2,
    q1: &Point2,
    q2: &Point2,
    q3: &Point2,
    q4: &Point2,
) -> bool {
    let s1 = sign(perp(&(point - q1), &(q2 - q1)));
    let s2 = sign(perp(&(point - q2), &(q3 - q2)));
    let s3 = sign(perp(&(point - q3), &(q4 - q3)));
    let s4 = sign(perp(&(point - q4), &(q1 - q4)));
    s1 == s2 && s2 == s3 && s3 == s4
}

/// Tests whether `point` lies strictly inside the axis-aligned rectangle
/// spanned by `rect_min` and `rect_max`. Boundary points are outside.
#[must_use]
pub fn point_in_rect(point: &Point2, rect_min: &Point2, rect_max: &Point2) -> bool {
    point_in_rect_edges(point, rect_max.y, rect_max.x, rect_min.y, rect_min.x)
}

/// Edge-coordinate form of [`point_in_rect`].
#[must_use]
pub fn point_in_rect_edges(point: &Point2, top: f64, right: f64, bottom: f64, left: f64) -> bool {
    point.x < right && point.x > left && point.y < top && point.y > bottom
}

/// Tests whether `point` lies strictly inside the circle around `center`.
/// Points exactly on the circle are outside, consistent with the rectangle
/// test's strict-interior semantics.
#[must_use]
pub fn point_in_circle(point: &Point2, center: &Point2, radius: f64) -> bool {
    (center - point).norm_squared() < radius * radius
}
