use super::vector_2d::perp;
use super::{Point2, Vector2, PARALLEL_TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Solves for `t` such that `origin1 + t * dir1` lies on the second line.
/// Directions need not be unit length; `t` is measured in multiples of
/// `dir1`.
///
/// Returns `None` when the directions are parallel or near-parallel, i.e.
/// when the perp product of the directions is below [`PARALLEL_TOLERANCE`]
/// in magnitude. The threshold is absolute, so inputs scaled far below it
/// classify as degenerate regardless of their geometry.
#[must_use]
pub fn line_line_intersect_2d(
    origin1: &Point2,
    dir1: &Vector2,
    origin2: &Point2,
    dir2: &Vector2,
) -> Option<f64> {
    let denom = perp(dir2, dir1);
    if denom.abs() < PARALLEL_TOLERANCE {
        return None;
    }
    let to_origin1 = origin1 - origin2;
    Some(perp(&to_origin1, dir2) / denom)
}

/// Bounded segment-segment intersection in 2D.
///
/// Each segment is `origin + t * dir` with `t` in the closed interval
/// `[0, 1]`; `dir` spans the full segment. Returns `(t1, t2)` when the
/// supporting lines cross and both parameters land on their segments,
/// endpoints included. `None` otherwise, including for parallel input
/// (same [`PARALLEL_TOLERANCE`] denominator test as
/// [`line_line_intersect_2d`]).
#[must_use]
pub fn segment_segment_intersect_2d(
    origin1: &Point2,
    dir1: &Vector2,
    origin2: &Point2,
    dir2: &Vector2,
) -> Option<(f64, f64)> {
    let denom = perp(dir1, dir2);
    if denom.abs() < PARALLEL_TOLERANCE {
        return None;
    }

    let to_origin2 = origin2 - origin1;
    let t1 = perp(&to_origin2, dir2) / denom;
    let t2 = perp(&to_origin2, dir1) / denom;

    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        Some((t1, t2))
    } else {
        None
    }
}
