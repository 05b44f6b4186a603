//! Circular-arc reconstruction from endpoints and a tangent.

use super::intersect_2d::line_line_intersect_2d;
use super::vector_2d::{are_clockwise, left_normal, midpoint};
use super::{Point2, Vector2};

/// Reconstructs the center of the circle through `v1` and `v2` whose tangent
/// at `v1` is `tangent_at_v1`.
///
/// The center is the intersection of the perpendicular bisector of the chord
/// `v1 → v2` with the radius line at `v1` (the tangent rotated 90°).
/// Returns `None` when that intersection is degenerate, i.e. the tangent is
/// parallel to the chord; the [`PARALLEL_TOLERANCE`](super::PARALLEL_TOLERANCE)
/// classification is inherited from [`line_line_intersect_2d`].
///
/// Coincident endpoints are not validated; they produce a NaN chord
/// direction that propagates into the result.
#[must_use]
pub fn arc_center_from_tangent(
    v1: &Point2,
    v2: &Point2,
    tangent_at_v1: &Vector2,
) -> Option<Point2> {
    let mid = midpoint(v1, v2);
    let chord_normal = left_normal(&(v2 - v1).normalize());
    let radial = left_normal(tangent_at_v1);

    let f = line_line_intersect_2d(&mid, &chord_normal, v1, &radial)?;
    Some(mid + chord_normal * f)
}

/// True when rotating from `v1 - center` to `v2 - center` the short way is
/// clockwise. Exact sign test, no tolerance.
#[must_use]
pub fn is_clockwise(v1: &Point2, v2: &Point2, center: &Point2) -> bool {
    are_clockwise(&(v1 - center), &(v2 - center))
}

/// Arc length from `v1` to `v2` around `center`, always along the shorter
/// sweep.
///
/// A center with an infinite component is the no-curvature sentinel (a
/// failed center reconstruction); the length then degrades to the chord
/// distance between the endpoints. Otherwise the two radii must agree —
/// checked with a debug assertion, never silently averaged — and the result
/// is `radius * angle`, with the arccos argument clamped to `[-1, 1]` to
/// absorb round-off.
#[must_use]
pub fn arc_length(v1: &Point2, v2: &Point2, center: &Point2) -> f64 {
    if center.x.is_infinite() || center.y.is_infinite() {
        return (v2 - v1).norm();
    }

    let radius1 = v1 - center;
    let radius2 = v2 - center;
    let r = radius1.norm();
    debug_assert!(
        (r - radius2.norm()).abs() <= 1e-4 * r.max(1.0),
        "unequal radii: {r} vs {}",
        radius2.norm()
    );

    let angle = radius1
        .normalize()
        .dot(&radius2.normalize())
        .clamp(-1.0, 1.0)
        .acos();
    r * angle
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn center_of_unit_circle() {
        // v1=(1,0) with vertical tangent, v2=(0,1): the unit circle.
        let center = arc_center_from_tangent(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn center_of_semicircle() {
        let center = arc_center_from_tangent(
            &Point2::new(1.0, 0.0),
            &Point2::new(-1.0, 0.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn center_is_equidistant_from_endpoints() {
        let v1 = Point2::new(2.0, 1.0);
        let v2 = Point2::new(-0.5, 3.0);
        let center =
            arc_center_from_tangent(&v1, &v2, &Vector2::new(0.3, 1.0).normalize()).unwrap();
        let r1 = (v1 - center).norm();
        let r2 = (v2 - center).norm();
        assert_relative_eq!(r1, r2, epsilon = 1e-9);
    }

    #[test]
    fn tangent_parallel_to_chord_has_no_center() {
        let result = arc_center_from_tangent(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Vector2::new(1.0, 0.0),
        );
        assert!(result.is_none());
    }

    #[test]
    fn clockwise_is_antisymmetric() {
        let v1 = Point2::new(1.0, 0.0);
        let v2 = Point2::new(0.0, 1.0);
        let center = Point2::new(0.0, 0.0);
        assert!(!is_clockwise(&v1, &v2, &center));
        assert!(is_clockwise(&v2, &v1, &center));
    }

    #[test]
    fn quarter_circle_length() {
        let len = arc_length(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(0.0, 0.0),
        );
        assert!((len - FRAC_PI_2).abs() < 1e-4, "len={len}");
    }

    #[test]
    fn semicircle_length() {
        let len = arc_length(
            &Point2::new(2.0, 0.0),
            &Point2::new(-2.0, 0.0),
            &Point2::new(0.0, 0.0),
        );
        assert!((len - 2.0 * PI).abs() < 1e-4, "len={len}");
    }

    #[test]
    fn infinite_center_degrades_to_chord() {
        let len = arc_length(
            &Point2::new(0.0, 0.0),
            &Point2::new(3.0, 4.0),
            &Point2::new(f64::INFINITY, 0.0),
        );
        assert!((len - 5.0).abs() < 1e-10, "len={len}");
    }

    #[test]
    fn coincident_endpoints_have_zero_length() {
        let v = Point2::new(1.0, 0.0);
        let len = arc_length(&v, &v, &Point2::new(0.0, 0.0));
        assert!(len.abs() < 1e-10, "len={len}");
    }
}
