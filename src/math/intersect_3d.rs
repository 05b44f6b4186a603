use super::{Point3, Vector3, RAY_PLANE_TOLERANCE};

/// Intersection of a ray with the horizontal plane `y = 0`.
///
/// Returns the distance along the ray, in multiples of `dir`. `None` when
/// the ray is parallel to the plane (`|dir.y|` within
/// [`RAY_PLANE_TOLERANCE`]) or the plane lies behind the ray origin.
#[must_use]
pub fn ray_xz_plane_intersect(origin: &Point3, dir: &Vector3) -> Option<f64> {
    if dir.y.abs() <= RAY_PLANE_TOLERANCE {
        return None;
    }
    let distance = -origin.y / dir.y;
    (distance >= 0.0).then_some(distance)
}

/// Hit-point form of [`ray_xz_plane_intersect`].
#[must_use]
pub fn ray_xz_plane_intersect_point(origin: &Point3, dir: &Vector3) -> Option<Point3> {
    ray_xz_plane_intersect(origin, dir).map(|distance| origin + dir * distance)
}

/// Intersection of a ray with a plane given by its unit normal and signed
/// distance from the coordinate origin.
///
/// `plane_distance` is `normal · p` for any point `p` on the plane; the
/// normal must be unit length for the result to be metrically correct.
/// Returns the distance along the ray, or `None` when the ray is parallel to
/// the plane (incidence within [`RAY_PLANE_TOLERANCE`]) or points away from
/// it.
#[must_use]
pub fn ray_plane_intersect(
    origin: &Point3,
    dir: &Vector3,
    normal: &Vector3,
    plane_distance: f64,
) -> Option<f64> {
    let denom = normal.dot(dir);
    if denom.abs() <= RAY_PLANE_TOLERANCE {
        return None;
    }
    let distance = (normal * plane_distance - origin.coords).dot(normal) / denom;
    (distance >= 0.0).then_some(distance)
}

/// Point-on-plane form of [`ray_plane_intersect`].
#[must_use]
pub fn ray_plane_intersect_through(
    origin: &Point3,
    dir: &Vector3,
    normal: &Vector3,
    point_on_plane: &Point3,
) -> Option<f64> {
    ray_plane_intersect(origin, dir, normal, normal.dot(&point_on_plane.coords))
}

/// Intersection of a ray with a finite rectangle in 3D.
///
/// The rectangle is given by its center plus the half-extent vectors to the
/// middle of its top edge (`rect_up`) and the middle of its right edge
/// (`rect_right`). Neither needs to be unit length; their norms are the
/// half-extents.
///
/// The hit point's projection onto each unnormalized half-extent vector is
/// compared against that vector's squared norm, which bounds the local
/// coordinate by the half-extent itself. Boundary hits count as misses.
#[must_use]
pub fn ray_rectangle_intersect_3d(
    ray_origin: &Point3,
    ray_dir: &Vector3,
    rect_center: &Point3,
    rect_up: &Vector3,
    rect_right: &Vector3,
) -> Option<f64> {
    let normal = rect_up.cross(rect_right).normalize();
    let distance = ray_plane_intersect_through(ray_origin, ray_dir, &normal, rect_center)?;

    let point = ray_origin + ray_dir * distance;
    let local = point - rect_center;
    let inside = rect_up.dot(&local).abs() < rect_up.norm_squared()
        && rect_right.dot(&local).abs() < rect_right.norm_squared();
    inside.then_some(distance)
}
