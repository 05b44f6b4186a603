use nalgebra::{Quaternion, UnitQuaternion};

use super::Vector2;

/// Builds the yaw rotation taking the forward direction `(0, 0, 1)` to
/// `(heading.x, 0, heading.y)`.
///
/// `heading` must be unit length. The quaternion is assembled from the
/// half-angle identities, so no trigonometric calls are involved, and unlike
/// a generic from-to rotation the construction stays stable as the heading
/// approaches straight backwards: headings with `y < -0.99` return the exact
/// 180° yaw.
#[must_use]
pub fn heading_to_quaternion(heading: &Vector2) -> UnitQuaternion<f64> {
    if heading.y < -0.99 {
        return UnitQuaternion::new_normalize(Quaternion::new(0.0, 0.0, 1.0, 0.0));
    }
    // w = cos(θ/2) = sqrt((1 + cos θ) / 2) with cos θ = heading.y,
    // and sin(θ/2) = sin θ / (2 cos(θ/2)) with sin θ = heading.x.
    let norm = (2.0 + 2.0 * heading.y).sqrt();
    UnitQuaternion::new_normalize(Quaternion::new(norm * 0.5, 0.0, heading.x / norm, 0.0))
}
