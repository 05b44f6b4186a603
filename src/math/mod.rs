pub mod arc_2d;
pub mod containment_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod rotation_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Absolute denominator tolerance for the 2D line and segment intersections.
///
/// Direction pairs whose perp product is smaller in magnitude are treated as
/// parallel. The threshold is absolute, not scale-invariant, and is part of
/// the public contract: changing it changes which inputs classify as
/// degenerate.
pub const PARALLEL_TOLERANCE: f64 = 1e-3;

/// Absolute incidence tolerance for the ray/plane intersections.
///
/// A ray whose direction has a smaller component along the plane normal is
/// treated as parallel to the plane. Absolute, like [`PARALLEL_TOLERANCE`],
/// and deliberately tighter.
pub const RAY_PLANE_TOLERANCE: f64 = 1e-5;
