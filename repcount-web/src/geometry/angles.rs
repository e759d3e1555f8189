//! Joint angle calculation using the law of cosines
//!
//! The angle at a middle joint (elbow, knee, shoulder) is recovered from the
//! three squared side lengths of the triangle it forms with its neighbours.

use nalgebra::{distance_squared, Point2};

/// Rays shorter than this are treated as zero length
const MIN_RAY_LENGTH: f32 = 1e-4;

/// Calculate the angle at `b` formed by rays to `a` and `c`, in degrees
///
/// `cos(θ) = (|ab|² + |cb|² − |ac|²) / (2·|ab|·|cb|)`
///
/// Returns:
/// - 180° when `b` lies between `a` and `c` on a straight line (limb extended)
/// - 0° when `a` and `c` coincide on the same side of `b` (fully folded)
/// - `None` when either ray has zero length, which happens only when the
///   estimator collapses two landmarks onto one point
pub fn angle(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> Option<f32> {
    let ab_sq = distance_squared(&a, &b);
    let cb_sq = distance_squared(&c, &b);
    let ac_sq = distance_squared(&a, &c);

    let ab = ab_sq.sqrt();
    let cb = cb_sq.sqrt();
    if ab < MIN_RAY_LENGTH || cb < MIN_RAY_LENGTH {
        return None;
    }

    // Float overshoot past ±1 would turn acos into NaN
    let cos_angle = ((ab_sq + cb_sq - ac_sq) / (2.0 * ab * cb)).clamp(-1.0, 1.0);
    let degrees = cos_angle.acos().to_degrees();

    degrees.is_finite().then_some(degrees)
}

/// Euclidean distance between two points
pub fn distance(a: Point2<f32>, b: Point2<f32>) -> f32 {
    nalgebra::distance(&a, &b)
}

/// Point halfway between `a` and `b`
pub fn midpoint(a: Point2<f32>, b: Point2<f32>) -> Point2<f32> {
    nalgebra::center(&a, &b)
}
