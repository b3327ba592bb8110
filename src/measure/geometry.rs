//! Distance and angle primitives on Cartesian coordinates.

use super::config::AngleUnit;

#[inline]
fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// Euclidean distance between two points.
pub fn calculate_distance(p: &[f64; 3], q: &[f64; 3]) -> f64 {
    norm(&sub(p, q))
}

/// Angle at vertex `b` between the arms `b→a` and `b→c`.
///
/// Returns `NaN` when either arm has zero length.
pub fn calculate_angle(a: &[f64; 3], b: &[f64; 3], c: &[f64; 3], unit: AngleUnit) -> f64 {
    let ba = sub(a, b);
    let bc = sub(c, b);
    let cos_theta = dot(&ba, &bc) / (norm(&ba) * norm(&bc));
    // Rounding can push |cos| just past 1 for collinear points.
    let theta = cos_theta.clamp(-1.0, 1.0).acos();
    match unit {
        AngleUnit::Degrees => theta.to_degrees(),
        AngleUnit::Radians => theta,
    }
}
