//! Per-motor similarity scores
//!
//! All three mappings produce an unbounded `f32` per motor; the response
//! curve decides what crosses into actuation.

use nalgebra::Vector3;

use crate::math::{cross, dot_xy, normalize};
use crate::motor::{MotorRing, MOTOR_COUNT};
use crate::traits::SensorFault;

/// One similarity score per motor
pub type Similarities = [f32; MOTOR_COUNT];

/// World "up" used to extract the horizontal heading normal
const UP: Vector3<f32> = Vector3::new(0.0, 0.0, 1.0);

/// Heading similarity
///
/// `n = normalize(v x up)` isolates the horizontal bearing of `v`; each
/// motor scores `heading_direction(i) · n`.
///
/// # Errors
///
/// [`SensorFault::ZeroMagnitude`] when `v` is parallel to `up` (or zero).
pub fn heading_similarity(v: &Vector3<f32>, ring: &MotorRing) -> Result<Similarities, SensorFault> {
    let normal = normalize(&cross(v, &UP))?;

    let mut out = [0.0; MOTOR_COUNT];
    for (score, dir) in out.iter_mut().zip(ring.heading_directions()) {
        *score = dir.dot(&normal);
    }
    Ok(out)
}

/// Tilt similarity
///
/// Gravity is normalized, then its horizontal part is projected onto each
/// planar motor direction.
///
/// # Errors
///
/// [`SensorFault::ZeroMagnitude`] when `v` is the zero vector.
pub fn tilt_similarity(v: &Vector3<f32>, ring: &MotorRing) -> Result<Similarities, SensorFault> {
    let gravity = normalize(v)?;

    let mut out = [0.0; MOTOR_COUNT];
    for (score, dir) in out.iter_mut().zip(ring.planar_directions()) {
        *score = dot_xy(&gravity, dir);
    }
    Ok(out)
}

/// Rate similarity
///
/// Signed planar cross term `-gy·mx + gx·my` against each planar motor
/// direction. The rate vector is used as is, so magnitude carries through.
pub fn rate_similarity(g: &Vector3<f32>, ring: &MotorRing) -> Similarities {
    let mut out = [0.0; MOTOR_COUNT];
    for (score, dir) in out.iter_mut().zip(ring.planar_directions()) {
        *score = -g.y * dir.x + g.x * dir.y;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    fn ring() -> MotorRing {
        MotorRing::new(PI, 4)
    }

    #[test]
    fn test_heading_points_at_single_motor() {
        // v x up = (vy, -vx, 0) = (0, -1, 0) which is motor 2 after the half turn
        let scores = heading_similarity(&Vector3::new(1.0, 0.0, 0.0), &ring()).unwrap();

        assert!((scores[2] - 1.0).abs() < EPSILON);
        assert!((scores[6] + 1.0).abs() < EPSILON);
        assert!(scores[0].abs() < EPSILON);
        assert!(scores[4].abs() < EPSILON);
    }

    #[test]
    fn test_heading_ignores_vertical_component() {
        let flat = heading_similarity(&Vector3::new(1.0, 0.0, 0.0), &ring()).unwrap();
        let tilted = heading_similarity(&Vector3::new(1.0, 0.0, 3.0), &ring()).unwrap();
        for i in 0..MOTOR_COUNT {
            assert!((flat[i] - tilted[i]).abs() < EPSILON);
        }
    }

    #[test]
    fn test_heading_vertical_vector_is_fault() {
        let result = heading_similarity(&Vector3::new(0.0, 0.0, 1.0), &ring());
        assert_eq!(result, Err(SensorFault::ZeroMagnitude));
    }

    #[test]
    fn test_tilt_is_scale_invariant() {
        let a = tilt_similarity(&Vector3::new(0.3, -0.2, 0.9), &ring()).unwrap();
        let b = tilt_similarity(&Vector3::new(3.0, -2.0, 9.0), &ring()).unwrap();
        for i in 0..MOTOR_COUNT {
            assert!((a[i] - b[i]).abs() < EPSILON);
        }
    }

    #[test]
    fn test_tilt_forward_lean() {
        // Gravity along +x: planar motor 4 sits at angle(8) == 0
        let scores = tilt_similarity(&Vector3::new(1.0, 0.0, 0.0), &ring()).unwrap();
        assert!((scores[4] - 1.0).abs() < EPSILON);
        assert!((scores[0] + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_tilt_zero_vector_is_fault() {
        let result = tilt_similarity(&Vector3::zeros(), &ring());
        assert_eq!(result, Err(SensorFault::ZeroMagnitude));
    }

    #[test]
    fn test_rate_keeps_magnitude() {
        // Pure roll rate gx: score = gx * my
        let scores = rate_similarity(&Vector3::new(2.0, 0.0, 0.0), &ring());
        // Planar motor 6 sits at angle(10) == angle(2) == +y
        assert!((scores[6] - 2.0).abs() < EPSILON);
        assert!((scores[2] + 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_rate_zero_is_all_zero() {
        let scores = rate_similarity(&Vector3::zeros(), &ring());
        assert!(scores.iter().all(|s| *s == 0.0));
    }
}
