//! Motor direction table
//!
//! Motor `i` sits at `angle(i) = 2π·i/8` around the band. Two fixed views of
//! the ring are precomputed at startup:
//!
//! - **heading**: `angle(i) + heading_phase`, used against the horizontal
//!   heading normal
//! - **planar**: `angle(i + offset_steps)`, used by tilt and rate mapping
//!
//! Both are immutable once built.

use core::f32::consts::PI;

use libm::{cosf, sinf};
use nalgebra::Vector3;

use super::MOTOR_COUNT;

/// Precomputed unit directions for every motor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorRing {
    heading: [Vector3<f32>; MOTOR_COUNT],
    planar: [Vector3<f32>; MOTOR_COUNT],
}

impl MotorRing {
    /// Build the table from the heading phase (radians) and the planar
    /// offset in motor positions
    pub fn new(heading_phase: f32, offset_steps: u8) -> Self {
        let mut heading = [Vector3::zeros(); MOTOR_COUNT];
        let mut planar = [Vector3::zeros(); MOTOR_COUNT];

        for i in 0..MOTOR_COUNT {
            heading[i] = direction(angle(i) + heading_phase);
            planar[i] = direction(angle((i + offset_steps as usize) % MOTOR_COUNT));
        }

        Self { heading, planar }
    }

    /// Direction of motor `i` for heading mapping, `None` past the ring
    pub fn heading_direction(&self, i: usize) -> Option<&Vector3<f32>> {
        self.heading.get(i)
    }

    /// Direction of motor `i` for tilt and rate mapping, `None` past the ring
    pub fn planar_direction(&self, i: usize) -> Option<&Vector3<f32>> {
        self.planar.get(i)
    }

    /// All heading directions in motor order
    pub fn heading_directions(&self) -> &[Vector3<f32>; MOTOR_COUNT] {
        &self.heading
    }

    /// All planar directions in motor order
    pub fn planar_directions(&self) -> &[Vector3<f32>; MOTOR_COUNT] {
        &self.planar
    }
}

/// Nominal position of motor `i` in radians
#[inline]
fn angle(i: usize) -> f32 {
    2.0 * PI * i as f32 / MOTOR_COUNT as f32
}

#[inline]
fn direction(theta: f32) -> Vector3<f32> {
    Vector3::new(cosf(theta), sinf(theta), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_directions_are_unit_and_horizontal() {
        let ring = MotorRing::new(PI, 4);
        for i in 0..MOTOR_COUNT {
            for d in [ring.heading_direction(i), ring.planar_direction(i)] {
                let d = d.unwrap();
                assert!((d.norm() - 1.0).abs() < EPSILON);
                assert_eq!(d.z, 0.0);
            }
        }
    }

    #[test]
    fn test_zero_phase_matches_nominal_angles() {
        let ring = MotorRing::new(0.0, 0);
        let m2 = ring.heading_direction(2).unwrap();
        assert!(m2.x.abs() < EPSILON);
        assert!((m2.y - 1.0).abs() < EPSILON);
        assert_eq!(ring.heading_directions(), ring.planar_directions());
    }

    #[test]
    fn test_heading_phase_flips_ring() {
        let ring = MotorRing::new(PI, 4);
        // Motor 0 points along -x after a half turn
        let m0 = ring.heading_direction(0).unwrap();
        assert!((m0.x + 1.0).abs() < EPSILON);
        assert!(m0.y.abs() < EPSILON);
    }

    #[test]
    fn test_offset_steps_wrap() {
        let ring = MotorRing::new(0.0, 4);
        // angle(5 + 4) == angle(1)
        let expected = direction(angle(1));
        assert!((ring.planar_direction(5).unwrap() - expected).norm() < EPSILON);
        // angle(4 + 4) == angle(0)
        assert!((ring.planar_direction(4).unwrap().x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_out_of_range_motor_is_none() {
        let ring = MotorRing::new(PI, 4);
        assert!(ring.heading_direction(MOTOR_COUNT).is_none());
        assert!(ring.planar_direction(MOTOR_COUNT).is_none());
        assert!(ring.planar_direction(usize::MAX).is_none());
    }
}
