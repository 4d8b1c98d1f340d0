//! Rotation, cross product and normalization

use libm::{cosf, sinf};
use nalgebra::Vector3;

/// Errors from vector math
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Normalization of a vector whose magnitude is exactly zero
    DivideByZero,
    /// Magnitude or result not representable as a finite `f32`
    Overflow,
}

impl MathError {
    /// Short static description, usable from `defmt` log macros
    pub fn as_str(&self) -> &'static str {
        match self {
            MathError::DivideByZero => "divide by zero",
            MathError::Overflow => "magnitude overflow",
        }
    }
}

impl core::fmt::Display for MathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotate the plane spanned by two components by `theta` radians
///
/// ```text
/// a' = cos(theta) * a - sin(theta) * b
/// b' = sin(theta) * a + cos(theta) * b
/// ```
///
/// Rotating by `-theta` undoes a rotation by `theta`.
#[inline]
pub fn rotate_axis(a: f32, b: f32, theta: f32) -> (f32, f32) {
    let ct = cosf(theta);
    let st = sinf(theta);
    (ct * a - st * b, st * a + ct * b)
}

/// Standard 3D cross product `v1 x v2`
#[inline]
pub fn cross(v1: &Vector3<f32>, v2: &Vector3<f32>) -> Vector3<f32> {
    v1.cross(v2)
}

/// Scale `v` to unit length
///
/// # Errors
///
/// Returns [`MathError::DivideByZero`] when the magnitude is exactly zero
/// and [`MathError::Overflow`] when the magnitude or any result component
/// is not finite. Callers feeding sensor data must treat both as a read
/// fault.
pub fn normalize(v: &Vector3<f32>) -> Result<Vector3<f32>, MathError> {
    let magnitude = v.norm();
    if magnitude == 0.0 {
        return Err(MathError::DivideByZero);
    }
    if !magnitude.is_finite() {
        return Err(MathError::Overflow);
    }

    let unit = v / magnitude;
    if !unit.iter().all(|c| c.is_finite()) {
        return Err(MathError::Overflow);
    }
    Ok(unit)
}

/// Dot product of the horizontal (x, y) components only
#[inline]
pub fn dot_xy(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    a.x * b.x + a.y * b.y
}
