//! Magnetometer hard/soft iron calibration
//!
//! The fitting routine runs offline; the hat only consumes its result as
//! fixed configuration.

use nalgebra::Vector3;

/// Magnetometer calibration: hard iron offset and diagonal soft iron scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagCalibration {
    /// Hard iron offset (µT), subtracted from raw readings
    pub offset: Vector3<f32>,

    /// Soft iron scale factors (dimensionless), applied after offset removal
    pub scale: Vector3<f32>,
}

impl Default for MagCalibration {
    /// Identity calibration
    fn default() -> Self {
        Self {
            offset: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl MagCalibration {
    /// Create calibration from offset and scale vectors
    pub const fn new(offset: Vector3<f32>, scale: Vector3<f32>) -> Self {
        Self { offset, scale }
    }

    /// Apply calibration to a raw magnetometer reading
    ///
    /// # Formula
    ///
    /// ```text
    /// calibrated = (raw - offset) .* scale
    /// ```
    /// where `.*` is element-wise multiplication
    pub fn apply(&self, raw: Vector3<f32>) -> Vector3<f32> {
        (raw - self.offset).component_mul(&self.scale)
    }

    /// All components finite and every scale factor non-zero
    pub fn is_valid(&self) -> bool {
        self.offset.iter().all(|c| c.is_finite())
            && self.scale.iter().all(|c| c.is_finite() && *c != 0.0)
    }
}
