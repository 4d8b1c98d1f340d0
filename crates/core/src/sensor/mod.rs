//! Sensor sample adapter
//!
//! Turns a raw 3-axis reading into the corrected vector consumed by the
//! similarity mapper:
//!
//! ```text
//! raw ──► (magnetic only) (raw - offset) .* scale ──► mount rotation ──► corrected
//! ```
//!
//! The transform is pure. Readings with NaN/Inf components are rejected
//! before any arithmetic so bad data can never reach a duty value.

mod calibration;
mod mount;

pub use calibration::MagCalibration;
pub use mount::MountCorrection;

use nalgebra::Vector3;

use crate::traits::{ImuSource, SensorFault};

/// Raw sensor channel feeding a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorChannel {
    /// Magnetometer (heading)
    Magnetic,
    /// Accelerometer (gravity / tilt)
    Acceleration,
    /// Gyroscope (angular rate)
    AngularRate,
}

impl SensorChannel {
    /// Read this channel from an IMU source
    pub fn read<I: ImuSource + ?Sized>(self, imu: &mut I) -> Result<Vector3<f32>, SensorFault> {
        match self {
            SensorChannel::Magnetic => imu.read_magnetic(),
            SensorChannel::Acceleration => imu.read_acceleration(),
            SensorChannel::AngularRate => imu.read_angular_rate(),
        }
    }

    /// Channel name for logging
    pub fn name(self) -> &'static str {
        match self {
            SensorChannel::Magnetic => "magnetic",
            SensorChannel::Acceleration => "acceleration",
            SensorChannel::AngularRate => "angular_rate",
        }
    }
}

/// Applies calibration and mount correction to raw samples
#[derive(Debug, Clone, Copy)]
pub struct SensorAdapter {
    calibration: MagCalibration,
    mount: MountCorrection,
}

impl SensorAdapter {
    /// Create an adapter from fixed startup configuration
    pub fn new(calibration: MagCalibration, mount: MountCorrection) -> Self {
        Self { calibration, mount }
    }

    /// Correct a raw sample from `channel`
    ///
    /// # Errors
    ///
    /// Returns [`SensorFault::InvalidData`] if any component of `raw`, or of
    /// the calibrated and rotated result, is not finite.
    pub fn correct(
        &self,
        channel: SensorChannel,
        raw: Vector3<f32>,
    ) -> Result<Vector3<f32>, SensorFault> {
        if !is_finite(&raw) {
            return Err(SensorFault::InvalidData);
        }

        let sample = match channel {
            SensorChannel::Magnetic => self.calibration.apply(raw),
            SensorChannel::Acceleration | SensorChannel::AngularRate => raw,
        };

        let corrected = self.mount.apply(sample);
        if !is_finite(&corrected) {
            return Err(SensorFault::InvalidData);
        }
        Ok(corrected)
    }

    /// Magnetometer calibration in use
    pub fn calibration(&self) -> &MagCalibration {
        &self.calibration
    }

    /// Mount correction in use
    pub fn mount(&self) -> &MountCorrection {
        &self.mount
    }
}

fn is_finite(v: &Vector3<f32>) -> bool {
    v.iter().all(|c| c.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockImu;
    use core::f32::consts::PI;

    const EPSILON: f32 = 1e-5;

    fn adapter() -> SensorAdapter {
        SensorAdapter::new(
            MagCalibration::new(Vector3::new(5.0, -3.0, 2.0), Vector3::new(1.1, 0.9, 1.05)),
            MountCorrection::new(-PI / 6.0, -PI / 24.0),
        )
    }

    #[test]
    fn test_magnetic_is_calibrated_before_rotation() {
        let adapter = adapter();
        let raw = Vector3::new(25.0, 17.0, 42.0);

        let corrected = adapter.correct(SensorChannel::Magnetic, raw).unwrap();
        let expected = adapter.mount().apply(Vector3::new(22.0, 18.0, 42.0));

        assert!((corrected - expected).norm() < EPSILON);
    }

    #[test]
    fn test_acceleration_skips_calibration() {
        let adapter = adapter();
        let raw = Vector3::new(0.0, 0.0, 1.0);

        let corrected = adapter.correct(SensorChannel::Acceleration, raw).unwrap();

        assert!((corrected.x - 0.5).abs() < EPSILON);
        assert!((corrected.y - 0.113039).abs() < EPSILON);
        assert!((corrected.z - 0.858616).abs() < EPSILON);
    }

    #[test]
    fn test_angular_rate_is_rotated() {
        let adapter = adapter();
        let raw = Vector3::new(0.0, 0.0, 2.0);

        let corrected = adapter.correct(SensorChannel::AngularRate, raw).unwrap();

        assert!((corrected - adapter.mount().apply(raw)).norm() < EPSILON);
        assert!((corrected.norm() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_non_finite_rejected() {
        let adapter = adapter();
        for raw in [
            Vector3::new(f32::NAN, 0.0, 1.0),
            Vector3::new(0.0, f32::INFINITY, 1.0),
            Vector3::new(0.0, 0.0, f32::NEG_INFINITY),
        ] {
            for channel in [
                SensorChannel::Magnetic,
                SensorChannel::Acceleration,
                SensorChannel::AngularRate,
            ] {
                assert_eq!(
                    adapter.correct(channel, raw),
                    Err(SensorFault::InvalidData)
                );
            }
        }
    }

    #[test]
    fn test_calibration_overflow_rejected() {
        // Finite raw sample that overflows once scaled
        let raw = Vector3::new(3.3e38, 0.0, 0.0);
        assert_eq!(
            adapter().correct(SensorChannel::Magnetic, raw),
            Err(SensorFault::InvalidData)
        );
    }

    #[test]
    fn test_channel_read_dispatch() {
        let mut imu = MockImu::new();
        imu.set_angular_rate(Ok(Vector3::new(0.1, 0.2, 0.3)));

        let rate = SensorChannel::AngularRate.read(&mut imu).unwrap();
        assert_eq!(rate, Vector3::new(0.1, 0.2, 0.3));

        let accel = SensorChannel::Acceleration.read(&mut imu).unwrap();
        assert_eq!(accel, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(imu.reads(), 2);
    }
}
