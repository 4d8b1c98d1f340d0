//! Sensor source abstraction
//!
//! `ImuSource` exposes the three raw 3-axis channels of a combined
//! accelerometer / gyroscope / magnetometer. Reads are synchronous and
//! bounded; any failure surfaces as a [`SensorFault`].

use nalgebra::Vector3;

use crate::math::MathError;

/// A sensor read failed or produced data the pipeline cannot use
///
/// Every variant aborts the current tick and forces all motors to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorFault {
    /// Bus transaction failed
    Bus,
    /// Reading contained NaN/Inf or an overflow flag
    InvalidData,
    /// Vector had zero magnitude where a direction was required
    ZeroMagnitude,
    /// Device has not produced a sample yet
    NotReady,
}

impl SensorFault {
    /// Short static description, usable from `defmt` log macros
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorFault::Bus => "sensor bus error",
            SensorFault::InvalidData => "invalid sensor data",
            SensorFault::ZeroMagnitude => "zero-magnitude sensor vector",
            SensorFault::NotReady => "sensor not ready",
        }
    }
}

impl core::fmt::Display for SensorFault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MathError> for SensorFault {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivideByZero => SensorFault::ZeroMagnitude,
            MathError::Overflow => SensorFault::InvalidData,
        }
    }
}

/// Raw 3-axis sensor reads
///
/// Implementations return values in the sensor's body frame. Units only
/// need to be consistent with the configured thresholds (the firmware
/// driver reports µT, m/s² and rad/s).
pub trait ImuSource {
    /// Magnetic field vector
    fn read_magnetic(&mut self) -> Result<Vector3<f32>, SensorFault>;

    /// Acceleration vector (includes gravity)
    fn read_acceleration(&mut self) -> Result<Vector3<f32>, SensorFault>;

    /// Angular rate vector
    fn read_angular_rate(&mut self) -> Result<Vector3<f32>, SensorFault>;
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Scripted IMU for host tests
///
/// Each channel returns a fixed result. Read counts are tracked so tests can
/// assert that no sensor access happened.
#[derive(Debug, Clone)]
pub struct MockImu {
    magnetic: Result<Vector3<f32>, SensorFault>,
    acceleration: Result<Vector3<f32>, SensorFault>,
    angular_rate: Result<Vector3<f32>, SensorFault>,
    reads: usize,
}

impl Default for MockImu {
    fn default() -> Self {
        Self::new()
    }
}

impl MockImu {
    /// Creates a level, stationary sensor with a field pointing along +X
    pub fn new() -> Self {
        Self {
            magnetic: Ok(Vector3::new(1.0, 0.0, 0.0)),
            acceleration: Ok(Vector3::new(0.0, 0.0, 1.0)),
            angular_rate: Ok(Vector3::zeros()),
            reads: 0,
        }
    }

    /// Sets the magnetic channel result
    pub fn set_magnetic(&mut self, value: Result<Vector3<f32>, SensorFault>) {
        self.magnetic = value;
    }

    /// Sets the acceleration channel result
    pub fn set_acceleration(&mut self, value: Result<Vector3<f32>, SensorFault>) {
        self.acceleration = value;
    }

    /// Sets the angular rate channel result
    pub fn set_angular_rate(&mut self, value: Result<Vector3<f32>, SensorFault>) {
        self.angular_rate = value;
    }

    /// Total number of reads across all channels
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl ImuSource for MockImu {
    fn read_magnetic(&mut self) -> Result<Vector3<f32>, SensorFault> {
        self.reads += 1;
        self.magnetic
    }

    fn read_acceleration(&mut self) -> Result<Vector3<f32>, SensorFault> {
        self.reads += 1;
        self.acceleration
    }

    fn read_angular_rate(&mut self) -> Result<Vector3<f32>, SensorFault> {
        self.reads += 1;
        self.angular_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_imu_counts_reads() {
        let mut imu = MockImu::new();
        assert_eq!(imu.reads(), 0);

        imu.read_magnetic().unwrap();
        imu.read_acceleration().unwrap();
        imu.read_angular_rate().unwrap();
        assert_eq!(imu.reads(), 3);
    }

    #[test]
    fn mock_imu_returns_scripted_error() {
        let mut imu = MockImu::new();
        imu.set_acceleration(Err(SensorFault::Bus));
        assert_eq!(imu.read_acceleration(), Err(SensorFault::Bus));
        assert!(imu.read_magnetic().is_ok());
    }

    #[test]
    fn divide_by_zero_maps_to_zero_magnitude() {
        let fault: SensorFault = MathError::DivideByZero.into();
        assert_eq!(fault, SensorFault::ZeroMagnitude);

        let fault: SensorFault = MathError::Overflow.into();
        assert_eq!(fault, SensorFault::InvalidData);
    }
}
