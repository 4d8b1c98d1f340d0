//! Startup configuration
//!
//! Every tunable of the hat lives in [`HatConfig`], built once at startup and
//! validated before the tick loop starts. Invalid configuration is fatal.

use core::f32::consts::PI;

use nalgebra::Vector3;

use crate::mode::HatMode;
use crate::motor::MotorRing;
use crate::sensor::{MagCalibration, MountCorrection, SensorAdapter};

/// Default tick rate (Hz)
pub const DEFAULT_TICK_HZ: u32 = 60;

/// Highest accepted tick rate (Hz)
pub const MAX_TICK_HZ: u32 = 1000;

/// Mount rotation of the (x, z) pair (radians)
pub const MOUNT_TILT_XZ: f32 = -PI / 6.0;

/// Mount rotation of the (y, z) pair (radians)
pub const MOUNT_TILT_YZ: f32 = -PI / 24.0;

/// Phase added to every heading direction (radians)
pub const HEADING_PHASE: f32 = PI;

/// Planar ring offset for tilt and rate mapping (motor positions)
pub const RING_OFFSET_STEPS: u8 = 4;

/// Heading threshold (linear curve)
pub const HEADING_THRESHOLD: f32 = 0.8;

/// Tilt threshold (sqrt curve)
pub const TILT_THRESHOLD: f32 = 0.25;

/// Rate threshold (sqrt curve)
pub const RATE_THRESHOLD: f32 = 0.3;

/// AK8963 hard iron offset of the deployed hat (µT)
pub const MAG_OFFSET: [f32; 3] = [-18.61406, 14.16445, 56.93379];

/// AK8963 soft iron scale of the deployed hat
pub const MAG_SCALE: [f32; 3] = [1.231462, 1.186465, 0.7434298];

/// Configuration errors, all fatal at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Mode name or selector not recognized
    UnknownMode,
    /// Threshold not finite, or a linear threshold `>= 1`
    InvalidThreshold,
    /// Tick rate zero or above [`MAX_TICK_HZ`]
    InvalidTickRate,
    /// Calibration has a non-finite component or a zero scale
    InvalidCalibration,
    /// Mount angle or heading phase not finite
    InvalidMountAngle,
    /// Numeric parameter failed to parse
    InvalidNumber,
}

impl ConfigError {
    /// Short static description, usable from `defmt` log macros
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigError::UnknownMode => "unknown mode",
            ConfigError::InvalidThreshold => "invalid threshold",
            ConfigError::InvalidTickRate => "invalid tick rate",
            ConfigError::InvalidCalibration => "invalid magnetometer calibration",
            ConfigError::InvalidMountAngle => "invalid mount angle",
            ConfigError::InvalidNumber => "invalid number",
        }
    }
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete startup configuration of the hat
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatConfig {
    /// Mode active after start
    pub mode: HatMode,
    /// Magnetometer calibration
    pub calibration: MagCalibration,
    /// Sensor mount rotation
    pub mount: MountCorrection,
    /// Heading ring phase (radians)
    pub heading_phase: f32,
    /// Planar ring offset (motor positions)
    pub ring_offset_steps: u8,
    /// Tick rate (Hz)
    pub tick_hz: u32,
}

impl Default for HatConfig {
    fn default() -> Self {
        Self {
            mode: HatMode::heading(),
            calibration: MagCalibration::new(
                Vector3::new(MAG_OFFSET[0], MAG_OFFSET[1], MAG_OFFSET[2]),
                Vector3::new(MAG_SCALE[0], MAG_SCALE[1], MAG_SCALE[2]),
            ),
            mount: MountCorrection::new(MOUNT_TILT_XZ, MOUNT_TILT_YZ),
            heading_phase: HEADING_PHASE,
            ring_offset_steps: RING_OFFSET_STEPS,
            tick_hz: DEFAULT_TICK_HZ,
        }
    }
}

impl HatConfig {
    /// Default configuration with a different startup mode
    pub fn with_mode(mode: HatMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Check every field
    ///
    /// # Errors
    ///
    /// The first failing check, in field order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(response) = self.mode.response() {
            if !response.is_valid() {
                return Err(ConfigError::InvalidThreshold);
            }
        }
        if !self.calibration.is_valid() {
            return Err(ConfigError::InvalidCalibration);
        }
        if !self.mount.is_valid() || !self.heading_phase.is_finite() {
            return Err(ConfigError::InvalidMountAngle);
        }
        if self.tick_hz == 0 || self.tick_hz > MAX_TICK_HZ {
            return Err(ConfigError::InvalidTickRate);
        }
        Ok(())
    }

    /// Tick period in microseconds
    #[inline]
    pub const fn period_us(&self) -> u32 {
        1_000_000 / self.tick_hz
    }

    /// Motor direction table for this configuration
    pub fn motor_ring(&self) -> MotorRing {
        MotorRing::new(self.heading_phase, self.ring_offset_steps)
    }

    /// Sensor adapter for this configuration
    pub fn sensor_adapter(&self) -> SensorAdapter {
        SensorAdapter::new(self.calibration, self.mount)
    }
}
