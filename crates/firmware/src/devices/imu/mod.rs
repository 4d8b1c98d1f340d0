//! IMU drivers
//!
//! ## Available Drivers
//!
//! - `mpu9250`: MPU-9250 accelerometer/gyroscope with AK8963 magnetometer
//!
//! Drivers implement `haptic_hat_core::traits::ImuSource` directly.

pub mod mpu9250;

pub use mpu9250::{ImuError, Mpu9250Config, Mpu9250Driver};
