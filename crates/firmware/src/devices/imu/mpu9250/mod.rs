//! MPU-9250 9-Axis IMU Driver
//!
//! I2C driver for the InvenSense MPU-9250 IMU with integrated AK8963 magnetometer.
//!
//! ## Features
//!
//! - 3-axis gyroscope: ±250, ±500, ±1000, ±2000 °/s, reported in rad/s
//! - 3-axis accelerometer: ±2, ±4, ±8, ±16 g, reported in m/s²
//! - 3-axis magnetometer (AK8963): ±4912 µT, 16-bit, 100 Hz continuous
//! - I2C @ 400kHz, AK8963 reached through the MPU-9250 bypass mux
//!
//! ## Usage
//!
//! ```ignore
//! use haptic_hat_firmware::devices::imu::{Mpu9250Config, Mpu9250Driver};
//! use haptic_hat_core::traits::ImuSource;
//!
//! let mut imu = Mpu9250Driver::new(i2c, &mut delay, Mpu9250Config::default())?;
//! let gravity = imu.read_acceleration()?;
//! ```

mod config;
mod driver;
mod registers;

pub use config::{AccelRange, DlpfConfig, GyroRange, Mpu9250Config};
pub use driver::{ImuError, Mpu9250Driver};
