//! Device drivers
//!
//! Drivers are blocking and generic over `embedded-hal` 1.0 traits so they
//! can be exercised on the host against mock buses.

pub mod imu;
