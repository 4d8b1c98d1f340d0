//! Collaborator traits for the haptic pipeline
//!
//! The core never touches hardware. Sensor reads and the stop signal are
//! injected through these traits; motor writes go through
//! [`crate::motor::MotorOutput`].
//!
//! # Design
//!
//! - Trait definitions are pure and have no feature gates
//! - Mock implementations are always available for host testing
//! - Hardware implementations live in the firmware crate

pub mod sensor;
pub mod stop;

pub use sensor::{ImuSource, MockImu, SensorFault};
pub use stop::{MockStop, StopSignal};
