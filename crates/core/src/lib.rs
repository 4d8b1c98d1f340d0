//! haptic_hat_core - Pure no_std sensor-to-vibration mapping for the haptic hat
//!
//! This crate turns one 3-axis sensor sample per tick into duty values for
//! eight vibration motors arranged around a head band. It contains every
//! algorithm of the hat and can be tested on host without any feature flags
//! or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies, no allocation
//! - **Trait abstractions**: Sensors, motors and the stop signal injected via traits
//! - **No logging**: Outcomes are returned; the firmware crate logs them
//!
//! # Modules
//!
//! - [`math`]: Axis rotation, cross product, normalization
//! - [`sensor`]: Magnetometer calibration and mount correction
//! - [`motor`]: Motor output trait, duty array, motor direction ring
//! - [`mapping`]: Similarity mapping, response curves, sample pipeline
//! - [`mode`]: Hat modes and button-driven mode cycling
//! - [`config`]: Startup configuration, defaults and validation
//! - [`scheduler`]: Tick state machine
//! - [`traits`]: Sensor and stop-signal traits with host mocks

#![no_std]

pub mod config;
pub mod mapping;
pub mod math;
pub mod mode;
pub mod motor;
pub mod scheduler;
pub mod sensor;
pub mod traits;

pub use config::{ConfigError, HatConfig};
pub use mode::HatMode;
pub use scheduler::{HapticScheduler, SchedulerState, TickOutcome};
