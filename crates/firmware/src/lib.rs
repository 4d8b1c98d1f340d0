#![cfg_attr(not(test), no_std)]

//! haptic_hat_firmware - Embassy firmware for the haptic direction hat
//!
//! This crate binds `haptic_hat_core` to the RP2040: the MPU-9250 sensor,
//! the eight-channel PWM motor bank, the mode and stop buttons, and the
//! ticker-driven haptic loop.
//!
//! # Design Principles
//!
//! - **Host-testable drivers**: Device drivers are generic over `embedded-hal`
//!   traits and tested against mock buses
//! - **Platform isolation**: Everything that touches embassy-rp sits behind
//!   the `pico` feature
//! - **Build-time tunables**: Mode and thresholds captured by `build.rs`

// Logging macros and firmware-side infrastructure
pub mod core;

// Device drivers (MPU-9250)
pub mod devices;

// Build-time parameters parsed into a HatConfig
pub mod parameters;

// RP2040 bindings (PWM motors, buttons)
pub mod platform;

// Haptic loop task
#[cfg(feature = "pico")]
pub mod hat;

// Note: Logging macros (log_info!, log_warn!, log_error!, log_debug!, log_trace!)
// are exported at crate root via #[macro_export] in core::logging
