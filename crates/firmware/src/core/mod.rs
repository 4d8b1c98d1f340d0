//! Firmware-side infrastructure
//!
//! Only logging lives here; every algorithm is in `haptic_hat_core`.

pub mod logging;
