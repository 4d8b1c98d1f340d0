//! Haptic loop
//!
//! Ties the core scheduler to embassy timing and the physical buttons.

mod runner;

pub use runner::run_haptic_loop;
