//! Haptic tick scheduler
//!
//! One synchronous state machine drives the hat:
//!
//! ```text
//! Idle ──start──► Running ──stop signal / shutdown──► ShuttingDown
//! ```
//!
//! Timing is owned by the caller (an embassy `Ticker` on target, a plain
//! loop in tests). Each [`HapticScheduler::tick`] polls the stop signal,
//! reads the active channel, and writes a full duty array.

mod haptic;
mod state;

pub use haptic::{HapticScheduler, TickOutcome};
pub use state::SchedulerState;
