//! Hat operating modes
//!
//! Each mode reads one sensor channel and carries its own response. Modes
//! are a closed set; an unrecognized mode is rejected while parsing
//! configuration and never reaches the tick loop.

mod cycle;
mod hat;

pub use cycle::{ButtonEdge, ModeCycle};
pub use hat::{HatMode, MODE_COUNT};

pub use crate::sensor::SensorChannel;
