//! Direction-similarity mapping
//!
//! A corrected sensor vector becomes one similarity score per motor
//! ([`similarity`]), and each score becomes a duty value through the active
//! mode's response curve ([`response`]). [`HapticPipeline`] chains sensor
//! correction, similarity and response for a single sample.

mod pipeline;
pub mod response;
pub mod similarity;

pub use pipeline::HapticPipeline;
pub use response::{Response, ResponseCurve};
pub use similarity::{heading_similarity, rate_similarity, tilt_similarity, Similarities};
