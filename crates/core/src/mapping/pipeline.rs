//! Sample-to-duty pipeline
//!
//! ```text
//! raw ──► SensorAdapter ──► similarity (per mode) ──► Response ──► DutyArray
//! ```

use nalgebra::Vector3;

use super::response::Response;
use super::similarity::{heading_similarity, rate_similarity, tilt_similarity, Similarities};
use crate::config::HatConfig;
use crate::mode::HatMode;
use crate::motor::{DutyArray, MotorRing, ALL_OFF, MOTOR_COUNT};
use crate::sensor::SensorAdapter;
use crate::traits::SensorFault;

/// Immutable mapping context shared by every tick
#[derive(Debug, Clone, Copy)]
pub struct HapticPipeline {
    adapter: SensorAdapter,
    ring: MotorRing,
}

impl HapticPipeline {
    /// Create a pipeline from its parts
    pub fn new(adapter: SensorAdapter, ring: MotorRing) -> Self {
        Self { adapter, ring }
    }

    /// Build the adapter and ring described by `config`
    pub fn from_config(config: &HatConfig) -> Self {
        Self::new(config.sensor_adapter(), config.motor_ring())
    }

    /// Motor direction table
    pub fn ring(&self) -> &MotorRing {
        &self.ring
    }

    /// Duties for one raw sample read from `mode`'s channel
    ///
    /// Noop ignores `raw` and yields all zeros.
    ///
    /// # Errors
    ///
    /// Any [`SensorFault`] from correction or normalization, or
    /// [`SensorFault::InvalidData`] if a similarity score is not finite. No
    /// partial duty array is ever returned.
    pub fn evaluate(&self, mode: &HatMode, raw: Vector3<f32>) -> Result<DutyArray, SensorFault> {
        let (channel, response) = match (mode.channel(), mode.response()) {
            (Some(channel), Some(response)) => (channel, response),
            _ => return Ok(ALL_OFF),
        };

        let corrected = self.adapter.correct(channel, raw)?;
        let scores = self.similarities(mode, &corrected)?;
        if !scores.iter().all(|s| s.is_finite()) {
            return Err(SensorFault::InvalidData);
        }
        Ok(shape(&scores, response))
    }

    /// Similarity scores for an already corrected vector
    pub fn similarities(
        &self,
        mode: &HatMode,
        corrected: &Vector3<f32>,
    ) -> Result<Similarities, SensorFault> {
        match mode {
            HatMode::Heading(_) => heading_similarity(corrected, &self.ring),
            HatMode::Tilt(_) => tilt_similarity(corrected, &self.ring),
            HatMode::Rate(_) => Ok(rate_similarity(corrected, &self.ring)),
            HatMode::Noop => Ok([0.0; MOTOR_COUNT]),
        }
    }
}

fn shape(scores: &Similarities, response: &Response) -> DutyArray {
    let mut duties = ALL_OFF;
    for (duty, score) in duties.iter_mut().zip(scores) {
        *duty = response.intensity(*score);
    }
    duties
}
