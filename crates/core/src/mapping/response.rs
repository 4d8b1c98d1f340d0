//! Response curves
//!
//! A score at or below the threshold is a hard zero. Above it the excess is
//! shaped into `[0, 1]` and scaled to [`MAX_DUTY`].
//!
//! | Curve            | Shape                               |
//! |------------------|-------------------------------------|
//! | `Linear`         | `(s - t) / (1 - t)`                 |
//! | `SqrtCompressed` | `0.5 + 0.5 * sqrt(s - t)`           |

use libm::sqrtf;

use crate::motor::MAX_DUTY;

/// Shaping applied above the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCurve {
    /// Linear rescale of `(threshold, 1]` onto `(0, 1]`
    Linear,
    /// Square-root response starting at half intensity
    SqrtCompressed,
}

impl ResponseCurve {
    /// Curve name for logging
    pub fn name(&self) -> &'static str {
        match self {
            ResponseCurve::Linear => "linear",
            ResponseCurve::SqrtCompressed => "sqrt",
        }
    }
}

/// Threshold plus curve for one mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Response {
    /// Exclusive cutoff; scores `<= threshold` produce zero duty
    pub threshold: f32,
    /// Shaping above the cutoff
    pub curve: ResponseCurve,
}

impl Response {
    /// Linear response with the given threshold
    pub const fn linear(threshold: f32) -> Self {
        Self {
            threshold,
            curve: ResponseCurve::Linear,
        }
    }

    /// Square-root response with the given threshold
    pub const fn sqrt(threshold: f32) -> Self {
        Self {
            threshold,
            curve: ResponseCurve::SqrtCompressed,
        }
    }

    /// Duty for a similarity score
    ///
    /// Never returns a value derived from NaN: a NaN score fails the
    /// threshold comparison and yields zero.
    pub fn intensity(&self, similarity: f32) -> u16 {
        if similarity.is_nan() || similarity <= self.threshold {
            return 0;
        }

        let excess = similarity - self.threshold;
        let level = match self.curve {
            ResponseCurve::Linear => excess / (1.0 - self.threshold),
            ResponseCurve::SqrtCompressed => 0.5 + 0.5 * sqrtf(excess),
        };

        if !level.is_finite() {
            return 0;
        }

        // Float to int cast truncates
        (level.clamp(0.0, 1.0) * MAX_DUTY as f32) as u16
    }

    /// Threshold finite, and below 1 for the linear curve
    pub fn is_valid(&self) -> bool {
        match self.curve {
            ResponseCurve::Linear => self.threshold.is_finite() && self.threshold < 1.0,
            ResponseCurve::SqrtCompressed => self.threshold.is_finite(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(Response::linear(0.8).intensity(0.8), 0);
        assert_eq!(Response::sqrt(0.25).intensity(0.25), 0);
        assert_eq!(Response::sqrt(0.3).intensity(-1.0), 0);
    }

    #[test]
    fn test_linear_saturates_at_one() {
        assert_eq!(Response::linear(0.25).intensity(1.0), MAX_DUTY);
        assert_eq!(Response::linear(0.25).intensity(5.0), MAX_DUTY);
    }

    #[test]
    fn test_linear_midpoint() {
        // (0.625 - 0.25) / 0.75 = 0.5
        let duty = Response::linear(0.25).intensity(0.625);
        assert!((duty as i32 - 32512).abs() <= 1);
    }

    #[test]
    fn test_sqrt_starts_at_half() {
        let duty = Response::sqrt(0.25).intensity(0.25 + 1e-6);
        assert!((duty as i32 - 32512).abs() <= 40);
    }

    #[test]
    fn test_sqrt_quarter_excess() {
        // 0.5 + 0.5 * sqrt(0.25) = 0.75
        let duty = Response::sqrt(0.25).intensity(0.5);
        assert!((duty as i32 - 48768).abs() <= 1);
    }

    #[test]
    fn test_sqrt_saturates() {
        assert_eq!(Response::sqrt(0.3).intensity(4.0), MAX_DUTY);
    }

    #[test]
    fn test_nan_is_zero() {
        assert_eq!(Response::linear(0.8).intensity(f32::NAN), 0);
        assert_eq!(Response::sqrt(0.3).intensity(f32::NAN), 0);
    }

    #[test]
    fn test_is_valid() {
        assert!(Response::linear(0.8).is_valid());
        assert!(!Response::linear(1.0).is_valid());
        assert!(Response::sqrt(1.5).is_valid());
        assert!(!Response::sqrt(f32::NAN).is_valid());
    }
}
