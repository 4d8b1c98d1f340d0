//! Build-time parameters
//!
//! The hat has no persistent storage and no runtime parameter protocol. Its
//! tunables are captured from `HAT_*` environment variables by `build.rs`
//! and parsed into a validated [`HatConfig`] at startup.
//!
//! | Variable                | Default   | Meaning                              |
//! |-------------------------|-----------|--------------------------------------|
//! | `HAT_MODE`              | `heading` | Startup mode (name or selector 0-3)  |
//! | `HAT_TICK_HZ`           | `60`      | Tick rate                            |
//! | `HAT_HEADING_THRESHOLD` | `0.8`     | Heading threshold (linear curve)     |
//! | `HAT_RATE_THRESHOLD`    | `0.3`     | Rate threshold (sqrt curve)          |

use haptic_hat_core::config::{ConfigError, HatConfig};
use haptic_hat_core::mapping::Response;
use haptic_hat_core::mode::{HatMode, MODE_COUNT};

/// Raw tunable strings
#[derive(Debug, Clone, Copy)]
pub struct BuildParameters<'a> {
    pub mode: &'a str,
    pub tick_hz: &'a str,
    pub heading_threshold: &'a str,
    pub rate_threshold: &'a str,
}

impl BuildParameters<'static> {
    /// Values captured by `build.rs`
    pub const fn from_build_env() -> Self {
        Self {
            mode: env!("HAT_MODE"),
            tick_hz: env!("HAT_TICK_HZ"),
            heading_threshold: env!("HAT_HEADING_THRESHOLD"),
            rate_threshold: env!("HAT_RATE_THRESHOLD"),
        }
    }
}

impl BuildParameters<'_> {
    /// Every mode with its configured response, in selector order
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidNumber`] if a threshold does not parse.
    pub fn modes(&self) -> Result<[HatMode; MODE_COUNT], ConfigError> {
        let heading = parse_f32(self.heading_threshold)?;
        let rate = parse_f32(self.rate_threshold)?;

        Ok([
            HatMode::Rate(Response::sqrt(rate)),
            HatMode::tilt(),
            HatMode::Heading(Response::linear(heading)),
            HatMode::Noop,
        ])
    }

    /// Startup configuration
    ///
    /// # Errors
    ///
    /// Any parse failure or [`HatConfig::validate`] rejection.
    pub fn to_config(&self) -> Result<HatConfig, ConfigError> {
        let selected = HatMode::from_name(self.mode)?;
        let modes = self.modes()?;
        let tick_hz = self
            .tick_hz
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidNumber)?;

        let config = HatConfig {
            mode: modes[selected.selector() as usize],
            tick_hz,
            ..HatConfig::default()
        };
        config.validate()?;

        // Modes other than the startup one are reachable through the mode
        // button and must be valid too
        for mode in modes {
            HatConfig { mode, ..config }.validate()?;
        }

        Ok(config)
    }
}

fn parse_f32(value: &str) -> Result<f32, ConfigError> {
    value
        .trim()
        .parse::<f32>()
        .map_err(|_| ConfigError::InvalidNumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use haptic_hat_core::mapping::ResponseCurve;

    fn params(mode: &'static str) -> BuildParameters<'static> {
        BuildParameters {
            mode,
            tick_hz: "60",
            heading_threshold: "0.8",
            rate_threshold: "0.3",
        }
    }

    #[test]
    fn test_defaults_match_core_defaults() {
        let config = params("heading").to_config().unwrap();
        assert_eq!(config, HatConfig::default());
    }

    #[test]
    fn test_build_env_is_valid() {
        assert!(BuildParameters::from_build_env().to_config().is_ok());
    }

    #[test]
    fn test_selector_and_threshold() {
        let config = BuildParameters {
            rate_threshold: " 0.5 ",
            ..params("0")
        }
        .to_config()
        .unwrap();

        let response = config.mode.response().unwrap();
        assert_eq!(config.mode.name(), "rate");
        assert_eq!(response.curve, ResponseCurve::SqrtCompressed);
        assert!((response.threshold - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_noop_by_name() {
        let config = params("noop").to_config().unwrap();
        assert_eq!(config.mode, HatMode::Noop);
    }

    #[test]
    fn test_unknown_mode() {
        assert_eq!(params("magnet").to_config(), Err(ConfigError::UnknownMode));
        assert_eq!(params("4").to_config(), Err(ConfigError::UnknownMode));
    }

    #[test]
    fn test_bad_numbers() {
        let bad_tick = BuildParameters {
            tick_hz: "sixty",
            ..params("tilt")
        };
        assert_eq!(bad_tick.to_config(), Err(ConfigError::InvalidNumber));

        let bad_threshold = BuildParameters {
            heading_threshold: "0,8",
            ..params("tilt")
        };
        assert_eq!(bad_threshold.to_config(), Err(ConfigError::InvalidNumber));
    }

    #[test]
    fn test_unreachable_mode_still_validated() {
        // Heading is not the startup mode but the button can select it
        let params = BuildParameters {
            heading_threshold: "1.0",
            ..params("tilt")
        };
        assert_eq!(params.to_config(), Err(ConfigError::InvalidThreshold));
    }

    #[test]
    fn test_tick_rate_out_of_range() {
        let params = BuildParameters {
            tick_hz: "0",
            ..params("tilt")
        };
        assert_eq!(params.to_config(), Err(ConfigError::InvalidTickRate));
    }

    #[test]
    fn test_modes_in_selector_order() {
        let modes = params("tilt").modes().unwrap();
        for (selector, mode) in modes.iter().enumerate() {
            assert_eq!(mode.selector() as usize, selector);
        }
    }
}
