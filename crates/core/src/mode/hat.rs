//! Mode definition and parsing
//!
//! Selector numbering follows the hat's historical mode order:
//!
//! | Selector | Mode    | Channel       | Default response |
//! |----------|---------|---------------|------------------|
//! | 0        | Rate    | angular rate  | sqrt, 0.3        |
//! | 1        | Tilt    | acceleration  | sqrt, 0.25       |
//! | 2        | Heading | magnetic      | linear, 0.8      |
//! | 3        | Noop    | none          | n/a              |

use crate::config::{ConfigError, HEADING_THRESHOLD, RATE_THRESHOLD, TILT_THRESHOLD};
use crate::mapping::Response;
use crate::sensor::SensorChannel;

/// Number of selectable modes
pub const MODE_COUNT: usize = 4;

/// Active hat mode with its response configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HatMode {
    /// Magnetic heading
    Heading(Response),
    /// Gravity tilt
    Tilt(Response),
    /// Angular rate
    Rate(Response),
    /// All motors off
    Noop,
}

impl HatMode {
    /// Heading mode with the default response
    pub const fn heading() -> Self {
        HatMode::Heading(Response::linear(HEADING_THRESHOLD))
    }

    /// Tilt mode with the default response
    pub const fn tilt() -> Self {
        HatMode::Tilt(Response::sqrt(TILT_THRESHOLD))
    }

    /// Rate mode with the default response
    pub const fn rate() -> Self {
        HatMode::Rate(Response::sqrt(RATE_THRESHOLD))
    }

    /// Sensor channel read each tick, `None` for Noop
    pub fn channel(&self) -> Option<SensorChannel> {
        match self {
            HatMode::Heading(_) => Some(SensorChannel::Magnetic),
            HatMode::Tilt(_) => Some(SensorChannel::Acceleration),
            HatMode::Rate(_) => Some(SensorChannel::AngularRate),
            HatMode::Noop => None,
        }
    }

    /// Response configuration, `None` for Noop
    pub fn response(&self) -> Option<&Response> {
        match self {
            HatMode::Heading(r) | HatMode::Tilt(r) | HatMode::Rate(r) => Some(r),
            HatMode::Noop => None,
        }
    }

    /// Mode name for logging
    pub fn name(&self) -> &'static str {
        match self {
            HatMode::Heading(_) => "heading",
            HatMode::Tilt(_) => "tilt",
            HatMode::Rate(_) => "rate",
            HatMode::Noop => "noop",
        }
    }

    /// Selector number of this mode
    pub fn selector(&self) -> u8 {
        match self {
            HatMode::Rate(_) => 0,
            HatMode::Tilt(_) => 1,
            HatMode::Heading(_) => 2,
            HatMode::Noop => 3,
        }
    }

    /// Mode for a selector number, with its default response
    pub fn from_selector(selector: u8) -> Result<Self, ConfigError> {
        match selector {
            0 => Ok(Self::rate()),
            1 => Ok(Self::tilt()),
            2 => Ok(Self::heading()),
            3 => Ok(HatMode::Noop),
            _ => Err(ConfigError::UnknownMode),
        }
    }

    /// Mode for a name or selector string, with its default response
    ///
    /// Accepts `heading`/`compass`, `tilt`/`accel`, `rate`/`gyro`, `noop`
    /// or a single selector digit. Surrounding whitespace is ignored.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.trim() {
            "heading" | "compass" => Ok(Self::heading()),
            "tilt" | "accel" => Ok(Self::tilt()),
            "rate" | "gyro" => Ok(Self::rate()),
            "noop" => Ok(HatMode::Noop),
            other => other
                .parse::<u8>()
                .map_err(|_| ConfigError::UnknownMode)
                .and_then(Self::from_selector),
        }
    }

    /// Same mode with a different response; Noop is returned unchanged
    pub fn with_response(self, response: Response) -> Self {
        match self {
            HatMode::Heading(_) => HatMode::Heading(response),
            HatMode::Tilt(_) => HatMode::Tilt(response),
            HatMode::Rate(_) => HatMode::Rate(response),
            HatMode::Noop => HatMode::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::ResponseCurve;

    #[test]
    fn test_default_responses() {
        let heading = HatMode::heading();
        assert_eq!(heading.response().unwrap().curve, ResponseCurve::Linear);
        assert_eq!(heading.response().unwrap().threshold, 0.8);

        assert_eq!(HatMode::tilt().response().unwrap().curve, ResponseCurve::SqrtCompressed);
        assert_eq!(HatMode::rate().response().unwrap().threshold, 0.3);
        assert!(HatMode::Noop.response().is_none());
    }

    #[test]
    fn test_channels() {
        assert_eq!(HatMode::heading().channel(), Some(SensorChannel::Magnetic));
        assert_eq!(HatMode::tilt().channel(), Some(SensorChannel::Acceleration));
        assert_eq!(HatMode::rate().channel(), Some(SensorChannel::AngularRate));
        assert_eq!(HatMode::Noop.channel(), None);
    }

    #[test]
    fn test_selector_round_trip() {
        for selector in 0..MODE_COUNT as u8 {
            let mode = HatMode::from_selector(selector).unwrap();
            assert_eq!(mode.selector(), selector);
        }
        assert_eq!(HatMode::from_selector(4), Err(ConfigError::UnknownMode));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(HatMode::from_name("heading"), Ok(HatMode::heading()));
        assert_eq!(HatMode::from_name(" gyro "), Ok(HatMode::rate()));
        assert_eq!(HatMode::from_name("accel"), Ok(HatMode::tilt()));
        assert_eq!(HatMode::from_name("3"), Ok(HatMode::Noop));
        assert_eq!(HatMode::from_name("2"), Ok(HatMode::heading()));
        assert_eq!(HatMode::from_name("sonar"), Err(ConfigError::UnknownMode));
        assert_eq!(HatMode::from_name("7"), Err(ConfigError::UnknownMode));
        assert_eq!(HatMode::from_name(""), Err(ConfigError::UnknownMode));
    }

    #[test]
    fn test_with_response() {
        let mode = HatMode::heading().with_response(Response::linear(0.9));
        assert_eq!(mode, HatMode::Heading(Response::linear(0.9)));
        assert_eq!(HatMode::Noop.with_response(Response::linear(0.9)), HatMode::Noop);
    }
}
