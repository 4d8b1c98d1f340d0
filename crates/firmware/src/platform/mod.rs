//! Platform layer
//!
//! Pin assignments and PWM arithmetic are plain constants and functions so
//! they can be checked on the host. Everything that touches embassy-rp lives
//! in [`rp2040`] behind the `pico` feature.

#[cfg(feature = "pico")]
pub mod rp2040;

use haptic_hat_core::motor::MAX_DUTY;

/// Motor PWM carrier frequency (Hz)
pub const PWM_CARRIER_HZ: u32 = 4096;

/// I2C bus speed for the IMU (Hz)
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

// Pin map (Raspberry Pi Pico)
//
// | Function    | GPIO        |
// |-------------|-------------|
// | Motors 0-7  | 0-7         |
// | I2C0 SDA    | 16          |
// | I2C0 SCL    | 17          |
// | Mode button | 18          |
// | Stop button | 19          |

/// PWM counter wrap value for `carrier_hz` at `clk_sys_hz` with divider 1
///
/// Saturates at `u16::MAX` when the carrier is too slow for an undivided
/// counter, and at 1 when it is faster than the clock allows.
pub fn pwm_top(clk_sys_hz: u32, carrier_hz: u32) -> u16 {
    let counts = clk_sys_hz / carrier_hz.max(1);
    counts.saturating_sub(1).clamp(1, u16::MAX as u32) as u16
}

/// Compare value for a 16-bit duty on a counter wrapping at `top`
///
/// `duty` is a fraction of 65536, so `MAX_DUTY` drives the pin for
/// 65025/65536 of the period.
pub fn pwm_compare(duty: u16, top: u16) -> u16 {
    let period = top as u32 + 1;
    let duty = duty.min(MAX_DUTY) as u32;
    ((duty * period) >> 16) as u16
}
