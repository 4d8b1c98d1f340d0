//! Eight-channel PWM motor bank
//!
//! Motor `i` is GPIO `i`, which the RP2040 routes to PWM slice `i / 2`,
//! channel A for even and B for odd motors. Slices run at
//! [`PWM_CARRIER_HZ`] with divider 1; a slice's config holds both compare
//! values so it is cached and rewritten whole on every change.

use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use haptic_hat_core::motor::{MotorOutput, MOTOR_COUNT};

use crate::platform::{pwm_compare, pwm_top, PWM_CARRIER_HZ};

const SLICE_COUNT: usize = MOTOR_COUNT / 2;

/// PWM slices 0-3 driving GPIO 0-7
pub struct MotorBank<'d> {
    slices: [Pwm<'d>; SLICE_COUNT],
    configs: [PwmConfig; SLICE_COUNT],
    top: u16,
}

impl<'d> MotorBank<'d> {
    /// Take ownership of the four slices and start every motor at zero
    ///
    /// `slices[n]` must be slice `n` created with `Pwm::new_output_ab` on
    /// GPIO `2n` and `2n + 1`.
    pub fn new(slices: [Pwm<'d>; SLICE_COUNT]) -> Self {
        let top = pwm_top(embassy_rp::clocks::clk_sys_freq(), PWM_CARRIER_HZ);

        let mut config = PwmConfig::default();
        config.top = top;
        config.compare_a = 0;
        config.compare_b = 0;

        let mut bank = Self {
            slices,
            configs: [config.clone(), config.clone(), config.clone(), config],
            top,
        };
        for (slice, config) in bank.slices.iter_mut().zip(bank.configs.iter()) {
            slice.set_config(config);
        }

        crate::log_info!("Motor PWM: {} Hz carrier, top {}", PWM_CARRIER_HZ, top);
        bank
    }

    /// Counter wrap value in use
    pub fn top(&self) -> u16 {
        self.top
    }
}

impl MotorOutput for MotorBank<'_> {
    fn set_motor_duty(&mut self, channel: usize, duty: u16) {
        if channel >= MOTOR_COUNT {
            return;
        }

        let slice = channel / 2;
        let compare = pwm_compare(duty, self.top);
        let config = &mut self.configs[slice];
        if channel % 2 == 0 {
            config.compare_a = compare;
        } else {
            config.compare_b = compare;
        }
        self.slices[slice].set_config(config);
    }
}
