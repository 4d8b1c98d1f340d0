//! Push buttons
//!
//! Both buttons are wired to 3V3 with the internal pull-down enabled, so a
//! press reads high.

use embassy_rp::gpio::Input;
use haptic_hat_core::traits::StopSignal;

/// Active-high push button
pub struct Button<'d> {
    input: Input<'d>,
}

impl<'d> Button<'d> {
    /// Wrap an input configured with `Pull::Down`
    pub fn new(input: Input<'d>) -> Self {
        Self { input }
    }

    /// Current level
    pub fn is_pressed(&self) -> bool {
        self.input.is_high()
    }
}

/// Used as the stop button: held means stop
impl StopSignal for Button<'_> {
    fn stop_requested(&mut self) -> bool {
        self.is_pressed()
    }
}
