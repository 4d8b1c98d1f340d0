//! RP2040 bindings (Raspberry Pi Pico)

mod buttons;
mod pwm;

pub use buttons::Button;
pub use pwm::MotorBank;
