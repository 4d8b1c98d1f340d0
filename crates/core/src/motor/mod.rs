//! Vibration motor abstraction
//!
//! The hat carries eight coin vibration motors evenly spaced around the
//! head band. Each motor is driven by one PWM channel whose duty is a
//! 16-bit intensity in `[0, MAX_DUTY]`.
//!
//! # Design
//!
//! This module is pure `no_std` with no feature gates. The PWM bank lives in
//! the firmware crate and implements [`MotorOutput`].

mod ring;

pub use ring::MotorRing;

/// Number of motors on the ring
pub const MOTOR_COUNT: usize = 8;

/// Full-scale duty value used by every response curve (255 * 255)
pub const MAX_DUTY: u16 = 65025;

/// One intensity per motor, recomputed every tick
pub type DutyArray = [u16; MOTOR_COUNT];

/// All motors off
pub const ALL_OFF: DutyArray = [0; MOTOR_COUNT];

/// Actuator write boundary
///
/// Writes are synchronous and unacknowledged. Channels outside
/// `0..MOTOR_COUNT` are ignored by implementations.
pub trait MotorOutput {
    /// Set the duty of a single motor channel
    fn set_motor_duty(&mut self, channel: usize, duty: u16);

    /// Write a full duty array, channel 0 first
    fn write_all(&mut self, duties: &DutyArray) {
        for (channel, duty) in duties.iter().enumerate() {
            self.set_motor_duty(channel, *duty);
        }
    }

    /// Turn every motor off
    fn all_off(&mut self) {
        self.write_all(&ALL_OFF);
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Recording motor bank for host tests
///
/// Keeps the current duty of every channel plus a bounded log of the most
/// recent individual writes.
#[derive(Debug, Clone)]
pub struct MockMotors {
    duties: DutyArray,
    writes: heapless::Vec<(usize, u16), 64>,
    write_count: usize,
}

impl MockMotors {
    /// Create a bank with every motor off and no writes recorded
    pub fn new() -> Self {
        Self {
            duties: ALL_OFF,
            writes: heapless::Vec::new(),
            write_count: 0,
        }
    }

    /// Current duty of every channel
    pub fn duties(&self) -> &DutyArray {
        &self.duties
    }

    /// Total number of writes since creation or the last `clear_writes`
    pub fn write_count(&self) -> usize {
        self.write_count
    }

    /// Most recent writes, oldest first (bounded)
    pub fn writes(&self) -> &[(usize, u16)] {
        &self.writes
    }

    /// Forget recorded writes, keeping current duties
    pub fn clear_writes(&mut self) {
        self.writes.clear();
        self.write_count = 0;
    }

    /// True if every channel is at zero duty
    pub fn is_all_off(&self) -> bool {
        self.duties.iter().all(|d| *d == 0)
    }
}

impl Default for MockMotors {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorOutput for MockMotors {
    fn set_motor_duty(&mut self, channel: usize, duty: u16) {
        if channel >= MOTOR_COUNT {
            return;
        }
        self.duties[channel] = duty;
        self.write_count += 1;
        if self.writes.is_full() {
            self.writes.remove(0);
        }
        // Cannot fail: a slot was freed above
        let _ = self.writes.push((channel, duty));
    }
}
