//! Haptic scheduler implementation

use crate::config::{ConfigError, HatConfig};
use crate::mapping::HapticPipeline;
use crate::mode::HatMode;
use crate::motor::{DutyArray, MotorOutput, ALL_OFF};
use crate::traits::{ImuSource, SensorFault, StopSignal};

use super::state::SchedulerState;

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Duties written to every motor
    Actuated(DutyArray),
    /// Sensor read or mapping failed; every motor was set to zero
    Fault(SensorFault),
    /// Stop observed (now or earlier); every motor is off
    Stopped,
    /// Not started; nothing was read or written
    Idle,
}

/// Owns the mapping context and the active mode
///
/// Built once from a validated [`HatConfig`]; sensor and motor handles are
/// passed into each call rather than stored.
#[derive(Debug, Clone)]
pub struct HapticScheduler {
    config: HatConfig,
    pipeline: HapticPipeline,
    mode: HatMode,
    state: SchedulerState,
    ticks: u32,
}

impl HapticScheduler {
    /// Create a scheduler in [`SchedulerState::Idle`]
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`HatConfig::validate`].
    pub fn new(config: HatConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            pipeline: HapticPipeline::from_config(&config),
            mode: config.mode,
            config,
            state: SchedulerState::Idle,
            ticks: 0,
        })
    }

    /// Enter `Running` once sensor and motor handles are initialized
    ///
    /// Motors are zeroed first so the first tick starts from a known state.
    pub fn start<M: MotorOutput + ?Sized>(&mut self, motors: &mut M) -> Result<(), &'static str> {
        match self.state {
            SchedulerState::Idle => {
                motors.all_off();
                self.state = SchedulerState::Running;
                Ok(())
            }
            SchedulerState::Running => Err("scheduler already running"),
            SchedulerState::ShuttingDown => Err("scheduler shut down"),
        }
    }

    /// Run one tick
    ///
    /// The stop signal is polled first; once it reports true the motors are
    /// zeroed and no sensor is read on this or any later tick.
    pub fn tick<I, M, S>(&mut self, imu: &mut I, motors: &mut M, stop: &mut S) -> TickOutcome
    where
        I: ImuSource + ?Sized,
        M: MotorOutput + ?Sized,
        S: StopSignal + ?Sized,
    {
        match self.state {
            SchedulerState::Idle => return TickOutcome::Idle,
            SchedulerState::ShuttingDown => return TickOutcome::Stopped,
            SchedulerState::Running => {}
        }

        if stop.stop_requested() {
            self.shutdown(motors);
            return TickOutcome::Stopped;
        }

        self.ticks = self.ticks.wrapping_add(1);

        let duties = match self.mode.channel() {
            None => Ok(ALL_OFF),
            Some(channel) => channel
                .read(imu)
                .and_then(|raw| self.pipeline.evaluate(&self.mode, raw)),
        };

        match duties {
            Ok(duties) => {
                motors.write_all(&duties);
                TickOutcome::Actuated(duties)
            }
            Err(fault) => {
                motors.all_off();
                TickOutcome::Fault(fault)
            }
        }
    }

    /// Zero every motor and enter `ShuttingDown`
    pub fn shutdown<M: MotorOutput + ?Sized>(&mut self, motors: &mut M) {
        motors.all_off();
        self.state = SchedulerState::ShuttingDown;
    }

    /// Switch the active mode
    ///
    /// Motors are zeroed when the mode actually changes. Returns whether it
    /// changed.
    pub fn set_mode<M: MotorOutput + ?Sized>(&mut self, mode: HatMode, motors: &mut M) -> bool {
        if mode == self.mode {
            return false;
        }
        motors.all_off();
        self.mode = mode;
        true
    }

    /// Active mode
    pub fn mode(&self) -> &HatMode {
        &self.mode
    }

    /// Lifecycle state
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Validated startup configuration
    pub fn config(&self) -> &HatConfig {
        &self.config
    }

    /// Ticks run while `Running` (wraps)
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motor::MockMotors;
    use crate::traits::{MockImu, MockStop};

    fn running(mode: HatMode) -> (HapticScheduler, MockMotors) {
        let mut scheduler = HapticScheduler::new(HatConfig::with_mode(mode)).unwrap();
        let mut motors = MockMotors::new();
        scheduler.start(&mut motors).unwrap();
        motors.clear_writes();
        (scheduler, motors)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = HatConfig {
            tick_hz: 0,
            ..HatConfig::default()
        };
        assert_eq!(
            HapticScheduler::new(config).err(),
            Some(ConfigError::InvalidTickRate)
        );
    }

    #[test]
    fn test_idle_tick_does_nothing() {
        let mut scheduler = HapticScheduler::new(HatConfig::default()).unwrap();
        let mut imu = MockImu::new();
        let mut motors = MockMotors::new();
        let mut stop = MockStop::never();

        assert_eq!(scheduler.tick(&mut imu, &mut motors, &mut stop), TickOutcome::Idle);
        assert_eq!(imu.reads(), 0);
        assert_eq!(motors.write_count(), 0);
        assert_eq!(stop.polls(), 0);
    }

    #[test]
    fn test_start_transitions() {
        let mut scheduler = HapticScheduler::new(HatConfig::default()).unwrap();
        let mut motors = MockMotors::new();

        assert_eq!(scheduler.state(), SchedulerState::Idle);
        assert!(scheduler.start(&mut motors).is_ok());
        assert_eq!(scheduler.state(), SchedulerState::Running);
        assert!(motors.is_all_off());
        assert!(scheduler.start(&mut motors).is_err());

        scheduler.shutdown(&mut motors);
        assert!(scheduler.start(&mut motors).is_err());
    }

    #[test]
    fn test_tick_writes_all_channels() {
        let (mut scheduler, mut motors) = running(HatMode::tilt());
        let mut imu = MockImu::new();
        let mut stop = MockStop::never();

        let outcome = scheduler.tick(&mut imu, &mut motors, &mut stop);

        assert!(matches!(outcome, TickOutcome::Actuated(_)));
        assert_eq!(motors.write_count(), 8);
        assert_eq!(imu.reads(), 1);
        assert_eq!(scheduler.ticks(), 1);
    }

    #[test]
    fn test_noop_reads_nothing() {
        let (mut scheduler, mut motors) = running(HatMode::Noop);
        let mut imu = MockImu::new();
        let mut stop = MockStop::never();

        let outcome = scheduler.tick(&mut imu, &mut motors, &mut stop);

        assert_eq!(outcome, TickOutcome::Actuated(ALL_OFF));
        assert_eq!(imu.reads(), 0);
        assert!(motors.is_all_off());
    }

    #[test]
    fn test_fault_zeroes_motors() {
        let (mut scheduler, mut motors) = running(HatMode::tilt());
        let mut imu = MockImu::new();
        let mut stop = MockStop::never();

        scheduler.tick(&mut imu, &mut motors, &mut stop);
        assert!(!motors.is_all_off());

        imu.set_acceleration(Err(SensorFault::Bus));
        let outcome = scheduler.tick(&mut imu, &mut motors, &mut stop);

        assert_eq!(outcome, TickOutcome::Fault(SensorFault::Bus));
        assert!(motors.is_all_off());
        assert_eq!(scheduler.state(), SchedulerState::Running);
    }

    #[test]
    fn test_stop_is_terminal() {
        let (mut scheduler, mut motors) = running(HatMode::tilt());
        let mut imu = MockImu::new();
        let mut stop = MockStop::after(1);

        scheduler.tick(&mut imu, &mut motors, &mut stop);
        assert_eq!(imu.reads(), 1);

        assert_eq!(scheduler.tick(&mut imu, &mut motors, &mut stop), TickOutcome::Stopped);
        assert_eq!(scheduler.state(), SchedulerState::ShuttingDown);
        assert!(motors.is_all_off());

        assert_eq!(scheduler.tick(&mut imu, &mut motors, &mut stop), TickOutcome::Stopped);
        assert_eq!(imu.reads(), 1);
    }

    #[test]
    fn test_set_mode_zeroes_on_change() {
        let (mut scheduler, mut motors) = running(HatMode::tilt());
        let mut imu = MockImu::new();
        let mut stop = MockStop::never();
        scheduler.tick(&mut imu, &mut motors, &mut stop);
        motors.clear_writes();

        assert!(!scheduler.set_mode(HatMode::tilt(), &mut motors));
        assert_eq!(motors.write_count(), 0);

        assert!(scheduler.set_mode(HatMode::rate(), &mut motors));
        assert!(motors.is_all_off());
        assert_eq!(scheduler.mode().name(), "rate");
    }
}
