//! Haptic loop task
//!
//! Runs the scheduler on a fixed-period `Ticker` until the stop button is
//! pressed.
//!
//! ## Responsibilities
//!
//! - Poll the mode button and switch modes on a press
//! - Tick the scheduler once per period
//! - Log faults (first occurrence at warn, repeats at debug) and recovery
//! - Trace every active motor
//!
//! Returns once the scheduler reports `Stopped`; by then every motor has
//! been written to zero.

use embassy_time::{Duration, Ticker};
use haptic_hat_core::mode::ModeCycle;
use haptic_hat_core::motor::{DutyArray, MotorOutput};
use haptic_hat_core::traits::{ImuSource, StopSignal};
use haptic_hat_core::{HapticScheduler, TickOutcome};

use crate::platform::rp2040::Button;

/// Run the haptic loop until stopped
pub async fn run_haptic_loop<I, M, S>(
    mut scheduler: HapticScheduler,
    mut cycle: ModeCycle,
    imu: &mut I,
    motors: &mut M,
    mode_button: &Button<'_>,
    stop: &mut S,
) where
    I: ImuSource,
    M: MotorOutput,
    S: StopSignal,
{
    if let Err(e) = scheduler.start(motors) {
        crate::log_error!("Haptic loop not started: {}", e);
        return;
    }

    let period_us = scheduler.config().period_us();
    crate::log_info!("Haptic loop started");
    crate::log_info!("  Mode: {}", scheduler.mode().name());
    crate::log_info!("  Rate: {} Hz ({} us)", scheduler.config().tick_hz, period_us);

    let mut ticker = Ticker::every(Duration::from_micros(period_us as u64));
    let mut faulted = false;

    loop {
        if let Some(mode) = cycle.update(mode_button.is_pressed()) {
            if scheduler.set_mode(mode, motors) {
                crate::log_info!("Mode changed: {}", mode.name());
            }
        }

        match scheduler.tick(imu, motors, stop) {
            TickOutcome::Actuated(duties) => {
                if faulted {
                    crate::log_info!("Sensor recovered");
                    faulted = false;
                }
                trace_active(&duties);
            }
            TickOutcome::Fault(fault) => {
                if faulted {
                    crate::log_debug!("Sensor fault: {}", fault.as_str());
                } else {
                    crate::log_warn!(
                        "Sensor fault in {} mode: {}; motors off",
                        scheduler.mode().name(),
                        fault.as_str()
                    );
                    faulted = true;
                }
            }
            TickOutcome::Stopped => {
                crate::log_info!(
                    "Stop requested after {} ticks; motors off",
                    scheduler.ticks()
                );
                return;
            }
            TickOutcome::Idle => {}
        }

        ticker.next().await;
    }
}

fn trace_active(duties: &DutyArray) {
    for (motor, duty) in duties.iter().enumerate() {
        if *duty > 0 {
            crate::log_trace!("motor {} duty {}", motor, *duty);
        }
    }
}
