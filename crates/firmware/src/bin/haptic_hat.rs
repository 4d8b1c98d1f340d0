//! Haptic hat firmware entry point
//!
//! # Hardware
//! - Raspberry Pi Pico (RP2040)
//! - MPU-9250 on I2C0: SDA GPIO 16, SCL GPIO 17
//! - Vibration motors on GPIO 0-7
//! - Mode button GPIO 18, stop button GPIO 19 (active high)
//!
//! # Usage
//! ```bash
//! HAT_MODE=tilt cargo run --release -p haptic_hat_firmware --features pico --target thumbv6m-none-eabi
//! ```

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Delay;
use haptic_hat_core::config::ConfigError;
use haptic_hat_core::mode::ModeCycle;
use haptic_hat_core::motor::MotorOutput;
use haptic_hat_core::HapticScheduler;
use haptic_hat_firmware::devices::imu::{Mpu9250Config, Mpu9250Driver};
use haptic_hat_firmware::hat::run_haptic_loop;
use haptic_hat_firmware::parameters::BuildParameters;
use haptic_hat_firmware::platform::rp2040::{Button, MotorBank};
use haptic_hat_firmware::platform::I2C_FREQUENCY_HZ;
use haptic_hat_firmware::{log_error, log_info};

#[cfg(not(feature = "usb_serial"))]
use {defmt_rtt as _, panic_probe as _};

#[cfg(feature = "usb_serial")]
use panic_halt as _;

#[cfg(feature = "usb_serial")]
embassy_rp::bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => embassy_rp::usb::InterruptHandler<embassy_rp::peripherals::USB>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    #[cfg(feature = "usb_serial")]
    usb::start(&spawner, p.USB);
    #[cfg(not(feature = "usb_serial"))]
    let _ = spawner;

    log_info!("Haptic hat v{}", env!("CARGO_PKG_VERSION"));

    // Configuration first: an invalid build must never drive motors
    let params = BuildParameters::from_build_env();
    let config = params.to_config().unwrap_or_else(|e| config_fatal(e));
    let modes = params.modes().unwrap_or_else(|e| config_fatal(e));
    let scheduler = HapticScheduler::new(config).unwrap_or_else(|e| config_fatal(e));
    log_info!(
        "Config: mode={} tick={}Hz mount=({}, {}) rad",
        config.mode.name(),
        config.tick_hz,
        config.mount.tilt_xz,
        config.mount.tilt_yz
    );

    // Motors: slice n drives GPIO 2n (A) and 2n + 1 (B)
    let pwm = PwmConfig::default();
    let mut motors = MotorBank::new([
        Pwm::new_output_ab(p.PWM_SLICE0, p.PIN_0, p.PIN_1, pwm.clone()),
        Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, pwm.clone()),
        Pwm::new_output_ab(p.PWM_SLICE2, p.PIN_4, p.PIN_5, pwm.clone()),
        Pwm::new_output_ab(p.PWM_SLICE3, p.PIN_6, p.PIN_7, pwm),
    ]);
    motors.all_off();

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_17, p.PIN_16, i2c_config);

    let mut imu = match Mpu9250Driver::new(i2c, &mut Delay, Mpu9250Config::default()) {
        Ok(imu) => imu,
        Err(e) => {
            log_error!("IMU initialization failed: {}", e.as_str());
            panic!("IMU initialization failed");
        }
    };

    let mode_button = Button::new(Input::new(p.PIN_18, Pull::Down));
    let mut stop_button = Button::new(Input::new(p.PIN_19, Pull::Down));

    run_haptic_loop(
        scheduler,
        ModeCycle::with_modes(&modes, config.mode),
        &mut imu,
        &mut motors,
        &mode_button,
        &mut stop_button,
    )
    .await;

    // Belt and braces: the loop already zeroed every channel
    motors.all_off();
    log_info!("Haptic hat stopped");
}

/// Startup misconfiguration has no safe fallback
fn config_fatal(e: ConfigError) -> ! {
    log_error!("Fatal configuration error: {}", e.as_str());
    panic!("invalid configuration");
}

#[cfg(feature = "usb_serial")]
mod usb {
    use core::ptr::addr_of_mut;

    use embassy_executor::Spawner;
    use embassy_rp::peripherals::USB;
    use embassy_rp::usb::Driver;
    use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
    use embassy_usb::{Builder, Config, UsbDevice};
    use haptic_hat_firmware::core::logging::usb_logger_task;

    use super::Irqs;

    #[embassy_executor::task]
    async fn usb_task(mut usb: UsbDevice<'static, Driver<'static, USB>>) -> ! {
        usb.run().await
    }

    /// Bring up a CDC-ACM port and route logs to it
    pub fn start(spawner: &Spawner, usb: USB) {
        let driver = Driver::new(usb, Irqs);

        let mut usb_config = Config::new(0x2e8a, 0x000a);
        usb_config.manufacturer = Some("Raspberry Pi");
        usb_config.product = Some("Haptic Hat");
        usb_config.max_power = 100;
        usb_config.max_packet_size_0 = 64;

        static mut CONFIG_DESCRIPTOR: [u8; 256] = [0; 256];
        static mut BOS_DESCRIPTOR: [u8; 256] = [0; 256];
        static mut MSOS_DESCRIPTOR: [u8; 256] = [0; 256];
        static mut CONTROL_BUF: [u8; 64] = [0; 64];
        static mut STATE: State = State::new();

        // SAFETY: `start` runs once, before any other use of these buffers
        let mut builder = unsafe {
            Builder::new(
                driver,
                usb_config,
                &mut *addr_of_mut!(CONFIG_DESCRIPTOR),
                &mut *addr_of_mut!(BOS_DESCRIPTOR),
                &mut *addr_of_mut!(MSOS_DESCRIPTOR),
                &mut *addr_of_mut!(CONTROL_BUF),
            )
        };
        let class = CdcAcmClass::new(&mut builder, unsafe { &mut *addr_of_mut!(STATE) }, 64);
        let device = builder.build();

        // Logging is not up yet; a failed spawn leaves the port silent
        let _ = spawner.spawn(usb_task(device));
        let _ = spawner.spawn(usb_logger_task(class));
    }
}
