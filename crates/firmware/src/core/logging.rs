//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (pico + usb_serial feature): Uses USB Serial
//! - Embedded (pico): Uses defmt
//! - Host tests: Uses println!
//! - Host non-test: No-op
//!
//! ## USB Serial Logging
//!
//! When the `usb_serial` feature is enabled, logs are sent to USB Serial instead of defmt.
//! Messages are formatted into a fixed-size `heapless::String`, so no heap is needed.
//! You need to:
//! 1. Initialize USB Serial in your main function
//! 2. Spawn the logger task: `spawner.spawn(usb_logger_task(usb_class))`
//! 3. Use the log macros as usual: `log_info!("message")`

#[cfg(all(feature = "pico", feature = "usb_serial"))]
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
#[cfg(all(feature = "pico", feature = "usb_serial"))]
use embassy_sync::channel::Channel;

/// Log message buffer size
#[cfg(all(feature = "pico", feature = "usb_serial"))]
const LOG_MSG_SIZE: usize = 128;

/// Log channel capacity
#[cfg(all(feature = "pico", feature = "usb_serial"))]
const LOG_CHANNEL_SIZE: usize = 16;

/// Log message type
#[cfg(all(feature = "pico", feature = "usb_serial"))]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: heapless::String<LOG_MSG_SIZE>,
}

/// Log level
#[cfg(all(feature = "pico", feature = "usb_serial"))]
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
    Trace,
}

#[cfg(all(feature = "pico", feature = "usb_serial"))]
impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "[INFO] ",
            LogLevel::Warn => "[WARN] ",
            LogLevel::Error => "[ERROR]",
            LogLevel::Debug => "[DEBUG]",
            LogLevel::Trace => "[TRACE]",
        }
    }
}

/// Global log channel
#[cfg(all(feature = "pico", feature = "usb_serial"))]
static LOG_CHANNEL: Channel<CriticalSectionRawMutex, LogMessage, LOG_CHANNEL_SIZE> = Channel::new();

// ============================================================================
// defmt transport stubs for USB Serial
// ============================================================================
//
// embassy crates are built with their defmt feature, so the defmt transport
// symbols must exist even when logs go to USB. defmt-rtt is not linked in
// this configuration; these stubs satisfy the linker and discard the bytes.

#[cfg(all(feature = "pico", feature = "usb_serial"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(all(feature = "pico", feature = "usb_serial"))]
static DEFMT_LOCKED: AtomicBool = AtomicBool::new(false);

#[cfg(all(feature = "pico", feature = "usb_serial"))]
#[no_mangle]
unsafe extern "C" fn _defmt_acquire() {
    while DEFMT_LOCKED
        .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
        .is_err()
    {
        core::hint::spin_loop();
    }
}

#[cfg(all(feature = "pico", feature = "usb_serial"))]
#[no_mangle]
unsafe extern "C" fn _defmt_release() {
    DEFMT_LOCKED.store(false, Ordering::Release);
}

#[cfg(all(feature = "pico", feature = "usb_serial"))]
#[no_mangle]
unsafe extern "C" fn _defmt_write(_bytes: *const u8, _len: usize) {}

/// Format and queue a log message
///
/// Messages longer than the buffer are truncated; if the channel is full
/// the message is dropped.
#[cfg(all(feature = "pico", feature = "usb_serial"))]
pub fn send_log(level: LogLevel, args: core::fmt::Arguments<'_>) {
    let mut message = heapless::String::new();
    let _ = core::fmt::write(&mut message, args);

    let _ = LOG_CHANNEL.try_send(LogMessage { level, message });
}

/// USB Serial logger task
///
/// Drains the log channel into a CDC-ACM class.
///
/// # Example
///
/// ```ignore
/// use embassy_usb::class::cdc_acm::CdcAcmClass;
/// use haptic_hat_firmware::core::logging::usb_logger_task;
///
/// #[embassy_executor::main]
/// async fn main(spawner: Spawner) {
///     // ... USB initialization ...
///     let cdc_class = CdcAcmClass::new(&mut builder, &mut STATE, 64);
///     spawner.spawn(usb_logger_task(cdc_class)).unwrap();
/// }
/// ```
#[cfg(all(feature = "pico", feature = "usb_serial"))]
#[embassy_executor::task]
pub async fn usb_logger_task(
    mut usb_class: embassy_usb::class::cdc_acm::CdcAcmClass<
        'static,
        embassy_rp::usb::Driver<'static, embassy_rp::peripherals::USB>,
    >,
) {
    use embassy_time::{Duration, Timer};

    // Wait for USB to be configured
    Timer::after(Duration::from_secs(1)).await;

    loop {
        let log_msg = LOG_CHANNEL.receive().await;

        let mut buf = heapless::String::<{ LOG_MSG_SIZE + 16 }>::new();
        let _ = core::fmt::write(
            &mut buf,
            format_args!("{} {}\r\n", log_msg.level.prefix(), log_msg.message),
        );

        // CDC packets are at most 64 bytes
        for chunk in buf.as_bytes().chunks(64) {
            let _ = usb_class.write_packet(chunk).await;
        }
    }
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Info,
            ::core::format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico", not(feature = "usb_serial")))]
        ::defmt::info!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Warn,
            ::core::format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico", not(feature = "usb_serial")))]
        ::defmt::warn!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Error,
            ::core::format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico", not(feature = "usb_serial")))]
        ::defmt::error!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Debug,
            ::core::format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico", not(feature = "usb_serial")))]
        ::defmt::debug!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}

/// Log trace message
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "pico", feature = "usb_serial"))]
        $crate::core::logging::send_log(
            $crate::core::logging::LogLevel::Trace,
            ::core::format_args!($($arg)*),
        );

        #[cfg(all(feature = "pico", not(feature = "usb_serial")))]
        ::defmt::trace!($($arg)*);

        #[cfg(all(not(feature = "pico"), test))]
        println!("[TRACE] {}", format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_expand_on_host() {
        let duty: u16 = 48768;
        crate::log_info!("mode {} active", "tilt");
        crate::log_warn!("sensor fault: {}", "sensor bus error");
        crate::log_error!("configuration rejected");
        crate::log_debug!("motor {} duty {}", 4, duty);
        crate::log_trace!("duties {:?}", [0u16, duty]);
    }
}
