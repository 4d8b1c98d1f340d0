//! MPU-9250 and AK8963 register map
//!
//! Only the registers the hat touches. Based on the MPU-9250 Register Map
//! (RM-MPU-9250A-00 v1.6) and the AK8963 datasheet.

// ============================================================================
// I2C addresses
// ============================================================================

/// MPU-9250 with AD0 low
pub const MPU9250_ADDR: u8 = 0x68;

/// AK8963 behind the bypass mux
pub const AK8963_ADDR: u8 = 0x0C;

// ============================================================================
// MPU-9250
// ============================================================================

/// Sample rate divider: SAMPLE_RATE = Internal_Sample_Rate / (1 + SMPLRT_DIV)
pub const SMPLRT_DIV: u8 = 0x19;
/// Gyro DLPF
pub const CONFIG: u8 = 0x1A;
pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;
/// Accel DLPF
pub const ACCEL_CONFIG_2: u8 = 0x1D;
pub const INT_PIN_CFG: u8 = 0x37;
/// First of 6 accel bytes, high byte first
pub const ACCEL_XOUT_H: u8 = 0x3B;
/// First of 6 gyro bytes, high byte first
pub const GYRO_XOUT_H: u8 = 0x43;
pub const USER_CTRL: u8 = 0x6A;
pub const PWR_MGMT_1: u8 = 0x6B;
pub const WHO_AM_I: u8 = 0x75;

pub const MPU9250_WHO_AM_I_VALUE: u8 = 0x71;
pub const MPU9255_WHO_AM_I_VALUE: u8 = 0x73;

pub const PWR_MGMT_1_H_RESET: u8 = 0x80;
pub const PWR_MGMT_1_CLKSEL_AUTO: u8 = 0x01;
pub const INT_PIN_CFG_BYPASS_EN: u8 = 0x02;

pub const GYRO_FS_SEL_250DPS: u8 = 0x00;
pub const GYRO_FS_SEL_500DPS: u8 = 0x08;
pub const GYRO_FS_SEL_1000DPS: u8 = 0x10;
pub const GYRO_FS_SEL_2000DPS: u8 = 0x18;

pub const ACCEL_FS_SEL_2G: u8 = 0x00;
pub const ACCEL_FS_SEL_4G: u8 = 0x08;
pub const ACCEL_FS_SEL_8G: u8 = 0x10;
pub const ACCEL_FS_SEL_16G: u8 = 0x18;

// ============================================================================
// AK8963
// ============================================================================

pub const AK8963_WIA: u8 = 0x00;
/// Status 1; bit 0 is data ready
pub const AK8963_ST1: u8 = 0x02;
/// First of 6 data bytes, low byte first (unlike the MPU-9250)
pub const AK8963_HXL: u8 = 0x03;
pub const AK8963_CNTL1: u8 = 0x0A;
pub const AK8963_CNTL2: u8 = 0x0B;
/// Sensitivity adjustment, readable in fuse ROM mode
pub const AK8963_ASAX: u8 = 0x10;

pub const AK8963_WHO_AM_I_VALUE: u8 = 0x48;
pub const AK8963_ST1_DRDY: u8 = 0x01;
/// Status 2 magnetic overflow
pub const AK8963_ST2_HOFL: u8 = 0x08;
pub const AK8963_CNTL2_SRST: u8 = 0x01;

pub const AK8963_MODE_POWER_DOWN: u8 = 0x00;
pub const AK8963_MODE_FUSE_ROM: u8 = 0x0F;
/// Continuous measurement 2 (100 Hz) with 16-bit output
pub const AK8963_MODE_CONT_100HZ_16BIT: u8 = 0x16;

// ============================================================================
// Scaling
// ============================================================================

/// Magnetometer sensitivity in 16-bit mode: 4912 µT at 32760 LSB
pub const MAG_SENSITIVITY: f32 = 4912.0 / 32760.0;

pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

/// Standard gravity (m/s²)
pub const GRAVITY: f32 = 9.80665;
