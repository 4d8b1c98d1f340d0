//! MPU-9250 configuration
//!
//! The hat moves with a human head: small ranges give the best resolution.

use super::registers;

/// Gyroscope full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GyroRange {
    /// ±250 °/s (default, head motion stays well inside)
    #[default]
    Dps250,
    /// ±500 °/s
    Dps500,
    /// ±1000 °/s
    Dps1000,
    /// ±2000 °/s
    Dps2000,
}

impl GyroRange {
    /// GYRO_CONFIG value
    pub fn register_value(self) -> u8 {
        match self {
            GyroRange::Dps250 => registers::GYRO_FS_SEL_250DPS,
            GyroRange::Dps500 => registers::GYRO_FS_SEL_500DPS,
            GyroRange::Dps1000 => registers::GYRO_FS_SEL_1000DPS,
            GyroRange::Dps2000 => registers::GYRO_FS_SEL_2000DPS,
        }
    }

    /// Raw LSB to rad/s
    pub fn scale_to_rad_s(self) -> f32 {
        let lsb_per_dps = match self {
            GyroRange::Dps250 => 131.0,
            GyroRange::Dps500 => 65.5,
            GyroRange::Dps1000 => 32.8,
            GyroRange::Dps2000 => 16.4,
        };
        registers::DEG_TO_RAD / lsb_per_dps
    }
}

/// Accelerometer full scale range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelRange {
    /// ±2 g (default, only gravity direction matters)
    #[default]
    G2,
    /// ±4 g
    G4,
    /// ±8 g
    G8,
    /// ±16 g
    G16,
}

impl AccelRange {
    /// ACCEL_CONFIG value
    pub fn register_value(self) -> u8 {
        match self {
            AccelRange::G2 => registers::ACCEL_FS_SEL_2G,
            AccelRange::G4 => registers::ACCEL_FS_SEL_4G,
            AccelRange::G8 => registers::ACCEL_FS_SEL_8G,
            AccelRange::G16 => registers::ACCEL_FS_SEL_16G,
        }
    }

    /// Raw LSB to m/s²
    pub fn scale_to_m_s2(self) -> f32 {
        let lsb_per_g = match self {
            AccelRange::G2 => 16384.0,
            AccelRange::G4 => 8192.0,
            AccelRange::G8 => 4096.0,
            AccelRange::G16 => 2048.0,
        };
        registers::GRAVITY / lsb_per_g
    }
}

/// Digital low pass filter bandwidth, shared by gyro and accel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DlpfConfig {
    /// 92 Hz gyro / 99 Hz accel
    Bw92Hz,
    /// 41 Hz gyro / 45 Hz accel
    Bw41Hz,
    /// 20 Hz gyro / 21 Hz accel (default, below the Nyquist limit of a 60 Hz tick)
    #[default]
    Bw20Hz,
    /// 10 Hz
    Bw10Hz,
}

impl DlpfConfig {
    /// CONFIG and ACCEL_CONFIG_2 share the same DLPF_CFG codes for these bands
    pub fn register_value(self) -> u8 {
        match self {
            DlpfConfig::Bw92Hz => 0x02,
            DlpfConfig::Bw41Hz => 0x03,
            DlpfConfig::Bw20Hz => 0x04,
            DlpfConfig::Bw10Hz => 0x05,
        }
    }
}

/// MPU-9250 driver configuration
#[derive(Debug, Clone, Copy)]
pub struct Mpu9250Config {
    pub gyro_range: GyroRange,
    pub accel_range: AccelRange,
    pub dlpf: DlpfConfig,
    /// SAMPLE_RATE = 1kHz / (1 + sample_rate_div)
    pub sample_rate_div: u8,
    /// 0x68 or 0x69 depending on AD0
    pub i2c_address: u8,
}

impl Default for Mpu9250Config {
    fn default() -> Self {
        Self {
            gyro_range: GyroRange::Dps250,
            accel_range: AccelRange::G2,
            dlpf: DlpfConfig::Bw20Hz,
            sample_rate_div: 9, // 100 Hz
            i2c_address: registers::MPU9250_ADDR,
        }
    }
}
