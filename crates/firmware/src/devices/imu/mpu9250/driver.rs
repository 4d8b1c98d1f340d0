//! MPU-9250 I2C driver implementation
//!
//! Blocking driver over any `embedded_hal::i2c::I2c` bus. Each channel read
//! is a single bounded bus transaction (two for the magnetometer).

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use haptic_hat_core::traits::{ImuSource, SensorFault};
use nalgebra::Vector3;

use super::config::Mpu9250Config;
use super::registers::{self, MAG_SENSITIVITY};

/// Driver-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImuError {
    /// I2C transaction failed
    I2c,
    /// WHO_AM_I did not match a supported device
    WrongDevice,
    /// Magnetometer overflow
    InvalidData,
    /// Read before successful initialization
    NotInitialized,
    /// No magnetometer sample available yet
    MagNotReady,
}

impl ImuError {
    /// Short static description, usable from `defmt` log macros
    pub fn as_str(&self) -> &'static str {
        match self {
            ImuError::I2c => "I2C error",
            ImuError::WrongDevice => "unexpected WHO_AM_I",
            ImuError::InvalidData => "magnetometer overflow",
            ImuError::NotInitialized => "IMU not initialized",
            ImuError::MagNotReady => "magnetometer not ready",
        }
    }
}

impl core::fmt::Display for ImuError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ImuError> for SensorFault {
    fn from(err: ImuError) -> Self {
        match err {
            ImuError::I2c | ImuError::WrongDevice => SensorFault::Bus,
            ImuError::InvalidData => SensorFault::InvalidData,
            ImuError::NotInitialized | ImuError::MagNotReady => SensorFault::NotReady,
        }
    }
}

/// MPU-9250 / MPU-9255 driver with AK8963 magnetometer
pub struct Mpu9250Driver<I> {
    i2c: I,
    config: Mpu9250Config,

    /// Raw gyro to rad/s
    gyro_scale: f32,

    /// Raw accel to m/s²
    accel_scale: f32,

    /// AK8963 fuse ROM sensitivity adjustment
    mag_asa: [f32; 3],

    /// Last good magnetometer sample (µT)
    last_mag: Option<Vector3<f32>>,

    initialized: bool,
}

impl<I: I2c> Mpu9250Driver<I> {
    /// Create and initialize the driver
    ///
    /// # Errors
    ///
    /// [`ImuError::WrongDevice`] if WHO_AM_I is not an MPU-9250/9255 or the
    /// AK8963 is missing; [`ImuError::I2c`] on any bus failure.
    pub fn new<D: DelayNs>(i2c: I, delay: &mut D, config: Mpu9250Config) -> Result<Self, ImuError> {
        let mut driver = Self {
            i2c,
            config,
            gyro_scale: config.gyro_range.scale_to_rad_s(),
            accel_scale: config.accel_range.scale_to_m_s2(),
            mag_asa: [1.0, 1.0, 1.0],
            last_mag: None,
            initialized: false,
        };

        driver.init(delay)?;
        Ok(driver)
    }

    fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), ImuError> {
        let whoami = self.read_register(registers::WHO_AM_I)?;
        match whoami {
            registers::MPU9250_WHO_AM_I_VALUE | registers::MPU9255_WHO_AM_I_VALUE => {}
            _ => {
                crate::log_error!("Unknown IMU WHO_AM_I: {:#x} (expected 0x71 or 0x73)", whoami);
                return Err(ImuError::WrongDevice);
            }
        }

        self.write_register(registers::PWR_MGMT_1, registers::PWR_MGMT_1_H_RESET)?;
        delay.delay_ms(100);
        self.write_register(registers::PWR_MGMT_1, registers::PWR_MGMT_1_CLKSEL_AUTO)?;
        delay.delay_ms(10);

        self.write_register(registers::SMPLRT_DIV, self.config.sample_rate_div)?;
        self.write_register(registers::CONFIG, self.config.dlpf.register_value())?;
        self.write_register(registers::GYRO_CONFIG, self.config.gyro_range.register_value())?;
        self.write_register(registers::ACCEL_CONFIG, self.config.accel_range.register_value())?;
        self.write_register(registers::ACCEL_CONFIG_2, self.config.dlpf.register_value())?;

        // Disable the internal I2C master and expose the AK8963 on the bus
        self.write_register(registers::USER_CTRL, 0x00)?;
        self.write_register(registers::INT_PIN_CFG, registers::INT_PIN_CFG_BYPASS_EN)?;
        delay.delay_ms(10);

        self.init_ak8963(delay)?;

        self.initialized = true;
        crate::log_info!("MPU-9250 initialized (WHO_AM_I {:#x})", whoami);
        Ok(())
    }

    fn init_ak8963<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), ImuError> {
        let whoami = self.read_mag_register(registers::AK8963_WIA)?;
        if whoami != registers::AK8963_WHO_AM_I_VALUE {
            crate::log_error!("AK8963 WHO_AM_I mismatch: {:#x}", whoami);
            return Err(ImuError::WrongDevice);
        }

        self.write_mag_register(registers::AK8963_CNTL2, registers::AK8963_CNTL2_SRST)?;
        delay.delay_ms(10);

        // Fuse ROM: Hadj = H * (((ASA - 128) * 0.5 / 128) + 1)
        self.write_mag_register(registers::AK8963_CNTL1, registers::AK8963_MODE_FUSE_ROM)?;
        delay.delay_ms(10);
        let mut asa = [0u8; 3];
        self.i2c
            .write_read(registers::AK8963_ADDR, &[registers::AK8963_ASAX], &mut asa)
            .map_err(|_| ImuError::I2c)?;
        for (adj, raw) in self.mag_asa.iter_mut().zip(asa) {
            *adj = ((raw as f32 - 128.0) * 0.5 / 128.0) + 1.0;
        }

        self.write_mag_register(registers::AK8963_CNTL1, registers::AK8963_MODE_POWER_DOWN)?;
        delay.delay_ms(10);
        self.write_mag_register(registers::AK8963_CNTL1, registers::AK8963_MODE_CONT_100HZ_16BIT)?;
        delay.delay_ms(10);

        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, ImuError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.config.i2c_address, &[reg], &mut buf)
            .map_err(|_| ImuError::I2c)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), ImuError> {
        self.i2c
            .write(self.config.i2c_address, &[reg, value])
            .map_err(|_| ImuError::I2c)
    }

    fn read_mag_register(&mut self, reg: u8) -> Result<u8, ImuError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(registers::AK8963_ADDR, &[reg], &mut buf)
            .map_err(|_| ImuError::I2c)?;
        Ok(buf[0])
    }

    fn write_mag_register(&mut self, reg: u8, value: u8) -> Result<(), ImuError> {
        self.i2c
            .write(registers::AK8963_ADDR, &[reg, value])
            .map_err(|_| ImuError::I2c)
    }

    /// Three big-endian i16 starting at `reg`
    fn read_vector_be(&mut self, reg: u8) -> Result<[i16; 3], ImuError> {
        if !self.initialized {
            return Err(ImuError::NotInitialized);
        }

        let mut buf = [0u8; 6];
        self.i2c
            .write_read(self.config.i2c_address, &[reg], &mut buf)
            .map_err(|_| ImuError::I2c)?;

        Ok([
            i16::from_be_bytes([buf[0], buf[1]]),
            i16::from_be_bytes([buf[2], buf[3]]),
            i16::from_be_bytes([buf[4], buf[5]]),
        ])
    }

    /// Fresh AK8963 sample, `None` if DRDY is clear
    fn read_mag_raw(&mut self) -> Result<Option<[i16; 3]>, ImuError> {
        let st1 = self.read_mag_register(registers::AK8963_ST1)?;
        if (st1 & registers::AK8963_ST1_DRDY) == 0 {
            return Ok(None);
        }

        // HXL..HZH then ST2; reading ST2 releases the data registers
        let mut buf = [0u8; 7];
        self.i2c
            .write_read(registers::AK8963_ADDR, &[registers::AK8963_HXL], &mut buf)
            .map_err(|_| ImuError::I2c)?;

        if (buf[6] & registers::AK8963_ST2_HOFL) != 0 {
            return Err(ImuError::InvalidData);
        }

        Ok(Some([
            i16::from_le_bytes([buf[0], buf[1]]),
            i16::from_le_bytes([buf[2], buf[3]]),
            i16::from_le_bytes([buf[4], buf[5]]),
        ]))
    }

    /// Acceleration in m/s²
    pub fn acceleration(&mut self) -> Result<Vector3<f32>, ImuError> {
        let raw = self.read_vector_be(registers::ACCEL_XOUT_H)?;
        Ok(to_vector(raw) * self.accel_scale)
    }

    /// Angular rate in rad/s
    pub fn angular_rate(&mut self) -> Result<Vector3<f32>, ImuError> {
        let raw = self.read_vector_be(registers::GYRO_XOUT_H)?;
        Ok(to_vector(raw) * self.gyro_scale)
    }

    /// Magnetic field in µT
    ///
    /// Between AK8963 conversions the last good sample is returned.
    pub fn magnetic(&mut self) -> Result<Vector3<f32>, ImuError> {
        if !self.initialized {
            return Err(ImuError::NotInitialized);
        }

        if let Some(raw) = self.read_mag_raw()? {
            let adjusted = Vector3::new(
                raw[0] as f32 * self.mag_asa[0],
                raw[1] as f32 * self.mag_asa[1],
                raw[2] as f32 * self.mag_asa[2],
            );
            self.last_mag = Some(adjusted * MAG_SENSITIVITY);
        }

        self.last_mag.ok_or(ImuError::MagNotReady)
    }

    /// Fuse ROM sensitivity adjustment per axis
    pub fn mag_adjustment(&self) -> [f32; 3] {
        self.mag_asa
    }

    /// Release the bus
    pub fn release(self) -> I {
        self.i2c
    }
}

fn to_vector(raw: [i16; 3]) -> Vector3<f32> {
    Vector3::new(raw[0] as f32, raw[1] as f32, raw[2] as f32)
}

impl<I: I2c> ImuSource for Mpu9250Driver<I> {
    fn read_magnetic(&mut self) -> Result<Vector3<f32>, SensorFault> {
        self.magnetic().map_err(SensorFault::from)
    }

    fn read_acceleration(&mut self) -> Result<Vector3<f32>, SensorFault> {
        self.acceleration().map_err(SensorFault::from)
    }

    fn read_angular_rate(&mut self) -> Result<Vector3<f32>, SensorFault> {
        self.angular_rate().map_err(SensorFault::from)
    }
}
