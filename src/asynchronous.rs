//! Async driver built on the [`embedded-hal-async`] traits, for executors where a blocking
//! sleep would stall other tasks.
//!
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal-async

use crate::hw_def::*;
use crate::logging::{trace, warn};
use crate::types::*;

use embedded_hal_async::{delay::DelayNs, i2c::I2c};

/// HDC1080 device driver for async callers
#[derive(Debug)]
pub struct Hdc1080<I2C, Delay> {
    i2c: I2C,
    delay: Delay,
}

impl<I2C, Delay, E> Hdc1080<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    /// Create a new HDC1080 driver instance.
    ///
    /// Pass `&mut bus` or a shared-bus device to keep ownership of the bus with the caller.
    pub fn new(i2c: I2C, delay: Delay) -> Self {
        Self { i2c, delay }
    }

    /// Give back the bus and delay
    pub fn release(self) -> (I2C, Delay) {
        (self.i2c, self.delay)
    }

    async fn write(&mut self, op: &'static str, bytes: &[u8]) -> Result<(), Error<E>> {
        trace!("hdc1080::{}(): write {} bytes, pointer={:#x}", op, bytes.len(), bytes[0]);
        if let Err(i2c_err) = self.i2c.write(I2C_ADDR, bytes).await {
            warn!("hdc1080::{}(): write not acknowledged or no device, pointer={:#x}", op, bytes[0]);
            return Err(Error::I2c(i2c_err));
        }
        Ok(())
    }

    async fn read<const N: usize>(&mut self, op: &'static str) -> Result<[u8; N], Error<E>> {
        let mut read_buf = [0u8; N];
        if let Err(i2c_err) = self.i2c.read(I2C_ADDR, &mut read_buf).await {
            warn!("hdc1080::{}(): read not acknowledged or no device, {} bytes", op, N);
            return Err(Error::I2c(i2c_err));
        }
        Ok(read_buf)
    }

    async fn read_register(&mut self, op: &'static str, register: Register) -> Result<u16, Error<E>> {
        self.write(op, &[register.pointer()]).await?;
        Ok(u16::from_be_bytes(self.read::<2>(op).await?))
    }

    async fn write_config(&mut self, op: &'static str, config: Config) -> Result<(), Error<E>> {
        trace!("hdc1080::{}(): config {:?}", op, config);
        self.write(op, &config.to_write_bytes()).await
    }

    async fn trigger(&mut self, op: &'static str, config: Config, register: Register) -> Result<(), Error<E>> {
        self.write_config(op, config).await?;
        self.write(op, &[register.pointer()]).await
    }

    /// Write the configuration register.  Must precede every triggered measurement.
    pub async fn set_config(&mut self, config: Config) -> Result<(), Error<E>> {
        self.write_config("set_config", config).await
    }

    async fn config_byte(&mut self, op: &'static str) -> Result<u8, Error<E>> {
        self.write(op, &[Register::Configuration.pointer()]).await?;
        let read_buf = self.read::<2>(op).await?;
        Ok(read_buf[0])
    }

    /// Read the high byte of the configuration register
    pub async fn read_config(&mut self) -> Result<u8, Error<E>> {
        self.config_byte("read_config").await
    }

    /// Read and decode the configuration register, including the battery status bit
    pub async fn read_status(&mut self) -> Result<ConfigBits, Error<E>> {
        Ok(ConfigBits::from(self.config_byte("read_status").await?))
    }

    /// Condensation heater.  Replaces any measurement configuration.
    pub async fn set_heater(&mut self, heater_on: bool) -> Result<(), Error<E>> {
        self.write_config("set_heater", if heater_on { Config::HeaterOn } else { Config::HeaterOff })
            .await
    }

    /// Measure temperature and humidity in one combined conversion and write them to `dst`.
    ///
    /// A 3-slot destination receives centigrade, humidity and fahrenheit regardless of
    /// `degrees`.  A 2-slot destination receives temperature in `degrees`, then humidity.
    /// `None` or any other length, including buffers longer than 3, fails with
    /// [`Error::InvalidInputData`] before the bus is used.
    pub async fn read_both(
        &mut self,
        degrees: Degrees,
        resolution: Resolution,
        dst: Option<&mut [f32]>,
    ) -> Result<(), Error<E>> {
        let dst = check_destination(dst)?;
        let raw = self.measure_both("read_both", resolution).await?;
        raw.fill(degrees, dst);
        Ok(())
    }

    /// Measure temperature and humidity in one combined conversion
    pub async fn read_temp_and_humidity(&mut self, resolution: Resolution) -> Result<TempAndRelHumid, Error<E>> {
        let raw = self.measure_both("read_temp_and_humidity", resolution).await?;
        Ok(TempAndRelHumid::from(&raw))
    }

    async fn measure_both(&mut self, op: &'static str, resolution: Resolution) -> Result<RawTempAndRelHumid, Error<E>> {
        self.trigger(op, resolution.combined_config(), Register::Temperature).await?;
        self.delay.delay_ms(resolution.combined_delay_ms()).await;
        Ok(RawTempAndRelHumid::from_be_bytes(self.read::<4>(op).await?))
    }

    /// Measure temperature in the requested unit
    pub async fn temperature(&mut self, degrees: Degrees, resolution: Resolution) -> Result<f32, Error<E>> {
        self.trigger("temperature", resolution.temperature_config(), Register::Temperature).await?;
        self.delay.delay_ms(resolution.temperature_delay_ms()).await;
        let raw = u16::from_be_bytes(self.read::<2>("temperature").await?);
        Ok(raw_to_float(raw, degrees.into()))
    }

    /// Measure temperature in degrees centigrade
    pub async fn celsius(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        self.temperature(Degrees::Celsius, resolution).await
    }

    /// Measure temperature in degrees fahrenheit
    pub async fn fahrenheit(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        self.temperature(Degrees::Fahrenheit, resolution).await
    }

    /// Measure relative humidity in percent
    pub async fn humidity(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        self.trigger("humidity", resolution.humidity_config(), Register::Humidity).await?;
        self.delay.delay_ms(resolution.humidity_delay_ms()).await;
        let raw = u16::from_be_bytes(self.read::<2>("humidity").await?);
        Ok(raw_rel_humid_to_percent(raw))
    }

    /// Configure and start a temperature conversion without waiting for it
    pub async fn trigger_temp_measurement(&mut self, resolution: Resolution) -> Result<(), Error<E>> {
        self.trigger("trigger_temp_measurement", resolution.temperature_config(), Register::Temperature)
            .await
    }

    /// Configure and start a humidity conversion without waiting for it
    pub async fn trigger_humidity_measurement(&mut self, resolution: Resolution) -> Result<(), Error<E>> {
        self.trigger("trigger_humidity_measurement", resolution.humidity_config(), Register::Humidity)
            .await
    }

    /// Configure and start a combined conversion without waiting for it
    pub async fn trigger_both(&mut self, resolution: Resolution) -> Result<(), Error<E>> {
        self.trigger("trigger_both", resolution.combined_config(), Register::Temperature).await
    }

    /// Read the register selected by the last trigger
    pub async fn read_raw(&mut self) -> Result<u16, Error<E>> {
        Ok(u16::from_be_bytes(self.read::<2>("read_raw").await?))
    }

    /// Read both results of a combined conversion
    pub async fn read_both_raw(&mut self) -> Result<RawTempAndRelHumid, Error<E>> {
        Ok(RawTempAndRelHumid::from_be_bytes(self.read::<4>("read_both_raw").await?))
    }

    /// Read the manufacturer ID
    pub async fn read_manufacturer_id(&mut self) -> Result<ManufacturerId, Error<E>> {
        Ok(ManufacturerId::from(self.read_register("read_manufacturer_id", Register::ManufacturerId).await?))
    }

    /// Read the device ID
    pub async fn read_device_id(&mut self) -> Result<DeviceId, Error<E>> {
        Ok(DeviceId::from(self.read_register("read_device_id", Register::DeviceId).await?))
    }

    /// Read the 40-bit unique serial number
    pub async fn read_uid(&mut self) -> Result<SerialNumber, Error<E>> {
        let mut words = [0u16; 3];
        for (word, register) in words.iter_mut().zip(SERIAL_ID_REGISTERS) {
            *word = self.read_register("read_uid", register).await?;
        }
        Ok(SerialNumber::from_words(words))
    }
}
