//! Blocking driver built on the [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal

use crate::hw_def::*;
use crate::logging::{trace, warn};
use crate::types::*;

use embedded_hal::{delay::DelayNs, i2c::I2c};

/// HDC1080 device driver for blocking callers
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

    fn write(&mut self, op: &'static str, bytes: &[u8]) -> Result<(), Error<E>> {
        trace!("hdc1080::{}(): write {} bytes, pointer={:#x}", op, bytes.len(), bytes[0]);
        self.i2c.write(I2C_ADDR, bytes).map_err(|i2c_err| {
            warn!("hdc1080::{}(): write not acknowledged or no device, pointer={:#x}", op, bytes[0]);
            Error::I2c(i2c_err)
        })
    }

    fn read<const N: usize>(&mut self, op: &'static str) -> Result<[u8; N], Error<E>> {
        let mut read_buf = [0u8; N];
        if let Err(i2c_err) = self.i2c.read(I2C_ADDR, &mut read_buf) {
            warn!("hdc1080::{}(): read not acknowledged or no device, {} bytes", op, N);
            return Err(Error::I2c(i2c_err));
        }
        Ok(read_buf)
    }

    fn read_register(&mut self, op: &'static str, register: Register) -> Result<u16, Error<E>> {
        self.write(op, &[register.pointer()])?;
        self.read::<2>(op).map(u16::from_be_bytes)
    }

    fn write_config(&mut self, op: &'static str, config: Config) -> Result<(), Error<E>> {
        trace!("hdc1080::{}(): config {:?}", op, config);
        self.write(op, &config.to_write_bytes())
    }

    fn trigger(&mut self, op: &'static str, config: Config, register: Register) -> Result<(), Error<E>> {
        self.write_config(op, config)?;
        self.write(op, &[register.pointer()])
    }

    /// Write the configuration register.  Must precede every triggered measurement.
    pub fn set_config(&mut self, config: Config) -> Result<(), Error<E>> {
        self.write_config("set_config", config)
    }

    fn config_byte(&mut self, op: &'static str) -> Result<u8, Error<E>> {
        self.write(op, &[Register::Configuration.pointer()])?;
        let read_buf = self.read::<2>(op)?;
        Ok(read_buf[0])
    }

    /// Read the high byte of the configuration register
    pub fn read_config(&mut self) -> Result<u8, Error<E>> {
        self.config_byte("read_config")
    }

    /// Read and decode the configuration register, including the battery status bit
    pub fn read_status(&mut self) -> Result<ConfigBits, Error<E>> {
        self.config_byte("read_status").map(ConfigBits::from)
    }

    /// Condensation heater.  Replaces any measurement configuration.
    pub fn set_heater(&mut self, heater_on: bool) -> Result<(), Error<E>> {
        self.write_config("set_heater", if heater_on { Config::HeaterOn } else { Config::HeaterOff })
    }

    /// Measure temperature and humidity in one combined conversion and write them to `dst`.
    ///
    /// A 3-slot destination receives centigrade, humidity and fahrenheit regardless of
    /// `degrees`.  A 2-slot destination receives temperature in `degrees`, then humidity.
    /// `None` or any other length, including buffers longer than 3, fails with
    /// [`Error::InvalidInputData`] before the bus is used.
    pub fn read_both(
        &mut self,
        degrees: Degrees,
        resolution: Resolution,
        dst: Option<&mut [f32]>,
    ) -> Result<(), Error<E>> {
        let dst = check_destination(dst)?;
        let raw = self.measure_both("read_both", resolution)?;
        raw.fill(degrees, dst);
        Ok(())
    }

    /// Measure temperature and humidity in one combined conversion
    pub fn read_temp_and_humidity(&mut self, resolution: Resolution) -> Result<TempAndRelHumid, Error<E>> {
        self.measure_both("read_temp_and_humidity", resolution)
            .map(|raw| TempAndRelHumid::from(&raw))
    }

    fn measure_both(&mut self, op: &'static str, resolution: Resolution) -> Result<RawTempAndRelHumid, Error<E>> {
        self.trigger(op, resolution.combined_config(), Register::Temperature)?;
        self.delay.delay_ms(resolution.combined_delay_ms());
        self.read::<4>(op).map(RawTempAndRelHumid::from_be_bytes)
    }

    /// Measure temperature in the requested unit
    pub fn temperature(&mut self, degrees: Degrees, resolution: Resolution) -> Result<f32, Error<E>> {
        self.trigger("temperature", resolution.temperature_config(), Register::Temperature)?;
        self.delay.delay_ms(resolution.temperature_delay_ms());
        let raw = u16::from_be_bytes(self.read::<2>("temperature")?);
        Ok(raw_to_float(raw, degrees.into()))
    }

    /// Measure temperature in degrees centigrade
    pub fn celsius(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        self.temperature(Degrees::Celsius, resolution)
    }

    /// Measure temperature in degrees fahrenheit
    pub fn fahrenheit(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        self.temperature(Degrees::Fahrenheit, resolution)
    }

    /// Measure relative humidity in percent
    pub fn humidity(&mut self, resolution: Resolution) -> Result<f32, Error<E>> {
        self.trigger("humidity", resolution.humidity_config(), Register::Humidity)?;
        self.delay.delay_ms(resolution.humidity_delay_ms());
        let raw = u16::from_be_bytes(self.read::<2>("humidity")?);
        Ok(raw_rel_humid_to_percent(raw))
    }

    /// Configure and start a temperature conversion without waiting for it.
    ///
    /// Wait at least [`Resolution::temperature_delay_ms`] before [`Self::read_raw`].
    pub fn trigger_temp_measurement(&mut self, resolution: Resolution) -> Result<(), Error<E>> {
        self.trigger("trigger_temp_measurement", resolution.temperature_config(), Register::Temperature)
    }

    /// Configure and start a humidity conversion without waiting for it.
    ///
    /// Wait at least [`Resolution::humidity_delay_ms`] before [`Self::read_raw`].
    pub fn trigger_humidity_measurement(&mut self, resolution: Resolution) -> Result<(), Error<E>> {
        self.trigger("trigger_humidity_measurement", resolution.humidity_config(), Register::Humidity)
    }

    /// Configure and start a combined conversion without waiting for it.
    ///
    /// Wait at least [`Resolution::combined_delay_ms`] before [`Self::read_both_raw`].
    pub fn trigger_both(&mut self, resolution: Resolution) -> Result<(), Error<E>> {
        self.trigger("trigger_both", resolution.combined_config(), Register::Temperature)
    }

    /// Read the register selected by the last trigger.  Reading early returns stale data.
    pub fn read_raw(&mut self) -> Result<u16, Error<E>> {
        self.read::<2>("read_raw").map(u16::from_be_bytes)
    }

    /// Read both results of a combined conversion started by [`Self::trigger_both`]
    pub fn read_both_raw(&mut self) -> Result<RawTempAndRelHumid, Error<E>> {
        self.read::<4>("read_both_raw").map(RawTempAndRelHumid::from_be_bytes)
    }

    /// Read the manufacturer ID.  Not checked against [`ManufacturerId::TexasInstruments`].
    pub fn read_manufacturer_id(&mut self) -> Result<ManufacturerId, Error<E>> {
        self.read_register("read_manufacturer_id", Register::ManufacturerId).map(ManufacturerId::from)
    }

    /// Read the device ID
    pub fn read_device_id(&mut self) -> Result<DeviceId, Error<E>> {
        self.read_register("read_device_id", Register::DeviceId).map(DeviceId::from)
    }

    /// Read the 40-bit unique serial number, one register at a time
    pub fn read_uid(&mut self) -> Result<SerialNumber, Error<E>> {
        let mut words = [0u16; 3];
        for (word, register) in words.iter_mut().zip(SERIAL_ID_REGISTERS) {
            *word = self.read_register("read_uid", register)?;
        }
        Ok(SerialNumber::from_words(words))
    }
}
