use crate::hw_def::*;

use core::fmt;

#[cfg(feature="defmt")]
use defmt::Format;

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// I²C communication error (no acknowledge or no device)
    I2c(E),
    /// Invalid input data provided.  Detected before any bus activity.
    InvalidInputData,
}

/// Temperature unit
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Degrees {
    /// degrees centigrade
    #[default]
    Celsius,
    /// degrees fahrenheit
    Fahrenheit,
}

/// Physical quantity to produce from a raw register value
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Measure {
    /// temperature in degrees centigrade
    TemperatureC,
    /// temperature in degrees fahrenheit
    TemperatureF,
    /// relative humidity in percent
    Humidity,
}
impl From<Degrees> for Measure {
    fn from(degrees: Degrees) -> Self {
        match degrees {
            Degrees::Celsius => Measure::TemperatureC,
            Degrees::Fahrenheit => Measure::TemperatureF,
        }
    }
}

fn full_scale_fraction(raw: u16) -> f64 {
    raw as f64 / 65536.0
}

fn centigrade_f64(raw: u16) -> f64 {
    full_scale_fraction(raw) * 165.0 - 40.0
}

/// Convert a raw temperature register value to degrees centigrade
pub fn raw_temp_to_centigrade(raw: u16) -> f32 {
    centigrade_f64(raw) as f32
}

/// Convert a raw temperature register value to degrees fahrenheit
pub fn raw_temp_to_fahrenheit(raw: u16) -> f32 {
    (centigrade_f64(raw) * 1.8 + 32.0) as f32
}

/// Convert a raw humidity register value to relative humidity in percent
pub fn raw_rel_humid_to_percent(raw: u16) -> f32 {
    (full_scale_fraction(raw) * 100.0) as f32
}

/// Convert a raw register value to the requested physical quantity
pub fn raw_to_float(raw: u16, measure: Measure) -> f32 {
    match measure {
        Measure::TemperatureC => raw_temp_to_centigrade(raw),
        Measure::TemperatureF => raw_temp_to_fahrenheit(raw),
        Measure::Humidity => raw_rel_humid_to_percent(raw),
    }
}

/// Raw (still in u16 format) temperature and relative humidity from the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawTempAndRelHumid {
    /// unprocessed temperature
    pub temperature: u16,
    /// unprocessed relative humidity
    pub humidity: u16,
}
impl RawTempAndRelHumid {
    pub(crate) fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self {
            temperature: u16::from_be_bytes([bytes[0], bytes[1]]),
            humidity: u16::from_be_bytes([bytes[2], bytes[3]]),
        }
    }
    /// Get temperature in Fahrenheit
    pub fn fahrenheit(&self) -> f32 {
        raw_temp_to_fahrenheit(self.temperature)
    }
    /// Get temperature in Centigrade
    pub fn centigrade(&self) -> f32 {
        raw_temp_to_centigrade(self.temperature)
    }
    /// Get relative humidity in percent
    pub fn humidity_percent(&self) -> f32 {
        raw_rel_humid_to_percent(self.humidity)
    }

    /// Fill a `read_both` destination.
    ///
    /// Three slots: centigrade, humidity, fahrenheit (the unit is ignored).  Two slots:
    /// temperature in `degrees`, humidity.
    pub(crate) fn fill(&self, degrees: Degrees, dst: &mut [f32]) {
        if dst.len() == 3 {
            dst[0] = self.centigrade();
            dst[2] = self.fahrenheit();
        } else {
            dst[0] = raw_to_float(self.temperature, degrees.into());
        }
        dst[1] = self.humidity_percent();
    }
}

/// Check a `read_both` destination without touching the bus
pub(crate) fn check_destination<E>(dst: Option<&mut [f32]>) -> Result<&mut [f32], Error<E>> {
    match dst {
        Some(dst) if dst.len() == 2 || dst.len() == 3 => Ok(dst),
        _ => Err(Error::InvalidInputData),
    }
}

/// Temp and relative humidity from the device after conversion
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TempAndRelHumid {
    /// degrees centigrade
    pub centigrade: f32,
    /// degrees fahrenheit
    pub fahrenheit: f32,
    /// relative humidity in percent
    pub humidity_percent: f32,
}
impl From<&RawTempAndRelHumid> for TempAndRelHumid {
    fn from(raw: &RawTempAndRelHumid) -> Self {
        Self {
            centigrade: raw.centigrade(),
            fahrenheit: raw.fahrenheit(),
            humidity_percent: raw.humidity_percent(),
        }
    }
}

/// Decoded high byte of the configuration register
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConfigBits {
    raw: u8,
    /// heater is enabled
    pub heater_enabled: bool,
    /// one trigger measures temperature then humidity
    pub combined_mode: bool,
    /// supply voltage below 2.8V
    pub battery_low: bool,
    /// temperature resolution, `High` or `Medium`
    pub temperature_resolution: Resolution,
    /// humidity resolution
    pub humidity_resolution: Resolution,
}
impl From<u8> for ConfigBits {
    fn from(raw: u8) -> Self {
        let humid_res = (raw >> CONFIG_FIELD_LSBIT_HUMID_RES) & ((1 << CONFIG_FIELD_WIDTH_HUMID_RES) - 1);
        Self {
            raw,
            heater_enabled: (raw >> CONFIG_FIELD_LSBIT_HEATER) & 1 != 0,
            combined_mode: (raw >> CONFIG_FIELD_LSBIT_MODE) & 1 != 0,
            battery_low: (raw >> CONFIG_FIELD_LSBIT_BATTERY_LOW) & 1 != 0,
            temperature_resolution: if (raw >> CONFIG_FIELD_LSBIT_TEMP_RES) & 1 != 0 {
                Resolution::Medium
            } else {
                Resolution::High
            },
            humidity_resolution: match humid_res {
                0b00 => Resolution::High,
                0b01 => Resolution::Medium,
                // 0b11 is reserved on the part
                _ => Resolution::Low,
            },
        }
    }
}
impl ConfigBits {
    /// Get the raw configuration byte
    pub fn raw(&self) -> u8 {
        self.raw
    }
}
impl fmt::Display for ConfigBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigBits {{ 0x{:02x}; ", self.raw)?;
        if self.heater_enabled {
            write!(f, "heater_enabled ")?;
        }
        if self.combined_mode {
            write!(f, "combined_mode ")?;
        }
        if self.battery_low {
            write!(f, "battery_low ")?;
        }
        write!(
            f,
            "t_res={} rh_res={} }}",
            self.temperature_resolution as u8,
            self.humidity_resolution as u8
        )
    }
}

/// Unique serial number of the device.
///
/// The three 16-bit serial ID words are kept verbatim in the low 48 bits; 40 of them are
/// significant on the part.  Displayed as 12 hex digits, one 4-digit group per word.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SerialNumber(pub u64);
impl SerialNumber {
    /// Assemble the three serial ID register words: first word lands in bits 47..32, second
    /// in 31..16, third in 15..0.
    pub fn from_words(words: [u16; 3]) -> Self {
        Self((words[0] as u64) << 32 | (words[1] as u64) << 16 | words[2] as u64)
    }
}
impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:012X}", self.0)
    }
}

/// Manufacturer ID of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ManufacturerId {
    /// Texas Instruments
    TexasInstruments,
    /// Other
    Other(u16),
}
impl From<u16> for ManufacturerId {
    fn from(raw: u16) -> Self {
        match raw {
            MANUFACTURER_ID_TEXAS_INSTRUMENTS => ManufacturerId::TexasInstruments,
            _ => ManufacturerId::Other(raw),
        }
    }
}
impl From<ManufacturerId> for u16 {
    fn from(id: ManufacturerId) -> u16 {
        match id {
            ManufacturerId::TexasInstruments => MANUFACTURER_ID_TEXAS_INSTRUMENTS,
            ManufacturerId::Other(id) => id,
        }
    }
}
impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManufacturerId::TexasInstruments => {
                let mid_u16: u16 = (*self).into();
                write!(f, "Texas Instruments (0x{mid_u16:04X})")
            }
            ManufacturerId::Other(mid_u16) => write!(f, "Unknown (0x{mid_u16:04X})"),
        }
    }
}

/// Device ID of the part
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeviceId {
    /// HDC1080
    Hdc1080,
    /// Other
    Other(u16),
}
impl From<u16> for DeviceId {
    fn from(raw: u16) -> Self {
        match raw {
            DEVICE_ID_HDC1080 => DeviceId::Hdc1080,
            _ => DeviceId::Other(raw),
        }
    }
}
impl From<DeviceId> for u16 {
    fn from(id: DeviceId) -> u16 {
        match id {
            DeviceId::Hdc1080 => DEVICE_ID_HDC1080,
            DeviceId::Other(id) => id,
        }
    }
}
impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let did_u16: u16 = (*self).into();
        match self {
            DeviceId::Hdc1080 => write!(f, "HDC1080 (0x{did_u16:04X})"),
            DeviceId::Other(_) => write!(f, "Unknown (0x{did_u16:04X})"),
        }
    }
}
