//! Register map, configuration values and timing constants of the HDC1080.

#[cfg(feature = "defmt")]
use defmt::Format;

/// 7-bit I²C address of the HDC1080 (not strappable)
pub const I2C_ADDR: u8 = 0x40;

/// Manufacturer ID reported by Texas Instruments parts ("TI" in ASCII)
pub const MANUFACTURER_ID_TEXAS_INSTRUMENTS: u16 = 0x5449;

/// Device ID reported by the HDC1080
pub const DEVICE_ID_HDC1080: u16 = 0x1050;

pub(crate) const CONFIG_FIELD_LSBIT_HEATER: u8 = 5;
pub(crate) const CONFIG_FIELD_LSBIT_MODE: u8 = 4;
pub(crate) const CONFIG_FIELD_LSBIT_BATTERY_LOW: u8 = 3;
pub(crate) const CONFIG_FIELD_LSBIT_TEMP_RES: u8 = 2;
pub(crate) const CONFIG_FIELD_LSBIT_HUMID_RES: u8 = 0;
pub(crate) const CONFIG_FIELD_WIDTH_HUMID_RES: u8 = 2;

/// Register pointers.  Every register is 16 bits wide.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Register {
    /// temperature result
    Temperature,
    /// relative humidity result
    Humidity,
    /// configuration, only the high byte carries mode bits
    Configuration,
    /// first serial ID word, bits 47..32 of [`crate::SerialNumber`]
    SerialId1,
    /// second serial ID word, bits 31..16 of [`crate::SerialNumber`]
    SerialId2,
    /// third serial ID word, bits 15..0 of [`crate::SerialNumber`]
    SerialId3,
    /// manufacturer ID
    ManufacturerId,
    /// device ID
    DeviceId,
}
impl Register {
    /// Pointer byte written ahead of a register access
    pub const fn pointer(self) -> u8 {
        match self {
            Register::Temperature => 0x00,
            Register::Humidity => 0x01,
            Register::Configuration => 0x02,
            Register::SerialId1 => 0xFB,
            Register::SerialId2 => 0xFC,
            Register::SerialId3 => 0xFD,
            Register::ManufacturerId => 0xFE,
            Register::DeviceId => 0xFF,
        }
    }
}

/// Value written to the high byte of the configuration register.
///
/// Writing one of these replaces the whole register; there is no merging with the mode that
/// was active before.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Config {
    /// 14-bit temperature or humidity, one channel per trigger
    Single14,
    /// 11-bit temperature, one channel per trigger
    Temp11,
    /// 11-bit humidity, one channel per trigger
    Hum11,
    /// 8-bit humidity, one channel per trigger
    Hum8,
    /// temperature then humidity from one trigger, both 14-bit
    Combo14,
    /// temperature then humidity from one trigger, both 11-bit
    Combo11,
    /// heater on
    HeaterOn,
    /// heater off.  Same bits as the power-on default.
    HeaterOff,
}
impl Config {
    /// The power-on default configuration
    pub const RESET: Config = Config::HeaterOff;

    /// High byte of the configuration register
    pub const fn bits(self) -> u8 {
        match self {
            Config::Single14 => 0x00,
            Config::Temp11 => 0x04,
            Config::Hum11 => 0x01,
            Config::Hum8 => 0x02,
            Config::Combo14 => 0x10,
            Config::Combo11 => 0x15,
            Config::HeaterOn => 0x20,
            Config::HeaterOff => 0x10,
        }
    }

    /// Three byte write that installs this configuration: pointer, high byte, zero low byte
    pub const fn to_write_bytes(self) -> [u8; 3] {
        [Register::Configuration.pointer(), self.bits(), 0x00]
    }
}
impl From<Config> for u8 {
    fn from(config: Config) -> Self {
        config.bits()
    }
}

/// Measurement resolution.
///
/// `Medium` only selects its own timing and configuration on the humidity-only path.  The
/// temperature-only and combined paths branch on `High` versus anything else, so `Medium` and
/// `Low` behave the same there.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Resolution {
    /// 14 bits
    #[default]
    High = 14,
    /// 11 bits
    Medium = 11,
    /// 8 bits
    Low = 8,
}

impl Resolution {
    /// Configuration for a temperature-only measurement
    pub const fn temperature_config(self) -> Config {
        match self {
            Resolution::High => Config::Single14,
            _ => Config::Temp11,
        }
    }

    /// Configuration for a humidity-only measurement
    pub const fn humidity_config(self) -> Config {
        match self {
            Resolution::High => Config::Single14,
            Resolution::Medium => Config::Hum11,
            Resolution::Low => Config::Hum8,
        }
    }

    /// Configuration for a combined temperature and humidity measurement
    pub const fn combined_config(self) -> Config {
        match self {
            Resolution::High => Config::Combo14,
            _ => Config::Combo11,
        }
    }

    /// Settling time of a temperature-only measurement in milliseconds
    pub const fn temperature_delay_ms(self) -> u32 {
        match self {
            Resolution::High => 7,
            _ => 4,
        }
    }

    /// Settling time of a humidity-only measurement in milliseconds
    pub const fn humidity_delay_ms(self) -> u32 {
        match self {
            Resolution::High => 7,
            Resolution::Medium => 4,
            Resolution::Low => 3,
        }
    }

    /// Settling time of a combined measurement in milliseconds
    pub const fn combined_delay_ms(self) -> u32 {
        match self {
            Resolution::High => 14,
            _ => 8,
        }
    }
}

/// Three serial ID registers read back to back by `read_uid`
pub(crate) const SERIAL_ID_REGISTERS: [Register; 3] = [
    Register::SerialId1,
    Register::SerialId2,
    Register::SerialId3,
];
