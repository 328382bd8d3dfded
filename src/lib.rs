//! This is a platform-agnostic Rust driver for the HDC1080 low-power humidity and temperature
//! digital sensor using the [`embedded-hal`] or [`embedded-hal-async`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal-async
//!
//! This driver allows you to:
//! - Write and read the configuration register.
//! - Measure temperature, humidity, or both in one combined conversion, waiting the settling
//!   time for the selected resolution.
//! - Trigger a measurement and read the raw result later, for callers that schedule the wait
//!   themselves.
//! - Convert raw register values to degrees centigrade, degrees fahrenheit and %RH.
//! - Enable/disable the heater.
//! - Read the battery-low status bit.
//! - Read the manufacturer ID and device ID.
//! - Read the 40-bit unique serial number.
//! - blocking API support.
//! - async API support.
//!
//! The driver keeps no state besides the bus and delay.  It does not retry: every bus failure
//! is returned as [`Error::I2c`].  Transactions of one measurement (configure, trigger, wait,
//! read) must not be interleaved with traffic for other devices on the same bus.
//!
//! ## Features
//!
//! - `async`: Enables async API.
//! - `blocking`: Enables blocking API.
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Resolution quirk
//!
//! [`Resolution::Medium`] selects its own configuration and settling time only for humidity-only
//! measurements.  Temperature-only and combined measurements distinguish `High` from anything
//! else, so `Medium` and `Low` both run at 11 bits there.
//!
//! Datasheet: [HDC1080](https://www.ti.com/lit/ds/symlink/hdc1080.pdf)
//!
//! ## Blocking Example:
//!
//! ```
//! # #[cfg(feature = "blocking")] {
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! # use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
//! use hdc1080::{blocking::Hdc1080, Degrees, Resolution};
//!
//! # let expectations = [
//! #     Transaction::write(0x40, vec![0x02, 0x10, 0x00]),
//! #     Transaction::write(0x40, vec![0x00]),
//! #     Transaction::read(0x40, vec![0x66, 0x66, 0x80, 0x00]),
//! # ];
//! # let mut i2c = I2cMock::new(&expectations);
//! // Platform-specific: an initialized embedded_hal::i2c::I2c bus and a DelayNs
//! let mut hdc1080 = Hdc1080::new(&mut i2c, NoopDelay);
//!
//! // centigrade, %RH and fahrenheit from one combined conversion
//! let mut sample = [0f32; 3];
//! hdc1080.read_both(Degrees::Celsius, Resolution::High, Some(&mut sample)).unwrap();
//! assert_eq!(sample[1], 50.0);
//! # i2c.done();
//! # }
//! ```
//!
//! ## Trigger-then-read Example:
//!
//! ```
//! # #[cfg(feature = "blocking")] {
//! # use embedded_hal_mock::eh1::delay::NoopDelay;
//! # use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};
//! use hdc1080::{blocking::Hdc1080, raw_to_float, Measure, Resolution};
//!
//! # let expectations = [
//! #     Transaction::write(0x40, vec![0x02, 0x01, 0x00]),
//! #     Transaction::write(0x40, vec![0x01]),
//! #     Transaction::read(0x40, vec![0x40, 0x00]),
//! # ];
//! # let mut i2c = I2cMock::new(&expectations);
//! let mut hdc1080 = Hdc1080::new(&mut i2c, NoopDelay);
//!
//! hdc1080.trigger_humidity_measurement(Resolution::Medium).unwrap();
//! // Platform-specific: do other work for at least Resolution::Medium.humidity_delay_ms()
//! let raw = hdc1080.read_raw().unwrap();
//! assert_eq!(raw_to_float(raw, Measure::Humidity), 25.0);
//! # i2c.done();
//! # }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(not(any(feature = "async", feature = "blocking")))]
compile_error!("At least one of \"async\" and \"blocking\" features must be enabled");

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

mod hw_def;
mod logging;
mod types;

#[cfg(test)]
mod testing;

#[cfg(feature = "async")]
pub mod asynchronous;
#[cfg(feature = "blocking")]
pub mod blocking;

pub use crate::{hw_def::*, types::*};
