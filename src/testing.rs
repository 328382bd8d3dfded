// Shared fixtures for the driver unit tests.

use crate::hw_def::*;

use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;

pub(crate) const MS: u32 = 1_000_000;

/// Records every delay in nanoseconds, for both the blocking and the async driver
#[derive(Default)]
pub(crate) struct RecordingDelay(pub(crate) Vec<u32>);
impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(ns);
    }
}
impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.push(ns);
    }
}

pub(crate) fn config_write(config: Config) -> I2cTransaction {
    I2cTransaction::write(I2C_ADDR, vec![0x02, config.bits(), 0x00])
}

/// One bus transaction of an operation
#[derive(Clone)]
pub(crate) enum Step {
    Write(Vec<u8>),
    Read(usize),
}

pub(crate) fn configure(config: Config) -> Step {
    Step::Write(config.to_write_bytes().to_vec())
}

/// Configure, trigger through `pointer`, read `len` bytes
pub(crate) fn measured(config: Config, pointer: u8, len: usize) -> Vec<Step> {
    vec![configure(config), Step::Write(vec![pointer]), Step::Read(len)]
}

pub(crate) fn register_read(pointer: u8) -> Vec<Step> {
    vec![Step::Write(vec![pointer]), Step::Read(2)]
}

/// Transactions up to and including `fail_at`, the last one reporting a bus error
pub(crate) fn failing_at(steps: &[Step], fail_at: usize) -> Vec<I2cTransaction> {
    steps[..=fail_at]
        .iter()
        .enumerate()
        .map(|(ii, step)| {
            let transaction = match step {
                Step::Write(bytes) => I2cTransaction::write(I2C_ADDR, bytes.clone()),
                Step::Read(len) => I2cTransaction::read(I2C_ADDR, vec![0; *len]),
            };
            if ii == fail_at {
                transaction.with_error(ErrorKind::Other)
            } else {
                transaction
            }
        })
        .collect()
}

/// An operation with its transactions and the settling delay it waits before the final read
pub(crate) struct FailureCase<D> {
    pub(crate) name: &'static str,
    pub(crate) steps: Vec<Step>,
    pub(crate) delay_ms: Option<u32>,
    pub(crate) call: fn(&mut D) -> Result<(), crate::Error<ErrorKind>>,
}
impl<D> FailureCase<D> {
    /// Delays recorded when the transaction at `fail_at` fails
    pub(crate) fn expected_delays(&self, fail_at: usize) -> Vec<u32> {
        match self.delay_ms {
            Some(delay_ms) if fail_at == self.steps.len() - 1 => vec![delay_ms * MS],
            _ => vec![],
        }
    }
}
