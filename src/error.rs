use std::path::PathBuf;

use i2cdev::linux::LinuxI2CError;

use crate::message::MAX_LEN;

/// A message that cannot be sent to the peripheral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    Empty,
    TooLong { len: usize },
    /// Only characters U+0000 to U+00FF fit in a single wire byte.
    Unencodable { ch: char, index: usize },
}

impl std::fmt::Display for MessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageError::Empty => write!(f, "Message is empty, nothing to send."),
            MessageError::TooLong { len } => write!(
                f,
                "Message too long ({len} characters), must be at most {MAX_LEN} characters."
            ),
            MessageError::Unencodable { ch, index } => write!(
                f,
                "Character {ch:?} at position {index} does not fit in a single byte."
            ),
        }
    }
}

impl std::error::Error for MessageError {}

/// Failures of a Linux I2C character device.
#[derive(Debug)]
pub enum BusError {
    Open {
        path: PathBuf,
        source: LinuxI2CError,
    },
    Transfer(LinuxI2CError),
}

impl From<LinuxI2CError> for BusError {
    fn from(value: LinuxI2CError) -> Self {
        Self::Transfer(value)
    }
}

impl embedded_hal::i2c::Error for BusError {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        // The kernel reports NACKs and arbitration loss as plain errnos,
        // which differ between adapter drivers.
        embedded_hal::i2c::ErrorKind::Other
    }
}

impl std::fmt::Display for BusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusError::Open { path, source } => {
                write!(f, "failed to open {}: {source}", path.display())
            }
            BusError::Transfer(source) => write!(f, "I2C transfer failed: {source}"),
        }
    }
}

impl std::error::Error for BusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BusError::Open { source, .. } | BusError::Transfer(source) => Some(source),
        }
    }
}

/// Failures of the simulated peripheral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Nothing answered at the requested address.
    NoAcknowledge { address: u8 },
}

impl embedded_hal::i2c::Error for SimError {
    fn kind(&self) -> embedded_hal::i2c::ErrorKind {
        match self {
            SimError::NoAcknowledge { .. } => embedded_hal::i2c::ErrorKind::NoAcknowledge(
                embedded_hal::i2c::NoAcknowledgeSource::Address,
            ),
        }
    }
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::NoAcknowledge { address } => {
                write!(f, "no acknowledge from address {address:#04x}")
            }
        }
    }
}

impl std::error::Error for SimError {}
