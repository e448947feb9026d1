//! Messages as they travel on the wire.
//!
//! Each character becomes exactly one byte (its code point), so only
//! U+0000 to U+00FF round-trip. Anything wider is rejected up front rather
//! than truncated on the bus.

use heapless::Vec;

use crate::error::MessageError;

/// Receive buffer capacity of the peripheral.
pub const MAX_LEN: usize = 16;

/// A validated message of 1 to [`MAX_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    bytes: Vec<u8, MAX_LEN>,
}

impl Message {
    pub fn new(text: &str) -> Result<Self, MessageError> {
        let len = text.chars().count();
        if len == 0 {
            return Err(MessageError::Empty);
        }
        if len > MAX_LEN {
            return Err(MessageError::TooLong { len });
        }

        let mut bytes = Vec::new();
        for (index, ch) in text.chars().enumerate() {
            let Ok(byte) = u8::try_from(ch) else {
                return Err(MessageError::Unencodable { ch, index });
            };
            bytes
                .push(byte)
                .map_err(|_| MessageError::TooLong { len })?;
        }
        Ok(Self { bytes })
    }

    /// First byte, consumed by the peripheral as a register index.
    pub fn command(&self) -> u8 {
        // Non-empty by construction.
        self.bytes[0]
    }

    /// Everything after the command byte.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// Turn reply bytes back into text, one character per byte.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
