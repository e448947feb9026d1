//! In-process stand-in for the echo peripheral.
//!
//! Behaves like the reference target firmware: every non-zero write is
//! upper-cased into a transmit FIFO of [`MAX_LEN`] bytes and handed back on
//! the following reads.

use std::collections::VecDeque;

use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
use tracing::{debug, warn};

use crate::error::SimError;
use crate::message::MAX_LEN;

#[derive(Debug, Clone)]
pub struct EchoPeripheral {
    address: u8,
    tx_fifo: VecDeque<u8>,
}

impl EchoPeripheral {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            tx_fifo: VecDeque::with_capacity(MAX_LEN),
        }
    }

    /// Queue bytes as if left behind by an earlier exchange nobody read.
    pub fn preload(&mut self, stale: &[u8]) {
        self.fill(stale.iter().copied());
    }

    /// Bytes waiting in the transmit FIFO.
    pub fn pending(&self) -> usize {
        self.tx_fifo.len()
    }

    fn fill(&mut self, bytes: impl Iterator<Item = u8>) {
        self.tx_fifo.clear();
        for (n, byte) in bytes.enumerate() {
            if n == MAX_LEN {
                warn!("reply exceeds the {MAX_LEN} byte transmit FIFO, truncating");
                break;
            }
            self.tx_fifo.push_back(byte);
        }
    }

    fn receive(&mut self, bytes: &[u8]) {
        // A lone register index (all zeroes) carries no message.
        if bytes.iter().all(|&b| b == 0x00) {
            return;
        }
        debug!(received = bytes.len(), "peripheral received message");
        self.fill(bytes.iter().map(u8::to_ascii_uppercase));
    }

    fn transmit(&mut self, buffer: &mut [u8]) {
        for byte in buffer.iter_mut() {
            *byte = self.tx_fifo.pop_front().unwrap_or_default();
        }
    }
}

impl ErrorType for EchoPeripheral {
    type Error = SimError;
}

impl I2c<SevenBitAddress> for EchoPeripheral {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != self.address {
            return Err(SimError::NoAcknowledge { address });
        }
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.receive(bytes),
                Operation::Read(buffer) => self.transmit(buffer),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_upper_case() {
        let mut peripheral = EchoPeripheral::new(0x0f);
        peripheral.write(0x0f, b"Hi there").unwrap();

        let mut reply = [0u8; 8];
        peripheral.write_read(0x0f, &[0], &mut reply).unwrap();
        assert_eq!(&reply, b"HI THERE");
    }

    #[test]
    fn register_only_writes_are_ignored() {
        let mut peripheral = EchoPeripheral::new(0x0f);
        peripheral.write(0x0f, b"abc").unwrap();
        peripheral.write(0x0f, &[0, 0]).unwrap();
        assert_eq!(peripheral.pending(), 3);
    }

    #[test]
    fn empty_fifo_reads_zero() {
        let mut peripheral = EchoPeripheral::new(0x0f);
        let mut reply = [0xffu8; 2];
        peripheral.read(0x0f, &mut reply).unwrap();
        assert_eq!(reply, [0, 0]);
    }

    #[test]
    fn fifo_holds_sixteen_bytes() {
        let mut peripheral = EchoPeripheral::new(0x0f);
        peripheral.write(0x0f, b"0123456789abcdefXYZ").unwrap();
        assert_eq!(peripheral.pending(), MAX_LEN);
    }

    #[test]
    fn other_addresses_are_not_acknowledged() {
        let mut peripheral = EchoPeripheral::new(0x0f);
        assert_eq!(
            peripheral.write(0x20, b"Hi"),
            Err(SimError::NoAcknowledge { address: 0x20 })
        );
        assert_eq!(peripheral.pending(), 0);
    }
}
