use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use tracing::{debug, warn};

use crate::message::{self, Message, MAX_LEN};

/// Register the peripheral's reply is read from.
const READ_REGISTER: u8 = 0x00;

/// Time the peripheral gets between the write and the read.
///
/// This is a fixed sleep, not a handshake: nothing confirms the peripheral
/// has finished. A slower peripheral will hand back stale or empty bytes.
pub const SETTLE_TIME_MS: u32 = 200;

/// One write-then-read exchange with a peripheral.
///
/// The session owns the bus for its whole life; dropping it drops the bus.
pub struct Session<B, D> {
    bus: B,
    delay: D,
    address: u8,
}

impl<B: I2c, D: DelayNs> Session<B, D> {
    pub fn new(bus: B, delay: D, address: u8) -> Self {
        Self {
            bus,
            delay,
            address,
        }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Drain bytes left over from an earlier, unread exchange.
    ///
    /// Issues at most [`MAX_LEN`] single-byte reads. The first failed read
    /// ends the drain; the failure is logged and never returned. Returns the
    /// number of bytes discarded.
    pub fn flush(&mut self) -> usize {
        let mut drained = 0;
        for _ in 0..MAX_LEN {
            let mut discard = [0u8; 1];
            if let Err(err) = self
                .bus
                .write_read(self.address, &[READ_REGISTER], &mut discard)
            {
                warn!("Error flushing I2C: {err:?}");
                break;
            }
            drained += 1;
        }
        debug!(drained, "flush complete");
        drained
    }

    /// Flush, write `message`, settle, then read back a reply of the same length.
    pub fn exchange(&mut self, message: &Message) -> Result<String, B::Error> {
        self.flush();

        // Command byte then payload, as a single write.
        debug!(
            address = self.address,
            command = message.command(),
            payload = ?message.payload(),
            "write"
        );
        self.bus.write(self.address, message.as_bytes())?;

        self.delay.delay_ms(SETTLE_TIME_MS);

        let mut reply = [0u8; MAX_LEN];
        let reply = &mut reply[..message.len()];
        self.bus.write_read(self.address, &[READ_REGISTER], reply)?;
        debug!(address = self.address, ?reply, "read");

        Ok(message::decode(reply))
    }

    /// End the session and hand the bus back.
    pub fn release(self) -> B {
        self.bus
    }
}
