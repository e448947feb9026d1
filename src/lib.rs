//! Write a short message to an I2C peripheral and read back its reply.
//!
//! The peripheral on the other end upper-cases what it receives, so a
//! correct reply proves both directions of the bus work.

mod eh_i2c;
pub mod error;
pub mod linux;
pub mod message;
pub mod session;
pub mod sim;

pub use error::{BusError, MessageError, SimError};
pub use linux::{open, LinuxI2c, StdDelay};
pub use message::{Message, MAX_LEN};
pub use session::{Session, SETTLE_TIME_MS};
pub use sim::EchoPeripheral;

/// Open bus `port`, exchange `message` with the device at `address`, and
/// return the decoded reply.
///
/// The bus is closed before returning, whether or not the exchange worked.
pub fn write_and_read(address: u8, port: u32, message: &Message) -> Result<String, BusError> {
    let bus = open(port)?;
    Session::new(bus, StdDelay, address).exchange(message)
}
