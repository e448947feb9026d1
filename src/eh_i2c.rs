use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
use i2cdev::core::{I2CMessage, I2CTransfer};
use i2cdev::linux::LinuxI2CMessage;

use crate::{error::BusError, linux::LinuxI2c};

impl ErrorType for LinuxI2c {
    type Error = BusError;
}

impl I2c<SevenBitAddress> for LinuxI2c {
    /// Runs all operations as one `I2C_RDWR` transfer, so a write followed
    /// by a read is joined by a repeated start rather than a stop.
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut messages: Vec<_> = operations
            .iter_mut()
            .map(|operation| match operation {
                Operation::Write(bytes) => LinuxI2CMessage::write(bytes),
                Operation::Read(buffer) => LinuxI2CMessage::read(buffer),
            })
            .map(|message| message.with_address(address.into()))
            .collect();

        self.bus.transfer(&mut messages)?;
        Ok(())
    }
}
