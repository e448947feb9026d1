use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

use i2c_echo::{EchoPeripheral, Message, Session, SimError, MAX_LEN};

#[test]
fn hello_world_comes_back_capitalized() {
    let message = Message::new("Hello World!").unwrap();
    let mut session = Session::new(EchoPeripheral::new(0x0f), NoopDelay::new(), 0x0f);

    assert_eq!(session.exchange(&message).unwrap(), "HELLO WORLD!");
}

#[test]
fn stale_reply_is_flushed_before_writing() {
    let mut peripheral = EchoPeripheral::new(0x0f);
    peripheral.preload(b"LEFTOVER");

    let mut session = Session::new(peripheral, NoopDelay::new(), 0x0f);
    assert_eq!(session.flush(), MAX_LEN);
    assert_eq!(session.release().pending(), 0);

    let mut peripheral = EchoPeripheral::new(0x0f);
    peripheral.preload(b"LEFTOVER");
    let mut session = Session::new(peripheral, NoopDelay::new(), 0x0f);
    let message = Message::new("Hi").unwrap();
    assert_eq!(session.exchange(&message).unwrap(), "HI");
}

#[test]
fn absent_peripheral_fails_the_write_after_flush() {
    let message = Message::new("Hi").unwrap();
    let mut session = Session::new(EchoPeripheral::new(0x0f), NoopDelay::new(), 0x20);

    assert_eq!(
        session.exchange(&message),
        Err(SimError::NoAcknowledge { address: 0x20 })
    );
}

#[test]
fn failed_flush_still_writes_and_reads() {
    let expectations = [
        I2cTransaction::write_read(0x0f, vec![0x00], vec![0x00]).with_error(ErrorKind::Other),
        I2cTransaction::write(0x0f, b"Capitalize me!".to_vec()),
        I2cTransaction::write_read(0x0f, vec![0x00], b"CAPITALIZE ME!".to_vec()),
    ];
    let message = Message::new("Capitalize me!").unwrap();
    let mut session = Session::new(I2cMock::new(&expectations), NoopDelay::new(), 0x0f);

    assert_eq!(session.exchange(&message).unwrap(), "CAPITALIZE ME!");

    session.release().done();
}

#[test]
fn read_failure_is_returned() {
    let expectations = [
        I2cTransaction::write_read(0x0f, vec![0x00], vec![0x00]).with_error(ErrorKind::Other),
        I2cTransaction::write(0x0f, b"Hi".to_vec()),
        I2cTransaction::write_read(0x0f, vec![0x00], vec![0x00, 0x00]).with_error(ErrorKind::Bus),
    ];
    let message = Message::new("Hi").unwrap();
    let mut session = Session::new(I2cMock::new(&expectations), NoopDelay::new(), 0x0f);

    assert_eq!(session.exchange(&message), Err(ErrorKind::Bus));

    session.release().done();
}
