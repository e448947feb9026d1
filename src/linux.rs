use std::path::PathBuf;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use i2cdev::linux::LinuxI2CBus;
use tracing::debug;

use crate::error::BusError;

/// An open Linux I2C adapter, `/dev/i2c-N`.
///
/// The device file is closed when this is dropped.
pub struct LinuxI2c {
    pub(crate) bus: LinuxI2CBus,
}

/// Character device for bus number `port`.
pub fn device_path(port: u32) -> PathBuf {
    PathBuf::from(format!("/dev/i2c-{port}"))
}

pub fn open(port: u32) -> Result<LinuxI2c, BusError> {
    let path = device_path(port);
    let bus = LinuxI2CBus::new(&path).map_err(|source| BusError::Open {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "opened I2C bus");
    Ok(LinuxI2c { bus })
}

/// Blocking delay backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns.into()));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms.into()));
    }
}
