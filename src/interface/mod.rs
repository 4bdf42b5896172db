//! Bus interface abstraction for the ADXL345 driver.
//!
//! The communication mode is chosen by picking one of the concrete
//! interfaces at construction time; the device never switches buses.

pub mod i2c;
pub mod spi;

pub use i2c::{I2cAddress, I2cInterface};
pub use spi::{SpiError, SpiInterface};

/// Abstraction over the low-level bus access required by the driver.
pub trait Adxl345Interface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error>;

    /// Reads multiple consecutive registers into the provided buffer.
    ///
    /// An empty buffer performs no bus activity.
    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;
}
