//! `#![no_std]` register-level driver for the Analog Devices ADXL345
//! accelerometer over I2C or SPI, built on `embedded-hal` 1.0.
//!
//! The bus is selected by construction: [`Adxl345::new_i2c`] talks to the
//! part at a fixed 7-bit address, [`Adxl345::new_spi`] owns the SPI bus and
//! the chip-select pin. All register access goes through
//! [`Adxl345::write_register`], [`Adxl345::read_register`] and
//! [`Adxl345::read_registers`]; [`Adxl345::best_effort`] offers the same
//! three operations without error reporting.
//!
//! ```rust
//! use adxl345::{Adxl345, Config, I2cAddress};
//! use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
//!
//! let expectations = [Transaction::write_read(0x53, vec![0x00], vec![0xE5])];
//! let mut imu = Adxl345::new_i2c(Mock::new(&expectations), I2cAddress::Primary, Config::default());
//! assert_eq!(imu.device_id().unwrap(), 0xE5);
//!
//! let (mut i2c, _) = imu.release_i2c();
//! i2c.done();
//! ```
#![cfg_attr(not(test), no_std)]

mod log;

mod error;

pub mod best_effort;
pub mod config;
pub mod device;
pub mod interface;
pub mod params;
pub mod registers;


pub use crate::best_effort::BestEffort;
pub use crate::config::Config;
pub use crate::device::Adxl345;
pub use crate::error::{Error, Result};
pub use crate::interface::{I2cAddress, I2cInterface, SpiError, SpiInterface};
