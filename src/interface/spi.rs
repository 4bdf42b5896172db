//! SPI interface implementation built on top of `embedded-hal` `SpiBus`.
//!
//! The driver owns the chip-select line and keeps it low for exactly one
//! register transaction at a time.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{Mode, SpiBus, MODE_3};

use super::Adxl345Interface;

/// Clock mode required by the ADXL345 (CPOL = 1, CPHA = 1).
pub const MODE: Mode = MODE_3;

const READ: u8 = 0x80;
const MULTI_BYTE: u8 = 0x40;
const ADDRESS_MASK: u8 = 0x3F;
const DUMMY: u8 = 0x00;

/// Errors raised by [`SpiInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiError<SpiE, PinE> {
    /// The SPI bus reported an error.
    Spi(SpiE),
    /// Driving the chip-select line failed.
    ChipSelect(PinE),
}

/// Builds the command byte that starts a read of `count` registers.
const fn read_command(register: u8, count: usize) -> u8 {
    let command = (register & ADDRESS_MASK) | READ;
    if count > 1 { command | MULTI_BYTE } else { command }
}

/// Builds the command byte that starts a single-register write.
const fn write_command(register: u8) -> u8 {
    register & ADDRESS_MASK
}

/// SPI-based interface implementation for the ADXL345 driver.
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS>
where
    CS: OutputPin,
{
    /// Creates a new interface and deselects the device.
    ///
    /// The bus must already be configured for [`MODE`]. A failure to drive
    /// the chip-select line here surfaces on the first transaction instead.
    pub fn new(spi: SPI, mut cs: CS) -> Self {
        let _ = cs.set_high();
        Self { spi, cs }
    }
}

impl<SPI, CS> SpiInterface<SPI, CS> {
    /// Provides mutable access to the wrapped SPI bus.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned bus and chip-select pin.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Runs `f` with the chip selected, flushing before deselecting.
    ///
    /// Chip-select is released even when the bus operation fails.
    fn transaction<R, F>(&mut self, f: F) -> core::result::Result<R, SpiError<SPI::Error, CS::Error>>
    where
        F: FnOnce(&mut SPI) -> core::result::Result<R, SPI::Error>,
    {
        self.cs.set_low().map_err(SpiError::ChipSelect)?;
        let result = f(&mut self.spi).and_then(|value| self.spi.flush().map(|()| value));
        let deselect = self.cs.set_high().map_err(SpiError::ChipSelect);

        let value = result.map_err(SpiError::Spi)?;
        deselect?;
        Ok(value)
    }
}

impl<SPI, CS> Adxl345Interface for SpiInterface<SPI, CS>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    type Error = SpiError<SPI::Error, CS::Error>;

    fn write_register(&mut self, register: u8, value: u8) -> core::result::Result<(), Self::Error> {
        let frame = [write_command(register), value];
        self.transaction(|spi| spi.write(&frame))
    }

    fn read_register(&mut self, register: u8) -> core::result::Result<u8, Self::Error> {
        let mut frame = [read_command(register, 1), DUMMY];
        self.transaction(|spi| spi.transfer_in_place(&mut frame))?;
        Ok(frame[1])
    }

    fn read_many(&mut self, register: u8, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        let command = [read_command(register, buf.len())];
        trace!("spi burst read cmd={=u8:#x} len={=usize}", command[0], buf.len());
        buf.fill(DUMMY);
        self.transaction(|spi| {
            spi.write(&command)?;
            spi.transfer_in_place(buf)
        })
    }
}
