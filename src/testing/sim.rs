use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, I2c, Operation};
use embedded_hal::spi::{self, SpiBus};
use embedded_hal::spi::ErrorKind as SpiErrorKind;

use crate::registers::{EXPECTED_DEVID, REG_BW_RATE, REG_DEVID};

const ADDRESS_MASK: u8 = 0x3F;
const SPI_READ: u8 = 0x80;
const SPI_MULTI_BYTE: u8 = 0x40;

/// The 64 addressable registers of the part, with power-on values.
#[derive(Clone, Debug)]
pub(crate) struct RegisterFile {
    regs: [u8; 64],
}

impl Default for RegisterFile {
    fn default() -> Self {
        let mut regs = [0u8; 64];
        regs[REG_DEVID as usize] = EXPECTED_DEVID;
        regs[REG_BW_RATE as usize] = 0x0A;
        Self { regs }
    }
}

impl RegisterFile {
    pub(crate) fn get(&self, reg: u8) -> u8 {
        self.regs[(reg & ADDRESS_MASK) as usize]
    }

    pub(crate) fn set(&mut self, reg: u8, value: u8) {
        self.regs[(reg & ADDRESS_MASK) as usize] = value;
    }
}

const fn next_register(reg: u8) -> u8 {
    reg.wrapping_add(1) & ADDRESS_MASK
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum I2cOp {
    Write(Vec<u8>),
    Read(usize),
}

/// One START..STOP exchange seen on the simulated I2C bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct I2cRecord {
    pub(crate) address: u8,
    pub(crate) ops: Vec<I2cOp>,
}

/// I2C bus with an ADXL345 attached at `address`.
///
/// The register pointer survives across transactions the way the part's does.
pub(crate) struct SimI2c {
    pub(crate) regs: RegisterFile,
    address: u8,
    pointer: u8,
    transactions: Vec<I2cRecord>,
}

impl SimI2c {
    pub(crate) fn new(address: u8) -> Self {
        Self {
            regs: RegisterFile::default(),
            address,
            pointer: 0,
            transactions: Vec::new(),
        }
    }

    pub(crate) fn transactions(&self) -> &[I2cRecord] {
        &self.transactions
    }
}

impl i2c::ErrorType for SimI2c {
    type Error = Infallible;
}

impl I2c for SimI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        assert_eq!(address, self.address, "transaction addressed to another device");

        let mut ops = Vec::new();
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    if let Some((reg, data)) = bytes.split_first() {
                        self.pointer = reg & ADDRESS_MASK;
                        for value in data {
                            self.regs.set(self.pointer, *value);
                            self.pointer = next_register(self.pointer);
                        }
                    }
                    ops.push(I2cOp::Write(bytes.to_vec()));
                }
                Operation::Read(buf) => {
                    for slot in buf.iter_mut() {
                        *slot = self.regs.get(self.pointer);
                        self.pointer = next_register(self.pointer);
                    }
                    ops.push(I2cOp::Read(buf.len()));
                }
            }
        }

        self.transactions.push(I2cRecord { address, ops });
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SpiEvent {
    Select,
    Deselect,
    Byte { mosi: u8, miso: u8 },
    Flush,
}

#[derive(Default)]
struct SpiWire {
    regs: RegisterFile,
    selected: bool,
    bus_failure: bool,
    command: Option<u8>,
    pointer: u8,
    events: Vec<SpiEvent>,
}

impl SpiWire {
    fn check_bus(&self) -> Result<(), SpiErrorKind> {
        if self.bus_failure { Err(SpiErrorKind::Other) } else { Ok(()) }
    }

    fn exchange(&mut self, mosi: u8) -> u8 {
        assert!(self.selected, "byte clocked while chip-select is inactive");

        let miso = match self.command {
            None => {
                self.command = Some(mosi);
                self.pointer = mosi & ADDRESS_MASK;
                0
            }
            Some(command) => {
                let value = if command & SPI_READ != 0 {
                    self.regs.get(self.pointer)
                } else {
                    self.regs.set(self.pointer, mosi);
                    0
                };
                if command & SPI_MULTI_BYTE != 0 {
                    self.pointer = next_register(self.pointer);
                }
                value
            }
        };

        self.events.push(SpiEvent::Byte { mosi, miso });
        miso
    }
}

/// SPI bus half of the simulated part.
pub(crate) struct SimSpi {
    wire: Rc<RefCell<SpiWire>>,
}

/// Chip-select line of the simulated part.
pub(crate) struct SimCs {
    wire: Rc<RefCell<SpiWire>>,
}

/// Test-side view of the simulated SPI part.
#[derive(Clone)]
pub(crate) struct SpiMonitor {
    wire: Rc<RefCell<SpiWire>>,
}

/// Builds a bus, chip-select pin and monitor sharing one simulated part.
pub(crate) fn sim_spi() -> (SimSpi, SimCs, SpiMonitor) {
    let wire = Rc::new(RefCell::new(SpiWire::default()));
    (
        SimSpi { wire: wire.clone() },
        SimCs { wire: wire.clone() },
        SpiMonitor { wire },
    )
}

impl SpiMonitor {
    pub(crate) fn events(&self) -> Vec<SpiEvent> {
        self.wire.borrow().events.clone()
    }

    pub(crate) fn clear_events(&self) {
        self.wire.borrow_mut().events.clear();
    }

    pub(crate) fn register(&self, reg: u8) -> u8 {
        self.wire.borrow().regs.get(reg)
    }

    pub(crate) fn set_register(&self, reg: u8, value: u8) {
        self.wire.borrow_mut().regs.set(reg, value);
    }

    /// Makes every bus call fail with `ErrorKind::Other` without clocking bytes.
    pub(crate) fn set_bus_failure(&self, fail: bool) {
        self.wire.borrow_mut().bus_failure = fail;
    }

    pub(crate) fn selected(&self) -> bool {
        self.wire.borrow().selected
    }

    /// MOSI bytes of every chip-select window, in order.
    pub(crate) fn frames(&self) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        for event in self.wire.borrow().events.iter() {
            match event {
                SpiEvent::Select => frames.push(Vec::new()),
                SpiEvent::Byte { mosi, .. } => {
                    if let Some(frame) = frames.last_mut() {
                        frame.push(*mosi);
                    }
                }
                SpiEvent::Deselect | SpiEvent::Flush => {}
            }
        }
        frames
    }
}

impl spi::ErrorType for SimSpi {
    type Error = SpiErrorKind;
}

impl SpiBus for SimSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.check_bus()?;
        for word in words.iter_mut() {
            *word = wire.exchange(0x00);
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.check_bus()?;
        for word in words {
            wire.exchange(*word);
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.check_bus()?;
        for index in 0..read.len().max(write.len()) {
            let miso = wire.exchange(write.get(index).copied().unwrap_or(0x00));
            if let Some(slot) = read.get_mut(index) {
                *slot = miso;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.check_bus()?;
        for word in words.iter_mut() {
            *word = wire.exchange(*word);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.check_bus()?;
        wire.events.push(SpiEvent::Flush);
        Ok(())
    }
}

impl digital::ErrorType for SimCs {
    type Error = Infallible;
}

impl OutputPin for SimCs {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.selected = true;
        wire.command = None;
        wire.events.push(SpiEvent::Select);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut wire = self.wire.borrow_mut();
        wire.selected = false;
        wire.events.push(SpiEvent::Deselect);
        Ok(())
    }
}
