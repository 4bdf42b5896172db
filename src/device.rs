//! High-level ADXL345 device driver implementation.

use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiBus;

use crate::best_effort::BestEffort;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::interface::{Adxl345Interface, I2cAddress, I2cInterface, SpiInterface};
use crate::params::{OutputDataRate, Range};
use crate::registers::{
    BwRate,
    DataFormat,
    PowerControl,
    Register,
    EXPECTED_DEVID,
    REG_DATAX0,
    REG_DEVID,
};

// Number of consecutive bytes spanning X, Y, Z axis samples.
const RAW_AXIS_BYTES: usize = 6;

/// Synchronous driver for the ADXL345 accelerometer.
///
/// The bus is fixed by the interface type chosen at construction; every
/// operation runs one blocking transaction on it.
pub struct Adxl345<IFACE> {
    interface: IFACE,
    config: Config,
}

impl<IFACE> Adxl345<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new driver instance from the provided bus interface.
    pub fn new(interface: IFACE, config: Config) -> Self {
        Self { interface, config }
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> (IFACE, Config) {
        (self.interface, self.config)
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns a shared reference to the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<I2C> Adxl345<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Convenience constructor for I2C transports.
    pub fn new_i2c(i2c: I2C, address: I2cAddress, config: Config) -> Self {
        Self::new(I2cInterface::new(i2c, address), config)
    }

    /// Releases the driver, returning the I2C bus and configuration.
    pub fn release_i2c(self) -> (I2C, Config) {
        let (iface, config) = self.release();
        (iface.release(), config)
    }
}

impl<SPI, CS> Adxl345<SpiInterface<SPI, CS>>
where
    SPI: SpiBus,
    CS: OutputPin,
{
    /// Convenience constructor for SPI transports.
    ///
    /// `spi` must be configured for [`interface::spi::MODE`](crate::interface::spi::MODE);
    /// `cs` is driven high (deselected) immediately.
    pub fn new_spi(spi: SPI, cs: CS, config: Config) -> Self {
        Self::new(SpiInterface::new(spi, cs), config)
    }

    /// Releases the driver, returning the SPI bus, chip-select pin and configuration.
    pub fn release_spi(self) -> (SPI, CS, Config) {
        let (iface, config) = self.release();
        let (spi, cs) = iface.release();
        (spi, cs, config)
    }
}

impl<IFACE, CommE> Adxl345<IFACE>
where
    IFACE: Adxl345Interface<Error = CommE>,
{
    // ==================================================================
    // == Register Access ================================================
    // ==================================================================
    /// Writes `value` to `register`.
    pub fn write_register(&mut self, register: u8, value: u8) -> Result<(), CommE> {
        self
            .interface
            .write_register(register, value)
            .map_err(Error::from)
    }

    /// Reads a single register.
    pub fn read_register(&mut self, register: u8) -> Result<u8, CommE> {
        self.interface.read_register(register).map_err(Error::from)
    }

    /// Reads `buf.len()` consecutive registers starting at `register`.
    ///
    /// An empty buffer is rejected with [`Error::InvalidArgument`] before
    /// touching the bus.
    pub fn read_registers(&mut self, register: u8, buf: &mut [u8]) -> Result<(), CommE> {
        if buf.is_empty() {
            return Err(Error::InvalidArgument);
        }

        self.interface.read_many(register, buf).map_err(Error::from)
    }

    /// Borrows the driver in fire-and-forget mode, where bus failures are
    /// logged and dropped instead of returned.
    pub fn best_effort(&mut self) -> BestEffort<'_, IFACE> {
        BestEffort::new(self)
    }

    // ==================================================================
    // == Initialization & Global Configuration ==========================
    // ==================================================================
    /// Verifies the device identity and applies the stored configuration.
    pub fn init(&mut self) -> Result<(), CommE> {
        let devid = self.check_device_id()?;
        debug!("adxl345 found, devid={=u8:#x}", devid);

        self.configure(self.config)
    }

    /// Applies a new configuration to the device.
    ///
    /// The part is placed in standby while `BW_RATE` and `DATA_FORMAT` are
    /// programmed, then returned to measurement if the configuration asks for it.
    pub fn configure(&mut self, config: Config) -> Result<(), CommE> {
        config.validate().map_err(|_| Error::InvalidConfig)?;

        self.modify::<PowerControl>(|power| power.set_measure(false))?;
        self.modify::<BwRate>(|bw_rate| {
            bw_rate.set_rate(config.data_rate);
            bw_rate.set_low_power(config.low_power);
        })?;
        self.modify::<DataFormat>(|format| {
            format.set_range(config.range);
            format.set_full_resolution(config.full_resolution);
        })?;
        if config.measure {
            self.modify::<PowerControl>(|power| power.set_measure(true))?;
        }

        self.config = config;
        Ok(())
    }

    // ==================================================================
    // == Identification =================================================
    // ==================================================================
    /// Reads the raw `DEVID` register.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.read_register(REG_DEVID)
    }

    /// Verifies `DEVID` against the ADXL345 identifier and returns it.
    pub fn check_device_id(&mut self) -> Result<u8, CommE> {
        let devid = self.device_id()?;
        if devid != EXPECTED_DEVID {
            warn!("unexpected devid {=u8:#x}", devid);
            return Err(Error::DeviceIdMismatch(devid));
        }

        Ok(devid)
    }

    // ==================================================================
    // == Power & Measurement Configuration =============================
    // ==================================================================
    /// Updates the output data rate and reduced power selection.
    pub fn set_data_rate(&mut self, data_rate: OutputDataRate, low_power: bool) -> Result<(), CommE> {
        let candidate = Config {
            data_rate,
            low_power,
            ..self.config
        };
        candidate.validate().map_err(|_| Error::InvalidConfig)?;

        self.modify::<BwRate>(|bw_rate| {
            bw_rate.set_rate(data_rate);
            bw_rate.set_low_power(low_power);
        })?;
        self.config = candidate;
        Ok(())
    }

    /// Updates the measurement range.
    pub fn set_range(&mut self, range: Range) -> Result<(), CommE> {
        self.modify::<DataFormat>(|format| format.set_range(range))?;
        self.config.range = range;
        Ok(())
    }

    /// Sets `POWER_CTL.MEASURE`, starting conversions.
    pub fn start_measurement(&mut self) -> Result<(), CommE> {
        self.modify::<PowerControl>(|power| power.set_measure(true))?;
        self.config.measure = true;
        Ok(())
    }

    /// Clears `POWER_CTL.MEASURE`, returning the part to standby.
    pub fn standby(&mut self) -> Result<(), CommE> {
        self.modify::<PowerControl>(|power| power.set_measure(false))?;
        self.config.measure = false;
        Ok(())
    }

    // ==================================================================
    // == Data Acquisition ===============================================
    // ==================================================================
    /// Reads a raw acceleration triplet from `DATAX0..DATAZ1` in one burst.
    pub fn read_xyz_raw(&mut self) -> Result<[i16; 3], CommE> {
        let mut raw = [0u8; RAW_AXIS_BYTES];
        self.read_registers(REG_DATAX0, &mut raw)?;

        let x = i16::from_le_bytes([raw[0], raw[1]]);
        let y = i16::from_le_bytes([raw[2], raw[3]]);
        let z = i16::from_le_bytes([raw[4], raw[5]]);

        Ok([x, y, z])
    }

    // ==================================================================
    // == Internal Configuration Helpers =================================
    // ==================================================================
    fn modify<R>(&mut self, mutate: impl FnOnce(&mut R)) -> Result<R, CommE>
    where
        R: Register<Raw = u8> + From<u8> + Into<u8> + Copy,
    {
        let current = self.read_register(R::ADDRESS)?;

        let mut value = R::from(current);
        mutate(&mut value);

        let updated: u8 = value.into();
        if updated != current {
            self.write_register(R::ADDRESS, updated)?;
        }

        Ok(value)
    }
}
