//! Configuration primitives for the ADXL345 driver.

use crate::params::{OutputDataRate, Range};

/// User-facing configuration for the ADXL345 sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Output data rate selection.
    pub data_rate: OutputDataRate,
    /// Reduced power operation (`BW_RATE.LOW_POWER`).
    pub low_power: bool,
    /// Measurement range.
    pub range: Range,
    /// Full resolution output (`DATA_FORMAT.FULL_RES`).
    pub full_resolution: bool,
    /// Leave the device measuring after it has been configured.
    pub measure: bool,
}

impl Config {
    /// Begins building a [`Config`] using the builder pattern.
    pub fn new() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks whether this configuration is valid according to datasheet rules.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if self.low_power && !self.data_rate.supports_low_power() {
            return Err(ConfigError::LowPowerRate);
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder seeded with [`Config::default()`].
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Overrides the output data rate.
    pub fn data_rate(mut self, data_rate: OutputDataRate) -> Self {
        self.config.data_rate = data_rate;
        self
    }

    /// Enables or disables reduced power operation.
    pub fn low_power(mut self, low_power: bool) -> Self {
        self.config.low_power = low_power;
        self
    }

    /// Overrides the measurement range.
    pub fn range(mut self, range: Range) -> Self {
        self.config.range = range;
        self
    }

    /// Enables or disables full resolution output.
    pub fn full_resolution(mut self, full_resolution: bool) -> Self {
        self.config.full_resolution = full_resolution;
        self
    }

    /// Chooses between measurement and standby after configuration.
    pub fn measure(mut self, measure: bool) -> Self {
        self.config.measure = measure;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_rate: OutputDataRate::Hz100,
            low_power: false,
            range: Range::G2,
            full_resolution: false,
            measure: true,
        }
    }
}

/// Validation errors generated while verifying a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Reduced power operation requested outside the 12.5 Hz to 400 Hz window.
    LowPowerRate,
}
