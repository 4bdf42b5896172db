//! Strongly typed parameter enumerations for the ADXL345 driver.
//!
//! These enums map directly to datasheet field encodings and are used across
//! [`Config`](crate::config::Config) and the register bitfields in
//! [`registers`](crate::registers).
//!
//! # Examples
//!
//! ```rust
//! use adxl345::params::{OutputDataRate, Range};
//!
//! let odr = OutputDataRate::Hz100;
//! let range = Range::G4;
//! assert_eq!(odr.millihertz(), 100_000);
//! let _ = range;
//! ```

use modular_bitfield::prelude::Specifier;

/// Output data rate codes of `BW_RATE.RATE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 4]
pub enum OutputDataRate {
    /// 0.10 Hz.
    Hz0_10 = 0x0,
    /// 0.20 Hz.
    Hz0_20 = 0x1,
    /// 0.39 Hz.
    Hz0_39 = 0x2,
    /// 0.78 Hz.
    Hz0_78 = 0x3,
    /// 1.56 Hz.
    Hz1_56 = 0x4,
    /// 3.13 Hz.
    Hz3_13 = 0x5,
    /// 6.25 Hz.
    Hz6_25 = 0x6,
    /// 12.5 Hz.
    Hz12_5 = 0x7,
    /// 25 Hz.
    Hz25 = 0x8,
    /// 50 Hz.
    Hz50 = 0x9,
    /// 100 Hz (power-on default).
    Hz100 = 0xA,
    /// 200 Hz.
    Hz200 = 0xB,
    /// 400 Hz.
    Hz400 = 0xC,
    /// 800 Hz.
    Hz800 = 0xD,
    /// 1600 Hz.
    Hz1600 = 0xE,
    /// 3200 Hz.
    Hz3200 = 0xF,
}

impl OutputDataRate {
    /// Returns the nominal output data rate in millihertz.
    pub const fn millihertz(self) -> u32 {
        match self {
            Self::Hz0_10 => 100,
            Self::Hz0_20 => 200,
            Self::Hz0_39 => 390,
            Self::Hz0_78 => 780,
            Self::Hz1_56 => 1_560,
            Self::Hz3_13 => 3_130,
            Self::Hz6_25 => 6_250,
            Self::Hz12_5 => 12_500,
            Self::Hz25 => 25_000,
            Self::Hz50 => 50_000,
            Self::Hz100 => 100_000,
            Self::Hz200 => 200_000,
            Self::Hz400 => 400_000,
            Self::Hz800 => 800_000,
            Self::Hz1600 => 1_600_000,
            Self::Hz3200 => 3_200_000,
        }
    }

    /// Whether `BW_RATE.LOW_POWER` may be combined with this rate.
    ///
    /// Reduced power operation is only specified from 12.5 Hz to 400 Hz.
    pub const fn supports_low_power(self) -> bool {
        let code = self as u8;
        code >= Self::Hz12_5 as u8 && code <= Self::Hz400 as u8
    }
}

/// Measurement range of `DATA_FORMAT.RANGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum Range {
    /// ±2 g.
    G2 = 0b00,
    /// ±4 g.
    G4 = 0b01,
    /// ±8 g.
    G8 = 0b10,
    /// ±16 g.
    G16 = 0b11,
}

/// Sampling frequency while asleep, `POWER_CTL.WAKEUP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
#[bits = 2]
pub enum WakeupFrequency {
    /// 8 Hz.
    Hz8 = 0b00,
    /// 4 Hz.
    Hz4 = 0b01,
    /// 2 Hz.
    Hz2 = 0b10,
    /// 1 Hz.
    Hz1 = 0b11,
}
