//! Fire-and-forget register access.
//!
//! [`BestEffort`] never reports bus failures: writes are dropped, reads yield
//! `0x00`, and an absent buffer turns a burst read into a no-op. Every
//! swallowed failure is logged at warn level. No operation is retried.

use crate::device::Adxl345;
use crate::interface::Adxl345Interface;

/// Value returned by [`BestEffort::read_register`] when the bus fails.
pub const FAILED_READ_VALUE: u8 = 0x00;

/// Borrowed view of an [`Adxl345`] that silences bus errors.
pub struct BestEffort<'a, IFACE> {
    device: &'a mut Adxl345<IFACE>,
}

impl<'a, IFACE> BestEffort<'a, IFACE> {
    pub(crate) fn new(device: &'a mut Adxl345<IFACE>) -> Self {
        Self { device }
    }
}

impl<IFACE, CommE> BestEffort<'_, IFACE>
where
    IFACE: Adxl345Interface<Error = CommE>,
{
    /// Writes `value` to `register`, dropping the write if the bus fails.
    pub fn write_register(&mut self, register: u8, value: u8) {
        if self.device.write_register(register, value).is_err() {
            warn!("write of register {=u8:#x} dropped", register);
        }
    }

    /// Reads `register`, yielding [`FAILED_READ_VALUE`] if the bus fails.
    pub fn read_register(&mut self, register: u8) -> u8 {
        match self.device.read_register(register) {
            Ok(value) => value,
            Err(_) => {
                warn!("read of register {=u8:#x} failed", register);
                FAILED_READ_VALUE
            }
        }
    }

    /// Reads consecutive registers into `buf`.
    ///
    /// `None` or an empty buffer performs no bus activity. After a failed
    /// burst the buffer contents are unspecified.
    pub fn read_registers(&mut self, register: u8, buf: Option<&mut [u8]>) {
        let Some(buf) = buf.filter(|buf| !buf.is_empty()) else {
            return;
        };

        if self.device.read_registers(register, buf).is_err() {
            warn!("burst read from register {=u8:#x} failed", register);
        }
    }
}
