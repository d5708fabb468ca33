use thiserror::Error;

/// A single UTC adjustment command, as written to the device's clock
/// control register.
///
/// Fields carry the hardware encoding: the frequency trim is already
/// sign-inverted relative to the caller's request and the relative
/// adjustment is already narrowed to the register's 16-bit field. The
/// translation from caller intent happens in
/// [`ClockHandle`](crate::ClockHandle).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AdjustmentRequest {
    /// Load an absolute time into the counter.
    SetTime { seconds: u32, nanoseconds: u32 },
    /// Apply a one-shot nanosecond offset in hardware.
    AdjustTime { time_adjustment: i16 },
    /// Trim the oscillator counting rate.
    AdjustFrequency { freq_adjustment: i32 },
}

/// The device rejected a register write.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("register write rejected by device (status {status})")]
pub struct DeviceError {
    pub status: i32,
}

/// Access to one device's clock registers.
///
/// Implemented by the register-bus layer outside this crate. Reads return
/// the register contents as read from device memory; byte-order correction
/// is done by the callers in this crate. A write is an atomic device
/// command: it either completes or reports a failure, never partially.
pub trait ClockRegisters {
    /// Raw 64-bit UTC register.
    fn read_utc(&self) -> u64;

    /// Raw 32-bit word at `byte_offset` into the UTC register.
    fn read_utc_word(&self, byte_offset: u32) -> u32;

    /// Submit an adjustment command for `device_id`.
    fn write_adjustment(
        &mut self,
        request: AdjustmentRequest,
        device_id: u8,
    ) -> Result<(), DeviceError>;
}
