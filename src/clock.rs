use std::time::SystemTime;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::{
    config::ClockConfig,
    layout::ClockLayoutVariant,
    log::{AdjustmentLog, AdjustmentRecord},
    reconstruct::reconstruct,
    registers::{AdjustmentRequest, ClockRegisters, DeviceError},
    time_types::{Timestamp, TruncatedTimestamp},
};

/// A clock operation failed. The variant names the register write that the
/// device rejected; nothing is retried and the adjustment log is not
/// touched.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("set-time register write failed")]
    SetTime(#[source] DeviceError),
    #[error("adj-freq register write failed")]
    AdjustFrequency(#[source] DeviceError),
    #[error("adj-time register write failed")]
    AdjustTime(#[source] DeviceError),
}

impl ClockError {
    /// Short tag of the operation whose register write failed.
    pub const fn operation(&self) -> &'static str {
        match self {
            ClockError::SetTime(_) => "set-time",
            ClockError::AdjustFrequency(_) => "adj-freq",
            ClockError::AdjustTime(_) => "adj-time",
        }
    }
}

/// Host wall-clock source, used only by [`ClockHandle::dump`].
pub trait HostClock {
    fn now(&self) -> Timestamp;
}

/// [`HostClock`] backed by the operating system's real-time clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn now(&self) -> Timestamp {
        let elapsed = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default();

        Timestamp {
            seconds: elapsed.as_secs() as u32,
            nanoseconds: elapsed.subsec_nanos(),
        }
    }
}

/// Snapshot of the hardware and host clocks, for external formatting.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockReadout {
    pub hardware: Timestamp,
    pub host: Timestamp,
}

/// One device's UTC clock.
///
/// Owns the register transport and the layout variant for the device
/// generation, both fixed at initialization. Queries ([`now`](Self::now),
/// [`reconstruct`](Self::reconstruct), [`dump`](Self::dump)) take `&self`
/// and may run concurrently; adjustments take `&mut self`, at most one in
/// flight per device.
#[derive(Debug)]
pub struct ClockHandle<R> {
    registers: R,
    variant: ClockLayoutVariant,
    device_id: u8,
    log: AdjustmentLog,
}

impl<R: ClockRegisters> ClockHandle<R> {
    pub fn initialize(registers: R, config: ClockConfig) -> Self {
        Self {
            registers,
            variant: config.variant,
            device_id: config.device_id,
            log: AdjustmentLog::default(),
        }
    }

    pub fn variant(&self) -> ClockLayoutVariant {
        self.variant
    }

    /// Accepted adjustments, oldest first.
    pub fn log(&self) -> &AdjustmentLog {
        &self.log
    }

    /// Current hardware UTC time.
    pub fn now(&self) -> Timestamp {
        self.variant.decode(self.registers.read_utc())
    }

    /// Expand a truncated per-packet timestamp against a fresh read of the
    /// live second counter.
    pub fn reconstruct(&self, packet: TruncatedTimestamp) -> Timestamp {
        let word = self
            .registers
            .read_utc_word(self.variant.seconds_word_offset());
        reconstruct(packet, u32::from_be(word))
    }

    /// Load an absolute time into the hardware counter.
    pub fn set_time(&mut self, time: Timestamp) -> Result<(), ClockError> {
        self.write(
            AdjustmentRequest::SetTime {
                seconds: time.seconds,
                nanoseconds: time.nanoseconds,
            },
            ClockError::SetTime,
        )?;

        info!(time = %time, "set hardware clock");
        self.log.record(AdjustmentRecord::SetTime {
            nanos_since_epoch: time.as_nanos(),
        });
        Ok(())
    }

    /// Trim the oscillator counting rate by `delta_ppb` parts per billion.
    ///
    /// The trim register's sign convention is inverted relative to the
    /// caller's intent; the negation happens here, once.
    pub fn adjust_frequency(&mut self, delta_ppb: i32) -> Result<(), ClockError> {
        self.write(
            AdjustmentRequest::AdjustFrequency {
                freq_adjustment: delta_ppb.wrapping_neg(),
            },
            ClockError::AdjustFrequency,
        )?;

        self.log
            .record(AdjustmentRecord::AdjustFrequency { delta_ppb });
        Ok(())
    }

    /// Offset the clock by `delta_ns` nanoseconds.
    ///
    /// Directly expressible deltas (`-32768 < delta_ns <= 32767`, the
    /// relative-adjust register field) go to the device as a single
    /// relative adjust, without reading the current time. Anything else is
    /// converted to an absolute set of the current hardware time shifted by
    /// the delta, which also leaves the set's own log record.
    pub fn adjust_time(&mut self, delta_ns: i64) -> Result<(), ClockError> {
        if delta_ns > i64::from(i16::MIN) && delta_ns <= i64::from(i16::MAX) {
            self.write(
                AdjustmentRequest::AdjustTime {
                    time_adjustment: delta_ns as i16,
                },
                ClockError::AdjustTime,
            )?;
        } else {
            let current = self.now();
            debug!(delta_ns, current = %current, "delta exceeds the relative-adjust field, converting to absolute set");

            let total = i128::from(current.as_nanos()) + i128::from(delta_ns);
            self.set_time(Timestamp::from_nanos(total))?;
        }

        self.log.record(AdjustmentRecord::AdjustTime { delta_ns });
        Ok(())
    }

    /// Hardware and host clocks side by side, for diagnostics.
    pub fn dump<H: HostClock>(&self, host: &H) -> ClockReadout {
        ClockReadout {
            hardware: self.now(),
            host: host.now(),
        }
    }

    fn write(
        &mut self,
        request: AdjustmentRequest,
        op: fn(DeviceError) -> ClockError,
    ) -> Result<(), ClockError> {
        self.registers
            .write_adjustment(request, self.device_id)
            .map_err(|device_error| {
                let err = op(device_error);
                error!(operation = err.operation(), error = %device_error, "clock register write failed");
                err
            })
    }
}
