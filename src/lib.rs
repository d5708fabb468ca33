//! Time-synchronization engine for a switch ASIC's onboard UTC clock.
//!
//! The crate decodes the device's 64-bit UTC register under the two field
//! layouts used by different hardware generations, drives the clock
//! adjustment protocol (absolute set, frequency trim, relative time adjust)
//! over a register-command transport, and expands truncated per-packet
//! timestamps back to full UTC times. Register access itself is provided by
//! the embedding driver through the [`ClockRegisters`] trait.

#![forbid(unsafe_code)]

mod clock;
mod config;
mod layout;
mod log;
mod reconstruct;
mod registers;
mod time_types;

pub use clock::{ClockError, ClockHandle, ClockReadout, HostClock, SystemClock};
pub use config::ClockConfig;
pub use layout::{ClockLayoutVariant, UnknownLayoutVariant};
pub use log::{AdjustmentLog, AdjustmentRecord};
pub use reconstruct::reconstruct;
pub use registers::{AdjustmentRequest, ClockRegisters, DeviceError};
pub use time_types::{Timestamp, TruncatedTimestamp};
