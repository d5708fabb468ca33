use std::str::FromStr;

use serde::Deserialize;

use crate::time_types::Timestamp;

/// Which half of the 64-bit UTC register holds the second counter.
///
/// Two hardware generations share the same adjustment protocol and differ
/// only in this field layout. The variant is fixed per device at
/// initialization and selects both the decode split and the byte offset of
/// the live second word.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClockLayoutVariant {
    /// sec = 32 msb, nsec = 32 lsb
    SecondsHigh,
    /// sec = 32 lsb, nsec = 32 msb
    SecondsLow,
}

impl ClockLayoutVariant {
    /// Byte offset of the second word within the UTC register, for the
    /// 32-bit live read used during packet timestamp reconstruction.
    pub const fn seconds_word_offset(self) -> u32 {
        match self {
            ClockLayoutVariant::SecondsHigh => 0,
            ClockLayoutVariant::SecondsLow => 4,
        }
    }

    /// Split a raw UTC register value into seconds and nanoseconds.
    ///
    /// The register reads back big-endian relative to host order; the swap
    /// happens here, so callers pass the raw read through unchanged.
    pub fn decode(self, raw: u64) -> Timestamp {
        let utc = u64::from_be(raw);
        let high = (utc >> 32) as u32;
        let low = utc as u32;

        match self {
            ClockLayoutVariant::SecondsHigh => Timestamp {
                seconds: high,
                nanoseconds: low,
            },
            ClockLayoutVariant::SecondsLow => Timestamp {
                seconds: low,
                nanoseconds: high,
            },
        }
    }
}

#[derive(Debug)]
pub struct UnknownLayoutVariant;

impl FromStr for ClockLayoutVariant {
    type Err = UnknownLayoutVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seconds-high" => Ok(ClockLayoutVariant::SecondsHigh),
            "seconds-low" => Ok(ClockLayoutVariant::SecondsLow),
            _ => Err(UnknownLayoutVariant),
        }
    }
}
