use std::fmt;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A decoded hardware UTC time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Timestamp {
    pub seconds: u32,
    /// Must be less than 10^9
    pub nanoseconds: u32,
}

impl Timestamp {
    /// Total nanoseconds since the epoch.
    pub const fn as_nanos(self) -> i64 {
        self.seconds as i64 * NANOS_PER_SEC + self.nanoseconds as i64
    }

    /// Renormalize a nanosecond total into seconds plus a remainder in
    /// `[0, 1e9)`. Floor division, so negative totals borrow from the
    /// second count instead of producing negative nanoseconds.
    pub(crate) fn from_nanos(total: i128) -> Self {
        let nanos_per_sec = i128::from(NANOS_PER_SEC);
        Timestamp {
            seconds: total.div_euclid(nanos_per_sec) as u32,
            nanoseconds: total.rem_euclid(nanos_per_sec) as u32,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
    }
}

/// A per-packet timestamp as delivered in completion descriptors: the
/// hardware keeps only the low 8 bits of the second counter plus the full
/// nanosecond field. Expand with [`reconstruct`](crate::reconstruct).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TruncatedTimestamp {
    pub seconds: u8,
    pub nanoseconds: u32,
}
