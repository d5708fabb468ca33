use serde::Deserialize;

use crate::layout::ClockLayoutVariant;

/// Per-device clock configuration, fixed at initialization.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClockConfig {
    /// UTC register layout of the device generation.
    pub variant: ClockLayoutVariant,
    /// Device id carried in adjustment commands.
    #[serde(default)]
    pub device_id: u8,
}

impl ClockConfig {
    pub const fn new(variant: ClockLayoutVariant) -> Self {
        Self {
            variant,
            device_id: 0,
        }
    }
}
