//! Application tuning
//!
//! Hardware setup (clocks, pins, bus speeds) lives in the firmware crate.

/// Tap detector tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapConfig {
    /// Sample-to-sample change on one axis that counts as an impact, in
    /// 1/256 g sample units
    pub threshold: u16,
    /// Samples ignored after a tap so one impact counts once
    pub holdoff_samples: u8,
}

impl Default for TapConfig {
    fn default() -> Self {
        Self {
            // 1.5 g
            threshold: 384,
            // 250 ms at 100 Hz
            holdoff_samples: 25,
        }
    }
}

/// App configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub tap: TapConfig,
    /// Backlight level at boot (0 = off, 7 = max)
    pub brightness: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tap: TapConfig::default(),
            brightness: 2,
        }
    }
}
