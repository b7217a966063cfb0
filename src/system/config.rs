//! General system configuration

use embassy_nrf::config::{Config, Debug, HfclkSource, LfclkSource};

/// Chip configuration for the stopwatch
///
/// Without a SoftDevice no interrupt priority is reserved, and the button and
/// touch pad are polled rather than edge triggered, so the interrupt
/// priorities stay at their defaults.
pub fn system() -> Config {
    // Generate default config, required because Config is set as
    // `non_exhaustive`
    let mut config = Config::default();

    // The RTC time driver runs off the 32.768 kHz crystal, the internal RC
    // oscillator drifts by seconds per hour
    config.hfclk_source = HfclkSource::ExternalXtal;
    config.lfclk_source = LfclkSource::ExternalXtal;

    // Enable DC/DC regulator to massively reduce runtime current consumption
    config.dcdc.reg1 = true;

    // Allow debugging
    config.debug = Debug::Allowed;

    config
}
