//! Accelerometer module for PineTime
//!
//! Thin wrapper over the BMA421 driver, turning its readings into tap
//! detector samples.

use bma42x::{AccelConfigOdr, AccelRange, Bma42x, Config, FullPower};
use embassy_time::Delay;
use jumptimer_core::tap::Sample;

use crate::system::i2c::SharedI2c;

pub struct Accelerometer {
    /// Sensor instance
    sensor: Bma42x<SharedI2c, FullPower>,
}

impl Accelerometer {
    /// Bring up the sensor at ±8 g and 100 Hz
    pub fn init(i2c: SharedI2c) -> Result<Self, Error> {
        let config = Config {
            range: AccelRange::Range8g,
            odr: AccelConfigOdr::Odr100,
            ..Config::default()
        };
        let sensor = Bma42x::new(i2c, config)
            .init(&mut Delay)
            .map_err(|_| Error::Init)?;

        defmt::info!("Accelerometer ready");
        Ok(Self { sensor })
    }

    /// Read the latest sample of all three axes
    pub fn read(&mut self) -> Result<Sample, Error> {
        let (x, y, z) = self.sensor.accel_norm_int().map_err(|_| Error::Bus)?;
        Ok(Sample::from_g(x, y, z))
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Sensor missing or rejected its configuration
    Init,
    /// I2C transfer failed
    Bus,
}
