//! Shared I2C bus
//!
//! The touch controller and the accelerometer sit on the same TWI bus.
//! Both run on the thread-mode executor, so a no-op mutex is enough.

use core::cell::RefCell;

use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use embassy_nrf::{peripherals::TWISPI1, twim::Twim};
use embassy_sync::blocking_mutex::{raw::NoopRawMutex, Mutex};
use static_cell::StaticCell;

pub type I2cBus = Mutex<NoopRawMutex, RefCell<Twim<'static, TWISPI1>>>;

/// One device's handle on the shared bus
pub type SharedI2c = I2cDevice<'static, NoopRawMutex, Twim<'static, TWISPI1>>;

static I2C_BUS: StaticCell<I2cBus> = StaticCell::new();

/// Move the bus into static storage so every device can borrow it.
///
/// Panics if called twice.
pub fn share(twim: Twim<'static, TWISPI1>) -> &'static I2cBus {
    I2C_BUS.init(Mutex::new(RefCell::new(twim)))
}

/// Hand out a device on the shared bus
pub fn device(bus: &'static I2cBus) -> SharedI2c {
    I2cDevice::new(bus)
}
