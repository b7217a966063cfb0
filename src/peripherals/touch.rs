//! Touch controller module for PineTime

use cst816s::{TouchGesture, CST816S};
use embassy_nrf::{
    gpio::{Input, Output},
    peripherals::{P0_10, P0_28},
};
use embassy_time::Delay;

use crate::system::i2c::SharedI2c;

pub struct TouchController<'a> {
    /// Touchpad instance
    touchpad: CST816S<SharedI2c, Input<'a, P0_28>, Output<'a, P0_10>>,
}

impl<'a> TouchController<'a> {
    /// Reset the touchpad on boot
    pub fn init(
        i2c: SharedI2c,
        interrupt_pin: Input<'a, P0_28>,
        reset_pin: Output<'a, P0_10>,
    ) -> Result<Self, Error> {
        let mut touchpad = CST816S::new(i2c, interrupt_pin, reset_pin);
        touchpad.setup(&mut Delay).map_err(|_| Error::Setup)?;
        Ok(Self { touchpad })
    }

    /// Check for new touch event
    pub fn try_event_detected(&mut self) -> Option<TouchGesture> {
        self.touchpad
            .read_one_touch_event(true)
            .map(|event| event.gesture)
    }
}

#[derive(Debug, defmt::Format)]
pub enum Error {
    /// Touchpad did not come out of reset
    Setup,
}
