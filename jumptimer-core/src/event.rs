//! Events delivered to the controller

use crate::tap::Tap;

/// Logical buttons of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Does nothing
    Select,
    /// Start or pause the stopwatch
    StartStop,
    /// Zero both counters
    Reset,
}

/// Everything the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// One second elapsed
    Tick,
    /// Accelerometer detected an impact
    Tap(Tap),
    /// User pressed a logical button
    Input(Button),
}

impl From<Button> for Event {
    fn from(button: Button) -> Self {
        Event::Input(button)
    }
}

impl From<Tap> for Event {
    fn from(tap: Tap) -> Self {
        Event::Tap(tap)
    }
}

impl Event {
    /// Check if this event comes from a subscribable source
    pub fn is_subscribed_source(&self) -> bool {
        matches!(self, Event::Tick | Event::Tap(_))
    }
}
