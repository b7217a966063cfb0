//! Subscription seam to the tick and tap event sources

/// Turns the hardware event sources on and off
///
/// Sources deliver their events to the controller as [`crate::Event`]s.
/// Subscribing an already subscribed source must be harmless.
pub trait EventBridge {
    /// Start the 1 Hz tick
    fn subscribe_tick(&mut self);

    /// Stop the 1 Hz tick
    fn unsubscribe_tick(&mut self);

    /// Start reporting accelerometer taps
    fn subscribe_tap(&mut self);

    /// Stop reporting accelerometer taps
    fn unsubscribe_tap(&mut self);
}
