//! Event source subscriptions backed by the producer tasks

use jumptimer_core::EventBridge;

use crate::channels::{TAP_SUBSCRIPTION, TICK_SUBSCRIPTION};

/// Switches the tick and tap tasks on and off
pub struct TaskBridge;

impl EventBridge for TaskBridge {
    fn subscribe_tick(&mut self) {
        defmt::debug!("Tick subscribed");
        TICK_SUBSCRIPTION.signal(true);
    }

    fn unsubscribe_tick(&mut self) {
        defmt::debug!("Tick unsubscribed");
        TICK_SUBSCRIPTION.signal(false);
    }

    fn subscribe_tap(&mut self) {
        defmt::debug!("Tap subscribed");
        TAP_SUBSCRIPTION.signal(true);
    }

    fn unsubscribe_tap(&mut self) {
        defmt::debug!("Tap unsubscribed");
        TAP_SUBSCRIPTION.signal(false);
    }
}
