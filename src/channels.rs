//! Inter-task communication channels
//!
//! Producer tasks only ever send events; the app task is the single place
//! where state changes.

use embassy_sync::{blocking_mutex::raw::ThreadModeRawMutex, channel::Channel, signal::Signal};
use jumptimer_core::Event;

/// Channel capacity for app events
const EVENT_QUEUE_LEN: usize = 8;

/// Ticks, taps and button presses for the app task
pub static EVENTS: Channel<ThreadModeRawMutex, Event, EVENT_QUEUE_LEN> = Channel::new();

/// Latest tick subscription state (true = subscribed)
pub static TICK_SUBSCRIPTION: Signal<ThreadModeRawMutex, bool> = Signal::new();

/// Latest tap subscription state (true = subscribed)
pub static TAP_SUBSCRIPTION: Signal<ThreadModeRawMutex, bool> = Signal::new();
