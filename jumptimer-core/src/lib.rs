//! Board-agnostic logic for the jump timer watch app
//!
//! Everything in here runs on the host as well as on the watch:
//!
//! - Run/pause state with the tick and tap counters
//! - `HH:MM:SS` and jump count formatting
//! - The controller that turns events into state changes, event source
//!   subscriptions and display updates
//! - Tap detection on raw accelerometer samples
//! - Touch gesture decoding

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod app;
pub mod bridge;
pub mod config;
pub mod display;
pub mod event;
pub mod format;
pub mod input;
pub mod state;
pub mod tap;

pub use app::{Error, JumpTimer};
pub use bridge::EventBridge;
pub use display::{Region, TextDisplay};
pub use event::{Button, Event};
pub use state::{RunState, RunTransition};
