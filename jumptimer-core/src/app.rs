//! App controller
//!
//! Owns the run state together with the event source subscriptions and the
//! screen. Every event goes through [`JumpTimer::handle`], which keeps the
//! three in step.

use crate::bridge::EventBridge;
use crate::display::{Region, TextDisplay, JUMPS_LABEL, TIME_LABEL};
use crate::event::{Button, Event};
use crate::format::{format_duration, format_jumps, DURATION_TEXT_LEN, JUMPS_TEXT_LEN};
use crate::state::{RunState, RunTransition};

/// Errors surfaced by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Screen rejected an update
    Display(E),
    /// Text did not fit its buffer
    Format,
}

/// Stopwatch with jump counter
pub struct JumpTimer<B, D> {
    state: RunState,
    bridge: B,
    display: D,
}

impl<B, D> JumpTimer<B, D>
where
    B: EventBridge,
    D: TextDisplay,
{
    /// Create a paused timer. Nothing is subscribed or drawn yet.
    pub fn new(bridge: B, display: D) -> Self {
        Self {
            state: RunState::new(),
            bridge,
            display,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Draw all four regions from the current state
    pub fn show(&mut self) -> Result<(), Error<D::Error>> {
        self.display
            .set_text(Region::TimeLabel, TIME_LABEL)
            .map_err(Error::Display)?;
        self.draw_time()?;
        self.display
            .set_text(Region::JumpsLabel, JUMPS_LABEL)
            .map_err(Error::Display)?;
        self.draw_jumps()
    }

    /// Release the event sources and blank the screen
    pub fn hide(&mut self) -> Result<(), Error<D::Error>> {
        if self.state.is_running() {
            self.toggle_run();
        }
        for region in Region::ALL {
            self.display.clear(region).map_err(Error::Display)?;
        }
        Ok(())
    }

    /// Apply one event
    pub fn handle(&mut self, event: Event) -> Result<(), Error<D::Error>> {
        match event {
            Event::Tick => {
                if self.state.on_tick() {
                    self.draw_time()?;
                }
            }
            Event::Tap(_) => {
                if self.state.on_tap() {
                    self.draw_jumps()?;
                }
            }
            Event::Input(Button::Select) => {}
            Event::Input(Button::StartStop) => self.toggle_run(),
            Event::Input(Button::Reset) => {
                self.state.reset();
                self.draw_time()?;
                self.draw_jumps()?;
            }
        }
        Ok(())
    }

    fn toggle_run(&mut self) {
        match self.state.toggle_run() {
            RunTransition::Started => {
                self.bridge.subscribe_tick();
                self.bridge.subscribe_tap();
            }
            RunTransition::Stopped => {
                self.bridge.unsubscribe_tick();
                self.bridge.unsubscribe_tap();
            }
        }
    }

    fn draw_time(&mut self) -> Result<(), Error<D::Error>> {
        let mut buf = [0u8; DURATION_TEXT_LEN];
        let text =
            format_duration(&mut buf, self.state.elapsed_seconds()).map_err(|_| Error::Format)?;
        self.display
            .set_text(Region::TimeValue, text)
            .map_err(Error::Display)
    }

    fn draw_jumps(&mut self) -> Result<(), Error<D::Error>> {
        let mut buf = [0u8; JUMPS_TEXT_LEN];
        let text = format_jumps(&mut buf, self.state.jump_count()).map_err(|_| Error::Format)?;
        self.display
            .set_text(Region::JumpsValue, text)
            .map_err(Error::Display)
    }
}
