//! Run/pause state with the elapsed time and jump counters

/// Result of flipping the run flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunTransition {
    /// Went from paused to running, event sources must be subscribed
    Started,
    /// Went from running to paused, event sources must be unsubscribed
    Stopped,
}

/// Stopwatch state
///
/// Counters only move while running. Reset works in either mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunState {
    running: bool,
    elapsed_seconds: u32,
    jump_count: u32,
}

impl RunState {
    /// Create a paused state with both counters at zero
    pub const fn new() -> Self {
        Self {
            running: false,
            elapsed_seconds: 0,
            jump_count: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds counted while running since the last reset
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// Taps counted while running since the last reset
    pub fn jump_count(&self) -> u32 {
        self.jump_count
    }

    /// Count one second. Returns whether anything changed.
    pub fn on_tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    /// Count one jump. Returns whether anything changed.
    pub fn on_tap(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.jump_count = self.jump_count.saturating_add(1);
        true
    }

    /// Flip between running and paused
    pub fn toggle_run(&mut self) -> RunTransition {
        self.running = !self.running;
        if self.running {
            RunTransition::Started
        } else {
            RunTransition::Stopped
        }
    }

    /// Zero both counters, leaving the run flag alone
    pub fn reset(&mut self) {
        self.elapsed_seconds = 0;
        self.jump_count = 0;
    }
}
