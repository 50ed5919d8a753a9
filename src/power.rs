//! Screen power management - AMOLED auto-off after inactivity.
//!
//! The panel is the largest consumer on the watch. It is switched off
//! once nothing has happened for `SCREEN_AUTO_OFF_TIMEOUT_SECS` and
//! switched back on by the next activity (any dispatched button action).

use bootbtn::{config, power_logic};
use defmt::info;
use embassy_time::Instant;

/// Panel power state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum PowerState {
    /// Panel lit.
    Awake,
    /// Panel off, waiting for activity.
    Asleep,
}

/// Tracks activity and decides when the panel sleeps.
pub struct PowerManager {
    state: PowerState,
    last_activity: Instant,
}

impl PowerManager {
    pub fn new() -> Self {
        Self {
            state: PowerState::Awake,
            last_activity: Instant::now(),
        }
    }

    /// Record activity and wake the panel if it was off.
    pub fn activity(&mut self) {
        self.last_activity = Instant::now();
        if self.state != PowerState::Awake {
            info!("Screen: waking from {}", self.state);
            self.state = PowerState::Awake;
        }
    }

    /// Periodic check, called from the UI loop.
    pub fn tick(&mut self) {
        let idle_secs = self.last_activity.elapsed().as_secs();
        let on = power_logic::screen_should_be_on(
            self.state == PowerState::Awake,
            config::SCREEN_AUTO_OFF_ENABLED,
            idle_secs,
            config::SCREEN_AUTO_OFF_TIMEOUT_SECS,
        );

        let new_state = if on { PowerState::Awake } else { PowerState::Asleep };
        if new_state != self.state {
            info!("Screen: {} -> {} (idle {}s)", self.state, new_state, idle_secs);
            self.state = new_state;
        }
    }
}
