//! Press classifier and click disambiguator.
//!
//! [`ButtonMachine::tick`] is a deterministic function of (raw level, time):
//! the firmware calls it from the polling task with the real GPIO and
//! clock, tests call it with synthetic traces.

use heapless::Vec;

use super::debounce::{DebounceFilter, Level};
use super::monitor::FsmSnapshot;
use super::{ButtonEvent, ButtonEventKind, ButtonState};
use crate::config::ButtonConfig;

/// Events produced by a single tick.
///
/// Two is the most one tick can yield: an expiring single click plus
/// a long press (only with a window longer than the hold threshold).
pub type Events = Vec<ButtonEvent, 2>;

/// Timing of the current press cycle.
#[derive(Clone, Copy, Debug, Default)]
struct PressTiming {
    start_ms: u32,
    long_press_fired: bool,
}

/// Pending first click of a possible double click.
#[derive(Clone, Copy, Debug, Default)]
struct DoubleClickTracker {
    last_click_ms: u32,
    awaiting_second_click: bool,
}

impl DoubleClickTracker {
    /// Commit a lone click once the window has run out.
    fn expire(&mut self, now_ms: u32, window_ms: u32) -> Option<ButtonEvent> {
        if self.awaiting_second_click && now_ms.wrapping_sub(self.last_click_ms) >= window_ms {
            self.awaiting_second_click = false;
            info!("Single click confirmed (no double click detected)");
            return Some(ButtonEvent::new(ButtonEventKind::ShortPress, now_ms));
        }
        None
    }

    /// Register a genuine short release.
    fn on_release(&mut self, now_ms: u32, window_ms: u32) -> Option<ButtonEvent> {
        let gap = now_ms.wrapping_sub(self.last_click_ms);
        if self.awaiting_second_click && gap < window_ms {
            self.awaiting_second_click = false;
            info!("Double click confirmed (interval: {} ms)", gap);
            return Some(ButtonEvent::new(ButtonEventKind::DoubleClick, now_ms));
        }

        self.awaiting_second_click = true;
        self.last_click_ms = now_ms;
        debug!("Waiting for potential double click...");
        None
    }
}

/// Button state machine: debounce filter, press FSM and click tracker.
///
/// Owned exclusively by the polling task.
#[derive(Clone, Debug)]
pub struct ButtonMachine {
    config: ButtonConfig,
    filter: DebounceFilter,
    state: ButtonState,
    press: PressTiming,
    clicks: DoubleClickTracker,
}

impl ButtonMachine {
    /// New machine in `Idle`, assuming the line starts released.
    pub fn new(config: ButtonConfig) -> Self {
        Self::with_level(config, Level::High)
    }

    /// New machine in `Idle` whose debounce filter starts at `level`.
    pub fn with_level(config: ButtonConfig, level: Level) -> Self {
        Self {
            filter: DebounceFilter::with_level(level, config.debounce_ms),
            config,
            state: ButtonState::Idle,
            press: PressTiming::default(),
            clicks: DoubleClickTracker::default(),
        }
    }

    /// Debounce one raw sample and advance the state machine.
    pub fn tick(&mut self, raw: Level, now_ms: u32) -> Events {
        let level = self.filter.observe(raw, now_ms);
        self.advance(level, now_ms)
    }

    /// Advance the state machine with an already-debounced level.
    pub fn advance(&mut self, level: Level, now_ms: u32) -> Events {
        let mut events = Events::new();

        // Checked before the FSM so a release that lands after the window
        // first commits the old click, then opens a new window.
        if let Some(event) = self.clicks.expire(now_ms, self.config.double_click_ms) {
            let _ = events.push(event);
        }

        let pressed = level.is_pressed();
        match self.state {
            ButtonState::Idle => {
                if pressed {
                    self.state = ButtonState::Pressed;
                    self.press = PressTiming {
                        start_ms: now_ms,
                        long_press_fired: false,
                    };
                    debug!("State: IDLE -> PRESSED");
                }
            }
            ButtonState::Pressed => {
                let held_ms = now_ms.wrapping_sub(self.press.start_ms);
                if !pressed {
                    self.state = ButtonState::Released;
                    debug!("State: PRESSED -> RELEASED (duration: {} ms)", held_ms);
                } else if !self.press.long_press_fired && held_ms >= self.config.long_press_ms {
                    self.state = ButtonState::Held;
                    self.press.long_press_fired = true;
                    info!("Long press confirmed (held for {} ms)", held_ms);
                    let _ = events.push(ButtonEvent::new(ButtonEventKind::LongPress, now_ms));
                }
            }
            ButtonState::Held => {
                if !pressed {
                    self.state = ButtonState::Idle;
                    debug!(
                        "State: HELD -> IDLE (total duration: {} ms)",
                        now_ms.wrapping_sub(self.press.start_ms)
                    );
                }
            }
            ButtonState::Released => {
                if !self.press.long_press_fired {
                    if let Some(event) = self.clicks.on_release(now_ms, self.config.double_click_ms)
                    {
                        let _ = events.push(event);
                    }
                }
                self.state = ButtonState::Idle;
                debug!("State: RELEASED -> IDLE");
            }
        }

        events
    }

    /// Return to `Idle`, dropping any press in progress and any pending click.
    ///
    /// The debounce filter keeps its stable level, so a button still held
    /// down re-enters `Pressed` on the next tick.
    pub fn reset(&mut self) {
        warn!("Resetting button state to IDLE");
        self.state = ButtonState::Idle;
        self.press = PressTiming::default();
        self.clicks = DoubleClickTracker::default();
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// `true` while a first click waits for a possible second one.
    pub fn awaiting_second_click(&self) -> bool {
        self.clicks.awaiting_second_click
    }

    /// Elapsed time of the press in progress, `0` when not pressed.
    pub fn press_duration_ms(&self, now_ms: u32) -> u32 {
        if self.state.is_down() {
            now_ms.wrapping_sub(self.press.start_ms)
        } else {
            0
        }
    }

    /// Copy of the fields the diagnostic monitor publishes.
    pub(crate) fn snapshot(&self) -> FsmSnapshot {
        FsmSnapshot {
            state: self.state,
            awaiting_second_click: self.clicks.awaiting_second_click,
            press_start_ms: self.press.start_ms,
        }
    }
}

impl Default for ButtonMachine {
    fn default() -> Self {
        Self::new(ButtonConfig::default())
    }
}
