//! Screen navigation state driven by button actions.
//!
//! The watch has one physical button, so the launcher is walked with it:
//! a single click opens the launcher, further clicks move the focus ring,
//! a long press recentres it and a double click goes home to the clock.

use crate::button::ButtonEvent;
use crate::config::LAUNCHER_APP_COUNT;
use crate::dispatch::{Action, ActionHandler};

use super::input_logic::select_next;

/// Screens the button can switch between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Clock face (home).
    ClockFace,
    /// Honeycomb app launcher.
    Launcher,
}

/// Index of the centre cell of the honeycomb.
pub const LAUNCHER_CENTER: usize = 0;

/// UI state guarded by the UI lock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    screen: Screen,
    focus: usize,
    /// Bumped on every state change so the renderer knows to redraw.
    generation: u32,
}

impl Navigator {
    pub const fn new() -> Self {
        Self {
            screen: Screen::ClockFace,
            focus: LAUNCHER_CENTER,
            generation: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Focused launcher cell.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    fn show_launcher(&mut self) {
        if self.screen == Screen::Launcher {
            self.focus = select_next(self.focus, LAUNCHER_APP_COUNT);
            info!("Launcher focus -> {}", self.focus);
        } else {
            self.screen = Screen::Launcher;
            info!("Switched to launcher");
        }
    }

    fn recenter_launcher(&mut self) {
        self.focus = LAUNCHER_CENTER;
        self.screen = Screen::Launcher;
        info!("Launcher recentred");
    }

    fn show_clock_face(&mut self) {
        self.screen = Screen::ClockFace;
        info!("Switched to clock face");
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionHandler for Navigator {
    fn perform(&mut self, action: Action, _event: &ButtonEvent) {
        match action {
            Action::ShowLauncher => self.show_launcher(),
            Action::RecenterLauncher => self.recenter_launcher(),
            Action::ShowClockFace => self.show_clock_face(),
        }
        self.generation = self.generation.wrapping_add(1);
    }
}
