//! BOOT-button input subsystem.
//!
//! A single active-low push button is sampled at a fixed period by the
//! polling task. Each sample goes through:
//!
//! 1. **Debounce** - [`DebounceFilter`] turns the raw line into a stable level.
//! 2. **Press classifier** - [`ButtonMachine`] runs the
//!    `Idle → Pressed → (Held | Released) → Idle` state machine and fires
//!    `LongPress` as soon as the hold threshold is crossed.
//! 3. **Click disambiguator** - short releases are coalesced into one
//!    `ShortPress` (after the double-click window expires) or one
//!    `DoubleClick` (immediately on the second release).
//!
//! Classified [`ButtonEvent`]s are handed to the UI loop through
//! [`crate::queue::EventQueue`]. None of the state here is shared; only the
//! [`ButtonMonitor`] snapshot crosses task boundaries.

pub mod debounce;
pub mod driver;
pub mod machine;
pub mod monitor;


pub use debounce::{DebounceFilter, Level};
pub use driver::ButtonDriver;
pub use machine::{ButtonMachine, Events};
pub use monitor::{ButtonMonitor, ButtonStatistics};

/// Phase of the physical-button state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Not pressed.
    #[default]
    Idle,
    /// Pressed, hold threshold not reached yet.
    Pressed,
    /// Held past the long-press threshold; `LongPress` already fired.
    Held,
    /// Released from `Pressed`; classified on the next tick.
    Released,
}

impl ButtonState {
    /// Upper-case name used by the diagnostic log.
    pub const fn as_str(self) -> &'static str {
        match self {
            ButtonState::Idle => "IDLE",
            ButtonState::Pressed => "PRESSED",
            ButtonState::Held => "HELD",
            ButtonState::Released => "RELEASED",
        }
    }

    /// `true` while the button is physically down.
    pub const fn is_down(self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::Held)
    }
}

/// What the user did with the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEventKind {
    /// One click, committed once the double-click window expired.
    ShortPress,
    /// Held past the long-press threshold (fired while still held).
    LongPress,
    /// Two short clicks inside the double-click window.
    DoubleClick,
}

/// A classified button action, stamped with the tick that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub kind: ButtonEventKind,
    /// Monotonic milliseconds at classification time.
    pub timestamp_ms: u32,
}

impl ButtonEvent {
    pub const fn new(kind: ButtonEventKind, timestamp_ms: u32) -> Self {
        Self { kind, timestamp_ms }
    }
}
