//! Unified error type for bootbtn.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use crate::button::ButtonEvent;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A `ButtonConfig` field combination the state machine cannot honour.
    InvalidConfig(&'static str),

    /// The button input line could not be read during initialisation.
    InputRead,

    /// The polling or monitor task could not be spawned.
    TaskSpawn,
}

/// A classified event that did not fit in the event queue.
///
/// Overflow is recoverable: the event is logged and discarded, never
/// escalated to the caller of `publish` as an `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dropped(pub ButtonEvent);
