//! BOOT-button input subsystem for the ESP32-S3 AMOLED watch.
//!
//! Everything in this library is hardware-independent and runs on the
//! host: the debounce filter, the press state machine, the click
//! disambiguator, the bounded event queue and the dispatch bridge into UI
//! state. The firmware binary (`main.rs`, `embedded` feature) wires these
//! to the real GPIO, clock and executor.
//!
//! Usage: `cargo test` on the host, `cargo run --release --features embedded`
//! for the watch.

#![cfg_attr(not(test), no_std)]

// Must come first: the logging macros are used by every other module.
#[macro_use]
mod fmt;

pub mod button;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod power_logic;
pub mod queue;

pub mod ui {
    pub mod input_logic;
    pub mod navigator;

    pub use navigator::{Navigator, Screen};
}

pub use button::{ButtonEvent, ButtonEventKind, ButtonState};
pub use error::Error;
