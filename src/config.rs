//! Application-wide constants and runtime button configuration.
//!
//! All hardware pin assignments, timing parameters, and queue sizes
//! live here so they can be tuned in one place.

use crate::error::Error;

// GPIO pin assignments (Waveshare ESP32-S3 AMOLED watch)
//
//   BOOT button → GPIO0 (active-low, internal pull-up)
//
// The concrete `esp_hal::peripherals::GPIO0` is selected in `main.rs`.

/// GPIO number of the BOOT button.
pub const BOOT_BUTTON_GPIO: u8 = 0;

// Button timing

/// Raw level must hold this long before it is accepted (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

/// Hold duration that fires a long press (ms).
pub const BUTTON_LONG_PRESS_MS: u32 = 1000;

/// Maximum gap between two short releases that still counts as a double click (ms).
pub const BUTTON_DOUBLE_CLICK_MS: u32 = 500;

/// Sampling period of the polling task (ms).
pub const BUTTON_POLL_INTERVAL_MS: u32 = 20;

// Event queue

/// Number of classified events buffered between the polling task and the UI loop.
pub const BUTTON_EVENT_QUEUE_DEPTH: usize = 10;

/// How long the polling task may wait for room in a full queue (ms).
pub const BUTTON_PUBLISH_TIMEOUT_MS: u64 = 100;

// UI loop

/// How long the UI loop waits for the UI-state lock before skipping a dispatch (ms).
pub const UI_LOCK_TIMEOUT_MS: u64 = 100;

/// UI loop period, roughly one frame at 60 fps (ms).
pub const UI_FRAME_MS: u64 = 16;

/// Number of cells in the honeycomb launcher.
pub const LAUNCHER_APP_COUNT: usize = 7;

/// Period of the diagnostic monitor task (ms).
pub const BUTTON_MONITOR_INTERVAL_MS: u64 = 100;

// Screen power

/// Enable automatic AMOLED power-off after inactivity.
pub const SCREEN_AUTO_OFF_ENABLED: bool = true;

/// Inactivity timeout before the AMOLED is turned off (seconds).
pub const SCREEN_AUTO_OFF_TIMEOUT_SECS: u64 = 30;

/// Timing parameters of the button state machine.
///
/// Built from the constants above by `Default`; firmware variants may
/// override individual fields before handing it to the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Debounce window (ms).
    pub debounce_ms: u32,
    /// Long-press threshold (ms).
    pub long_press_ms: u32,
    /// Double-click window (ms).
    pub double_click_ms: u32,
    /// Poll interval (ms).
    pub poll_interval_ms: u32,
}

impl ButtonConfig {
    pub const fn new() -> Self {
        Self {
            debounce_ms: BUTTON_DEBOUNCE_MS,
            long_press_ms: BUTTON_LONG_PRESS_MS,
            double_click_ms: BUTTON_DOUBLE_CLICK_MS,
            poll_interval_ms: BUTTON_POLL_INTERVAL_MS,
        }
    }

    /// Reject parameter sets the state machine cannot honour.
    pub fn validate(&self) -> Result<(), Error> {
        if self.poll_interval_ms == 0 {
            return Err(Error::InvalidConfig("poll interval must be non-zero"));
        }
        if self.double_click_ms == 0 {
            return Err(Error::InvalidConfig("double-click window must be non-zero"));
        }
        if self.long_press_ms <= self.debounce_ms {
            return Err(Error::InvalidConfig(
                "long-press threshold must exceed the debounce window",
            ));
        }
        Ok(())
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}
