//! Time-based debounce of the raw button line.

/// Logic level of the input line.
///
/// The BOOT button has a pull-up, so `Low` means pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Map a GPIO reading (`0` / non-zero) to a level.
    pub const fn from_raw(raw: u8) -> Self {
        if raw == 0 {
            Level::Low
        } else {
            Level::High
        }
    }

    /// Active-low: the button is down when the line is low.
    pub const fn is_pressed(self) -> bool {
        matches!(self, Level::Low)
    }
}

/// Debounce filter tracking the last confirmed level.
///
/// A new raw level is committed only after it has been observed
/// continuously for at least the debounce window.
#[derive(Clone, Copy, Debug)]
pub struct DebounceFilter {
    stable_level: Level,
    /// Timestamp of the first sample that disagreed with `stable_level`.
    pending_since: Option<u32>,
    window_ms: u32,
}

impl DebounceFilter {
    /// Start out released (line pulled high).
    pub const fn new(window_ms: u32) -> Self {
        Self::with_level(Level::High, window_ms)
    }

    /// Start from a known level, e.g. the line read at init.
    pub const fn with_level(stable_level: Level, window_ms: u32) -> Self {
        Self {
            stable_level,
            pending_since: None,
            window_ms,
        }
    }

    /// Feed one raw sample and return the (possibly updated) stable level.
    pub fn observe(&mut self, raw: Level, now_ms: u32) -> Level {
        if raw == self.stable_level {
            // Returned before the window elapsed: bounce.
            self.pending_since = None;
            return self.stable_level;
        }

        match self.pending_since {
            None => self.pending_since = Some(now_ms),
            Some(since) if now_ms.wrapping_sub(since) >= self.window_ms => {
                self.stable_level = raw;
                self.pending_since = None;
                debug!("Level stabilized: {}", raw);
            }
            Some(_) => {}
        }

        self.stable_level
    }

    /// Last confirmed level.
    pub fn stable(&self) -> Level {
        self.stable_level
    }

    /// `true` while a raw change is waiting out the window.
    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }
}
