//! UI loop for the watch firmware.
//!
//! Runs at frame rate: each iteration services at most one button event
//! under the UI-state lock, ticks screen power and logs a redraw whenever
//! the navigator changed. Panel flushing is handled by the graphics stack.

pub mod buttons;

use bootbtn::config::{UI_FRAME_MS, UI_LOCK_TIMEOUT_MS};
use bootbtn::dispatch::{service, DispatchOutcome};
use bootbtn::ui::Navigator;
use defmt::{debug, info};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker, Timer};

use crate::power::PowerManager;
use buttons::ButtonQueue;

/// Navigation state shared with rendering.
pub type UiState = Mutex<CriticalSectionRawMutex, Navigator>;

pub async fn run(queue: &'static ButtonQueue, ui: &'static UiState, power: &mut PowerManager) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(UI_FRAME_MS));
    let mut drawn: Option<u32> = None;

    loop {
        match service(queue, ui, Timer::after_millis(UI_LOCK_TIMEOUT_MS)).await {
            DispatchOutcome::Handled(_) => power.activity(),
            DispatchOutcome::Skipped(event) => {
                debug!("Discarded {} from {} ms", event.kind, event.timestamp_ms)
            }
            DispatchOutcome::Empty => {}
        }
        power.tick();

        // Rendering never waits for the lock; a busy frame redraws next time.
        if let Ok(nav) = ui.try_lock() {
            if drawn != Some(nav.generation()) {
                info!("Render: {} (focus {})", nav.screen(), nav.focus());
                drawn = Some(nav.generation());
            }
        }

        ticker.next().await;
    }
}
