//! BOOT button input on the watch.
//!
//! One active-low push button on GPIO0 with the internal pull-up. The
//! polling task samples it at a fixed period, feeds the state machine and
//! publishes classified events to the UI loop. A second, low-priority
//! task reports state changes for debugging.

use bootbtn::button::{ButtonDriver, ButtonMonitor, ButtonState};
use bootbtn::config::{
    ButtonConfig, BOOT_BUTTON_GPIO, BUTTON_EVENT_QUEUE_DEPTH, BUTTON_MONITOR_INTERVAL_MS,
    BUTTON_PUBLISH_TIMEOUT_MS,
};
use bootbtn::error::Error;
use bootbtn::queue::EventQueue;
use defmt::{debug, info};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::{Duration, Instant, Ticker, Timer};
use esp_hal::gpio::{Input, InputConfig, InputPin, Pull};

pub type ButtonQueue = EventQueue<CriticalSectionRawMutex, BUTTON_EVENT_QUEUE_DEPTH>;
pub type Monitor = ButtonMonitor<CriticalSectionRawMutex>;
pub type BootButton = ButtonDriver<Input<'static>>;

/// Milliseconds since boot, wrapping at `u32::MAX`.
pub fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Configure the GPIO and take the initial reading.
pub fn init(pin: impl InputPin + 'static, config: ButtonConfig) -> Result<BootButton, Error> {
    let input = Input::new(pin, InputConfig::default().with_pull(Pull::Up));
    let driver = ButtonDriver::new(input, config)?;
    info!(
        "BOOT button on GPIO{}: debounce={}ms long_press={}ms double_click={}ms poll={}ms",
        BOOT_BUTTON_GPIO,
        config.debounce_ms,
        config.long_press_ms,
        config.double_click_ms,
        config.poll_interval_ms
    );
    Ok(driver)
}

/// Sample the button forever and publish classified events.
#[embassy_executor::task]
pub async fn button_task(
    mut driver: BootButton,
    queue: &'static ButtonQueue,
    monitor: &'static Monitor,
) -> ! {
    let period = Duration::from_millis(driver.machine().config().poll_interval_ms as u64);
    let mut ticker = Ticker::every(period);
    monitor.mark_running();
    info!("Button task started");

    loop {
        for event in driver.poll(now_ms()) {
            // Overflow is logged and counted by the queue.
            let _ = queue
                .publish(event, Timer::after_millis(BUTTON_PUBLISH_TIMEOUT_MS))
                .await;
        }
        monitor.record(driver.machine());
        ticker.next().await;
    }
}

/// Log button state changes as seen through the monitor.
#[embassy_executor::task]
pub async fn monitor_task(monitor: &'static Monitor) -> ! {
    info!("Button monitor task started");
    let mut last_state = ButtonState::Idle;
    let mut ticker = Ticker::every(Duration::from_millis(BUTTON_MONITOR_INTERVAL_MS));

    loop {
        let stats = monitor.statistics(now_ms());
        if stats.state != last_state {
            info!(
                "Button state changed: {} -> {}",
                last_state.as_str(),
                stats.state.as_str()
            );
            last_state = stats.state;
        }
        if stats.press_duration_ms > 0 {
            debug!("Button press duration: {} ms", stats.press_duration_ms);
        }
        if stats.awaiting_double_click {
            debug!("Waiting for potential double click...");
        }
        ticker.next().await;
    }
}

/// One-shot status dump.
pub fn log_status(monitor: &Monitor, queue: &ButtonQueue) {
    let stats = monitor.statistics(now_ms());
    info!("=== Button Status ===");
    info!("Current state: {}", stats.state.as_str());
    info!(
        "Waiting for double click: {}",
        if stats.awaiting_double_click { "YES" } else { "NO" }
    );
    info!("Current press duration: {} ms", stats.press_duration_ms);
    info!(
        "Task running: {}",
        if stats.task_running { "YES" } else { "NO" }
    );
    info!(
        "Queue: {}/{} events, {} dropped",
        queue.len(),
        queue.capacity(),
        queue.dropped()
    );
}
