//! bootbtn - BOOT-button input for the ESP32-S3 AMOLED watch.
//!
//! Task layout:
//!
//! ```text
//!   button_task ──(EventQueue)──► main / UI loop ──(UI lock)──► Navigator
//!        │
//!        └──(ButtonMonitor)──► monitor_task
//! ```

#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use bootbtn::config::ButtonConfig;
use bootbtn::error::Error;
use bootbtn::ui::Navigator;
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_sync::mutex::Mutex;
use embassy_time::Timer;
use esp_hal::clock::CpuClock;
use esp_hal::gpio::InputPin;
use esp_hal::timer::timg::TimerGroup;
use {esp_backtrace as _, esp_println as _};

mod power;
mod ui;

use power::PowerManager;
use ui::buttons::{self, ButtonQueue, Monitor};
use ui::UiState;

extern crate alloc;

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

static BUTTON_EVENTS: ButtonQueue = ButtonQueue::new();
static BUTTON_MONITOR: Monitor = Monitor::new();
static UI_STATE: UiState = Mutex::new(Navigator::new());

#[esp_rtos::main]
async fn main(spawner: Spawner) {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    esp_alloc::heap_allocator!(size: 64 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    info!("bootbtn starting...");

    // The watch stays usable without the button; only log the failure.
    match start_button(&spawner, peripherals.GPIO0) {
        Ok(()) => {
            info!("Button subsystem started");
            info!("  - Short press: show launcher / next app");
            info!("  - Long press (1s+): recentre launcher");
            info!("  - Double click: return to clock face");
        }
        Err(e) => error!("Button subsystem failed to start: {}", e),
    }
    // Give the polling task a first tick before reporting.
    Timer::after_millis(100).await;
    buttons::log_status(&BUTTON_MONITOR, &BUTTON_EVENTS);

    let mut power = PowerManager::new();
    ui::run(&BUTTON_EVENTS, &UI_STATE, &mut power).await
}

fn start_button(spawner: &Spawner, pin: impl InputPin + 'static) -> Result<(), Error> {
    let driver = buttons::init(pin, ButtonConfig::default())?;

    spawner
        .spawn(buttons::button_task(driver, &BUTTON_EVENTS, &BUTTON_MONITOR))
        .map_err(|_| Error::TaskSpawn)?;
    spawner
        .spawn(buttons::monitor_task(&BUTTON_MONITOR))
        .map_err(|_| Error::TaskSpawn)?;

    Ok(())
}
