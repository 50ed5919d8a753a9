//! Cross-task diagnostics for the button subsystem.
//!
//! The polling task owns the state machine; everyone else sees it only
//! through the snapshot it publishes here once per tick.

use core::cell::Cell;
use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::ButtonState;

/// Fields copied out of the state machine after each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FsmSnapshot {
    pub state: ButtonState,
    pub awaiting_second_click: bool,
    pub press_start_ms: u32,
}

impl FsmSnapshot {
    const IDLE: Self = Self {
        state: ButtonState::Idle,
        awaiting_second_click: false,
        press_start_ms: 0,
    };
}

/// Read-only view of the button subsystem for diagnostic display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStatistics {
    pub state: ButtonState,
    pub awaiting_double_click: bool,
    /// Elapsed time of the press in progress, `0` when not pressed.
    pub press_duration_ms: u32,
    /// The polling task has started and is sampling the line.
    pub task_running: bool,
}

/// Shared statistics surface: polling-task liveness plus the latest FSM snapshot.
pub struct ButtonMonitor<M: RawMutex> {
    running: AtomicBool,
    snapshot: Mutex<M, Cell<FsmSnapshot>>,
}

impl<M: RawMutex> ButtonMonitor<M> {
    pub const fn new() -> Self {
        Self {
            running: AtomicBool::new(false),
            snapshot: Mutex::new(Cell::new(FsmSnapshot::IDLE)),
        }
    }

    /// Called by the polling task once it is up.
    pub fn mark_running(&self) {
        self.running.store(true, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Publish the machine's current phase (polling task only).
    pub fn record(&self, machine: &super::ButtonMachine) {
        let snapshot = machine.snapshot();
        self.snapshot.lock(|cell| cell.set(snapshot));
    }

    /// Current state as last published by the polling task.
    pub fn state(&self) -> ButtonState {
        self.snapshot.lock(|cell| cell.get().state)
    }

    /// Build a statistics view, computing press duration against `now_ms`.
    pub fn statistics(&self, now_ms: u32) -> ButtonStatistics {
        let snapshot = self.snapshot.lock(|cell| cell.get());
        let press_duration_ms = if snapshot.state.is_down() {
            now_ms.wrapping_sub(snapshot.press_start_ms)
        } else {
            0
        };

        ButtonStatistics {
            state: snapshot.state,
            awaiting_double_click: snapshot.awaiting_second_click,
            press_duration_ms,
            task_running: self.is_running(),
        }
    }
}

impl<M: RawMutex> Default for ButtonMonitor<M> {
    fn default() -> Self {
        Self::new()
    }
}
