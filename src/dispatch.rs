//! Consumer side of the event queue: map each event to a UI action.
//!
//! UI actions mutate state shared with the renderer, so they run with the
//! UI-state lock held. [`dispatch`] expects the caller to already hold it;
//! [`service`] acquires it with a bounded wait and performs one full
//! consumer iteration.

use core::future::Future;

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;

use crate::button::{ButtonEvent, ButtonEventKind};
use crate::queue::EventQueue;

/// Application action bound to a button gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Open the honeycomb launcher.
    ShowLauncher,
    /// Move the launcher back to its centre cell.
    RecenterLauncher,
    /// Return to the clock face.
    ShowClockFace,
}

/// Gesture → action table.
pub const fn action_for(kind: ButtonEventKind) -> Action {
    match kind {
        ButtonEventKind::ShortPress => Action::ShowLauncher,
        ButtonEventKind::LongPress => Action::RecenterLauncher,
        ButtonEventKind::DoubleClick => Action::ShowClockFace,
    }
}

/// Owner of the UI state that button actions operate on.
pub trait ActionHandler {
    fn perform(&mut self, action: Action, event: &ButtonEvent);
}

/// Run the action for `event`. The caller must hold the UI-state lock.
pub fn dispatch<H: ActionHandler + ?Sized>(event: &ButtonEvent, handler: &mut H) -> Action {
    let action = action_for(event.kind);
    info!("Button {} -> {}", event.kind, action);
    handler.perform(action, event);
    action
}

/// Result of one consumer iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DispatchOutcome {
    /// Queue was empty.
    Empty,
    /// Event consumed and its action performed.
    Handled(Action),
    /// Event consumed but the UI lock was not obtained in time; the event
    /// is discarded, not re-queued.
    Skipped(ButtonEvent),
}

/// Drain at most one event and dispatch it under the UI-state lock.
///
/// `lock_timeout` bounds the wait for the lock (`Timer::after(..)` on
/// target). The queue is polled, never awaited.
pub async fn service<QM, UM, H, F, const N: usize>(
    queue: &EventQueue<QM, N>,
    ui: &Mutex<UM, H>,
    lock_timeout: F,
) -> DispatchOutcome
where
    QM: RawMutex,
    UM: RawMutex,
    H: ActionHandler,
    F: Future,
{
    let Some(event) = queue.try_consume() else {
        return DispatchOutcome::Empty;
    };

    match select(ui.lock(), lock_timeout).await {
        Either::First(mut guard) => DispatchOutcome::Handled(dispatch(&event, &mut *guard)),
        Either::Second(_) => {
            warn!("Failed to get UI lock for button event processing");
            DispatchOutcome::Skipped(event)
        }
    }
}
