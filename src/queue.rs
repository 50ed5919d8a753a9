//! Bounded FIFO between the polling task (producer) and the UI loop (consumer).
//!
//! The producer must never stall on a slow consumer: a full queue is
//! waited on for at most a short bounded time, after which the newest
//! event is dropped and counted.

use core::future::Future;
use core::sync::atomic::{AtomicU32, Ordering};

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use crate::button::ButtonEvent;
use crate::error::Dropped;

/// Button event queue with `N` slots.
pub struct EventQueue<M: RawMutex, const N: usize> {
    channel: Channel<M, ButtonEvent, N>,
    dropped: AtomicU32,
}

impl<M: RawMutex, const N: usize> EventQueue<M, N> {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
            dropped: AtomicU32::new(0),
        }
    }

    /// Enqueue without waiting.
    pub fn try_publish(&self, event: ButtonEvent) -> Result<(), Dropped> {
        match self.channel.try_send(event) {
            Ok(()) => Ok(()),
            Err(_) => Err(self.drop_event(event)),
        }
    }

    /// Enqueue, waiting for room until `timeout` completes.
    ///
    /// Pass `embassy_time::Timer::after(..)` on target; any future works,
    /// a ready one turns this into [`try_publish`](Self::try_publish).
    pub async fn publish<F: Future>(&self, event: ButtonEvent, timeout: F) -> Result<(), Dropped> {
        match select(self.channel.send(event), timeout).await {
            Either::First(()) => Ok(()),
            Either::Second(_) => Err(self.drop_event(event)),
        }
    }

    /// Take the oldest event, if any. Never waits.
    pub fn try_consume(&self) -> Option<ButtonEvent> {
        self.channel.try_receive().ok()
    }

    /// Number of events waiting.
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Events discarded because the queue was full.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    fn drop_event(&self, event: ButtonEvent) -> Dropped {
        let total = self.dropped.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        warn!(
            "Button event queue full, dropping {} (dropped so far: {})",
            event.kind, total
        );
        Dropped(event)
    }
}

impl<M: RawMutex, const N: usize> Default for EventQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonEventKind;
    use crate::config::BUTTON_EVENT_QUEUE_DEPTH;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use std::sync::Arc;
    use std::vec::Vec;

    type Queue = EventQueue<CriticalSectionRawMutex, BUTTON_EVENT_QUEUE_DEPTH>;

    fn event(i: u32) -> ButtonEvent {
        let kind = match i % 3 {
            0 => ButtonEventKind::ShortPress,
            1 => ButtonEventKind::LongPress,
            _ => ButtonEventKind::DoubleClick,
        };
        ButtonEvent::new(kind, i)
    }

    #[test]
    fn empty_queue_yields_nothing() {
        let queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.try_consume(), None);
        assert_eq!(queue.capacity(), 10);
    }

    #[test]
    fn events_come_out_in_order() {
        let queue = Queue::new();
        for i in 0..3 {
            queue.try_publish(event(i)).unwrap();
        }
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.try_consume(), Some(event(0)));
        assert_eq!(queue.try_consume(), Some(event(1)));
        assert_eq!(queue.try_consume(), Some(event(2)));
        assert_eq!(queue.try_consume(), None);
    }

    #[test]
    fn overflow_keeps_oldest_and_counts_drops() {
        let queue = Queue::new();
        let mut rejected = Vec::new();
        for i in 0..15 {
            if let Err(Dropped(ev)) = queue.try_publish(event(i)) {
                rejected.push(ev.timestamp_ms);
            }
        }

        assert_eq!(queue.len(), BUTTON_EVENT_QUEUE_DEPTH);
        assert_eq!(queue.dropped(), 5);
        assert_eq!(rejected, [10, 11, 12, 13, 14]);

        let drained: Vec<u32> = core::iter::from_fn(|| queue.try_consume())
            .map(|e| e.timestamp_ms)
            .collect();
        assert_eq!(drained, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn bounded_publish_succeeds_with_room() {
        let queue = Queue::new();
        let result = block_on(queue.publish(event(7), core::future::ready(())));
        assert_eq!(result, Ok(()));
        assert_eq!(queue.try_consume(), Some(event(7)));
    }

    #[test]
    fn bounded_publish_gives_up_when_full() {
        let queue = Queue::new();
        for i in 0..10 {
            queue.try_publish(event(i)).unwrap();
        }
        let result = block_on(queue.publish(event(99), core::future::ready(())));
        assert_eq!(result, Err(Dropped(event(99))));
        assert_eq!(queue.dropped(), 1);
        // The queued events are untouched.
        assert_eq!(queue.try_consume(), Some(event(0)));
    }

    #[test]
    fn queue_recovers_after_draining() {
        let queue = Queue::new();
        for i in 0..12 {
            let _ = queue.try_publish(event(i));
        }
        while queue.try_consume().is_some() {}
        assert!(queue.try_publish(event(42)).is_ok());
        assert_eq!(queue.try_consume(), Some(event(42)));
        assert_eq!(queue.dropped(), 2);
    }

    #[test]
    fn concurrent_producer_and_consumer_preserve_order() {
        let queue: Arc<Queue> = Arc::new(Queue::new());
        let producer_queue = Arc::clone(&queue);

        let producer = std::thread::spawn(move || {
            for i in 0..500 {
                // Spin until there is room: nothing may be lost here.
                while producer_queue.channel.try_send(event(i)).is_err() {
                    std::thread::yield_now();
                }
            }
        });

        let mut received = Vec::new();
        while received.len() < 500 {
            match queue.try_consume() {
                Some(ev) => received.push(ev.timestamp_ms),
                None => std::thread::yield_now(),
            }
        }
        producer.join().unwrap();

        assert_eq!(received, (0..500).collect::<Vec<_>>());
        assert_eq!(queue.dropped(), 0);
    }
}
