//! Single-threaded timer queue driven by the host loop.
//!
//! Timers are owned through [`TimerHandle`]s: dropping the handle cancels the
//! timer, so a holder can never leak a live timer past its own lifetime.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

struct Entry<E> {
    id: u64,
    due: Duration,
    every: Option<Duration>,
    event: E,
}

struct TimerQueue<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> TimerQueue<E> {
    fn cancel(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

impl<E: Clone> TimerQueue<E> {
    fn insert(&mut self, due: Duration, every: Option<Duration>, event: E) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry { id, due, every, event });
        id
    }

    fn pop_due(&mut self, now: Duration) -> Option<Fired<E>> {
        // Earliest due first, arm order breaks ties.
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= now)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(position, _)| position)?;

        let entry = &mut self.entries[position];
        let fired = Fired { at: entry.due, event: entry.event.clone() };

        let every = entry.every;
        match every {
            Some(interval) => entry.due = next_slot(entry.due, interval, now),
            None => {
                self.entries.swap_remove(position);
            }
        }

        Some(fired)
    }
}

/// First slot of a fixed-rate schedule strictly after `now`. Missed slots
/// collapse into the tick that is firing.
fn next_slot(due: Duration, interval: Duration, now: Duration) -> Duration {
    let interval_ns = interval.as_nanos().max(1);
    let behind_ns = now.saturating_sub(due).as_nanos();
    let slots = behind_ns / interval_ns + 1;
    due + Duration::from_nanos((slots * interval_ns) as u64)
}

/// A timer that came due. `at` is the instant it was scheduled for, which may
/// be earlier than the time it was popped.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<E> {
    pub at: Duration,
    pub event: E,
}

pub struct Scheduler<E> {
    queue: Rc<RefCell<TimerQueue<E>>>,
}

impl<E> Clone for Scheduler<E> {
    fn clone(&self) -> Self {
        Self { queue: Rc::clone(&self.queue) }
    }
}

impl<E: Clone> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(TimerQueue { next_id: 0, entries: Vec::new() })),
        }
    }

    /// Fire `event` once at `due`.
    pub fn once(&self, due: Duration, event: E) -> TimerHandle<E> {
        let id = self.queue.borrow_mut().insert(due, None, event);
        self.handle(id)
    }

    /// Fire `event` at `first_due` and then every `interval`.
    pub fn every(&self, first_due: Duration, interval: Duration, event: E) -> TimerHandle<E> {
        let id = self.queue.borrow_mut().insert(first_due, Some(interval), event);
        self.handle(id)
    }

    /// Pop the earliest timer due at or before `now`. The queue is not
    /// borrowed once this returns, so the caller may arm or drop timers while
    /// handling the event.
    pub fn pop_due(&self, now: Duration) -> Option<Fired<E>> {
        self.queue.borrow_mut().pop_due(now)
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    fn handle(&self, id: u64) -> TimerHandle<E> {
        TimerHandle { id, queue: Rc::downgrade(&self.queue) }
    }
}

/// Owning handle of an armed timer. The timer is cancelled when this drops.
pub struct TimerHandle<E> {
    id: u64,
    queue: Weak<RefCell<TimerQueue<E>>>,
}

impl<E> Drop for TimerHandle<E> {
    fn drop(&mut self) {
        if let Some(queue) = self.queue.upgrade() {
            queue.borrow_mut().cancel(self.id);
        }
    }
}
