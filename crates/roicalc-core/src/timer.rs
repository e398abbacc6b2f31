//! Cooperative single-threaded timer queue.
//!
//! Timers are plain data: the owner polls [`TimerQueue::pop_due`] with the
//! current time and handles whatever fired. Cancelling bumps the queue
//! generation, so handles from before the cancellation report as dead and
//! nothing scheduled earlier can fire afterwards.

use std::time::Duration;

/// Handle to one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    seq: u64,
    generation: u64,
}

#[derive(Debug)]
struct Entry<E> {
    due: Duration,
    seq: u64,
    event: E,
}

/// Pending timers ordered by due time, then by scheduling order.
#[derive(Debug)]
pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    generation: u64,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            generation: 0,
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire at `due`.
    pub fn schedule(&mut self, due: Duration, event: E) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { due, seq, event });
        TimerHandle {
            seq,
            generation: self.generation,
        }
    }

    /// Cancel one timer. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        if handle.generation != self.generation {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|e| e.seq != handle.seq);
        self.entries.len() != before
    }

    /// Drop every pending timer and invalidate all outstanding handles.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Remove and return the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;
        let entry = self.entries.swap_remove(index);
        Some((entry.due, entry.event))
    }

    /// Earliest pending due time.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
