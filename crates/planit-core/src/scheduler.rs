//! Deferred work with cancellation handles.
//!
//! The task list is single-threaded: timers never fire on their own. The
//! owner asks the scheduler which entries are due and handles them between
//! user events, so deferred work can never interleave with a handler.

use std::{collections::BTreeMap, time::Duration};

/// Handle returned by [`Scheduler::schedule`], used to cancel the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Deferred work the [`Board`](crate::Board) schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// The undo window of a cleared entry form has closed
    UndoExpired,
}

/// A queue of events keyed by the millisecond they become due.
#[derive(Debug)]
pub struct Scheduler<E> {
    next_handle: u64,
    entries: BTreeMap<(i64, TimerHandle), E>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Schedules `event` to become due `delay` after `now_ms`.
    pub fn schedule(&mut self, now_ms: i64, delay: Duration, event: E) -> TimerHandle {
        let delay = i64::try_from(delay.as_millis()).unwrap_or(i64::MAX);
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries
            .insert((now_ms.saturating_add(delay), handle), event);
        handle
    }

    /// Cancels a pending entry. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self.entries.keys().find(|(_, h)| *h == handle).copied();
        match key {
            Some(key) => self.entries.remove(&key).is_some(),
            None => false,
        }
    }

    /// Removes and returns every entry due at or before `now_ms`, earliest
    /// first. Entries due at the same millisecond come out in scheduling
    /// order.
    pub fn take_due(&mut self, now_ms: i64) -> Vec<E> {
        let later = self.entries.split_off(&(now_ms.saturating_add(1), TimerHandle(0)));
        let due = std::mem::replace(&mut self.entries, later);
        due.into_values().collect()
    }

    /// When the earliest pending entry becomes due.
    pub fn next_deadline(&self) -> Option<i64> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.keys().any(|(_, h)| *h == handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
