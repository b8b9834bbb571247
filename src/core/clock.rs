//! Virtual-time timer queue.
//!
//! The engine never blocks. Every delayed transition (mismatch flip-back,
//! the once-per-interval elapsed-time tick, the win dialog delay) is a
//! one-shot timer on a `Timeline`, and the host drives time forward with
//! `pop_due` / `settle`.
//!
//! ## Generations
//!
//! Each timer is tagged with the `Generation` that was current when it was
//! scheduled. `restart()` bumps the generation and drops every pending timer,
//! so a session reset can never be touched by callbacks from the session it
//! replaced. Consumers still compare `FiredTimer::generation` against
//! `Timeline::generation()` before acting.
//!
//! ```
//! use bloom_match::core::Timeline;
//!
//! let mut timeline: Timeline<&str> = Timeline::new();
//! timeline.schedule(1000, "flip back");
//! timeline.schedule(500, "reveal");
//!
//! let first = timeline.pop_due(2000).unwrap();
//! assert_eq!(first.payload, "reveal");
//! assert_eq!(timeline.now_ms(), 500);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Session generation. Incremented on every restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[must_use]
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Gen({})", self.0)
    }
}

/// Handle to a scheduled timer, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A timer that has come due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiredTimer<K> {
    pub id: TimerId,
    /// Generation current when the timer was scheduled.
    pub generation: Generation,
    /// Virtual time the timer was due at.
    pub due_ms: u64,
    pub payload: K,
}

#[derive(Clone, Debug)]
struct Pending<K> {
    generation: Generation,
    payload: K,
}

/// Queue of one-shot timers over a virtual millisecond clock.
#[derive(Clone, Debug)]
pub struct Timeline<K> {
    now_ms: u64,
    next_id: u64,
    generation: Generation,
    /// Keyed by (due time, id) so iteration order is firing order.
    queue: BTreeMap<(u64, u64), Pending<K>>,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Timeline<K> {
    /// Create an empty timeline at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            generation: Generation::default(),
            queue: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending timer.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Schedule `payload` to fire `delay_ms` after the current time.
    ///
    /// A due time past the end of the clock is clamped to `u64::MAX`.
    /// Repeating timers should use `try_schedule` instead, or they will
    /// keep landing on the same instant.
    pub fn schedule(&mut self, delay_ms: u64, payload: K) -> TimerId {
        let due = self.now_ms.saturating_add(delay_ms);
        self.insert(due, payload)
    }

    /// Schedule `payload` unless its due time would overflow the clock.
    pub fn try_schedule(&mut self, delay_ms: u64, payload: K) -> Option<TimerId> {
        let due = self.now_ms.checked_add(delay_ms)?;
        Some(self.insert(due, payload))
    }

    fn insert(&mut self, due: u64, payload: K) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.insert(
            (due, id),
            Pending {
                generation: self.generation,
                payload,
            },
        );
        TimerId(id)
    }

    /// Cancel a pending timer.
    ///
    /// Returns false if the timer already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.queue.keys().find(|&&(_, tid)| tid == id.0).copied();
        match key {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Start a new generation, dropping every pending timer.
    pub fn restart(&mut self) -> Generation {
        let dropped = self.queue.len();
        self.queue.clear();
        self.generation = self.generation.next();
        if dropped > 0 {
            log::debug!("{} started, dropped {} pending timer(s)", self.generation, dropped);
        }
        self.generation
    }

    /// Pop the earliest timer due at or before `until_ms`.
    ///
    /// Advances the clock to the timer's due time. Timers with equal due
    /// times fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<FiredTimer<K>> {
        let &(due, id) = self.queue.keys().next()?;
        if due > until_ms {
            return None;
        }
        let pending = self.queue.remove(&(due, id))?;
        self.now_ms = self.now_ms.max(due);
        Some(FiredTimer {
            id: TimerId(id),
            generation: pending.generation,
            due_ms: due,
            payload: pending.payload,
        })
    }

    /// Move the clock forward to `until_ms` without firing anything.
    ///
    /// Call after draining `pop_due` for the same instant.
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}
