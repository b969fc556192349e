//! Deadline-based timers driven by the UI loop.
//!
//! Nothing here sleeps or spawns threads. The caller passes the current
//! [`Instant`] in, and the timers report what became due.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// One-shot tasks keyed by `K`, at most one pending task per key.
///
/// Scheduling a key that is already pending replaces its deadline.
#[derive(Debug)]
pub struct Scheduler<K> {
    pending: HashMap<K, Instant>,
}

impl<K> Default for Scheduler<K> {
    fn default() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> Scheduler<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `key` to fire at `deadline`, returning the replaced deadline
    pub fn schedule(&mut self, key: K, deadline: Instant) -> Option<Instant> {
        self.pending.insert(key, deadline)
    }

    /// Cancel a pending task, returning its deadline
    pub fn cancel(&mut self, key: K) -> Option<Instant> {
        self.pending.remove(&key)
    }

    pub fn deadline(&self, key: K) -> Option<Instant> {
        self.pending.get(&key).copied()
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    /// Remove and return every task due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<(K, Instant)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(&key, &deadline)| (key, deadline))
            .collect();
        due.sort_by_key(|&(_, deadline)| deadline);
        for (key, _) in &due {
            self.pending.remove(key);
        }
        due.into_iter().map(|(key, _)| key).collect()
    }
}

/// Fixed-period ticker that never stops.
///
/// Missed periods are caught up: polling after three periods reports three
/// ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// First tick fires one period after `start`
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_deadline(&self) -> Instant {
        self.next
    }

    /// Number of ticks due at `now`; advances past them
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let mut count = 0;
        while self.next <= now {
            self.next += self.period;
            count += 1;
        }
        count
    }
}
