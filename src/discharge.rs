//! Capacitor discharge simulation.
//!
//! Pressing the discharge button of an order puts it into
//! [`DischargeState::Discharging`](crate::state::DischargeState) for
//! [`DISCHARGE_DELAY`], after which it returns to ready on its own. Pending
//! completions are tracked per order; pressing again while one is pending
//! restarts the delay instead of stacking a second completion.

use std::time::{Duration, Instant};

use crate::state::{OrderTab, DISCHARGE_DELAY};
use crate::timers::Scheduler;

/// Outcome of a discharge trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DischargeTrigger {
    /// The order was ready and started discharging
    Started,
    /// A discharge was already pending; its delay was restarted
    Restarted,
}

/// Pending discharge completions keyed by order
#[derive(Debug)]
pub struct DischargeSimulator {
    scheduler: Scheduler<OrderTab>,
    delay: Duration,
}

impl Default for DischargeSimulator {
    fn default() -> Self {
        Self {
            scheduler: Scheduler::new(),
            delay: DISCHARGE_DELAY,
        }
    }
}

impl DischargeSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start (or restart) the discharge delay of `tab` at `now`
    pub fn trigger(&mut self, tab: OrderTab, now: Instant) -> DischargeTrigger {
        let pending = self.scheduler.cancel(tab);
        self.scheduler.schedule(tab, now + self.delay);
        match pending {
            Some(previous) => {
                tracing::debug!(
                    "Discharge of {} restarted ({:?} were left)",
                    tab.name(),
                    previous.saturating_duration_since(now)
                );
                DischargeTrigger::Restarted
            }
            None => DischargeTrigger::Started,
        }
    }

    pub fn is_discharging(&self, tab: OrderTab) -> bool {
        self.scheduler.is_pending(tab)
    }

    /// When the pending discharge of `tab` completes
    pub fn completes_at(&self, tab: OrderTab) -> Option<Instant> {
        self.scheduler.deadline(tab)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Orders whose discharge completed at `now`
    pub fn poll(&mut self, now: Instant) -> Vec<OrderTab> {
        self.scheduler.take_due(now)
    }
}
