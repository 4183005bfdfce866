//! Trailing-edge debounce over an explicit timer.
//!
//! DESIGN
//! ======
//! `Debouncer` owns a `Scheduler` that can arm and cancel a single pending
//! callback. Each trigger cancels whatever is pending and re-arms, so only
//! the last trigger in a burst survives the quiet period. When the timer
//! fires, the owner dispatches back into the controller, which calls
//! `Debouncer::fire` to consume the pending evaluation.
//!
//! `ManualScheduler` keeps virtual time so tests can advance the clock
//! deterministically.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

/// A single-slot timer.
pub trait Scheduler {
    /// Schedule the timer callback after `delay`. Callers cancel any
    /// pending callback first.
    fn arm(&mut self, delay: Duration);
    /// Drop the pending callback, if any.
    fn cancel(&mut self);
    fn is_armed(&self) -> bool;
}

#[derive(Debug)]
pub struct Debouncer<T> {
    scheduler: T,
    delay: Duration,
    pending: bool,
}

impl<T: Scheduler> Debouncer<T> {
    pub fn new(scheduler: T, delay: Duration) -> Self {
        Self { scheduler, delay, pending: false }
    }

    /// Supersede any pending evaluation and restart the quiet period.
    pub fn trigger(&mut self) {
        self.scheduler.cancel();
        self.scheduler.arm(self.delay);
        self.pending = true;
    }

    /// Consume the pending evaluation. Returns `false` for a stale fire.
    pub fn fire(&mut self) -> bool {
        self.scheduler.cancel();
        std::mem::take(&mut self.pending)
    }

    pub fn cancel(&mut self) {
        self.scheduler.cancel();
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }
}

/// Virtual-time scheduler.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    deadline: Option<Duration>,
    armed_count: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Total number of `arm` calls so far.
    pub fn armed_count(&self) -> u64 {
        self.armed_count
    }

    /// Move the clock forward. Returns `true` if the pending deadline was
    /// reached, clearing it.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.now += by;
        match self.deadline {
            Some(deadline) if deadline <= self.now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, delay: Duration) {
        self.deadline = Some(self.now + delay);
        self.armed_count += 1;
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
