//! Periodic callbacks driven by elapsed simulation time
//!
//! A [`Scheduler`] owns interval registrations and fires them as time is fed
//! in through [`Scheduler::advance`]. Each registration hands back an
//! [`IntervalHandle`]; dropping the handle cancels the interval, so whoever
//! holds the handle decides how long the timer lives.

use anyhow::{bail, Result};
use log::trace;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

type Callback<C> = Box<dyn FnMut(&mut C) + Send + Sync>;

struct Interval<C> {
    label: &'static str,
    period: Duration,
    /// Time elapsed since the last firing
    accumulated: Duration,
    cancelled: Arc<AtomicBool>,
    callback: Callback<C>,
}

/// Releases its interval when dropped
#[derive(Debug)]
pub struct IntervalHandle {
    label: &'static str,
    cancelled: Arc<AtomicBool>,
}

impl IntervalHandle {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Cancel the interval now
    pub fn cancel(self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

/// Cooperative single-threaded timer queue over a context `C`.
///
/// The cancel flag is atomic only so the scheduler can live inside a Bevy
/// resource; callbacks never run concurrently.
pub struct Scheduler<C> {
    intervals: Vec<Interval<C>>,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Register `callback` to run once every `period`
    pub fn every(
        &mut self,
        label: &'static str,
        period: Duration,
        callback: impl FnMut(&mut C) + Send + Sync + 'static,
    ) -> Result<IntervalHandle> {
        if period.is_zero() {
            bail!("Interval '{}' must have a positive period", label);
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        self.intervals.push(Interval {
            label,
            period,
            accumulated: Duration::ZERO,
            cancelled: Arc::clone(&cancelled),
            callback: Box::new(callback),
        });

        Ok(IntervalHandle { label, cancelled })
    }

    /// Feed `delta` of elapsed time and fire every interval that came due.
    ///
    /// An interval fires once per whole period elapsed, so a long `delta`
    /// can fire it several times. Returns the number of callbacks run.
    pub fn advance(&mut self, ctx: &mut C, delta: Duration) -> usize {
        self.prune();

        let mut fired = 0;
        for interval in &mut self.intervals {
            interval.accumulated += delta;
            while interval.accumulated >= interval.period {
                if interval.cancelled.load(Ordering::Relaxed) {
                    break;
                }
                interval.accumulated -= interval.period;
                (interval.callback)(ctx);
                fired += 1;
            }
        }
        fired
    }

    /// Number of intervals still registered and not cancelled
    pub fn active(&self) -> usize {
        self.intervals
            .iter()
            .filter(|i| !i.cancelled.load(Ordering::Relaxed))
            .count()
    }

    fn prune(&mut self) {
        self.intervals.retain(|interval| {
            let keep = !interval.cancelled.load(Ordering::Relaxed);
            if !keep {
                trace!("Releasing cancelled interval '{}'", interval.label);
            }
            keep
        });
    }
}
