//! Time sources.

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{SystemTime, UNIX_EPOCH},
};

use tracing::trace;

/// Seconds since the unix epoch.
pub type UnixSeconds = u64;

/// A source of the current time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> UnixSeconds;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> UnixSeconds {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> UnixSeconds {
        (**self).now()
    }
}

/// The wall-clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> UnixSeconds {
        // The time before the epoch is clamped to zero.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or_default()
    }
}

/// An error that can happen at [`ManualClock::increase_time_to`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// The requested moment is before the current time.
    #[error("cannot increase current time ({now}) to a moment in the past ({target})")]
    TargetInPast {
        /// The current time.
        now: UnixSeconds,
        /// The requested time.
        target: UnixSeconds,
    },
}

/// A controllable clock that behaves like a chain timestamp.
///
/// The reported time is the timestamp of the latest mined block. Increasing the time only
/// takes effect after the next [`ManualClock::mine`].
#[derive(Debug, Default)]
pub struct ManualClock {
    /// The timestamp of the latest mined block.
    latest: AtomicU64,
    /// The time offset to apply at the next mined block.
    pending: AtomicU64,
}

impl ManualClock {
    /// Create a new clock with the latest block mined at `genesis`.
    pub fn new(genesis: UnixSeconds) -> Self {
        Self {
            latest: AtomicU64::new(genesis),
            pending: AtomicU64::new(0),
        }
    }

    /// Set the current time, dropping the pending offset.
    pub fn set(&self, timestamp: UnixSeconds) {
        self.pending.store(0, Ordering::SeqCst);
        self.latest.store(timestamp, Ordering::SeqCst);
    }

    /// Schedule the time of the next block to move forward by `secs`.
    ///
    /// Returns the total offset pending for the next block.
    pub fn increase_time(&self, secs: u64) -> u64 {
        let previous = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |pending| {
                Some(pending.saturating_add(secs))
            })
            .unwrap_or_else(|pending| pending);
        previous.saturating_add(secs)
    }

    /// Mine a block, applying the pending time offset.
    pub fn mine(&self) -> UnixSeconds {
        let offset = self.pending.swap(0, Ordering::SeqCst);
        let previous = self
            .latest
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |latest| {
                Some(latest.saturating_add(offset))
            })
            .unwrap_or_else(|latest| latest);
        let mined = previous.saturating_add(offset);
        trace!(message = "Mined block", timestamp = mined, offset);
        mined
    }

    /// Move the time forward by `secs` and mine a block.
    pub fn increase_time_and_mine(&self, secs: u64) -> UnixSeconds {
        self.increase_time(secs);
        self.mine()
    }

    /// Move the time forward to `target` and mine a block.
    pub fn increase_time_to(&self, target: UnixSeconds) -> Result<UnixSeconds, ClockError> {
        let now = self.now();
        let diff = target
            .checked_sub(now)
            .ok_or(ClockError::TargetInPast { now, target })?;
        Ok(self.increase_time_and_mine(diff))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> UnixSeconds {
        self.latest.load(Ordering::SeqCst)
    }
}

/// Duration helpers, in seconds.
pub mod duration {
    /// `val` seconds.
    pub const fn seconds(val: u64) -> u64 {
        val
    }

    /// `val` minutes.
    pub const fn minutes(val: u64) -> u64 {
        val * seconds(60)
    }

    /// `val` hours.
    pub const fn hours(val: u64) -> u64 {
        val * minutes(60)
    }

    /// `val` days.
    pub const fn days(val: u64) -> u64 {
        val * hours(24)
    }

    /// `val` weeks.
    pub const fn weeks(val: u64) -> u64 {
        val * days(7)
    }

    /// `val` years of 365 days.
    pub const fn years(val: u64) -> u64 {
        val * days(365)
    }
}
