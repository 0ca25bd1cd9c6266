//! A schedule that can be shared between threads.

use std::{
    fmt::Debug,
    sync::{Mutex, MutexGuard},
};

use num_traits::{CheckedAdd, Zero};
use token_ledger::TokenLedger;

use crate::{
    clock::{Clock, UnixSeconds},
    errors::{NotFound, ReleaseError},
    schedule::{ReleaseReportOf, VestingSchedule},
};

/// The [`VestingSchedule`] behind a mutex, so that concurrent releases are serialized and the
/// check-then-set of the released flags can not interleave.
pub struct SharedVestingSchedule<L: TokenLedger, C> {
    /// The mutex over the schedule.
    locked: Mutex<VestingSchedule<L, C>>,
}

impl<L: TokenLedger, C> SharedVestingSchedule<L, C> {
    /// Wrap the schedule.
    pub fn new(schedule: VestingSchedule<L, C>) -> Self {
        Self {
            locked: Mutex::new(schedule),
        }
    }

    /// Lock the schedule for exclusive access.
    pub fn lock(&self) -> MutexGuard<'_, VestingSchedule<L, C>> {
        // Flags are only set after a successful transfer, so the state is consistent even if
        // a holder of the lock panicked.
        match self.locked.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Unwrap the schedule.
    pub fn into_inner(self) -> VestingSchedule<L, C> {
        match self.locked.into_inner() {
            Ok(schedule) => schedule,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<L, C> SharedVestingSchedule<L, C>
where
    L: TokenLedger,
    L::AccountId: Ord + Clone + Debug,
    L::Balance: Copy + Debug + Zero + CheckedAdd,
    L::Error: Debug,
    C: Clock,
{
    /// See [`VestingSchedule::release`].
    pub fn release(&self, caller: &L::AccountId) -> Result<ReleaseReportOf<L>, ReleaseError> {
        self.lock().release(caller)
    }

    /// See [`VestingSchedule::allocation_of`].
    pub fn allocation_of(&self, who: &L::AccountId) -> Result<L::Balance, NotFound> {
        self.lock().allocation_of(who)
    }

    /// See [`VestingSchedule::is_released`].
    pub fn is_released(&self, who: &L::AccountId) -> Result<bool, NotFound> {
        self.lock().is_released(who)
    }

    /// See [`VestingSchedule::release_time`].
    pub fn release_time(&self) -> UnixSeconds {
        self.lock().release_time()
    }

    /// See [`VestingSchedule::is_fully_released`].
    pub fn is_fully_released(&self) -> bool {
        self.lock().is_fully_released()
    }
}

impl<L: TokenLedger, C> From<VestingSchedule<L, C>> for SharedVestingSchedule<L, C> {
    fn from(schedule: VestingSchedule<L, C>) -> Self {
        Self::new(schedule)
    }
}
