//! A time-gated multi-beneficiary token vesting ledger.
//!
//! A [`VestingSchedule`] holds a pool of tokens at a custodial account of a [`TokenLedger`] on
//! behalf of several beneficiaries and pays each of them its allocation exactly once, at or after
//! the release time.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

pub mod clock;
mod config;
pub mod errors;
mod schedule;
mod shared;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock, UnixSeconds};
pub use config::TimelockConfig;
pub use errors::{ConstructionError, NotFound, ReleaseError};
pub use schedule::{AccountIdOf, BalanceOf, ReleaseReportOf, VestingSchedule};
pub use shared::SharedVestingSchedule;
pub use token_ledger::TokenLedger;
pub use types::{Grant, ReleaseOutcome, ReleaseReport};

#[cfg(test)]
mod mock;
