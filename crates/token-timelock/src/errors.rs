//! The errors of the timelock operations.

use crate::clock::UnixSeconds;

/// The errors on the schedule construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The token ledger can not back any grant as it has no supply.
    #[error("invalid token: the ledger has no supply")]
    InvalidToken,
    /// No beneficiaries were provided.
    #[error("no beneficiaries")]
    NoBeneficiaries,
    /// The beneficiaries and allocations lists differ in length.
    #[error("length mismatch: {beneficiaries} beneficiaries, {allocations} allocations")]
    LengthMismatch {
        /// The amount of beneficiaries.
        beneficiaries: usize,
        /// The amount of allocations.
        allocations: usize,
    },
    /// The same account is listed more than once.
    #[error("duplicate beneficiary at position {position}")]
    DuplicateBeneficiary {
        /// The position of the repeated entry.
        position: usize,
    },
    /// The sum of allocations does not fit the balance type.
    #[error("allocations sum overflow")]
    AllocationOverflow,
}

/// The errors on the release operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReleaseError {
    /// The release time has not come yet.
    #[error("release is not due: now {now}, release time {release_time}")]
    NotDue {
        /// The time of the attempt.
        now: UnixSeconds,
        /// The release time of the schedule.
        release_time: UnixSeconds,
    },
}

/// The account is not a beneficiary of the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("not a beneficiary")]
pub struct NotFound;
