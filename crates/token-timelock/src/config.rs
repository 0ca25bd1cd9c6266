//! The timelock configuration.

use serde::{Deserialize, Serialize};

use crate::clock::UnixSeconds;

/// The parameters a [`crate::VestingSchedule`] is constructed with.
///
/// Beneficiaries and allocations are matched by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelockConfig<AccountId, Balance> {
    /// The custodial account of the schedule, holding the tokens until release.
    pub custodian: AccountId,
    /// The accounts entitled to a share.
    pub beneficiaries: Vec<AccountId>,
    /// The share of each beneficiary.
    pub allocations: Vec<Balance>,
    /// The moment before which nothing can be released.
    pub release_time: UnixSeconds,
}
