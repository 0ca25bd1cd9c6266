//! The vesting schedule.

use std::{collections::BTreeMap, fmt::Debug};

use num_traits::{CheckedAdd, Zero};
use token_ledger::TokenLedger;
use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, UnixSeconds},
    errors::{ConstructionError, NotFound, ReleaseError},
    types::{Grant, ReleaseOutcome, ReleaseReport},
    TimelockConfig,
};

/// The account id of a given ledger.
pub type AccountIdOf<L> = <L as TokenLedger>::AccountId;
/// The balance of a given ledger.
pub type BalanceOf<L> = <L as TokenLedger>::Balance;
/// The release report for a given ledger.
pub type ReleaseReportOf<L> =
    ReleaseReport<AccountIdOf<L>, BalanceOf<L>, <L as TokenLedger>::Error>;

/// A pool of tokens held on behalf of several beneficiaries, each paid out its allocation once
/// the release time comes.
pub struct VestingSchedule<L: TokenLedger, C> {
    /// The ledger the tokens are held at.
    token: L,
    /// The time source.
    clock: C,
    /// The account holding the tokens until release.
    custodian: AccountIdOf<L>,
    /// The share of each beneficiary, in the construction order.
    grants: Vec<(AccountIdOf<L>, Grant<BalanceOf<L>>)>,
    /// The position of each beneficiary at `grants`.
    index: BTreeMap<AccountIdOf<L>, usize>,
    /// The sum of all allocations.
    total_allocation: BalanceOf<L>,
    /// The moment before which nothing can be released.
    release_time: UnixSeconds,
}

impl<L, C> Debug for VestingSchedule<L, C>
where
    L: TokenLedger,
    L::AccountId: Debug,
    L::Balance: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VestingSchedule")
            .field("custodian", &self.custodian)
            .field("grants", &self.grants)
            .field("total_allocation", &self.total_allocation)
            .field("release_time", &self.release_time)
            .finish_non_exhaustive()
    }
}

impl<L, C> VestingSchedule<L, C>
where
    L: TokenLedger,
    L::AccountId: Ord + Clone + Debug,
    L::Balance: Copy + Debug + Zero + CheckedAdd,
    L::Error: Debug,
    C: Clock,
{
    /// Create a new schedule with all the beneficiaries unpaid.
    pub fn new(
        token: L,
        clock: C,
        config: TimelockConfig<L::AccountId, L::Balance>,
    ) -> Result<Self, ConstructionError> {
        let TimelockConfig {
            custodian,
            beneficiaries,
            allocations,
            release_time,
        } = config;

        if token.total_supply().is_zero() {
            return Err(ConstructionError::InvalidToken);
        }

        if beneficiaries.is_empty() {
            return Err(ConstructionError::NoBeneficiaries);
        }

        if beneficiaries.len() != allocations.len() {
            return Err(ConstructionError::LengthMismatch {
                beneficiaries: beneficiaries.len(),
                allocations: allocations.len(),
            });
        }

        let mut index = BTreeMap::new();
        let mut grants = Vec::with_capacity(beneficiaries.len());
        let mut total_allocation = L::Balance::zero();
        for (position, (who, allocation)) in beneficiaries.into_iter().zip(allocations).enumerate() {
            if index.insert(who.clone(), position).is_some() {
                return Err(ConstructionError::DuplicateBeneficiary { position });
            }
            total_allocation = total_allocation
                .checked_add(&allocation)
                .ok_or(ConstructionError::AllocationOverflow)?;
            grants.push((
                who,
                Grant {
                    allocation,
                    released: false,
                },
            ));
        }

        info!(
            message = "Vesting schedule created",
            ?custodian,
            beneficiaries = grants.len(),
            ?total_allocation,
            release_time,
        );

        Ok(Self {
            token,
            clock,
            custodian,
            grants,
            index,
            total_allocation,
            release_time,
        })
    }

    /// Pay out every unpaid beneficiary, if the release time has come.
    ///
    /// Each payout is independent: a rejected transfer leaves that beneficiary unpaid and does
    /// not affect the others. Calling this after everything is paid is a successful no-op.
    pub fn release(
        &mut self,
        caller: &L::AccountId,
    ) -> Result<ReleaseReportOf<L>, ReleaseError> {
        let now = self.clock.now();
        if now < self.release_time {
            debug!(
                message = "Rejecting release before the release time",
                ?caller,
                now,
                release_time = self.release_time,
            );
            return Err(ReleaseError::NotDue {
                now,
                release_time: self.release_time,
            });
        }

        let mut outcomes = Vec::with_capacity(self.grants.len());
        for (who, grant) in &mut self.grants {
            if grant.released {
                outcomes.push((who.clone(), ReleaseOutcome::AlreadyPaid));
                continue;
            }

            let amount = grant.allocation;
            let outcome = match self.token.transfer(&self.custodian, who, amount) {
                Ok(()) => {
                    grant.released = true;
                    info!(message = "Released allocation", beneficiary = ?who, ?amount, ?caller);
                    ReleaseOutcome::Paid { amount }
                }
                Err(error) => {
                    warn!(
                        message = "Allocation transfer failed",
                        beneficiary = ?who,
                        ?amount,
                        ?error,
                    );
                    ReleaseOutcome::Failed(error)
                }
            };
            outcomes.push((who.clone(), outcome));
        }

        Ok(ReleaseReport { outcomes })
    }
}

impl<L, C> VestingSchedule<L, C>
where
    L: TokenLedger,
    L::AccountId: Ord,
    L::Balance: Copy + Zero + CheckedAdd,
    C: Clock,
{
    /// The grant of a given beneficiary.
    fn grant_of(&self, who: &L::AccountId) -> Result<&Grant<L::Balance>, NotFound> {
        self.index
            .get(who)
            .and_then(|&position| self.grants.get(position))
            .map(|(_, grant)| grant)
            .ok_or(NotFound)
    }

    /// The allocation of a given beneficiary.
    pub fn allocation_of(&self, who: &L::AccountId) -> Result<L::Balance, NotFound> {
        self.grant_of(who).map(|grant| grant.allocation)
    }

    /// Whether a given beneficiary was paid.
    pub fn is_released(&self, who: &L::AccountId) -> Result<bool, NotFound> {
        self.grant_of(who).map(|grant| grant.released)
    }

    /// The moment before which nothing can be released.
    pub fn release_time(&self) -> UnixSeconds {
        self.release_time
    }

    /// The ledger the tokens are held at.
    pub fn token(&self) -> &L {
        &self.token
    }

    /// The time source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The account holding the tokens until release.
    pub fn custodian(&self) -> &L::AccountId {
        &self.custodian
    }

    /// The beneficiaries in the construction order.
    pub fn beneficiaries(&self) -> impl Iterator<Item = &L::AccountId> + '_ {
        self.grants.iter().map(|(who, _)| who)
    }

    /// The sum of all allocations.
    pub fn total_allocation(&self) -> L::Balance {
        self.total_allocation
    }

    /// The sum of allocations not paid yet.
    pub fn outstanding_allocation(&self) -> L::Balance {
        // Can not overflow as it is bounded by the total allocation.
        self.grants
            .iter()
            .map(|(_, grant)| grant)
            .filter(|grant| !grant.released)
            .fold(L::Balance::zero(), |acc, grant| {
                acc.checked_add(&grant.allocation).unwrap_or(acc)
            })
    }

    /// Whether the release time has come.
    pub fn is_due(&self) -> bool {
        self.clock.now() >= self.release_time
    }

    /// Whether every beneficiary was paid, making the schedule inert.
    pub fn is_fully_released(&self) -> bool {
        self.grants.iter().all(|(_, grant)| grant.released)
    }

    /// The current balance of the custodial account.
    pub fn custodial_balance(&self) -> L::Balance {
        self.token.balance_of(&self.custodian)
    }
}
