//! Types used by the schedule.

/// The state of a single beneficiary share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant<Balance> {
    /// The fixed amount owed.
    pub allocation: Balance,
    /// Whether the allocation was paid out.
    /// Only ever goes from `false` to `true`.
    pub released: bool,
}

/// The outcome of a release for a single beneficiary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome<Balance, Error> {
    /// The allocation was transferred by this release.
    Paid {
        /// The transferred amount.
        amount: Balance,
    },
    /// The allocation was transferred by an earlier release.
    AlreadyPaid,
    /// The ledger rejected the transfer; the beneficiary stays unpaid and can be retried.
    Failed(Error),
}

impl<Balance, Error> ReleaseOutcome<Balance, Error> {
    /// Whether the ledger rejected the transfer.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Per-beneficiary outcomes of a release, in construction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport<AccountId, Balance, Error> {
    /// The outcomes.
    pub outcomes: Vec<(AccountId, ReleaseOutcome<Balance, Error>)>,
}

impl<AccountId: PartialEq, Balance, Error> ReleaseReport<AccountId, Balance, Error> {
    /// The outcome for a given account, if it is a beneficiary.
    pub fn outcome_of(&self, who: &AccountId) -> Option<&ReleaseOutcome<Balance, Error>> {
        self.outcomes
            .iter()
            .find(|(account, _)| account == who)
            .map(|(_, outcome)| outcome)
    }

    /// Iterate over the outcomes.
    pub fn iter(&self) -> impl Iterator<Item = &(AccountId, ReleaseOutcome<Balance, Error>)> {
        self.outcomes.iter()
    }

    /// Whether any transfer was rejected.
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(|(_, outcome)| outcome.is_failed())
    }
}

impl<AccountId, Balance, Error> ReleaseReport<AccountId, Balance, Error>
where
    Balance: num_traits::Zero + num_traits::CheckedAdd + Copy,
{
    /// The total amount transferred by this release.
    ///
    /// Returns [`None`] on overflow.
    pub fn paid_total(&self) -> Option<Balance> {
        self.outcomes
            .iter()
            .try_fold(Balance::zero(), |acc, (_, outcome)| match outcome {
                ReleaseOutcome::Paid { amount } => acc.checked_add(amount),
                _ => Some(acc),
            })
    }
}
