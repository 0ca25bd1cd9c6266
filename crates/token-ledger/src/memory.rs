//! In-memory ledger.

use std::{
    collections::BTreeMap,
    fmt::Debug,
    sync::{Mutex, MutexGuard},
};

use num_traits::{CheckedSub, SaturatingAdd, Zero};
use tracing::{debug, trace};

use crate::TokenLedger;

/// The errors on the transfer operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError<Balance: Debug> {
    /// The sender does not hold enough tokens.
    #[error("insufficient balance: available {available:?}, requested {requested:?}")]
    InsufficientBalance {
        /// The sender balance at the moment of the transfer.
        available: Balance,
        /// The amount that was requested to be transferred.
        requested: Balance,
    },
}

/// A ledger that keeps all the balances in memory.
///
/// The whole supply is issued to the creator at construction, the way an ERC-20 token is
/// deployed.
pub struct InMemoryLedger<AccountId, Balance> {
    /// The token name.
    name: String,
    /// The token symbol.
    symbol: String,
    /// The total supply, fixed at construction.
    total_supply: Balance,
    /// Balances of the accounts that were ever credited.
    balances: Mutex<BTreeMap<AccountId, Balance>>,
}

impl<AccountId, Balance> InMemoryLedger<AccountId, Balance>
where
    AccountId: Ord + Clone + Debug,
    Balance: Copy + Debug + Zero + SaturatingAdd + CheckedSub + PartialOrd,
{
    /// Create a new ledger and credit the whole `total_supply` to the `creator`.
    pub fn new(
        creator: AccountId,
        total_supply: Balance,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        let mut balances = BTreeMap::new();
        balances.insert(creator, total_supply);
        Self {
            name: name.into(),
            symbol: symbol.into(),
            total_supply,
            balances: Mutex::new(balances),
        }
    }

    /// The token name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The token symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Lock the balances.
    fn balances(&self) -> MutexGuard<'_, BTreeMap<AccountId, Balance>> {
        // A panic while holding the lock can not leave the map half-updated, as we only write
        // after all the checks passed.
        match self.balances.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<AccountId, Balance> TokenLedger for InMemoryLedger<AccountId, Balance>
where
    AccountId: Ord + Clone + Debug,
    Balance: Copy + Debug + Zero + SaturatingAdd + CheckedSub + PartialOrd,
{
    type AccountId = AccountId;
    type Balance = Balance;
    type Error = TransferError<Balance>;

    fn total_supply(&self) -> Self::Balance {
        self.total_supply
    }

    fn balance_of(&self, who: &Self::AccountId) -> Self::Balance {
        self.balances()
            .get(who)
            .copied()
            .unwrap_or_else(Zero::zero)
    }

    fn transfer(
        &self,
        from: &Self::AccountId,
        to: &Self::AccountId,
        amount: Self::Balance,
    ) -> Result<(), Self::Error> {
        let mut balances = self.balances();

        let available = balances.get(from).copied().unwrap_or_else(Zero::zero);
        let Some(from_balance) = available.checked_sub(&amount) else {
            debug!(
                message = "Rejecting transfer due to insufficient balance",
                ?from,
                ?to,
                ?available,
                requested = ?amount,
            );
            return Err(TransferError::InsufficientBalance {
                available,
                requested: amount,
            });
        };

        if amount.is_zero() || from == to {
            trace!(message = "No-op transfer", ?from, ?to, ?amount);
            return Ok(());
        }

        // Balances always sum up to the total supply, so the recipient balance fits.
        let to_balance = balances
            .get(to)
            .copied()
            .unwrap_or_else(Zero::zero)
            .saturating_add(&amount);

        balances.insert(from.clone(), from_balance);
        balances.insert(to.clone(), to_balance);

        trace!(message = "Transfer executed", ?from, ?to, ?amount);

        Ok(())
    }
}
