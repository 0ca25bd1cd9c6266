//! The ledger-related traits.

use std::sync::Arc;

/// An append-only fungible accounting service.
///
/// The ledger is authoritative over balances and synchronizes internally, so all the operations
/// take `&self`.
pub trait TokenLedger {
    /// The account identifier type.
    type AccountId;
    /// The amount type, denominated in the smallest unit of the token.
    type Balance;
    /// The error that can occur at transfer.
    type Error;

    /// The total amount of tokens ever issued at the ledger.
    fn total_supply(&self) -> Self::Balance;

    /// The balance of a given account.
    ///
    /// Accounts the ledger has never seen have zero balance.
    fn balance_of(&self, who: &Self::AccountId) -> Self::Balance;

    /// Move `amount` from `from` to `to`.
    ///
    /// The transfer is atomic: if an error is returned, no balance has changed.
    fn transfer(
        &self,
        from: &Self::AccountId,
        to: &Self::AccountId,
        amount: Self::Balance,
    ) -> Result<(), Self::Error>;
}

impl<T: TokenLedger + ?Sized> TokenLedger for &T {
    type AccountId = T::AccountId;
    type Balance = T::Balance;
    type Error = T::Error;

    fn total_supply(&self) -> Self::Balance {
        (**self).total_supply()
    }

    fn balance_of(&self, who: &Self::AccountId) -> Self::Balance {
        (**self).balance_of(who)
    }

    fn transfer(
        &self,
        from: &Self::AccountId,
        to: &Self::AccountId,
        amount: Self::Balance,
    ) -> Result<(), Self::Error> {
        (**self).transfer(from, to, amount)
    }
}

impl<T: TokenLedger + ?Sized> TokenLedger for Arc<T> {
    type AccountId = T::AccountId;
    type Balance = T::Balance;
    type Error = T::Error;

    fn total_supply(&self) -> Self::Balance {
        (**self).total_supply()
    }

    fn balance_of(&self, who: &Self::AccountId) -> Self::Balance {
        (**self).balance_of(who)
    }

    fn transfer(
        &self,
        from: &Self::AccountId,
        to: &Self::AccountId,
        amount: Self::Balance,
    ) -> Result<(), Self::Error> {
        (**self).transfer(from, to, amount)
    }
}
