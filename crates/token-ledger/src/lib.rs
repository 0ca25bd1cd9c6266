//! Fungible token ledger abstraction and an in-memory reference implementation.

#![warn(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::clone_on_ref_ptr
)]

mod memory;
pub mod traits;

pub use memory::{InMemoryLedger, TransferError};
pub use traits::TokenLedger;

#[cfg(test)]
mod tests;
