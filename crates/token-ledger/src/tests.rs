//! Tests.

use assert_matches::assert_matches;

use crate::{InMemoryLedger, TokenLedger, TransferError};

type TestLedger = InMemoryLedger<u64, u64>;

const CREATOR: u64 = 1;
const ALICE: u64 = 42;
const BOB: u64 = 52;

fn new_ledger() -> TestLedger {
    InMemoryLedger::new(CREATOR, 5_000_000_000, "DRONE", "DRONE")
}

/// This test verifies that the creator receives the whole supply.
#[test]
fn new_credits_total_supply_to_creator() {
    let ledger = new_ledger();

    assert_eq!(ledger.name(), "DRONE");
    assert_eq!(ledger.symbol(), "DRONE");
    assert_eq!(ledger.total_supply(), 5_000_000_000);
    assert_eq!(ledger.balance_of(&CREATOR), 5_000_000_000);
    assert_eq!(ledger.balance_of(&ALICE), 0);
}

/// This test verifies that `transfer` works in the happy path.
#[test]
#[tracing_test::traced_test]
fn transfer_works() {
    let ledger = new_ledger();

    ledger.transfer(&CREATOR, &ALICE, 100).unwrap();
    ledger.transfer(&ALICE, &BOB, 30).unwrap();

    assert_eq!(ledger.balance_of(&CREATOR), 4_999_999_900);
    assert_eq!(ledger.balance_of(&ALICE), 70);
    assert_eq!(ledger.balance_of(&BOB), 30);
    assert_eq!(ledger.total_supply(), 5_000_000_000);
    assert!(logs_contain("Transfer executed"));
}

/// This test verifies that `transfer` fails without side effects when the sender does not have
/// enough balance.
#[test]
fn transfer_insufficient_balance() {
    let ledger = new_ledger();
    ledger.transfer(&CREATOR, &ALICE, 100).unwrap();

    assert_eq!(
        ledger.transfer(&ALICE, &BOB, 101),
        Err(TransferError::InsufficientBalance {
            available: 100,
            requested: 101,
        })
    );

    assert_eq!(ledger.balance_of(&ALICE), 100);
    assert_eq!(ledger.balance_of(&BOB), 0);
}

/// This test verifies that an unknown account can not send anything.
#[test]
fn transfer_from_unknown_account() {
    let ledger = new_ledger();

    assert_matches!(
        ledger.transfer(&ALICE, &BOB, 1),
        Err(TransferError::InsufficientBalance { available: 0, .. })
    );
}

/// This test verifies that zero and self transfers succeed and change nothing.
#[test]
fn transfer_noop_cases() {
    let ledger = new_ledger();

    ledger.transfer(&ALICE, &BOB, 0).unwrap();
    ledger.transfer(&CREATOR, &CREATOR, 1000).unwrap();

    assert_eq!(ledger.balance_of(&CREATOR), 5_000_000_000);
    assert_eq!(ledger.balance_of(&ALICE), 0);
    assert_eq!(ledger.balance_of(&BOB), 0);
}

/// This test verifies that a self transfer still respects the balance.
#[test]
fn self_transfer_over_balance_fails() {
    let ledger = new_ledger();

    assert_matches!(
        ledger.transfer(&ALICE, &ALICE, 1),
        Err(TransferError::InsufficientBalance { .. })
    );
}

/// This test verifies that shared handles operate on the same balances.
#[test]
fn shared_handles_see_same_balances() {
    let ledger = std::sync::Arc::new(new_ledger());
    let by_ref: &TestLedger = &ledger;

    let shared = std::sync::Arc::clone(&ledger);
    shared.transfer(&CREATOR, &ALICE, 100).unwrap();
    by_ref.transfer(&ALICE, &BOB, 40).unwrap();

    assert_eq!(ledger.balance_of(&ALICE), 60);
    assert_eq!(shared.balance_of(&BOB), 40);
}

/// This test verifies that transfers neither create nor destroy tokens, even when a balance gets
/// close to the limit of the balance type.
#[test]
fn transfers_conserve_total_supply() {
    let ledger = InMemoryLedger::<u64, u8>::new(CREATOR, u8::MAX, "T", "T");

    ledger.transfer(&CREATOR, &ALICE, 200).unwrap();
    ledger.transfer(&CREATOR, &BOB, 55).unwrap();
    ledger.transfer(&BOB, &ALICE, 55).unwrap();
    assert_matches!(
        ledger.transfer(&BOB, &ALICE, 1),
        Err(TransferError::InsufficientBalance { available: 0, requested: 1 })
    );

    assert_eq!(ledger.balance_of(&ALICE), u8::MAX);
    let total: u16 = [CREATOR, ALICE, BOB]
        .iter()
        .map(|who| u16::from(ledger.balance_of(who)))
        .sum();
    assert_eq!(total, u16::from(ledger.total_supply()));
}
