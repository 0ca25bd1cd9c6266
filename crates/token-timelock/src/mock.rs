//! The mocks for the tests.

use mockall::mock;

use super::*;

pub const CUSTODIAN: u64 = 1;
pub const ALICE: u64 = 42;
pub const BOB: u64 = 52;
pub const CAROL: u64 = 62;

pub const RELEASE_TIME: UnixSeconds = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTransferError;

mock! {
    pub Ledger {}
    impl TokenLedger for Ledger {
        type AccountId = u64;
        type Balance = u64;
        type Error = MockTransferError;

        fn total_supply(&self) -> u64;
        fn balance_of(&self, who: &u64) -> u64;
        fn transfer(&self, from: &u64, to: &u64, amount: u64) -> Result<(), MockTransferError>;
    }
}

mock! {
    pub Time {}
    impl Clock for Time {
        fn now(&self) -> UnixSeconds;
    }
}

pub type TestSchedule = VestingSchedule<MockLedger, MockTime>;

/// A ledger that passes the construction checks.
pub fn valid_ledger() -> MockLedger {
    let mut ledger = MockLedger::new();
    ledger.expect_total_supply().return_const(1_000_u64);
    ledger
}

/// A clock stuck at `now`.
pub fn clock_at(now: UnixSeconds) -> MockTime {
    let mut clock = MockTime::new();
    clock.expect_now().return_const(now);
    clock
}

/// A config with the given beneficiaries and allocations.
pub fn config(pairs: impl IntoIterator<Item = (u64, u64)>) -> TimelockConfig<u64, u64> {
    let (beneficiaries, allocations) = pairs.into_iter().unzip();
    TimelockConfig {
        custodian: CUSTODIAN,
        beneficiaries,
        allocations,
        release_time: RELEASE_TIME,
    }
}

/// The three beneficiaries from the reference deployment.
pub fn standard_config() -> TimelockConfig<u64, u64> {
    config([(ALICE, 70), (BOB, 30), (CAROL, 30)])
}
