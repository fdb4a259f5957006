//! Integration Tests for the transfer service
//!
//! Drive the service through recording stores to check not only the final
//! balances but every store call a transfer makes, in order.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::account::Account;
use crate::bank::Bank;
use crate::store::mock::{RecordingAccountStore, RecordingBankStore};
use crate::store::{AccountStore, InMemoryAccountStore, InMemoryBankStore};
use crate::transfer::{TransferError, TransferService};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Service wired to recording stores, with handles kept for assertions
struct TestHarness {
    service: TransferService,
    accounts: Arc<RecordingAccountStore>,
    banks: Arc<RecordingBankStore>,
}

impl TestHarness {
    /// Diego (1) = 1000, Pedro (2) = 2000, bank 1 with counter 0
    fn new() -> Self {
        let account_store = InMemoryAccountStore::new();
        account_store
            .save(Account::with_id(1, "Diego", dec("1000")))
            .unwrap();
        account_store
            .save(Account::with_id(2, "Pedro", dec("2000")))
            .unwrap();

        let bank_store = InMemoryBankStore::new();
        bank_store.insert(Bank::new(1, "Banco de la plaza"));

        let accounts = Arc::new(RecordingAccountStore::new(account_store));
        let banks = Arc::new(RecordingBankStore::new(bank_store));
        let service = TransferService::new(accounts.clone(), banks.clone());

        Self {
            service,
            accounts,
            banks,
        }
    }
}

// ========================================================================
// Happy Path
// ========================================================================

#[test]
fn test_transfer_then_insufficient_funds_call_accounting() {
    let h = TestHarness::new();

    assert_eq!(h.service.balance_of(1).unwrap().to_string(), "1000");
    assert_eq!(h.service.balance_of(2).unwrap().to_string(), "2000");

    h.service.transfer(1, 2, dec("100"), 1).unwrap();

    let err = h.service.transfer(1, 2, dec("1200"), 1).unwrap_err();
    assert_eq!(err, TransferError::InsufficientFunds);

    assert_eq!(h.service.balance_of(1).unwrap().to_string(), "900");
    assert_eq!(h.service.balance_of(2).unwrap().to_string(), "2100");
    assert_eq!(h.service.total_transfers(1).unwrap(), 2);

    assert_eq!(h.accounts.find_by_id_count(1), 4);
    assert_eq!(h.accounts.find_by_id_count(2), 3);
    assert_eq!(h.accounts.update_count(), 2);

    assert_eq!(h.banks.find_by_id_count(), 3);
    assert_eq!(h.banks.update_count(), 2);

    assert_eq!(h.accounts.find_all_count(), 0);
}

#[test]
fn test_successful_transfer_step_order() {
    let h = TestHarness::new();
    h.service.transfer(1, 2, dec("100"), 1).unwrap();

    assert_eq!(
        h.accounts.operations(),
        vec!["find_by_id(1)", "update(1)", "find_by_id(2)", "update(2)"]
    );
    assert_eq!(h.banks.find_by_id_count(), 1);
    assert_eq!(h.banks.update_count(), 1);
}

// ========================================================================
// Partial Failure
// ========================================================================

#[test]
fn test_insufficient_funds_never_reads_destination() {
    let h = TestHarness::new();
    let err = h.service.transfer(1, 2, dec("1000.01"), 1).unwrap_err();

    assert_eq!(err, TransferError::InsufficientFunds);
    assert_eq!(h.accounts.operations(), vec!["find_by_id(1)"]);
    assert_eq!(h.accounts.update_count(), 0);

    // Counter was already persisted
    assert_eq!(h.banks.update_count(), 1);
    assert_eq!(h.service.total_transfers(1).unwrap(), 1);
}

#[test]
fn test_unknown_bank_touches_no_account() {
    let h = TestHarness::new();
    let err = h.service.transfer(1, 2, dec("10"), 5).unwrap_err();

    assert_eq!(err, TransferError::BankNotFound(5));
    assert!(h.accounts.operations().is_empty());
    assert_eq!(h.banks.update_count(), 0);
}

#[test]
fn test_store_failure_on_origin_update_keeps_counter() {
    let h = TestHarness::new();
    h.accounts.set_fail_update(true);

    let err = h.service.transfer(1, 2, dec("10"), 1).unwrap_err();
    assert!(matches!(err, TransferError::Store(_)));

    assert_eq!(h.accounts.operations(), vec!["find_by_id(1)", "update(1)"]);
    assert_eq!(h.service.total_transfers(1).unwrap(), 1);
    assert_eq!(h.service.balance_of(1).unwrap(), dec("1000"));
}

#[test]
fn test_destination_at_decimal_max_stops_before_update() {
    let h = TestHarness::new();
    h.accounts
        .save(Account::with_id(3, "Max", Decimal::MAX))
        .unwrap();

    let err = h.service.transfer(1, 3, dec("10"), 1).unwrap_err();
    assert_eq!(err, TransferError::BalanceOverflow(3));

    assert_eq!(
        h.accounts.operations(),
        vec!["save", "find_by_id(1)", "update(1)", "find_by_id(3)"]
    );
    assert_eq!(h.service.balance_of(1).unwrap(), dec("990"));
    assert_eq!(h.service.balance_of(3).unwrap(), Decimal::MAX);
    assert_eq!(h.service.total_transfers(1).unwrap(), 1);
}

#[test]
fn test_invalid_amount_rejected_before_bank_read() {
    let h = TestHarness::new();
    let err = h.service.transfer(1, 2, Decimal::ZERO, 1).unwrap_err();

    assert_eq!(err, TransferError::InvalidAmount);
    assert_eq!(h.banks.find_by_id_count(), 0);
    assert!(h.accounts.operations().is_empty());
}

// ========================================================================
// Reads
// ========================================================================

#[test]
fn test_repeated_find_by_id_is_value_equal() {
    let h = TestHarness::new();
    let first = h.service.find_by_id(1).unwrap();
    let second = h.service.find_by_id(1).unwrap();

    assert_eq!(first, second);
    assert_eq!(h.accounts.find_by_id_count(1), 2);
}

#[test]
fn test_reads_have_no_side_effects() {
    let h = TestHarness::new();
    for _ in 0..5 {
        assert_eq!(h.service.balance_of(1).unwrap(), dec("1000"));
        assert_eq!(h.service.total_transfers(1).unwrap(), 0);
    }
    assert_eq!(h.accounts.update_count(), 0);
    assert_eq!(h.banks.update_count(), 0);
    assert_eq!(h.accounts.save_count(), 0);
}
