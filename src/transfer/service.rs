//! Transfer Service
//!
//! Moves funds between two accounts of a bank through the stores, one
//! independently-durable write at a time.
//!
//! # Step order
//!
//! ```text
//! find bank → count attempt → update bank          (always committed once reached)
//!   → find origin → debit → update origin          (InsufficientFunds stops here)
//!   → find destination → credit → update destination   (BalanceOverflow stops here)
//! ```
//!
//! Nothing is rolled back. A failure after the bank update leaves the
//! counter advanced; a failed debit leaves both accounts untouched and the
//! destination is never read.
//!
//! The service does not serialize concurrent transfers. Two callers working
//! on the same account or bank can lose each other's updates unless the
//! store layer isolates them.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::error::TransferError;
use super::types::{AmountPolicy, TransferId, TransferReceipt, TransferRequest};
use crate::account::Account;
use crate::bank::Bank;
use crate::core_types::{AccountId, BankId, TransferCount};
use crate::money;
use crate::store::{AccountStore, BankStore};

/// Transfer Service - orchestrates account transfers and exposes store reads
pub struct TransferService {
    accounts: Arc<dyn AccountStore>,
    banks: Arc<dyn BankStore>,
    policy: AmountPolicy,
}

impl TransferService {
    /// Create a service with the default amount policy
    pub fn new(accounts: Arc<dyn AccountStore>, banks: Arc<dyn BankStore>) -> Self {
        Self::with_policy(accounts, banks, AmountPolicy::default())
    }

    pub fn with_policy(
        accounts: Arc<dyn AccountStore>,
        banks: Arc<dyn BankStore>,
        policy: AmountPolicy,
    ) -> Self {
        Self {
            accounts,
            banks,
            policy,
        }
    }

    pub fn policy(&self) -> AmountPolicy {
        self.policy
    }

    // ========================================================================
    // Reads and pass-throughs
    // ========================================================================

    pub fn find_by_id(&self, id: AccountId) -> Result<Account, TransferError> {
        Ok(self.accounts.find_by_id(id)?)
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<Account>, TransferError> {
        Ok(self.accounts.find_by_name(name)?)
    }

    pub fn find_all(&self) -> Result<Vec<Account>, TransferError> {
        Ok(self.accounts.find_all()?)
    }

    pub fn find_all_banks(&self) -> Result<Vec<Bank>, TransferError> {
        Ok(self.banks.find_all()?)
    }

    /// Store a new account (id assigned by the store) or replace an existing one
    pub fn save(&self, account: Account) -> Result<Account, TransferError> {
        let saved = self.accounts.save(account)?;
        info!(account_id = ?saved.id(), account_name = saved.name(), "Account saved");
        Ok(saved)
    }

    pub fn delete_by_id(&self, id: AccountId) -> Result<(), TransferError> {
        self.accounts.delete_by_id(id)?;
        info!(account_id = id, "Account deleted");
        Ok(())
    }

    /// Current balance of an account. Pure read.
    pub fn balance_of(&self, account_id: AccountId) -> Result<Decimal, TransferError> {
        Ok(self.accounts.find_by_id(account_id)?.balance())
    }

    /// Transfer attempts counted so far by a bank. Pure read.
    pub fn total_transfers(&self, bank_id: BankId) -> Result<TransferCount, TransferError> {
        Ok(self.banks.find_by_id(bank_id)?.total_transfers())
    }

    // ========================================================================
    // Transfer
    // ========================================================================

    /// Run a transfer described by a request
    pub fn execute(&self, req: &TransferRequest) -> Result<TransferReceipt, TransferError> {
        self.transfer(
            req.origin_account_id,
            req.destination_account_id,
            req.amount,
            req.bank_id,
        )
    }

    /// Move `amount` from `origin_id` to `destination_id`, counting the
    /// attempt on `bank_id`.
    ///
    /// # Errors
    /// - `InvalidAmount` - non-positive amount under `RejectNonPositive`;
    ///   raised before any store access
    /// - `BankNotFound` - nothing changed
    /// - `AccountNotFound` / `InsufficientFunds` / `BalanceOverflow` / `Store` -
    ///   the bank counter has already advanced; any account writes before the
    ///   failing step remain
    pub fn transfer(
        &self,
        origin_id: AccountId,
        destination_id: AccountId,
        amount: Decimal,
        bank_id: BankId,
    ) -> Result<TransferReceipt, TransferError> {
        if self.policy == AmountPolicy::RejectNonPositive {
            money::ensure_positive(amount)?;
        }

        let transfer_id = TransferId::new();
        debug!(
            transfer_id = %transfer_id,
            bank_id,
            origin = origin_id,
            destination = destination_id,
            amount = %amount,
            account_store = self.accounts.name(),
            bank_store = self.banks.name(),
            "Transfer started"
        );

        // Step 1-2: count the attempt before touching any account
        let mut bank = self.banks.find_by_id(bank_id)?;
        let attempt = bank.record_transfer_attempt();
        self.banks.update(&bank)?;
        debug!(transfer_id = %transfer_id, bank_id, attempt, "Transfer attempt counted");

        // Step 3-5: debit origin
        let mut origin = self.accounts.find_by_id(origin_id)?;
        if let Err(e) = origin.debit(amount) {
            warn!(
                transfer_id = %transfer_id,
                origin = origin_id,
                balance = %origin.balance(),
                amount = %amount,
                attempt,
                "Transfer rejected: {}", e
            );
            return Err(TransferError::from_account(origin_id, e));
        }
        self.accounts.update(&origin)?;

        // Step 6-8: credit destination
        let mut destination = self.accounts.find_by_id(destination_id)?;
        if let Err(e) = destination.credit(amount) {
            warn!(
                transfer_id = %transfer_id,
                destination = destination_id,
                balance = %destination.balance(),
                amount = %amount,
                attempt,
                "Credit failed after origin debit was persisted: {}", e
            );
            return Err(TransferError::from_account(destination_id, e));
        }
        self.accounts.update(&destination)?;

        info!(
            transfer_id = %transfer_id,
            bank_id,
            attempt,
            "Transfer completed: {} -> {} amount={}",
            origin_id,
            destination_id,
            money::format_amount(amount)
        );

        Ok(TransferReceipt::completed(
            transfer_id,
            TransferRequest::new(origin_id, destination_id, amount, bank_id),
        ))
    }
}
