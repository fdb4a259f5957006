//! In-memory stores backed by `DashMap`.
//!
//! Each call locks only the shard holding the entry it touches. Nothing
//! spans two calls, so a transfer's reads and writes can interleave with
//! another caller's.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{AccountStore, BankStore, StoreError};
use crate::account::Account;
use crate::bank::Bank;
use crate::core_types::{AccountId, BankId};

/// Thread-safe in-memory account store with sequential id assignment.
pub struct InMemoryAccountStore {
    accounts: DashMap<AccountId, Account>,
    /// Next id handed out by `save`
    next_id: AtomicU64,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Keep the sequence ahead of any explicitly chosen id
    fn bump_sequence_past(&self, id: AccountId) {
        self.next_id.fetch_max(id.saturating_add(1), Ordering::AcqRel);
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn name(&self) -> &'static str {
        "memory-accounts"
    }

    fn find_by_id(&self, id: AccountId) -> Result<Account, StoreError> {
        self.accounts
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::AccountNotFound(id))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Account>, StoreError> {
        // Lowest id wins when names collide
        Ok(self
            .find_all()?
            .into_iter()
            .find(|account| account.name() == name))
    }

    fn find_all(&self) -> Result<Vec<Account>, StoreError> {
        let mut all: Vec<Account> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|account| account.id());
        Ok(all)
    }

    fn save(&self, mut account: Account) -> Result<Account, StoreError> {
        let id = match account.id() {
            Some(id) => {
                self.bump_sequence_past(id);
                id
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::AcqRel);
                account.assign_id(id);
                id
            }
        };
        self.accounts.insert(id, account.clone());
        tracing::debug!(account_id = id, store = self.name(), "Account saved");
        Ok(account)
    }

    fn update(&self, account: &Account) -> Result<(), StoreError> {
        let id = account.id().ok_or(StoreError::MissingId)?;
        let mut entry = self
            .accounts
            .get_mut(&id)
            .ok_or(StoreError::AccountNotFound(id))?;
        *entry = account.clone();
        Ok(())
    }

    fn delete_by_id(&self, id: AccountId) -> Result<(), StoreError> {
        self.accounts
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::AccountNotFound(id))
    }
}

/// Thread-safe in-memory bank store.
pub struct InMemoryBankStore {
    banks: DashMap<BankId, Bank>,
}

impl InMemoryBankStore {
    pub fn new() -> Self {
        Self {
            banks: DashMap::new(),
        }
    }

    /// Insert or replace a bank record (used for seeding)
    pub fn insert(&self, bank: Bank) {
        self.banks.insert(bank.id(), bank);
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}

impl Default for InMemoryBankStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BankStore for InMemoryBankStore {
    fn name(&self) -> &'static str {
        "memory-banks"
    }

    fn find_by_id(&self, id: BankId) -> Result<Bank, StoreError> {
        self.banks
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::BankNotFound(id))
    }

    fn find_all(&self) -> Result<Vec<Bank>, StoreError> {
        let mut all: Vec<Bank> = self.banks.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|bank| bank.id());
        Ok(all)
    }

    fn update(&self, bank: &Bank) -> Result<(), StoreError> {
        let mut entry = self
            .banks
            .get_mut(&bank.id())
            .ok_or(StoreError::BankNotFound(bank.id()))?;
        *entry = bank.clone();
        Ok(())
    }
}
