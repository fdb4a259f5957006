//! Entity Stores
//!
//! Persistence capabilities the transfer service depends on. Stores give no
//! transaction guarantees: every `update` is independently durable.
//!
//! Reads return owned copies. Mutating a fetched entity has no effect on
//! what other readers see until it is passed back through `update`.

pub mod memory;

pub use memory::{InMemoryAccountStore, InMemoryBankStore};

use thiserror::Error;

use crate::account::Account;
use crate::bank::Bank;
use crate::core_types::{AccountId, BankId};

/// Store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Bank not found: {0}")]
    BankNotFound(BankId),

    #[error("Entity has no id; save it before updating")]
    MissingId,

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Account persistence
pub trait AccountStore: Send + Sync {
    /// Get adapter name for logging
    fn name(&self) -> &'static str;

    /// Fetch one account by id
    fn find_by_id(&self, id: AccountId) -> Result<Account, StoreError>;

    /// First account whose name matches exactly
    fn find_by_name(&self, name: &str) -> Result<Option<Account>, StoreError>;

    fn find_all(&self) -> Result<Vec<Account>, StoreError>;

    /// Insert or replace an account.
    ///
    /// An account without id gets the next id from the store. The stored
    /// copy is returned.
    fn save(&self, account: Account) -> Result<Account, StoreError>;

    /// Overwrite an existing account.
    ///
    /// # Errors
    /// - `MissingId` if the account was never saved
    /// - `AccountNotFound` if the id is no longer in the store
    fn update(&self, account: &Account) -> Result<(), StoreError>;

    fn delete_by_id(&self, id: AccountId) -> Result<(), StoreError>;
}

/// Bank persistence
pub trait BankStore: Send + Sync {
    fn name(&self) -> &'static str;

    fn find_by_id(&self, id: BankId) -> Result<Bank, StoreError>;

    fn find_all(&self) -> Result<Vec<Bank>, StoreError>;

    /// Overwrite an existing bank.
    fn update(&self, bank: &Bank) -> Result<(), StoreError>;
}
