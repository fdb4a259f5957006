//! Transfer Error Types
//!
//! Every failure the transfer service can surface to its caller.

use thiserror::Error;

use crate::account::AccountError;
use crate::core_types::{AccountId, BankId};
use crate::money::MoneyError;
use crate::store::StoreError;

/// Transfer error types
///
/// None of these are retried or compensated internally. A caller receiving
/// any of them after step 2 of a transfer must assume the bank counter has
/// already advanced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    // === Validation Errors ===
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Invalid amount format: {0}")]
    InvalidAmountFormat(String),

    // === Lookup Errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Bank not found: {0}")]
    BankNotFound(BankId),

    // === Balance Errors ===
    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Balance overflow on account {0}")]
    BalanceOverflow(AccountId),

    // === System Errors ===
    #[error("Store error: {0}")]
    Store(String),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::InvalidAmountFormat(_) => "INVALID_AMOUNT_FORMAT",
            TransferError::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            TransferError::BankNotFound(_) => "BANK_NOT_FOUND",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::BalanceOverflow(_) => "BALANCE_OVERFLOW",
            TransferError::Store(_) => "STORE_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount | TransferError::InvalidAmountFormat(_) => 400,
            TransferError::AccountNotFound(_) | TransferError::BankNotFound(_) => 404,
            TransferError::InsufficientFunds | TransferError::BalanceOverflow(_) => 422,
            TransferError::Store(_) => 500,
        }
    }

    /// True when the failure is a missing account or bank
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TransferError::AccountNotFound(_) | TransferError::BankNotFound(_)
        )
    }

    /// Attach the account a balance operation failed on
    pub fn from_account(account_id: AccountId, e: AccountError) -> Self {
        match e {
            AccountError::InsufficientFunds => TransferError::InsufficientFunds,
            AccountError::Overflow => TransferError::BalanceOverflow(account_id),
        }
    }
}

impl From<StoreError> for TransferError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AccountNotFound(id) => TransferError::AccountNotFound(id),
            StoreError::BankNotFound(id) => TransferError::BankNotFound(id),
            other => TransferError::Store(other.to_string()),
        }
    }
}

impl From<MoneyError> for TransferError {
    fn from(e: MoneyError) -> Self {
        match e {
            MoneyError::InvalidAmount => TransferError::InvalidAmount,
            other => TransferError::InvalidAmountFormat(other.to_string()),
        }
    }
}
