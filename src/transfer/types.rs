//! Transfer Core Types

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TransferError;
use crate::core_types::{AccountId, BankId};
use crate::money;

/// Transfer ID - ULID-based, one per transfer attempt
///
/// Only used to correlate log lines and receipts; never persisted by the
/// stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransferId(ulid::Ulid);

impl TransferId {
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }
}

impl Default for TransferId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransferId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(ulid::Ulid::from_string(s)?))
    }
}

/// How the service treats zero or negative transfer amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Reject before any store is touched; the bank counter does not move
    #[default]
    RejectNonPositive,
    /// Run the arithmetic as-is: a negative amount moves money backwards
    Permissive,
}

/// Transfer request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub origin_account_id: AccountId,
    pub destination_account_id: AccountId,
    pub amount: Decimal,
    pub bank_id: BankId,
}

impl TransferRequest {
    pub fn new(
        origin_account_id: AccountId,
        destination_account_id: AccountId,
        amount: Decimal,
        bank_id: BankId,
    ) -> Self {
        Self {
            origin_account_id,
            destination_account_id,
            amount,
            bank_id,
        }
    }

    /// Build a request from an amount string.
    ///
    /// The string must be a plain positive decimal (`"100"`, `"0.50"`).
    /// A sign or zero gives `InvalidAmount`; anything unparsable gives
    /// `InvalidAmountFormat`.
    pub fn parse(
        origin_account_id: AccountId,
        destination_account_id: AccountId,
        amount: &str,
        bank_id: BankId,
    ) -> Result<Self, TransferError> {
        let amount = money::parse_amount(amount.trim())?;
        Ok(Self::new(
            origin_account_id,
            destination_account_id,
            amount,
            bank_id,
        ))
    }
}

/// Result of a completed transfer
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub transfer_id: TransferId,
    pub date: NaiveDate,
    pub status: &'static str,
    pub message: &'static str,
    pub transaction: TransferRequest,
}

impl TransferReceipt {
    pub const STATUS_OK: &'static str = "OK";
    pub const MESSAGE_OK: &'static str = "Transfer completed successfully";

    pub(crate) fn completed(transfer_id: TransferId, transaction: TransferRequest) -> Self {
        Self {
            transfer_id,
            date: Utc::now().date_naive(),
            status: Self::STATUS_OK,
            message: Self::MESSAGE_OK,
            transaction,
        }
    }
}
