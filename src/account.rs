//! Account entity
//!
//! An account owns an exact decimal balance. All balance mutations go
//! through [`Account::debit`] and [`Account::credit`].
//!
//! # Invariants
//! - `balance >= 0` holds after every successful debit
//! - A failed debit leaves the balance untouched
//! - Credit has no business limit; it only fails when the result leaves
//!   the range `Decimal` can represent exactly
//!
//! # Usage
//! ```ignore
//! let mut account = Account::new("Diego", Decimal::from(1000));
//! account.debit(Decimal::from(100))?;   // balance = 900
//! account.credit(Decimal::from(50))?;   // balance = 950
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core_types::AccountId;

/// Balance operation errors
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Balance overflow: result is not exactly representable")]
    Overflow,
}

/// A named account holding a decimal balance.
///
/// Equality is by value: two accounts are equal when id, name and balance
/// all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    id: Option<AccountId>,
    name: String,
    balance: Decimal,
}

impl Account {
    /// Create an account that has not been stored yet (no id).
    pub fn new(name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            balance,
        }
    }

    /// Create an account with a known id, as returned by a store.
    pub fn with_id(id: AccountId, name: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            balance,
        }
    }

    #[inline]
    pub fn id(&self) -> Option<AccountId> {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Assign the store id. Only stores call this, once, on save.
    pub(crate) fn assign_id(&mut self, id: AccountId) {
        self.id = Some(id);
    }

    /// Withdraw `amount` from the balance.
    ///
    /// # Errors
    /// - `InsufficientFunds` if the result would be negative
    /// - `Overflow` if the difference is out of range or would be rounded
    ///
    /// The balance is not modified on either error.
    ///
    /// The amount's sign is not checked here; transfer-level policy decides
    /// whether non-positive amounts are allowed.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let new_balance = exact(self.balance.checked_sub(amount), self.balance, amount)?;
        if new_balance < Decimal::ZERO {
            return Err(AccountError::InsufficientFunds);
        }
        self.balance = new_balance;
        Ok(())
    }

    /// Deposit `amount` into the balance.
    ///
    /// # Errors
    /// - `Overflow` if the sum is out of range or would be rounded; the
    ///   balance is not modified
    pub fn credit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.balance = exact(self.balance.checked_add(amount), self.balance, amount)?;
        Ok(())
    }
}

/// Reject results `Decimal` had to round.
///
/// An exact sum or difference keeps the larger operand scale; rust_decimal
/// only lowers it when the mantissa no longer fits in 96 bits.
fn exact(result: Option<Decimal>, lhs: Decimal, rhs: Decimal) -> Result<Decimal, AccountError> {
    let result = result.ok_or(AccountError::Overflow)?;
    if result.scale() < lhs.scale().max(rhs.scale()) {
        return Err(AccountError::Overflow);
    }
    Ok(result)
}
