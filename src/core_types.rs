//! Core types used throughout the system
//!
//! Identifier aliases shared by the entities, stores and the transfer service.

/// Account ID - assigned by the account store on save, immutable afterwards.
///
/// # Usage:
/// - Primary key for accounts in every store implementation
/// - Carried in `TransferError::AccountNotFound`
pub type AccountId = u64;

/// Bank ID - identifies the bank whose transfer counter is advanced.
pub type BankId = u64;

/// Transfer attempt counter
pub type TransferCount = u64;
