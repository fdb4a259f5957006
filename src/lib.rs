//! Account Transfer Core
//!
//! Moves funds between accounts of a bank through pluggable stores, keeping
//! every balance non-negative and counting each transfer attempt on the bank.
//!
//! # Modules
//!
//! - [`core_types`] - Id and counter aliases
//! - [`account`] - Account entity (debit/credit)
//! - [`bank`] - Bank entity (transfer attempt counter)
//! - [`money`] - Decimal amount parsing/formatting
//! - [`store`] - Store traits and in-memory implementations
//! - [`transfer`] - Transfer service, request/receipt types, errors
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

// Core types - must be first!
pub mod core_types;

// Entities
pub mod account;
pub mod bank;
pub mod money;

// Persistence and orchestration
pub mod store;
pub mod transfer;

// Ambient
pub mod config;
pub mod logging;

// Convenient re-exports at crate root
pub use account::{Account, AccountError};
pub use bank::Bank;
pub use core_types::{AccountId, BankId, TransferCount};
pub use store::{AccountStore, BankStore, InMemoryAccountStore, InMemoryBankStore, StoreError};
pub use transfer::{
    AmountPolicy, TransferError, TransferId, TransferReceipt, TransferRequest, TransferService,
};
