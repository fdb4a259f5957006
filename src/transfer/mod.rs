//! Account Transfers
//!
//! Moves funds between two accounts of one bank and counts every attempt on
//! the bank.
//!
//! # Partial failure
//!
//! The three writes (bank, origin, destination) are independent. There is no
//! unit of work around them:
//!
//! ```text
//! bank.update ──▶ origin.update ──▶ destination.update
//!      │                │
//!      └─ kept on any later failure
//!                       └─ kept if the destination step fails
//! ```
//!
//! A caller that sees `InsufficientFunds` must read it as "counter advanced,
//! no money moved".

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod integration_tests;

// Re-exports for convenience
pub use error::TransferError;
pub use service::TransferService;
pub use types::{AmountPolicy, TransferId, TransferReceipt, TransferRequest};
