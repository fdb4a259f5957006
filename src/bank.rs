//! Bank entity
//!
//! A bank is a long-lived record whose only mutable state is the count of
//! transfer attempts made against it.

use serde::{Deserialize, Serialize};

use crate::core_types::{BankId, TransferCount};

/// Bank record with a monotonically non-decreasing transfer counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bank {
    id: BankId,
    name: String,
    total_transfers: TransferCount,
}

impl Bank {
    pub fn new(id: BankId, name: impl Into<String>) -> Self {
        Self::with_total_transfers(id, name, 0)
    }

    /// Restore a bank with an existing counter value
    pub fn with_total_transfers(
        id: BankId,
        name: impl Into<String>,
        total_transfers: TransferCount,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            total_transfers,
        }
    }

    #[inline]
    pub fn id(&self) -> BankId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn total_transfers(&self) -> TransferCount {
        self.total_transfers
    }

    /// Counter value after one more attempt. Does not mutate.
    ///
    /// Saturates at `u64::MAX` so the counter can never move backwards.
    #[inline]
    pub fn next_transfer_count(&self) -> TransferCount {
        self.total_transfers.saturating_add(1)
    }

    /// Count one transfer attempt. The caller persists the bank afterwards.
    pub fn record_transfer_attempt(&mut self) -> TransferCount {
        self.total_transfers = self.next_transfer_count();
        self.total_transfers
    }
}
