use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::account::Account;
use crate::bank::Bank;
use crate::core_types::{AccountId, BankId, TransferCount};
use crate::money;
use crate::transfer::{AmountPolicy, TransferError, TransferRequest};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: LogRotation,
    /// Mirror log lines to stdout next to the file
    #[serde(default = "default_log_stdout")]
    pub log_stdout: bool,
    #[serde(default)]
    pub transfer: TransferConfig,
    /// Initial contents of the in-memory stores
    #[serde(default)]
    pub seed: SeedConfig,
}

/// How often the log file rolls over
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

fn default_log_stdout() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TransferConfig {
    #[serde(default)]
    pub amount_policy: AmountPolicy,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub banks: Vec<BankSeed>,
    #[serde(default)]
    pub accounts: Vec<AccountSeed>,
    /// Transfers the binary runs after seeding
    #[serde(default)]
    pub transfers: Vec<TransferSeed>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BankSeed {
    pub id: BankId,
    pub name: String,
    #[serde(default)]
    pub total_transfers: TransferCount,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccountSeed {
    /// Left empty to let the store assign one
    #[serde(default)]
    pub id: Option<AccountId>,
    pub name: String,
    /// Decimal string, e.g. "1000.00"
    pub balance: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TransferSeed {
    pub origin: AccountId,
    pub destination: AccountId,
    /// Decimal string, e.g. "100"
    pub amount: String,
    pub bank: BankId,
}

impl BankSeed {
    pub fn to_bank(&self) -> Bank {
        Bank::with_total_transfers(self.id, self.name.clone(), self.total_transfers)
    }
}

impl AccountSeed {
    pub fn to_account(&self) -> Result<Account> {
        let balance = money::parse_balance(&self.balance)
            .with_context(|| format!("Invalid balance for account '{}'", self.name))?;
        Ok(match self.id {
            Some(id) => Account::with_id(id, self.name.clone(), balance),
            None => Account::new(self.name.clone(), balance),
        })
    }
}

impl TransferSeed {
    /// Seeded amounts go through the same strict parsing as any caller input
    pub fn to_request(&self) -> Result<TransferRequest, TransferError> {
        TransferRequest::parse(self.origin, self.destination, &self.amount, self.bank)
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", config_path))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
