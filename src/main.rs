//! Account Transfer - demo runner
//!
//! Seeds the in-memory stores from `config/<env>.yaml`, runs the configured
//! transfers in order and prints each outcome.
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌──────────┐
//! │  Config  │───▶│  Stores  │───▶│   Transfer   │───▶│  Output  │
//! │  (YAML)  │    │ (memory) │    │   Service    │    │  (JSON)  │
//! └──────────┘    └──────────┘    └──────────────┘    └──────────┘
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};

use account_transfer::config::AppConfig;
use account_transfer::money::format_amount;
use account_transfer::{
    AccountStore, InMemoryAccountStore, InMemoryBankStore, TransferError, TransferService,
};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn build_service(config: &AppConfig) -> Result<TransferService> {
    let banks = InMemoryBankStore::new();
    for seed in &config.seed.banks {
        banks.insert(seed.to_bank());
    }

    let accounts = InMemoryAccountStore::new();
    for seed in &config.seed.accounts {
        let saved = accounts.save(seed.to_account()?)?;
        tracing::debug!(account_id = ?saved.id(), account_name = saved.name(), "Seeded account");
    }

    tracing::info!(
        banks = banks.len(),
        accounts = accounts.len(),
        "Stores seeded"
    );

    let service = TransferService::with_policy(
        Arc::new(accounts),
        Arc::new(banks),
        config.transfer.amount_policy,
    );
    tracing::info!(policy = ?service.policy(), "Transfer service ready");
    Ok(service)
}

fn print_state(service: &TransferService) -> Result<()> {
    for account in service.find_all()? {
        println!(
            "  account {:>3} {:<12} {}",
            account.id().map_or("-".to_string(), |id| id.to_string()),
            account.name(),
            format_amount(account.balance())
        );
    }
    for bank in service.find_all_banks()? {
        println!(
            "  bank    {:>3} {:<12} transfers={}",
            bank.id(),
            bank.name(),
            bank.total_transfers()
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let _log_guard = account_transfer::logging::init_logging(&app_config)?;

    tracing::info!(
        "Starting account transfer demo in {} mode (build {})",
        env,
        env!("GIT_HASH")
    );

    let service = build_service(&app_config)?;

    println!("=== Initial state ===");
    print_state(&service)?;

    println!("\n=== Transfers ===");
    for seed in &app_config.seed.transfers {
        let req = match seed.to_request() {
            Ok(req) => req,
            // Rejected before reaching the service, so nothing was counted
            Err(e) => {
                tracing::warn!(amount = %seed.amount, "Skipping seeded transfer: {}", e);
                println!(
                    "✗ {} -> {}: {} [{}] (amount {:?})",
                    seed.origin,
                    seed.destination,
                    e,
                    e.code(),
                    seed.amount
                );
                continue;
            }
        };
        match service.execute(&req) {
            Ok(receipt) => {
                let json = serde_json::to_string_pretty(&receipt)
                    .context("Failed to serialize transfer receipt")?;
                println!("{}", json);
            }
            // Counter advanced, no money moved
            Err(e @ TransferError::InsufficientFunds) => {
                println!(
                    "✗ {} -> {}: {} [{}] (bank {} counted the attempt)",
                    req.origin_account_id,
                    req.destination_account_id,
                    e,
                    e.code(),
                    req.bank_id
                );
            }
            Err(e) => {
                println!(
                    "✗ {} -> {}: {} [{}] (http {})",
                    req.origin_account_id,
                    req.destination_account_id,
                    e,
                    e.code(),
                    e.http_status()
                );
            }
        }
    }

    println!("\n=== Final state ===");
    print_state(&service)?;

    Ok(())
}
