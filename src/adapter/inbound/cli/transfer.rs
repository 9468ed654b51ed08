//! Handler for `walletctl transfer`.

use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;

use super::command::TransferArgs;
use super::progress::TerminalProgress;
use super::{output, paths, OUTCOME_NOT_SUCCESSFUL};
use crate::adapter::outbound::chain::{AlloyConnector, KeyMaterial};
use crate::adapter::outbound::filesystem::load_wallet_store;
use crate::application::TransferService;
use crate::domain::{TransferOutcome, TransferRequest};
use crate::error::{Result, ValidationError};
use crate::infrastructure::config::Config;

/// Parse an ether amount exactly. Floats are never involved.
fn parse_amount(raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|e| {
        ValidationError::InvalidAmount {
            amount: raw.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

pub async fn execute(args: &TransferArgs, config: &Config) -> Result<ExitCode> {
    let network = args.network.network();
    let amount = parse_amount(&args.amount)?;
    let request = TransferRequest::try_new(network, args.recipient, amount)?;

    let store_path = args
        .wallet_store
        .clone()
        .or_else(|| config.wallet_store.clone())
        .unwrap_or_else(paths::default_wallet_store);
    let store = load_wallet_store(&store_path)?;

    output::section(&format!("Transfer on {network}"));

    let progress = Arc::new(TerminalProgress::new());
    let connector = AlloyConnector::new(KeyMaterial::from_env()?);
    let service = TransferService::new(Arc::new(connector), progress.clone(), config.profiles())
        .with_confirmation_timeout(config.confirmation_timeout());

    let outcome = match service.execute(&store, &request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            progress.clear();
            return Err(e);
        }
    };

    Ok(render(&progress, &outcome))
}

fn render(progress: &TerminalProgress, outcome: &TransferOutcome) -> ExitCode {
    match outcome {
        TransferOutcome::Confirmed {
            tx_hash,
            block_number,
            gas_used,
            explorer_url,
        } => {
            progress.succeed("Transaction confirmed successfully");
            let block = block_number.map_or_else(|| "pending".to_string(), |n| n.to_string());
            output::field("Block", &block);
            output::field("Gas used", gas_used);
            output::field("Explorer", explorer_url);
            output::result(
                "transfer",
                json!({
                    "status": "confirmed",
                    "tx_hash": tx_hash.to_string(),
                    "block_number": block_number,
                    "gas_used": gas_used,
                    "explorer_url": explorer_url,
                }),
            );
            ExitCode::SUCCESS
        }
        TransferOutcome::Reverted { tx_hash } => {
            progress.fail("Transaction failed");
            output::result(
                "transfer",
                json!({ "status": "reverted", "tx_hash": tx_hash.to_string() }),
            );
            ExitCode::from(OUTCOME_NOT_SUCCESSFUL)
        }
        TransferOutcome::InsufficientBalance { balance, requested } => {
            progress.fail(&format!(
                "Insufficient balance to transfer {requested} ETH (balance {balance} ETH)"
            ));
            output::result(
                "transfer",
                json!({
                    "status": "insufficient_balance",
                    "balance": balance.to_string(),
                    "requested": requested.to_string(),
                }),
            );
            ExitCode::from(OUTCOME_NOT_SUCCESSFUL)
        }
    }
}
