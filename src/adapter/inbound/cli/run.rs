//! Subcommand dispatch, exit statuses and error reporting.

use std::process::ExitCode;

use super::command::Commands;
use super::{output, transfer, verify};

use crate::error::{Error, PreconditionError, ValidationError};
use crate::infrastructure::config::Config;

/// Exit status for a command that ran to completion but did not succeed
/// (insufficient balance, reverted transaction, no verification match).
pub const OUTCOME_NOT_SUCCESSFUL: u8 = 2;

/// Run the parsed subcommand.
///
/// # Errors
///
/// Returns the error that stopped the command; reported outcomes are
/// mapped to an exit code instead.
pub async fn dispatch(command: &Commands, config: &Config) -> crate::error::Result<ExitCode> {
    match command {
        Commands::Transfer(args) => transfer::execute(args, config).await,
        Commands::Verify(args) => verify::execute(args, config).await,
    }
}

/// Print an error and, where one applies, a hint for fixing it.
pub fn report_error(error: &Error) {
    output::error(&error.to_string());
    if let Some(hint) = hint_for(error) {
        output::hint(hint);
    }
}

fn hint_for(error: &Error) -> Option<&'static str> {
    match error {
        Error::Precondition(PreconditionError::SignerUnavailable { .. }) => Some(
            "set WALLETCTL_PRIVATE_KEY, or add `privateKey` or `keystorePath` to the wallet record",
        ),
        Error::Precondition(PreconditionError::SignerMismatch { .. }) => {
            Some("the signing key must belong to the active wallet's address")
        }
        Error::Precondition(PreconditionError::ChainMismatch { .. }) => {
            Some("check `rpc_url` under `[networks.*]` in the config file")
        }
        Error::Validation(ValidationError::InvalidAmount { .. }) | Error::Domain(_) => {
            Some("amounts are in ether with at most 18 decimal places, e.g. 0.25")
        }
        e if e.is_transient() => Some("check your network connection and the explorer status"),
        _ => None,
    }
}
