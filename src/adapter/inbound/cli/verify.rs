//! Handler for `walletctl verify`.

use std::process::ExitCode;
use std::sync::Arc;

use serde_json::json;

use super::command::VerifyArgs;
use super::progress::TerminalProgress;
use super::{output, OUTCOME_NOT_SUCCESSFUL};
use crate::adapter::outbound::clock::TokioClock;
use crate::adapter::outbound::explorer::HttpExplorerClient;
use crate::adapter::outbound::filesystem::FsArtifactSource;
use crate::application::{VerifyRequest, VerifyService};
use crate::domain::VerificationOutcome;
use crate::error::{Error, Result, ValidationError};
use crate::infrastructure::config::Config;

pub async fn execute(args: &VerifyArgs, config: &Config) -> Result<ExitCode> {
    let network = args.network.network();
    let request = VerifyRequest {
        network,
        artifact_path: args.artifact.clone(),
        address: args.address,
        contract_name: args.name.clone(),
        constructor_args: args.constructor_args.clone(),
    };

    output::section(&format!("Verify on {network}"));

    let progress = Arc::new(TerminalProgress::new());
    let service = VerifyService::new(
        Arc::new(HttpExplorerClient::new(config.explorer_timeout())),
        Arc::new(FsArtifactSource),
        Arc::new(TokioClock),
        progress.clone(),
        config.profiles(),
    )
    .with_polling(config.poll_settings());

    let outcome = match service.execute(&request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            progress.fail(failure_message(&e));
            return Err(e);
        }
    };

    Ok(render(&progress, &request, &outcome))
}

fn failure_message(error: &Error) -> &'static str {
    match error {
        Error::Validation(
            ValidationError::ArtifactUnreadable { .. }
            | ValidationError::ArtifactMissingField { .. }
            | ValidationError::ArtifactInvalidField { .. },
        ) => "Please check your JSON Standard Input file and try again",
        _ => "Error during contract verification",
    }
}

fn render(
    progress: &TerminalProgress,
    request: &VerifyRequest,
    outcome: &VerificationOutcome,
) -> ExitCode {
    let address = request.address.to_string();
    match outcome {
        VerificationOutcome::AlreadyVerified => {
            progress.succeed(&format!(
                "Contract {} is already verified",
                output::highlight(&address)
            ));
            output::result(
                "verify",
                json!({ "status": "already_verified", "address": address }),
            );
            ExitCode::SUCCESS
        }
        VerificationOutcome::Verified { explorer_url } => {
            progress.succeed("Contract verified successfully");
            output::field("Explorer", explorer_url);
            output::result(
                "verify",
                json!({
                    "status": "verified",
                    "address": address,
                    "explorer_url": explorer_url,
                }),
            );
            ExitCode::SUCCESS
        }
        VerificationOutcome::NotMatched => {
            progress.fail("JSON Standard Input verification didn't match");
            output::result(
                "verify",
                json!({ "status": "not_matched", "address": address }),
            );
            ExitCode::from(OUTCOME_NOT_SUCCESSFUL)
        }
    }
}
