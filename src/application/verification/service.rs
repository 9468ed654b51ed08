//! Contract verification use case.

use std::path::PathBuf;
use std::sync::Arc;

use alloy_primitives::Address;
use tracing::info;

use super::poll::{poll_verification_result, PollSettings};
use crate::domain::verification::lowercase_address;
use crate::domain::{
    Network, NetworkProfiles, VerificationArtifact, VerificationOutcome, VerificationRequestBody,
};
use crate::error::Result;
use crate::port::{ArtifactSource, Clock, ExplorerApi, ProgressEvent, ProgressSink};

/// Inputs of one `verify` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub network: Network,
    pub artifact_path: PathBuf,
    pub address: Address,
    pub contract_name: String,
    pub constructor_args: Vec<String>,
}

/// Submits compiled sources to the explorer and waits for the verdict.
pub struct VerifyService {
    explorer: Arc<dyn ExplorerApi>,
    artifacts: Arc<dyn ArtifactSource>,
    clock: Arc<dyn Clock>,
    progress: Arc<dyn ProgressSink>,
    profiles: NetworkProfiles,
    polling: PollSettings,
}

impl VerifyService {
    pub fn new(
        explorer: Arc<dyn ExplorerApi>,
        artifacts: Arc<dyn ArtifactSource>,
        clock: Arc<dyn Clock>,
        progress: Arc<dyn ProgressSink>,
        profiles: NetworkProfiles,
    ) -> Self {
        Self {
            explorer,
            artifacts,
            clock,
            progress,
            profiles,
            polling: PollSettings::default(),
        }
    }

    #[must_use]
    pub fn with_polling(mut self, polling: PollSettings) -> Self {
        self.polling = polling;
        self
    }

    /// Run the verification flow.
    ///
    /// Steps, each ending the flow on failure:
    /// 1. ask the explorer whether the address is already verified
    /// 2. load and validate the artifact
    /// 3. submit the verification job
    /// 4. poll for the verdict
    ///
    /// # Errors
    ///
    /// Returns validation errors for unreadable or incomplete artifacts and
    /// network errors for failed explorer calls. Nothing is submitted unless
    /// the artifact validated.
    pub async fn execute(&self, request: &VerifyRequest) -> Result<VerificationOutcome> {
        let profile = self.profiles.get(request.network);
        let base_url = profile.api_base_url.as_str();
        let address = lowercase_address(request.address);

        self.progress.emit(ProgressEvent::VerificationStarted {
            network: request.network,
        });

        if self
            .explorer
            .existing_verification(base_url, &address)
            .await?
            .is_some()
        {
            info!(%address, "Contract already verified");
            return Ok(VerificationOutcome::AlreadyVerified);
        }

        self.progress.emit(ProgressEvent::ReadingArtifact {
            path: request.artifact_path.clone(),
        });
        let document = self.artifacts.load(&request.artifact_path)?;

        self.progress.emit(ProgressEvent::VerifyingContract {
            name: request.contract_name.clone(),
            address: request.address,
        });
        let artifact = VerificationArtifact::from_json(&document)?;

        let body = VerificationRequestBody::new(
            request.address,
            &request.contract_name,
            artifact,
            &request.constructor_args,
        );
        if !request.constructor_args.is_empty() {
            self.progress.emit(ProgressEvent::ConstructorArguments {
                args: request.constructor_args.clone(),
            });
        }

        let job_id = self.explorer.submit_verification(base_url, &body).await?;
        info!(%address, job_id = %job_id, "Verification job submitted");
        self.progress.emit(ProgressEvent::VerificationSubmitted {
            job_id: job_id.clone(),
        });

        let matched = poll_verification_result(
            self.explorer.as_ref(),
            self.clock.as_ref(),
            self.progress.as_ref(),
            base_url,
            &job_id,
            self.polling,
        )
        .await?;

        if !matched {
            return Ok(VerificationOutcome::NotMatched);
        }

        Ok(VerificationOutcome::Verified {
            explorer_url: profile.address_url(request.address),
        })
    }
}
