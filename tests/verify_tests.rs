//! Verify use case driven through the scripted explorer.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use walletctl::application::{PollSettings, VerifyRequest, VerifyService};
use walletctl::domain::{Network, NetworkProfiles, VerificationOutcome};
use walletctl::error::{Error, NetworkError, ValidationError};
use walletctl::port::ProgressEvent;
use walletctl::testkit::artifact::InMemoryArtifacts;
use walletctl::testkit::clock::InstantClock;
use walletctl::testkit::explorer::ScriptedExplorer;
use walletctl::testkit::fixtures;
use walletctl::testkit::progress::RecordingProgress;

const ARTIFACT_PATH: &str = "build-info/counter.json";

struct Harness {
    explorer: Arc<ScriptedExplorer>,
    artifacts: Arc<InMemoryArtifacts>,
    clock: InstantClock,
    progress: Arc<RecordingProgress>,
}

impl Harness {
    fn new(explorer: ScriptedExplorer) -> Self {
        Self::with_artifact(explorer, fixtures::artifact())
    }

    fn with_artifact(explorer: ScriptedExplorer, document: serde_json::Value) -> Self {
        Self {
            explorer: Arc::new(explorer),
            artifacts: Arc::new(InMemoryArtifacts::new().with_document(ARTIFACT_PATH, document)),
            clock: InstantClock::new(),
            progress: Arc::new(RecordingProgress::new()),
        }
    }

    fn service(&self) -> VerifyService {
        VerifyService::new(
            self.explorer.clone(),
            self.artifacts.clone(),
            Arc::new(self.clock.clone()),
            self.progress.clone(),
            NetworkProfiles::default(),
        )
    }
}

fn request(args: &[&str]) -> VerifyRequest {
    VerifyRequest {
        network: Network::Testnet,
        artifact_path: PathBuf::from(ARTIFACT_PATH),
        address: fixtures::contract_address(),
        contract_name: "Counter".to_string(),
        constructor_args: args.iter().map(|a| (*a).to_string()).collect(),
    }
}

#[tokio::test]
async fn already_verified_contract_is_not_resubmitted() {
    let harness = Harness::new(ScriptedExplorer::new().with_existing(json!({ "name": "Counter" })));

    let outcome = harness.service().execute(&request(&[])).await.unwrap();

    assert_eq!(outcome, VerificationOutcome::AlreadyVerified);
    assert!(outcome.is_success());
    assert!(harness.explorer.submissions().is_empty());
    assert_eq!(harness.explorer.poll_calls(), 0);
    assert_eq!(harness.artifacts.loads(), 0);
}

#[tokio::test]
async fn lookup_uses_lowercase_address_and_testnet_api() {
    let harness = Harness::new(ScriptedExplorer::new().with_existing(json!({})));

    harness.service().execute(&request(&[])).await.unwrap();

    assert_eq!(
        harness.explorer.lookups(),
        vec![(
            "https://sepolia.etherscan.io".to_string(),
            "0xc0ffee000000000000000000000000000000c0de".to_string()
        )]
    );
}

#[tokio::test]
async fn artifact_without_input_is_never_submitted() {
    let harness = Harness::with_artifact(
        ScriptedExplorer::new(),
        json!({ "solcLongVersion": "0.8.24+commit.e11b9ed9" }),
    );

    let err = harness.service().execute(&request(&[])).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ArtifactMissingField { field: "input" })
    ));
    assert!(harness.explorer.submissions().is_empty());
}

#[tokio::test]
async fn artifact_without_compiler_version_is_never_submitted() {
    let harness = Harness::with_artifact(
        ScriptedExplorer::new(),
        json!({ "input": { "language": "Solidity" } }),
    );

    let err = harness.service().execute(&request(&[])).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ArtifactMissingField {
            field: "solcLongVersion"
        })
    ));
    assert!(harness.explorer.submissions().is_empty());
}

#[tokio::test]
async fn unreadable_artifact_stops_before_submission() {
    let harness = Harness::new(ScriptedExplorer::new());
    let mut request = request(&[]);
    request.artifact_path = PathBuf::from("missing.json");

    let err = harness.service().execute(&request).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationError::ArtifactUnreadable { .. })
    ));
    assert!(harness.explorer.submissions().is_empty());
}

#[tokio::test]
async fn match_on_fourth_poll_reports_verified() {
    let harness = Harness::new(ScriptedExplorer::new().with_poll_script(vec![
        Ok(None),
        Ok(None),
        Ok(None),
        Ok(Some(true)),
    ]));

    let outcome = harness.service().execute(&request(&[])).await.unwrap();

    assert_eq!(
        outcome,
        VerificationOutcome::Verified {
            explorer_url: format!(
                "https://sepolia.etherscan.io/address/{}",
                fixtures::contract_address()
            )
        }
    );
    assert_eq!(harness.explorer.poll_calls(), 4);
    assert_eq!(harness.explorer.polled_job_ids(), vec!["job1"; 4]);
    assert_eq!(harness.clock.sleeps(), vec![Duration::from_millis(4000); 3]);
}

#[tokio::test]
async fn pending_until_budget_runs_out_reports_no_match() {
    let harness = Harness::new(ScriptedExplorer::new());

    let outcome = harness.service().execute(&request(&[])).await.unwrap();

    assert_eq!(outcome, VerificationOutcome::NotMatched);
    assert!(!outcome.is_success());
    assert_eq!(harness.explorer.poll_calls(), 10);
    assert_eq!(
        harness.progress.events().last(),
        Some(&ProgressEvent::PollRetriesExhausted { attempts: 10 })
    );
}

#[tokio::test]
async fn explicit_no_match_ends_polling_early() {
    let harness =
        Harness::new(ScriptedExplorer::new().with_poll_script(vec![Ok(None), Ok(Some(false))]));

    let outcome = harness.service().execute(&request(&[])).await.unwrap();

    assert_eq!(outcome, VerificationOutcome::NotMatched);
    assert_eq!(harness.explorer.poll_calls(), 2);
}

#[tokio::test]
async fn configured_poll_settings_bound_the_loop() {
    let harness = Harness::new(ScriptedExplorer::new());

    let outcome = harness
        .service()
        .with_polling(PollSettings {
            max_retries: 3,
            retry_delay: Duration::from_millis(10),
        })
        .execute(&request(&[]))
        .await
        .unwrap();

    assert_eq!(outcome, VerificationOutcome::NotMatched);
    assert_eq!(harness.explorer.poll_calls(), 3);
    assert_eq!(harness.clock.sleeps(), vec![Duration::from_millis(10); 3]);
}

#[tokio::test]
async fn transient_poll_failures_are_retried() {
    let harness = Harness::new(ScriptedExplorer::new().with_poll_script(vec![
        Err(NetworkError::Status {
            endpoint: "getVerificationResult".into(),
            status: 502,
        }
        .into()),
        Ok(Some(true)),
    ]));

    let outcome = harness.service().execute(&request(&[])).await.unwrap();

    assert!(matches!(outcome, VerificationOutcome::Verified { .. }));
    assert!(harness
        .progress
        .events()
        .iter()
        .any(|e| matches!(e, ProgressEvent::PollAttemptFailed { attempt: 1, .. })));
}

#[tokio::test]
async fn rejected_submission_is_a_network_error() {
    let harness = Harness::new(ScriptedExplorer::new().with_submit_error(
        NetworkError::Status {
            endpoint: "verify".into(),
            status: 400,
        }
        .into(),
    ));

    let err = harness.service().execute(&request(&[])).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Network(NetworkError::Status { status: 400, .. })
    ));
    assert_eq!(harness.explorer.poll_calls(), 0);
}

#[tokio::test]
async fn lookup_failure_stops_the_flow() {
    let harness = Harness::new(ScriptedExplorer::new().with_lookup_error(
        NetworkError::Status {
            endpoint: "getVerification".into(),
            status: 503,
        }
        .into(),
    ));

    let err = harness.service().execute(&request(&[])).await.unwrap_err();

    assert!(err.is_transient());
    assert_eq!(harness.artifacts.loads(), 0);
    assert!(harness.explorer.submissions().is_empty());
}

#[tokio::test]
async fn constructor_arguments_are_forwarded_and_announced() {
    let harness = Harness::new(ScriptedExplorer::new().with_poll_script(vec![Ok(Some(true))]));

    harness
        .service()
        .execute(&request(&["1000", "Counter"]))
        .await
        .unwrap();

    let submissions = harness.explorer.submissions();
    assert_eq!(submissions.len(), 1);
    let request = &submissions[0].params.request;
    assert_eq!(
        request.constructor_arguments,
        Some(vec!["1000".to_string(), "Counter".to_string()])
    );
    assert_eq!(request.address, "0xc0ffee000000000000000000000000000000c0de");
    assert_eq!(request.version, "0.8.24+commit.e11b9ed9");
    assert!(harness.progress.events().contains(&ProgressEvent::ConstructorArguments {
        args: vec!["1000".to_string(), "Counter".to_string()],
    }));
}

#[tokio::test]
async fn progress_follows_the_flow() {
    let harness = Harness::new(ScriptedExplorer::new().with_poll_script(vec![Ok(Some(true))]));

    harness.service().execute(&request(&[])).await.unwrap();

    let events = harness.progress.events();
    assert_eq!(
        events,
        vec![
            ProgressEvent::VerificationStarted {
                network: Network::Testnet
            },
            ProgressEvent::ReadingArtifact {
                path: PathBuf::from(ARTIFACT_PATH)
            },
            ProgressEvent::VerifyingContract {
                name: "Counter".to_string(),
                address: fixtures::contract_address(),
            },
            ProgressEvent::VerificationSubmitted {
                job_id: "job1".to_string()
            },
        ]
    );
}
