//! HTTP client for the explorer's contract verification API.
//!
//! All three calls hit `{base}/api`; the operation is selected by the
//! `module`/`action` query parameters (GET) or body fields (POST).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{Envelope, ExistingVerification, JobStatus, SubmittedJob};
use crate::domain::VerificationRequestBody;
use crate::error::{NetworkError, Result};
use crate::port::ExplorerApi;

const LOOKUP: &str = "getVerification";
const SUBMIT: &str = "verify";
const POLL: &str = "getVerificationResult";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Explorer verification API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpExplorerClient {
    http: HttpClient,
}

impl Default for HttpExplorerClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl HttpExplorerClient {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });
        Self { http }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|source| NetworkError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| NetworkError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|e| {
            NetworkError::MalformedResponse {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

fn api_url(base_url: &str) -> String {
    format!("{}/api", base_url.trim_end_matches('/'))
}

#[async_trait]
impl ExplorerApi for HttpExplorerClient {
    async fn existing_verification(
        &self,
        base_url: &str,
        address: &str,
    ) -> Result<Option<Value>> {
        let request = self.http.get(api_url(base_url)).query(&[
            ("module", "verificationResults"),
            ("action", LOOKUP),
            ("address", address),
        ]);
        let body: ExistingVerification = self.fetch(LOOKUP, request).await?;
        Ok(body.into_existing())
    }

    async fn submit_verification(
        &self,
        base_url: &str,
        body: &VerificationRequestBody,
    ) -> Result<String> {
        let request = self.http.post(api_url(base_url)).json(body);
        let envelope: Envelope<SubmittedJob> = self.fetch(SUBMIT, request).await?;
        let job = envelope.data.ok_or_else(|| NetworkError::MalformedResponse {
            endpoint: SUBMIT.to_string(),
            reason: "missing data._id".to_string(),
        })?;
        debug!(job_id = %job.id, "Verification job accepted");
        Ok(job.id)
    }

    async fn verification_result(&self, base_url: &str, job_id: &str) -> Result<Option<bool>> {
        let request = self.http.get(api_url(base_url)).query(&[
            ("module", "contractVerifier"),
            ("action", POLL),
            ("id", job_id),
        ]);
        let envelope: Envelope<JobStatus> = self.fetch(POLL, request).await?;
        Ok(envelope.data.and_then(|status| status.outcome()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VerificationArtifact;
    use crate::error::Error;
    use crate::testkit::fixtures;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn body() -> VerificationRequestBody {
        let artifact = VerificationArtifact::from_json(&fixtures::artifact()).unwrap();
        VerificationRequestBody::new(fixtures::contract_address(), "Counter", artifact, &[])
    }

    #[tokio::test]
    async fn lookup_returns_data_when_verified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .and(query_param("module", "verificationResults"))
            .and(query_param("action", "getVerification"))
            .and(query_param(
                "address",
                "0xc0ffee000000000000000000000000000000c0de",
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "name": "Counter" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let existing = client
            .existing_verification(&server.uri(), "0xc0ffee000000000000000000000000000000c0de")
            .await
            .unwrap();
        assert_eq!(existing, Some(json!({ "name": "Counter" })));
    }

    #[tokio::test]
    async fn lookup_null_data_is_unverified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let existing = client
            .existing_verification(&server.uri(), "0xabc")
            .await
            .unwrap();
        assert!(existing.is_none());
    }

    #[tokio::test]
    async fn lookup_without_data_field_counts_as_verified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "0", "message": "NOTOK" })),
            )
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let existing = client
            .existing_verification(&server.uri(), "0xabc")
            .await
            .unwrap();
        assert!(existing.is_some());
    }

    #[tokio::test]
    async fn submit_posts_body_and_returns_job_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api"))
            .and(body_partial_json(json!({
                "module": "contractVerifier",
                "action": "verify",
                "getDelayed": true,
                "params": { "request": { "name": "Counter", "version": "0.8.24+commit.e11b9ed9" } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "_id": "job1" } })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let job_id = client
            .submit_verification(&format!("{}/", server.uri()), &body())
            .await
            .unwrap();
        assert_eq!(job_id, "job1");
    }

    #[tokio::test]
    async fn submit_rejection_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let err = client
            .submit_verification(&server.uri(), &body())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Network(NetworkError::Status { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn submit_without_job_id_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let err = client
            .submit_verification(&server.uri(), &body())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Network(NetworkError::MalformedResponse { .. })
        ));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn poll_reads_match_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .and(query_param("module", "contractVerifier"))
            .and(query_param("action", "getVerificationResult"))
            .and(query_param("id", "job1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "match": false } })))
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let result = client.verification_result(&server.uri(), "job1").await.unwrap();
        assert_eq!(result, Some(false));
    }

    #[tokio::test]
    async fn poll_without_match_is_pending() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "status": "queued" } })),
            )
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let result = client.verification_result(&server.uri(), "job1").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn poll_null_match_is_a_finished_mismatch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "match": null } })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let result = client.verification_result(&server.uri(), "job1").await.unwrap();
        assert_eq!(result, Some(false));
    }

    #[tokio::test]
    async fn poll_server_error_is_transient() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let err = client
            .verification_result(&server.uri(), "job1")
            .await
            .unwrap_err();
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        let client = HttpExplorerClient::default();
        let err = client
            .verification_result(&server.uri(), "job1")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Network(NetworkError::MalformedResponse { .. })
        ));
    }
}
