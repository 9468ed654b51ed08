//! Block-explorer verification API port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::VerificationRequestBody;
use crate::error::Result;

/// Port for the explorer's contract verification endpoints.
///
/// Every call takes the API base URL so one client serves both networks.
///
/// # Errors
///
/// Non-success HTTP statuses and transport failures surface as transient
/// [`NetworkError`](crate::error::NetworkError)s. Bodies that do not have the
/// expected shape surface as `MalformedResponse`.
#[async_trait]
pub trait ExplorerApi: Send + Sync {
    /// Existing verification for `address`, or `None` if the explorer answers
    /// with `"data": null`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Explorer API base URL.
    /// * `address` - Lowercase `0x`-prefixed contract address.
    async fn existing_verification(&self, base_url: &str, address: &str)
        -> Result<Option<Value>>;

    /// Submit a verification job and return its id.
    async fn submit_verification(
        &self,
        base_url: &str,
        body: &VerificationRequestBody,
    ) -> Result<String>;

    /// Poll a job. `Some(match)` once decided, `None` while pending.
    async fn verification_result(&self, base_url: &str, job_id: &str) -> Result<Option<bool>>;
}
