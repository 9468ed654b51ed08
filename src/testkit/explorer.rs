//! Scripted explorer API.
//!
//! Each status poll pops the next scripted result; once the script is
//! exhausted the job reports as pending. Every call is recorded.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::VerificationRequestBody;
use crate::error::{Error, Result};
use crate::port::ExplorerApi;

/// Default job id handed out by [`ScriptedExplorer::submit_verification`].
pub const DEFAULT_JOB_ID: &str = "job1";

#[derive(Default)]
struct Calls {
    lookups: Vec<(String, String)>,
    submissions: Vec<(String, VerificationRequestBody)>,
    polls: Vec<(String, String)>,
}

pub struct ScriptedExplorer {
    existing: Option<Value>,
    job_id: String,
    submit_error: Mutex<Option<Error>>,
    lookup_error: Mutex<Option<Error>>,
    poll_script: Mutex<VecDeque<Result<Option<bool>>>>,
    calls: Mutex<Calls>,
}

impl Default for ScriptedExplorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedExplorer {
    /// Unverified address, job id [`DEFAULT_JOB_ID`], pending forever.
    pub fn new() -> Self {
        Self {
            existing: None,
            job_id: DEFAULT_JOB_ID.to_string(),
            submit_error: Mutex::new(None),
            lookup_error: Mutex::new(None),
            poll_script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Calls::default()),
        }
    }

    /// Report the address as already verified with this `data` payload.
    pub fn with_existing(mut self, data: Value) -> Self {
        self.existing = Some(data);
        self
    }

    pub fn with_job_id(mut self, job_id: &str) -> Self {
        self.job_id = job_id.to_string();
        self
    }

    /// Fail the next submission with `error`.
    pub fn with_submit_error(self, error: Error) -> Self {
        *self.submit_error.lock().expect("explorer lock poisoned") = Some(error);
        self
    }

    /// Fail the next existing-verification lookup with `error`.
    pub fn with_lookup_error(self, error: Error) -> Self {
        *self.lookup_error.lock().expect("explorer lock poisoned") = Some(error);
        self
    }

    pub fn with_poll_script(self, script: Vec<Result<Option<bool>>>) -> Self {
        *self.poll_script.lock().expect("explorer lock poisoned") = script.into();
        self
    }

    fn calls(&self) -> std::sync::MutexGuard<'_, Calls> {
        self.calls.lock().expect("explorer lock poisoned")
    }

    /// `(base_url, address)` of every existing-verification lookup.
    pub fn lookups(&self) -> Vec<(String, String)> {
        self.calls().lookups.clone()
    }

    /// Bodies of every submission, in order.
    pub fn submissions(&self) -> Vec<VerificationRequestBody> {
        self.calls()
            .submissions
            .iter()
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn poll_calls(&self) -> usize {
        self.calls().polls.len()
    }

    pub fn polled_job_ids(&self) -> Vec<String> {
        self.calls().polls.iter().map(|(_, id)| id.clone()).collect()
    }
}

#[async_trait]
impl ExplorerApi for ScriptedExplorer {
    async fn existing_verification(
        &self,
        base_url: &str,
        address: &str,
    ) -> Result<Option<Value>> {
        self.calls()
            .lookups
            .push((base_url.to_string(), address.to_string()));
        if let Some(error) = self.lookup_error.lock().expect("explorer lock poisoned").take() {
            return Err(error);
        }
        Ok(self.existing.clone())
    }

    async fn submit_verification(
        &self,
        base_url: &str,
        body: &VerificationRequestBody,
    ) -> Result<String> {
        self.calls()
            .submissions
            .push((base_url.to_string(), body.clone()));
        if let Some(error) = self.submit_error.lock().expect("explorer lock poisoned").take() {
            return Err(error);
        }
        Ok(self.job_id.clone())
    }

    async fn verification_result(&self, base_url: &str, job_id: &str) -> Result<Option<bool>> {
        self.calls()
            .polls
            .push((base_url.to_string(), job_id.to_string()));
        self.poll_script
            .lock()
            .expect("explorer lock poisoned")
            .pop_front()
            .unwrap_or(Ok(None))
    }
}
