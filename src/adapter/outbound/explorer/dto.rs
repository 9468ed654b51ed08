//! Explorer API response payloads.
//!
//! Every endpoint wraps its result in a `data` field:
//! ```json
//! {"data": {"_id": "66f1c0..."}}
//! {"data": {"match": true}}
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// Raw body of the verification lookup.
///
/// Only an explicit `"data": null` means the contract is unverified. A body
/// without a `data` field counts as an existing verification.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ExistingVerification(Value);

impl ExistingVerification {
    pub fn into_existing(self) -> Option<Value> {
        match self.0 {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Null) => None,
                Some(data) => Some(data),
                None => Some(Value::Object(body)),
            },
            other => Some(other),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmittedJob {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct JobStatus {
    #[serde(rename = "match", default, deserialize_with = "present")]
    matched: Option<Value>,
}

impl JobStatus {
    /// `None` while the job is still running. Once `match` is present, only
    /// `true` counts as a match.
    pub fn outcome(&self) -> Option<bool> {
        self.matched
            .as_ref()
            .map(|value| matches!(value, Value::Bool(true)))
    }
}

// Keeps an explicit `null` apart from a missing field.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(body: &str) -> Option<Value> {
        serde_json::from_str::<ExistingVerification>(body)
            .unwrap()
            .into_existing()
    }

    fn outcome(body: &str) -> Option<bool> {
        let parsed: Envelope<JobStatus> = serde_json::from_str(body).unwrap();
        parsed.data.unwrap().outcome()
    }

    #[test]
    fn null_data_is_unverified() {
        assert!(lookup(r#"{"data":null}"#).is_none());
    }

    #[test]
    fn absent_data_counts_as_verified() {
        let existing = lookup(r#"{"status":"0","message":"NOTOK"}"#).unwrap();
        assert_eq!(existing["message"], "NOTOK");
    }

    #[test]
    fn present_data_is_returned() {
        let existing = lookup(r#"{"data":{"name":"Counter"}}"#).unwrap();
        assert_eq!(existing["name"], "Counter");
    }

    #[test]
    fn pending_job_has_no_match() {
        assert_eq!(outcome(r#"{"data":{"status":"pending"}}"#), None);
    }

    #[test]
    fn null_match_is_a_finished_mismatch() {
        assert_eq!(outcome(r#"{"data":{"match":null}}"#), Some(false));
    }

    #[test]
    fn boolean_match_is_read_as_is() {
        assert_eq!(outcome(r#"{"data":{"match":true}}"#), Some(true));
        assert_eq!(outcome(r#"{"data":{"match":false}}"#), Some(false));
    }

    #[test]
    fn submitted_job_reads_underscore_id() {
        let parsed: Envelope<SubmittedJob> =
            serde_json::from_str(r#"{"data":{"_id":"job1"}}"#).unwrap();
        assert_eq!(parsed.data.unwrap().id, "job1");
    }
}
