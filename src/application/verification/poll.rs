//! Bounded polling of a verification job.

use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::port::{Clock, ExplorerApi, ProgressEvent, ProgressSink};

/// Default number of status polls before giving up.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Default delay between status polls.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(4000);

/// Fixed polling schedule: `max_retries` attempts, `retry_delay` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub max_retries: u32,
    pub retry_delay: Duration,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }
}

/// Poll a verification job until it reports a match decision.
///
/// Issues at most `settings.max_retries` status requests and returns the
/// first defined `match`, true or false. Transient failures consume an
/// attempt and are reported through `progress`. The delay also follows the
/// last attempt.
///
/// Returns `Ok(false)` when the budget runs out without a decision, which is
/// the same value as an authoritative "no match".
///
/// # Errors
///
/// Non-transient failures (e.g. a malformed response body) end polling
/// immediately.
pub async fn poll_verification_result(
    explorer: &dyn ExplorerApi,
    clock: &dyn Clock,
    progress: &dyn ProgressSink,
    base_url: &str,
    job_id: &str,
    settings: PollSettings,
) -> Result<bool> {
    for attempt in 1..=settings.max_retries {
        match explorer.verification_result(base_url, job_id).await {
            Ok(Some(matched)) => {
                debug!(job_id, attempt, matched, "Verification decided");
                return Ok(matched);
            }
            Ok(None) => debug!(job_id, attempt, "Verification pending"),
            Err(e) if e.is_transient() => {
                warn!(job_id, attempt, error = %e, "Verification status fetch failed");
                progress.emit(ProgressEvent::PollAttemptFailed {
                    attempt,
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }

        clock.sleep(settings.retry_delay).await;
    }

    warn!(
        job_id,
        attempts = settings.max_retries,
        "Maximum retries reached"
    );
    progress.emit(ProgressEvent::PollRetriesExhausted {
        attempts: settings.max_retries,
    });
    Ok(false)
}
