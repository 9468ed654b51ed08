//! Terminal rendering of use-case progress events.

use parking_lot::Mutex;

use super::output::{self, Spinner};
use crate::port::{ProgressEvent, ProgressSink};

/// Prints progress lines and drives a spinner across waiting phases.
#[derive(Default)]
pub struct TerminalProgress {
    spinner: Mutex<Option<Spinner>>,
}

impl TerminalProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn start_spinner(&self, message: &str) {
        let mut slot = self.spinner.lock();
        if let Some(previous) = slot.take() {
            previous.clear();
        }
        *slot = Some(Spinner::start(message));
    }

    /// Print a line without corrupting a running spinner.
    fn print(&self, print: impl FnOnce()) {
        match self.spinner.lock().as_ref() {
            Some(spinner) => spinner.suspend(print),
            None => print(),
        }
    }

    /// Close the running spinner with a success mark, or print a success line.
    pub fn succeed(&self, message: &str) {
        match self.spinner.lock().take() {
            Some(spinner) => spinner.succeed(message),
            None => output::success(message),
        }
    }

    /// Close the running spinner with a failure mark, or print a failure line.
    pub fn fail(&self, message: &str) {
        match self.spinner.lock().take() {
            Some(spinner) => spinner.fail(message),
            None => output::failure(message),
        }
    }

    /// Drop the running spinner without a message.
    pub fn clear(&self) {
        if let Some(spinner) = self.spinner.lock().take() {
            spinner.clear();
        }
    }
}

impl ProgressSink for TerminalProgress {
    fn emit(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::TransferSummary {
                wallet,
                recipient,
                amount,
                balance,
            } => {
                output::field("Wallet", output::highlight(wallet));
                output::field("Recipient", output::highlight(recipient));
                output::field("Amount", format!("{amount} ETH"));
                output::field("Balance", format!("{balance} ETH"));
            }
            ProgressEvent::TransferSubmitted { tx_hash } => {
                output::field("Tx hash", output::highlight(tx_hash));
            }
            ProgressEvent::AwaitingConfirmation => {
                self.start_spinner("Waiting for confirmation...");
            }
            ProgressEvent::VerificationStarted { network } => {
                output::step(&format!("Initializing verification on {network}..."));
            }
            ProgressEvent::ReadingArtifact { path } => {
                output::step(&format!(
                    "Reading JSON Standard Input from {}...",
                    path.display()
                ));
            }
            ProgressEvent::VerifyingContract { name, address } => {
                output::step(&format!(
                    "Verifying contract {} deployed at {}...",
                    output::highlight(name),
                    output::highlight(address)
                ));
                self.start_spinner("Submitting verification request...");
            }
            ProgressEvent::ConstructorArguments { args } => {
                self.print(|| {
                    output::step(&format!("Using constructor arguments: {}", args.join(", ")));
                });
            }
            ProgressEvent::VerificationSubmitted { job_id } => {
                self.succeed("Contract verification request sent");
                output::field("Job id", &job_id);
                self.start_spinner("Waiting for verification confirmation...");
            }
            ProgressEvent::PollAttemptFailed { attempt, reason } => {
                self.print(|| {
                    output::warning(&format!(
                        "Error fetching verification status (attempt {attempt}), retrying..."
                    ));
                });
                tracing::debug!(attempt, reason = %reason, "Poll attempt failed");
            }
            ProgressEvent::PollRetriesExhausted { attempts } => {
                self.print(|| {
                    output::warning(&format!(
                        "Maximum retries reached after {attempts} attempts, verification status could not be confirmed"
                    ));
                });
            }
        }
    }
}
