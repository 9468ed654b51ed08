//! CLI module graph.

pub mod command;
pub mod diagnostic;
pub mod output;
pub mod paths;
pub mod progress;
pub mod run;
pub mod transfer;
pub mod verify;

pub use run::{dispatch, report_error, OUTCOME_NOT_SUCCESSFUL};
