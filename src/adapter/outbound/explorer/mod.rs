//! Block-explorer verification API adapter.

mod client;
mod dto;

pub use client::{HttpExplorerClient, DEFAULT_TIMEOUT};
