//! HTTP submission for formwright schemas.
//!
//! Sends a schema snapshot as a JSON array to a server endpoint and maps
//! the response onto the three-way navigation contract: redirect on 200,
//! validation message on 400, full error page on anything else.

mod client;
pub use client::{SubmitBehavior, SubmitClient, SubmitFlags, SubmitOptions, SubmitOutcome};

use thiserror::Error;

/// Error type for submit operations.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint is not a valid URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// Transport failure. Fatal to the submit action; there is no retry.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
