//! Coaching collaborator error types.

use thiserror::Error;

/// Errors from the text-generation provider. These never surface to the
/// user directly; [`crate::CoachService`] converts them to a fixed message.
#[derive(Debug, Error)]
pub enum CoachError {
    /// No API key was configured for the provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// The HTTP request itself failed.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider response could not be interpreted.
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}
