//! Error types and result aliases for Octopus Energy API operations.
//!
//! Provides a unified error type that covers all error conditions across the
//! client crates, carrying the failing request's URL or the offending value
//! as context.

use thiserror::Error;

/// Unified error type for all Octopus Energy API operations
#[derive(Error, Debug)]
pub enum OctopusError {
    // Configuration errors
    #[error("API key must not be empty")]
    EmptyApiKey,

    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    // Transport errors
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Protocol errors
    #[error("Unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    // Decode errors
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Domain-consistency errors
    #[error("'{postcode}' is not a valid UK postcode")]
    InvalidPostcode { postcode: String },

    #[error("No grid supply point matches group id '{group_id}'")]
    UnknownGridSupplyPoint { group_id: String },

    #[error("Expected exactly one grid supply point, received {count}")]
    AmbiguousGridSupplyPoint { count: usize },

    #[error("Pagination did not terminate after {pages} pages at {url}")]
    PaginationOverflow { pages: usize, url: String },
}

/// Result type alias for Octopus Energy API operations
pub type OctopusResult<T> = Result<T, OctopusError>;

impl OctopusError {
    /// Create a transport error from any error type
    pub fn transport<E>(url: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Transport {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Create a decode error from any error type
    pub fn decode<E>(url: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Check whether retrying the operation could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            OctopusError::Transport { .. } => true,
            OctopusError::Status { status, .. } => *status >= 500,
            _ => false,
        }
    }
}
