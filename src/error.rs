//! Error types for the analytics core
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Fetch failures form a closed taxonomy decided at the client boundary so
//! the orchestrator branches on a tag, never on error identity.

use snafu::Snafu;

use crate::constants::{NO_CONNECTION_MESSAGE, UNEXPECTED_RESPONSE_MESSAGE};

/// Failure of a single data-source fetch
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum FetchError {
    /// No network reachable; the only variant classified as "offline"
    #[snafu(display("{}", NO_CONNECTION_MESSAGE))]
    NoConnection,

    /// Server answered with a non-success status
    #[snafu(display("{}", UNEXPECTED_RESPONSE_MESSAGE))]
    BadResponse,

    /// Any other transport or decoding failure
    #[snafu(display("{message}"))]
    Other { message: String },
}

impl FetchError {
    /// Whether this failure means the network is unreachable
    pub fn is_connectivity(&self) -> bool {
        matches!(self, FetchError::NoConnection)
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_no_connection_classifies_as_connectivity() {
        assert!(FetchError::NoConnection.is_connectivity());
        assert!(!FetchError::BadResponse.is_connectivity());
        assert!(
            !FetchError::Other {
                message: "decode failed".into()
            }
            .is_connectivity()
        );
    }

    #[test]
    fn test_display_matches_user_facing_strings() {
        assert_eq!(FetchError::NoConnection.to_string(), NO_CONNECTION_MESSAGE);
        assert_eq!(
            FetchError::BadResponse.to_string(),
            UNEXPECTED_RESPONSE_MESSAGE
        );
        assert_eq!(
            FetchError::Other {
                message: "timed out".into()
            }
            .to_string(),
            "timed out"
        );
    }
}
