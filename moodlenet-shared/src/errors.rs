//! # Error Types
//!
//! Remote and storage failures raised by the client core. Form validation
//! failures are not errors in this sense: they are plain data carried in
//! [`crate::auth::ValidationObject`] and cleared by editing the form.

use thiserror::Error;

use crate::models::GraphQlError;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthenticationError>;

/// Result type alias for list fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// Result type alias for session storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Failure while exchanging credentials for a session.
///
/// The variants exist for logging only: the login page always shows the same
/// generic warning, whatever went wrong.
#[derive(Error, Debug)]
pub enum AuthenticationError {
    /// The request never produced a usable HTTP response
    #[error("Authentication request failed: {message}")]
    Transport { message: String },

    /// The backend answered with GraphQL errors (bad credentials and friends)
    #[error("Credentials rejected: {}", join_messages(.errors))]
    Rejected { errors: Vec<GraphQlError> },

    /// The backend answered without a session payload
    #[error("Malformed authentication response: {details}")]
    MalformedResponse { details: String },

    /// The session could not be persisted after a successful login
    #[error("Could not persist session: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },
}

/// Failure while fetching a page of a listing.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a usable HTTP response
    #[error("Fetch failed: {message}")]
    Transport { message: String },

    /// The backend answered with GraphQL errors
    #[error("GraphQL error: {}", join_messages(.errors))]
    GraphQl { errors: Vec<GraphQlError> },

    /// The backend answered without the expected data
    #[error("Response did not contain {field}")]
    MissingData { field: String },
}

/// Failure of the session store backend.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The storage backend cannot be reached (private browsing, quota, no window)
    #[error("Session storage unavailable: {message}")]
    Unavailable { message: String },

    /// The stored record could not be encoded or decoded
    #[error("Session record could not be (de)serialized: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display_joins_messages() {
        let err = AuthenticationError::Rejected {
            errors: vec![
                GraphQlError::new("invalid credentials"),
                GraphQlError::new("account locked"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Credentials rejected: invalid credentials; account locked"
        );
    }

    #[test]
    fn test_storage_error_converts_into_authentication_error() {
        let err: AuthenticationError = StorageError::Unavailable {
            message: "no window".to_string(),
        }
        .into();
        assert!(matches!(err, AuthenticationError::Storage { .. }));
        assert!(err.to_string().contains("no window"));
    }

    #[test]
    fn test_serde_error_maps_to_serialization() {
        let parse = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err = StorageError::from(parse);
        assert!(matches!(err, StorageError::Serialization { .. }));
    }

    #[test]
    fn test_missing_data_display() {
        let err = FetchError::MissingData {
            field: "communities".to_string(),
        };
        assert_eq!(err.to_string(), "Response did not contain communities");
    }
}
