//! Error types for the todo API handlers.
//!
//! # Design
//! Every failure a handler can hit maps to exactly one `ApiError` variant,
//! and every variant maps to one status code and one short category string.
//! The `Display` text is the human-readable message placed in the error
//! body, so it must never carry internal detail; underlying causes stay in
//! `#[source]` for logging only.

use crate::types::TodoId;

/// Errors produced while handling a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `{id}` path segment is not an integer.
    #[error("The provided ID must be a valid integer")]
    InvalidId,

    /// The request body could not be decoded as a `TodoInput`.
    #[error("Request body must be valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// The decoded input failed validation.
    #[error("{0}")]
    Validation(&'static str),

    /// No record exists for a well-formed id.
    #[error("Todo with ID {0} does not exist")]
    NotFound(TodoId),

    /// A response payload could not be serialized.
    #[error("An unexpected error occurred")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidId | ApiError::InvalidJson(_) | ApiError::Validation(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Serialization(_) => 500,
        }
    }

    /// Short category placed in the `error` field of the response body.
    pub fn category(&self) -> &'static str {
        match self {
            ApiError::InvalidId => "Invalid todo ID",
            ApiError::InvalidJson(_) => "Invalid JSON",
            ApiError::Validation(_) => "Validation error",
            ApiError::NotFound(_) => "Todo not found",
            ApiError::Serialization(_) => "Internal server error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_id() {
        let err = ApiError::NotFound(42);
        assert_eq!(err.status(), 404);
        assert_eq!(err.category(), "Todo not found");
        assert_eq!(err.to_string(), "Todo with ID 42 does not exist");
    }

    #[test]
    fn malformed_input_is_bad_request() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        for err in [
            ApiError::InvalidId,
            ApiError::InvalidJson(json_err),
            ApiError::Validation("Title is required"),
        ] {
            assert_eq!(err.status(), 400, "{err:?}");
        }
    }

    #[test]
    fn invalid_json_hides_parser_detail() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = ApiError::InvalidJson(json_err);
        assert_eq!(err.to_string(), "Request body must be valid JSON");
        assert!(std::error::Error::source(&err).is_some());
    }
}
