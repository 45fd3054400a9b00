//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation.
//!
//! # Example
//!
//! ```rust
//! use temucosoft_api::{ApiBaseUrl, ConfigError};
//!
//! let result = ApiBaseUrl::from_origin("not a url");
//! assert!(matches!(result, Err(ConfigError::InvalidOrigin { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The origin could not be parsed as `scheme://host[:port]`.
    #[error("Invalid origin '{url}'. Expected format: 'https://host' or 'http://host:port'.")]
    InvalidOrigin {
        /// The invalid origin that was provided.
        url: String,
    },

    /// The login path must be an absolute path.
    #[error("Invalid login path '{path}'. The path must start with '/'.")]
    InvalidLoginPath {
        /// The invalid path that was provided.
        path: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_origin_error_message() {
        let error = ConfigError::InvalidOrigin {
            url: "ftp:/nowhere".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp:/nowhere"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "origin" };
        let message = error.to_string();
        assert!(message.contains("origin"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::InvalidLoginPath {
            path: "login".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
