//! Error types for sandboxed resource operations.
//!
//! Every request terminates in at most one of these errors; none are retried
//! internally. `AccessDenied` and `NotFound` are distinct here so callers can
//! test and log them separately, but [`Error::public_message`] renders both
//! identically for untrusted peers.
//!
//! # Examples
//!
//! ```
//! use mcp_resources_core::{Error, Result};
//!
//! fn require_scheme(id: &str) -> Result<()> {
//!     if !id.starts_with("file://resources/") {
//!         return Err(Error::InvalidIdentifier {
//!             identifier: id.to_string(),
//!             reason: "missing scheme".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_scheme("http://example.com").unwrap_err();
//! assert!(err.is_invalid_identifier());
//! ```

use thiserror::Error;

/// Main error type for resource operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Identifier is malformed.
    ///
    /// Raised when the identifier does not carry the resource scheme or
    /// contains segments that would make it non-canonical.
    #[error("Invalid resource identifier '{identifier}': {reason}")]
    InvalidIdentifier {
        /// The offending identifier as received
        identifier: String,
        /// Why the identifier was rejected
        reason: String,
    },

    /// Resolved path would leave the sandbox root.
    #[error("Access denied: {identifier}")]
    AccessDenied {
        /// The offending identifier as received
        identifier: String,
    },

    /// Identifier is well-formed and contained, but no regular file exists.
    #[error("Resource not found: {identifier}")]
    NotFound {
        /// The missing identifier
        identifier: String,
    },

    /// Reading or decoding an otherwise valid, contained file failed.
    ///
    /// Text files that are not valid UTF-8 end up here as well.
    #[error("I/O failure for {identifier}: {source}")]
    IoFailure {
        /// Identifier of the resource being read
        identifier: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    ///
    /// Raised when startup configuration is invalid or the sandbox root
    /// cannot be established.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is an invalid identifier error.
    #[must_use]
    pub const fn is_invalid_identifier(&self) -> bool {
        matches!(self, Self::InvalidIdentifier { .. })
    }

    /// Returns `true` if this is an access denied error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_resources_core::Error;
    ///
    /// let err = Error::AccessDenied {
    ///     identifier: "file://resources/../etc/passwd".to_string(),
    /// };
    /// assert!(err.is_access_denied());
    /// assert!(!err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is an I/O failure.
    #[must_use]
    pub const fn is_io_failure(&self) -> bool {
        matches!(self, Self::IoFailure { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Message safe to hand to an untrusted caller.
    ///
    /// Access denials are reported exactly like missing resources, and I/O
    /// failures omit the operating system detail.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_resources_core::Error;
    ///
    /// let denied = Error::AccessDenied { identifier: "x".to_string() };
    /// let missing = Error::NotFound { identifier: "x".to_string() };
    /// assert_eq!(denied.public_message(), missing.public_message());
    /// ```
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::AccessDenied { identifier } | Self::NotFound { identifier } => {
                format!("Resource not found: {identifier}")
            }
            Self::IoFailure { identifier, .. } => {
                format!("Failed to read resource: {identifier}")
            }
            Self::InvalidIdentifier { identifier, .. } => {
                format!("Invalid resource identifier: {identifier}")
            }
            Self::ConfigError { .. } => "Server misconfigured".to_string(),
        }
    }
}

/// Result type alias for resource operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_predicates_are_exclusive() {
        let err = Error::NotFound {
            identifier: "file://resources/a.txt".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!err.is_access_denied());
        assert!(!err.is_io_failure());
        assert!(!err.is_invalid_identifier());
    }

    #[test]
    fn test_io_failure_keeps_source() {
        let err = Error::IoFailure {
            identifier: "file://resources/a.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert!(err.is_io_failure());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("bad utf-8"));
    }

    #[test]
    fn test_public_message_hides_boundary() {
        let denied = Error::AccessDenied {
            identifier: "file://resources/../../etc/passwd".to_string(),
        };
        let missing = Error::NotFound {
            identifier: "file://resources/../../etc/passwd".to_string(),
        };
        assert_eq!(denied.public_message(), missing.public_message());
        assert!(!denied.public_message().contains("denied"));
    }

    #[test]
    fn test_public_message_hides_os_detail() {
        let err = Error::IoFailure {
            identifier: "file://resources/a.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "EACCES /srv/a.txt"),
        };
        let message = err.public_message();
        assert!(message.contains("file://resources/a.txt"));
        assert!(!message.contains("EACCES"));
    }

    #[test]
    fn test_error_display() {
        let err = Error::ConfigError {
            message: "root missing".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("Configuration error"));
        assert!(display.contains("root missing"));
    }
}
