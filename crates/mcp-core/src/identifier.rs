//! Scheme-prefixed resource identifiers.
//!
//! Identifiers have the form `file://resources/<relative-path>` where the
//! relative path always uses forward slashes, independent of the host
//! platform.
//!
//! # Examples
//!
//! ```
//! use mcp_resources_core::ResourceId;
//!
//! let id = ResourceId::parse("file://resources/docs/readme.md").unwrap();
//! assert_eq!(id.relative_path(), "docs/readme.md");
//!
//! assert!(ResourceId::parse("docs://company/handbook").is_err());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// Fixed scheme token shared with callers.
pub const RESOURCE_SCHEME: &str = "file://resources";

/// Resource identifier (newtype over String).
///
/// Construction only checks the scheme; containment is decided by
/// [`SandboxRoot::resolve`](crate::SandboxRoot::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Parses an identifier received from a caller.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIdentifier` if the string does not start with
    /// `file://resources/`.
    pub fn parse(identifier: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        let has_scheme = identifier
            .strip_prefix(RESOURCE_SCHEME)
            .is_some_and(|rest| rest.starts_with('/'));

        if !has_scheme {
            return Err(Error::InvalidIdentifier {
                identifier,
                reason: format!("expected prefix '{RESOURCE_SCHEME}/'"),
            });
        }

        Ok(Self(identifier))
    }

    /// Builds an identifier from a relative path, normalizing the host
    /// separator to `/`.
    ///
    /// Only [`MAIN_SEPARATOR`] is rewritten, so a `\` inside a Unix file
    /// name survives. No validation is performed; the result may still be
    /// refused by [`SandboxRoot::resolve`](crate::SandboxRoot::resolve).
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_resources_core::ResourceId;
    ///
    /// let id = ResourceId::from_relative_path("images/logo.png");
    /// assert_eq!(id.as_str(), "file://resources/images/logo.png");
    /// ```
    #[must_use]
    pub fn from_relative_path(relative: &str) -> Self {
        Self(format!(
            "{RESOURCE_SCHEME}/{}",
            relative.replace(MAIN_SEPARATOR, "/")
        ))
    }

    /// Returns the part after `file://resources/`.
    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.0[RESOURCE_SCHEME.len() + 1..]
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}
