//! Resource descriptors and content variants.
//!
//! Both are computed on demand for each request and never cached.

use crate::identifier::ResourceId;
use serde::{Deserialize, Serialize};

/// Metadata describing one file exposed under the sandbox root.
///
/// # Examples
///
/// ```
/// use mcp_resources_core::{ResourceDescriptor, ResourceId};
///
/// let descriptor = ResourceDescriptor::new(
///     ResourceId::from_relative_path("docs/readme.md"),
///     "text/markdown",
///     2048,
/// );
///
/// assert_eq!(descriptor.display_name, "readme.md");
/// assert_eq!(descriptor.description, "File: docs/readme.md (2.0 KB)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    /// Scheme-prefixed identifier
    pub identifier: ResourceId,
    /// File name without directories
    pub display_name: String,
    /// MIME type from the extension table
    pub content_type: String,
    /// File size at listing time
    pub size_bytes: u64,
    /// Human-readable summary with relative path and size
    pub description: String,
}

impl ResourceDescriptor {
    /// Builds a descriptor, deriving the display name and description from
    /// the identifier.
    #[must_use]
    pub fn new(identifier: ResourceId, content_type: impl Into<String>, size_bytes: u64) -> Self {
        let relative = identifier.relative_path();
        let display_name = relative
            .rsplit('/')
            .next()
            .unwrap_or(relative)
            .to_string();
        let description = format!("File: {relative} ({})", format_file_size(size_bytes));

        Self {
            identifier,
            display_name,
            content_type: content_type.into(),
            size_bytes,
            description,
        }
    }
}

/// Content of a single read.
///
/// The variant is chosen by the extension classification alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResourceContent {
    /// UTF-8 text, served verbatim
    Text {
        /// Full file contents
        value: String,
    },
    /// Raw bytes, standard base64 with padding
    Binary {
        /// Base64 of the full file contents
        encoded: String,
    },
}

impl ResourceContent {
    /// Returns `true` for the `Text` variant.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Returns `true` for the `Binary` variant.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(self, Self::Binary { .. })
    }

    /// Returns the text if this is the `Text` variant.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { value } => Some(value),
            Self::Binary { .. } => None,
        }
    }

    /// Returns the base64 payload if this is the `Binary` variant.
    #[must_use]
    pub fn as_encoded(&self) -> Option<&str> {
        match self {
            Self::Binary { encoded } => Some(encoded),
            Self::Text { .. } => None,
        }
    }
}

/// Formats a byte count with one decimal using B, KB, MB, GB.
///
/// # Examples
///
/// ```
/// use mcp_resources_core::format_file_size;
///
/// assert_eq!(format_file_size(512), "512.0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_file_size(size: u64) -> String {
    const SUFFIXES: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = size as f64;
    let mut index = 0;
    while value >= 1024.0 && index < SUFFIXES.len() - 1 {
        value /= 1024.0;
        index += 1;
    }

    format!("{value:.1} {}", SUFFIXES[index])
}
