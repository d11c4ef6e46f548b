//! Extension-driven MIME classification.
//!
//! [`classify`] maps a path's lowercase extension to a content type and
//! derives the text/binary tag from that content type with [`is_textual`].
//! File contents are never inspected.
//!
//! # Examples
//!
//! ```
//! use mcp_resources_core::mime;
//! use std::path::Path;
//!
//! let json = mime::classify(Path::new("config.JSON"));
//! assert_eq!(json.content_type, "application/json");
//! assert!(json.is_textual);
//!
//! let png = mime::classify(Path::new("logo.png"));
//! assert_eq!(png.content_type, "image/png");
//! assert!(!png.is_textual);
//!
//! let unknown = mime::classify(Path::new("archive.tar.xz"));
//! assert_eq!(unknown.content_type, mime::DEFAULT_CONTENT_TYPE);
//! assert!(!unknown.is_textual);
//! ```

use std::path::Path;

/// Content type reported for extensions outside the table.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Non-`text/` content types whose bytes are still served as text.
const TEXTUAL_APPLICATION_TYPES: [&str; 3] =
    ["application/json", "application/javascript", "image/svg+xml"];

/// Result of classifying a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    /// MIME string reported to callers
    pub content_type: &'static str,
    /// Whether the bytes are served as UTF-8 text rather than base64
    pub is_textual: bool,
}

impl Classification {
    fn from_content_type(content_type: &'static str) -> Self {
        Self {
            content_type,
            is_textual: is_textual(content_type),
        }
    }
}

/// Classifies a path by its extension.
///
/// Total and deterministic: the same extension always yields the same pair,
/// regardless of whether the file exists or what it contains.
#[must_use]
pub fn classify(path: &Path) -> Classification {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let content_type = extension
        .as_deref()
        .and_then(content_type_for_extension)
        .unwrap_or(DEFAULT_CONTENT_TYPE);

    Classification::from_content_type(content_type)
}

/// Returns `true` if bytes of this content type are served as text.
///
/// This is the only text/binary rule in the workspace.
#[must_use]
pub fn is_textual(content_type: &str) -> bool {
    content_type.starts_with("text/") || TEXTUAL_APPLICATION_TYPES.contains(&content_type)
}

/// Looks up a lowercase extension (without the dot).
#[must_use]
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    let content_type = match extension {
        // Text
        "txt" => "text/plain",
        "md" => "text/markdown",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "xml" => "text/xml",

        // Application
        "json" => "application/json",
        "js" => "application/javascript",
        "pdf" => "application/pdf",
        "zip" => "application/zip",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "bmp" => "image/bmp",

        // Source code
        "cs" => "text/x-csharp",
        "py" => "text/x-python",
        "ts" => "text/typescript",
        "rs" => "text/x-rust",
        "go" => "text/x-go",
        "java" => "text/x-java",
        "cpp" | "cc" | "cxx" => "text/x-c++",
        "c" | "h" => "text/x-c",
        "sh" => "text/x-shellscript",
        "yaml" | "yml" => "text/yaml",

        _ => return None,
    };
    Some(content_type)
}
