//! Mapping between catalog types and MCP protocol types.
//!
//! The catalog speaks descriptors, content variants and library errors; the
//! protocol speaks `Resource`, `ResourceContents` and JSON-RPC error codes.

use mcp_resources_core::{Error, ResourceContent, ResourceDescriptor, mime};
use rmcp::ErrorData as McpError;
use rmcp::model::{Annotated, RawResource, ResourceContents};
use std::path::Path;

/// Converts a descriptor into a listed protocol resource.
///
/// Sizes beyond `u32::MAX` are omitted rather than truncated.
#[must_use]
pub fn to_resource(descriptor: &ResourceDescriptor) -> Annotated<RawResource> {
    Annotated::new(
        RawResource {
            uri: descriptor.identifier.to_string(),
            name: descriptor.display_name.clone(),
            title: None,
            description: Some(descriptor.description.clone()),
            mime_type: Some(descriptor.content_type.clone()),
            size: u32::try_from(descriptor.size_bytes).ok(),
            icons: None,
            meta: None,
        },
        None,
    )
}

/// Converts read content into protocol contents for `identifier`.
///
/// The MIME type is recomputed from the identifier so text and blob payloads
/// carry the same content type the listing advertised.
#[must_use]
pub fn to_contents(identifier: &str, content: ResourceContent) -> ResourceContents {
    let mime_type = Some(mime::classify(Path::new(identifier)).content_type.to_string());

    match content {
        ResourceContent::Text { value } => ResourceContents::TextResourceContents {
            uri: identifier.to_string(),
            mime_type,
            text: value,
            meta: None,
        },
        ResourceContent::Binary { encoded } => ResourceContents::BlobResourceContents {
            uri: identifier.to_string(),
            mime_type,
            blob: encoded,
            meta: None,
        },
    }
}

/// Maps a library error onto a JSON-RPC error.
///
/// Only [`Error::public_message`] reaches the client, so denied and missing
/// resources are indistinguishable and OS error details stay in the log.
#[must_use]
pub fn to_mcp_error(err: &Error) -> McpError {
    match err {
        Error::InvalidIdentifier { .. } => McpError::invalid_params(err.public_message(), None),
        Error::AccessDenied { .. } | Error::NotFound { .. } => {
            McpError::resource_not_found(err.public_message(), None)
        }
        Error::IoFailure { .. } | Error::ConfigError { .. } => {
            McpError::internal_error(err.public_message(), None)
        }
    }
}
