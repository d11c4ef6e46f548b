//! Resource catalog trait.
//!
//! Transports hold an `Arc<dyn ResourceCatalog>` and call it directly; no
//! process-wide registry is involved.

use crate::{ResourceContent, ResourceDescriptor, Result};
use std::fmt::Debug;

/// Lists and reads resources.
///
/// Both operations are idempotent and never modify the filesystem.
/// Implementations must be `Send + Sync`; concurrent callers share them
/// without locking.
///
/// # Examples
///
/// ```
/// use mcp_resources_core::{
///     Error, ResourceCatalog, ResourceContent, ResourceDescriptor, ResourceId, Result,
/// };
///
/// #[derive(Debug)]
/// struct Single;
///
/// impl ResourceCatalog for Single {
///     fn list_resources(&self) -> Vec<ResourceDescriptor> {
///         vec![ResourceDescriptor::new(
///             ResourceId::from_relative_path("notes.txt"),
///             "text/plain",
///             5,
///         )]
///     }
///
///     fn read_resource(&self, identifier: &str) -> Result<ResourceContent> {
///         if identifier == "file://resources/notes.txt" {
///             Ok(ResourceContent::Text { value: "hello".to_string() })
///         } else {
///             Err(Error::NotFound { identifier: identifier.to_string() })
///         }
///     }
/// }
///
/// let catalog = Single;
/// assert_eq!(catalog.list_resources().len(), 1);
/// assert!(catalog.read_resource("file://resources/other").unwrap_err().is_not_found());
/// ```
pub trait ResourceCatalog: Send + Sync + Debug {
    /// Enumerates every exposed resource.
    ///
    /// Entries that cannot be inspected are skipped, never fatal.
    fn list_resources(&self) -> Vec<ResourceDescriptor>;

    /// Reads one resource by identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier`, `AccessDenied`, `NotFound`, or
    /// `IoFailure`; each is terminal for the request.
    fn read_resource(&self, identifier: &str) -> Result<ResourceContent>;
}
