//! Resource exposure facade.
//!
//! [`FsResourceProvider`] composes the scanner and the reader behind the
//! [`ResourceCatalog`] trait. It holds only the immutable sandbox root, so a
//! single instance can be shared by any number of concurrent callers.

use crate::{reader, scanner};
use mcp_resources_core::{
    ResourceCatalog, ResourceContent, ResourceDescriptor, Result, SandboxRoot,
};

/// Filesystem-backed [`ResourceCatalog`].
#[derive(Debug, Clone)]
pub struct FsResourceProvider {
    root: SandboxRoot,
}

impl FsResourceProvider {
    /// Creates a provider over an established sandbox root.
    #[must_use]
    pub const fn new(root: SandboxRoot) -> Self {
        Self { root }
    }

    /// Returns the sandbox root.
    #[must_use]
    pub const fn root(&self) -> &SandboxRoot {
        &self.root
    }
}

impl ResourceCatalog for FsResourceProvider {
    fn list_resources(&self) -> Vec<ResourceDescriptor> {
        scanner::enumerate(&self.root)
    }

    fn read_resource(&self, identifier: &str) -> Result<ResourceContent> {
        reader::read(&self.root, identifier)
    }
}
