//! MCP server implementation for sandboxed resources.
//!
//! `ResourceService` answers `resources/list` and `resources/read` from a
//! [`ResourceCatalog`]. Catalog calls touch the filesystem, so they run on the
//! blocking thread pool.

use crate::convert::{to_contents, to_mcp_error, to_resource};
use mcp_resources_core::ResourceCatalog;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    Implementation, ListResourcesResult, PaginatedRequestParams, ProtocolVersion,
    ReadResourceRequestParams, ReadResourceResult, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer};
use std::sync::Arc;

/// MCP server exposing a resource catalog.
///
/// The service only depends on the [`ResourceCatalog`] trait and holds no
/// state of its own, so clones share the same catalog.
///
/// # Examples
///
/// ```no_run
/// use mcp_resources_core::SandboxRoot;
/// use mcp_resources_files::FsResourceProvider;
/// use mcp_resources_server::ResourceService;
/// use rmcp::ServiceExt;
/// use rmcp::transport::stdio;
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let root = SandboxRoot::new("./sample-resources")?;
/// let service = ResourceService::new(Arc::new(FsResourceProvider::new(root)));
///
/// let running = service.serve(stdio()).await?;
/// running.waiting().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ResourceService {
    catalog: Arc<dyn ResourceCatalog>,
}

impl ResourceService {
    /// Creates a service over `catalog`.
    #[must_use]
    pub const fn new(catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self { catalog }
    }

    /// Lists all resources as protocol results.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the blocking task cannot be joined.
    pub async fn list(&self) -> Result<ListResourcesResult, McpError> {
        let catalog = Arc::clone(&self.catalog);
        let descriptors = tokio::task::spawn_blocking(move || catalog.list_resources())
            .await
            .map_err(|e| McpError::internal_error(format!("Task join error: {e}"), None))?;

        tracing::debug!("Serving {} resources", descriptors.len());

        Ok(ListResourcesResult {
            resources: descriptors.iter().map(to_resource).collect(),
            next_cursor: None,
            meta: None,
        })
    }

    /// Reads one resource as a protocol result.
    ///
    /// # Errors
    ///
    /// - Invalid params for a malformed identifier
    /// - Resource not found for denied or missing resources
    /// - Internal error for I/O failures
    pub async fn read(&self, uri: String) -> Result<ReadResourceResult, McpError> {
        let catalog = Arc::clone(&self.catalog);
        let identifier = uri.clone();
        let result = tokio::task::spawn_blocking(move || catalog.read_resource(&identifier))
            .await
            .map_err(|e| McpError::internal_error(format!("Task join error: {e}"), None))?;

        match result {
            Ok(content) => Ok(ReadResourceResult {
                contents: vec![to_contents(&uri, content)],
            }),
            Err(e) => {
                tracing::info!(uri = %uri, "Resource read refused: {e}");
                Err(to_mcp_error(&e))
            }
        }
    }
}

impl ServerHandler for ResourceService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_resources().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Read-only access to files under a sandboxed directory. \
                 Use resources/list to discover files, then resources/read \
                 with a listed uri."
                    .to_string(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        self.list().await
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.read(request.uri).await
    }
}
