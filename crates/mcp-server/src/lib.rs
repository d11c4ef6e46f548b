//! MCP server exposing a sandboxed directory as read-only resources.
//!
//! Wires a [`ResourceCatalog`](mcp_resources_core::ResourceCatalog) to the
//! rmcp `ServerHandler` resource methods:
//!
//! 1. **`resources/list`** - every regular file under the root, sorted
//! 2. **`resources/read`** - text content or a base64 blob, by identifier
//!
//! No tools or prompts are offered. Files are rediscovered on every request.
//!
//! # Examples
//!
//! ```no_run
//! use mcp_resources_core::SandboxRoot;
//! use mcp_resources_files::FsResourceProvider;
//! use mcp_resources_server::ResourceService;
//! use rmcp::ServiceExt;
//! use rmcp::transport::stdio;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let root = SandboxRoot::new("/srv/shared")?;
//! let service = ResourceService::new(Arc::new(FsResourceProvider::new(root)))
//!     .serve(stdio())
//!     .await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod convert;
pub mod service;

pub use cli::{Cli, Command, LogFormat, OutputFormat};
pub use service::ResourceService;
