//! Core types, traits, and errors for sandboxed filesystem resources.
//!
//! This crate provides the pure, protocol-free building blocks used by the
//! scanner, the content reader, and the transport crate.
//!
//! # Architecture
//!
//! The core consists of:
//! - MIME classification by file extension ([`mime`])
//! - Strong identifier type ([`ResourceId`]) with a fixed scheme prefix
//! - The sandbox root and its bidirectional identifier/path mapping ([`SandboxRoot`])
//! - Resource descriptors and content variants
//! - Error hierarchy with contextual information
//! - Startup configuration ([`SandboxConfig`])
//! - The [`ResourceCatalog`] seam consumed by transports
//!
//! # Examples
//!
//! ```
//! use mcp_resources_core::{SandboxRoot, mime};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join("notes.txt"), "hello").unwrap();
//!
//! let root = SandboxRoot::new(temp.path()).unwrap();
//! let id = root.to_identifier(root.path().join("notes.txt")).unwrap();
//! assert_eq!(id.as_str(), "file://resources/notes.txt");
//!
//! let path = root.resolve(id.as_str()).unwrap();
//! assert!(mime::classify(&path).is_textual);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod identifier;
mod sandbox;
mod types;

pub mod mime;
pub mod traits;

pub use config::{SandboxConfig, SandboxConfigBuilder, default_config_path};
pub use error::{Error, Result};
pub use identifier::{RESOURCE_SCHEME, ResourceId};
pub use mime::Classification;
pub use sandbox::SandboxRoot;
pub use traits::ResourceCatalog;
pub use types::{ResourceContent, ResourceDescriptor, format_file_size};
