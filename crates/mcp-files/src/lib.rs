//! Filesystem-backed resources under a sandbox root.
//!
//! Discovers files at request time, describes them, and serves their bytes
//! as text or base64 depending on the extension classification.
//!
//! # Features
//!
//! - **Request-time discovery**: nothing is cached between calls
//! - **Containment**: every read goes through [`SandboxRoot::resolve`]
//! - **No symlink traversal**: the scanner lists regular files only
//! - **Thread-safe**: [`FsResourceProvider`] is `Send + Sync` and read-only
//!
//! # Examples
//!
//! ```
//! use mcp_resources_core::{ResourceCatalog, SandboxRoot};
//! use mcp_resources_files::FsResourceProvider;
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! std::fs::write(temp.path().join("notes.txt"), "hello").unwrap();
//!
//! let provider = FsResourceProvider::new(SandboxRoot::new(temp.path()).unwrap());
//!
//! let listed = provider.list_resources();
//! assert_eq!(listed.len(), 1);
//!
//! let content = provider.read_resource(listed[0].identifier.as_str()).unwrap();
//! assert_eq!(content.as_text(), Some("hello"));
//! ```
//!
//! [`SandboxRoot::resolve`]: mcp_resources_core::SandboxRoot::resolve

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod provider;
pub mod reader;
pub mod scanner;
pub mod seed;

pub use provider::FsResourceProvider;
pub use reader::read;
pub use scanner::enumerate;
pub use seed::seed_sample_resources;
