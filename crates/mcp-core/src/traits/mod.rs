//! Core traits for sandboxed resources.
//!
//! # Module Structure
//!
//! - `catalog` - The list/read surface a transport depends on

mod catalog;

pub use catalog::ResourceCatalog;
