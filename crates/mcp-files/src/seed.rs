//! Sample fixtures for a fresh sandbox root.
//!
//! This runs before the sandbox root is established and is the only code
//! in the workspace that writes under it. An existing directory is never
//! touched.

use mcp_resources_core::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

const README: &str = "# Sample Resources

This folder contains sample resources for the filesystem resource server.

## Contents
- readme.md (this file)
- config.json (sample configuration)
- notes.txt (plain text notes)
- logo.png (sample image, served as a binary resource)
";

const CONFIG: &str = r#"{
  "appName": "Filesystem Resource Server",
  "version": "1.0.0",
  "settings": {
    "allowedExtensions": [".txt", ".md", ".json", ".png", ".jpg"]
  }
}
"#;

const NOTES: &str = "Development Notes
=================

Files in this folder are discovered on every request.

- Binary files (images) are served as base64-encoded blobs
- Text files are served as plain text
- MIME types are inferred from file extensions

Add more files here and they will appear in the next listing.
";

/// Minimal 1x1 RGB PNG.
const LOGO_PNG: [u8; 69] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
    0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, // depth, color, CRC
    0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, // IDAT
    0x08, 0xD7, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x01, 0x01, 0x01, 0x00, 0x1B, 0xB6, 0xEE,
    0x56, // data, CRC
    0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82, // IEND
];

/// Creates `dir` and fills it with sample files if it does not exist yet.
///
/// Returns the number of files written; `0` when the directory already
/// existed.
///
/// # Errors
///
/// Returns `Error::ConfigError` if the directory or a file cannot be created.
///
/// # Examples
///
/// ```
/// use mcp_resources_files::seed_sample_resources;
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// let dir = temp.path().join("sample-resources");
///
/// assert_eq!(seed_sample_resources(&dir).unwrap(), 4);
/// assert!(dir.join("logo.png").exists());
///
/// // Second run leaves the directory alone
/// assert_eq!(seed_sample_resources(&dir).unwrap(), 0);
/// ```
pub fn seed_sample_resources(dir: impl AsRef<Path>) -> Result<usize> {
    let dir = dir.as_ref();

    if dir.exists() {
        return Ok(0);
    }

    tracing::info!("Creating sample resources folder: {}", dir.display());
    fs::create_dir_all(dir).map_err(|e| Error::ConfigError {
        message: format!("Failed to create {}: {e}", dir.display()),
    })?;

    let files: [(&str, &[u8]); 4] = [
        ("readme.md", README.as_bytes()),
        ("config.json", CONFIG.as_bytes()),
        ("notes.txt", NOTES.as_bytes()),
        ("logo.png", &LOGO_PNG),
    ];

    for (name, content) in files {
        write_file_atomic(&dir.join(name), content)?;
    }

    tracing::info!("Created {} sample files", files.len());
    Ok(files.len())
}

/// Writes to a sibling temp file, syncs, then renames into place.
fn write_file_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let fail = |action: &str, e: std::io::Error| Error::ConfigError {
        message: format!("Failed to {action} {}: {e}", path.display()),
    };

    let mut file = fs::File::create(&temp_path).map_err(|e| fail("create", e))?;
    file.write_all(content).map_err(|e| fail("write", e))?;
    file.sync_all().map_err(|e| fail("sync", e))?;
    fs::rename(&temp_path, path).map_err(|e| fail("rename", e))?;

    Ok(())
}
