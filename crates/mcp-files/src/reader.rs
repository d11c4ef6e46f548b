//! One-shot content reads.
//!
//! Each read resolves the identifier, classifies it by extension, and loads
//! the whole file. Textual resources must decode as UTF-8; a decode failure is
//! an `IoFailure`, never a silent switch to base64.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use mcp_resources_core::{Error, ResourceContent, ResourceId, Result, SandboxRoot, mime};
use std::fs;
use std::path::Path;

/// Reads the resource named by `identifier`.
///
/// # Errors
///
/// - `InvalidIdentifier`, `AccessDenied`, `NotFound` from resolution, unchanged
/// - `IoFailure` if the file cannot be read (including removal after
///   resolution) or a textual file is not valid UTF-8
///
/// # Examples
///
/// ```
/// use mcp_resources_core::SandboxRoot;
/// use mcp_resources_files::read;
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// std::fs::write(temp.path().join("logo.png"), [0x89_u8, 0x50, 0x4E, 0x47]).unwrap();
/// let root = SandboxRoot::new(temp.path()).unwrap();
///
/// let content = read(&root, "file://resources/logo.png").unwrap();
/// assert_eq!(content.as_encoded(), Some("iVBORw=="));
/// ```
pub fn read(root: &SandboxRoot, identifier: &str) -> Result<ResourceContent> {
    let id = ResourceId::parse(identifier)?;
    let path = root.resolve_id(&id)?;
    load(root, &path, &id)
}

/// Loads a resolved path and re-checks containment once the bytes are in.
fn load(root: &SandboxRoot, path: &Path, id: &ResourceId) -> Result<ResourceContent> {
    let classification = mime::classify(Path::new(id.relative_path()));
    let io_failure = |source| Error::IoFailure {
        identifier: id.to_string(),
        source,
    };

    let content = if classification.is_textual {
        ResourceContent::Text {
            value: fs::read_to_string(path).map_err(io_failure)?,
        }
    } else {
        ResourceContent::Binary {
            encoded: STANDARD.encode(fs::read(path).map_err(io_failure)?),
        }
    };

    if !root.contains(path) {
        tracing::warn!(identifier = id.as_str(), "Path left sandbox root during read");
        return Err(Error::AccessDenied {
            identifier: id.to_string(),
        });
    }

    tracing::debug!(
        identifier = id.as_str(),
        content_type = classification.content_type,
        "Read resource"
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, SandboxRoot) {
        let temp = TempDir::new().unwrap();
        let root = SandboxRoot::new(temp.path()).unwrap();
        (temp, root)
    }

    #[test]
    fn test_text_file() {
        let (temp, root) = setup();
        fs::write(temp.path().join("notes.txt"), "hello").unwrap();

        let content = read(&root, "file://resources/notes.txt").unwrap();
        assert_eq!(
            content,
            ResourceContent::Text {
                value: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_binary_file_round_trips() {
        let (temp, root) = setup();
        let bytes: Vec<u8> = (0..=255).collect();
        fs::write(temp.path().join("blob.bin"), &bytes).unwrap();

        let content = read(&root, "file://resources/blob.bin").unwrap();
        let decoded = STANDARD.decode(content.as_encoded().unwrap()).unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_zero_length_files() {
        let (temp, root) = setup();
        fs::write(temp.path().join("empty.md"), "").unwrap();
        fs::write(temp.path().join("empty.png"), "").unwrap();

        assert_eq!(
            read(&root, "file://resources/empty.md").unwrap(),
            ResourceContent::Text {
                value: String::new()
            }
        );
        assert_eq!(
            read(&root, "file://resources/empty.png").unwrap(),
            ResourceContent::Binary {
                encoded: String::new()
            }
        );
    }

    #[test]
    fn test_invalid_utf8_text_is_io_failure() {
        let (temp, root) = setup();
        fs::write(temp.path().join("broken.txt"), [0xFF_u8, 0xFE, 0x00, 0x80]).unwrap();

        let err = read(&root, "file://resources/broken.txt").unwrap_err();
        assert!(err.is_io_failure(), "expected IoFailure, got {err}");
    }

    #[test]
    fn test_text_looking_binary_stays_binary() {
        let (temp, root) = setup();
        fs::write(temp.path().join("plain.bin"), "just text").unwrap();

        let content = read(&root, "file://resources/plain.bin").unwrap();
        assert!(content.is_binary());
    }

    #[test]
    fn test_uppercase_extension() {
        let (temp, root) = setup();
        fs::write(temp.path().join("README.MD"), "# Title").unwrap();

        let content = read(&root, "file://resources/README.MD").unwrap();
        assert_eq!(content.as_text(), Some("# Title"));
    }

    #[test]
    fn test_removed_after_resolution_is_io_failure() {
        let (temp, root) = setup();
        fs::write(temp.path().join("gone.txt"), "here for now").unwrap();
        let id = ResourceId::parse("file://resources/gone.txt").unwrap();
        let path = root.resolve_id(&id).unwrap();

        fs::remove_file(&path).unwrap();

        let err = load(&root, &path, &id).unwrap_err();
        assert!(err.is_io_failure(), "expected IoFailure, got {err}");
    }

    #[test]
    fn test_directory_with_textual_extension_is_io_failure() {
        let (temp, root) = setup();
        fs::create_dir(temp.path().join("folder.txt")).unwrap();
        let id = ResourceId::parse("file://resources/folder.txt").unwrap();

        let err = load(&root, &temp.path().join("folder.txt"), &id).unwrap_err();
        assert!(err.is_io_failure(), "expected IoFailure, got {err}");
    }

    #[cfg(unix)]
    #[test]
    fn test_path_swapped_for_outward_link_is_denied() {
        use std::os::unix::fs::symlink;

        let (temp, root) = setup();
        let outside = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/a.txt"), "inside").unwrap();
        fs::write(outside.path().join("a.txt"), "outside").unwrap();

        let id = ResourceId::parse("file://resources/docs/a.txt").unwrap();
        let path = root.resolve_id(&id).unwrap();

        // Replace the directory component between resolution and read
        fs::remove_dir_all(temp.path().join("docs")).unwrap();
        symlink(outside.path(), temp.path().join("docs")).unwrap();

        let err = load(&root, &path, &id).unwrap_err();
        assert!(err.is_access_denied(), "expected AccessDenied, got {err}");
    }

    #[test]
    fn test_resolution_errors_propagate() {
        let (_temp, root) = setup();
        assert!(read(&root, "bogus").unwrap_err().is_invalid_identifier());
        assert!(read(&root, "file://resources/../x").unwrap_err().is_access_denied());
        assert!(read(&root, "file://resources/missing.txt").unwrap_err().is_not_found());
    }
}
