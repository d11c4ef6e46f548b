//! Recursive enumeration of the sandbox root.
//!
//! Symlinks are never followed: neither symlinked files nor symlinked
//! directories appear in a listing. Entries that fail mid-walk are logged and
//! skipped so one unreadable directory cannot hide the rest of the tree.

use mcp_resources_core::{ResourceDescriptor, SandboxRoot, mime};
use walkdir::{DirEntry, WalkDir};

/// Lists every regular file under `root`, sorted by identifier.
///
/// The order is lexicographic by relative path, so two listings without
/// intervening filesystem changes are identical.
///
/// # Examples
///
/// ```
/// use mcp_resources_core::SandboxRoot;
/// use mcp_resources_files::enumerate;
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// std::fs::create_dir(temp.path().join("images")).unwrap();
/// std::fs::write(temp.path().join("images/logo.png"), [0x89_u8, 0x50]).unwrap();
/// std::fs::write(temp.path().join("notes.txt"), "hello").unwrap();
///
/// let root = SandboxRoot::new(temp.path()).unwrap();
/// let ids: Vec<_> = enumerate(&root)
///     .into_iter()
///     .map(|d| d.identifier.into_inner())
///     .collect();
///
/// assert_eq!(ids, ["file://resources/images/logo.png", "file://resources/notes.txt"]);
/// ```
#[must_use]
pub fn enumerate(root: &SandboxRoot) -> Vec<ResourceDescriptor> {
    let mut descriptors = Vec::new();

    let walker = WalkDir::new(root.path())
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry during scan: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if let Some(descriptor) = describe(root, &entry) {
            descriptors.push(descriptor);
        }
    }

    descriptors.sort_unstable_by(|a, b| a.identifier.cmp(&b.identifier));

    tracing::debug!("Listed {} resources", descriptors.len());
    descriptors
}

fn describe(root: &SandboxRoot, entry: &DirEntry) -> Option<ResourceDescriptor> {
    let path = entry.path();

    let identifier = match root.to_identifier(path) {
        Ok(identifier) => identifier,
        Err(e) => {
            tracing::warn!("Skipping {}: {e}", path.display());
            return None;
        }
    };

    let size = match entry.metadata() {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            tracing::warn!("Skipping {identifier}: {e}");
            return None;
        }
    };

    let classification = mime::classify(path);
    Some(ResourceDescriptor::new(
        identifier,
        classification.content_type,
        size,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn root_with(files: &[(&str, &str)]) -> (TempDir, SandboxRoot) {
        let temp = TempDir::new().unwrap();
        for (relative, content) in files {
            let path = temp.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let root = SandboxRoot::new(temp.path()).unwrap();
        (temp, root)
    }

    #[test]
    fn test_empty_root() {
        let (_temp, root) = root_with(&[]);
        assert!(enumerate(&root).is_empty());
    }

    #[test]
    fn test_directories_are_not_listed() {
        let (temp, root) = root_with(&[("a/b/c.txt", "x")]);
        fs::create_dir_all(temp.path().join("empty/dir")).unwrap();

        let listed = enumerate(&root);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].identifier.as_str(), "file://resources/a/b/c.txt");
    }

    #[test]
    fn test_descriptor_fields() {
        let (_temp, root) = root_with(&[("docs/config.json", "{\"a\": 1}")]);
        let d = &enumerate(&root)[0];
        assert_eq!(d.display_name, "config.json");
        assert_eq!(d.content_type, "application/json");
        assert_eq!(d.size_bytes, 8);
        assert_eq!(d.description, "File: docs/config.json (8.0 B)");
    }

    #[test]
    fn test_order_is_lexicographic_by_relative_path() {
        let (_temp, root) = root_with(&[
            ("b.txt", ""),
            ("a/z.txt", ""),
            ("a.txt", ""),
            ("A.txt", ""),
        ]);
        let ids: Vec<_> = enumerate(&root)
            .into_iter()
            .map(|d| d.identifier.relative_path().to_string())
            .collect();
        assert_eq!(ids, ["A.txt", "a.txt", "a/z.txt", "b.txt"]);
    }

    #[test]
    fn test_repeated_listing_is_identical() {
        let (_temp, root) = root_with(&[("x.md", "#"), ("y/z.png", "PNG"), ("w.bin", "\0")]);
        assert_eq!(enumerate(&root), enumerate(&root));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_not_followed() {
        use std::os::unix::fs::symlink;

        let (temp, root) = root_with(&[("real/file.txt", "inside")]);
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("secret.txt"), "secret").unwrap();

        symlink(outside.path(), temp.path().join("linked_dir")).unwrap();
        symlink(temp.path().join("real"), temp.path().join("loop_dir")).unwrap();
        symlink(temp.path().join("real/file.txt"), temp.path().join("alias.txt")).unwrap();

        let ids: Vec<_> = enumerate(&root)
            .into_iter()
            .map(|d| d.identifier.into_inner())
            .collect();
        assert_eq!(ids, ["file://resources/real/file.txt"]);
    }

    #[test]
    fn test_walk_error_is_skipped() {
        let (temp, root) = root_with(&[("a.txt", "x")]);
        fs::remove_dir_all(temp.path()).unwrap();

        assert!(enumerate(&root).is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_name_is_skipped_rest_kept() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (temp, root) = root_with(&[("a.txt", "a"), ("z/b.md", "b")]);
        fs::write(temp.path().join(OsStr::from_bytes(b"bad\xFFname.txt")), "?").unwrap();

        let ids: Vec<_> = enumerate(&root)
            .into_iter()
            .map(|d| d.identifier.into_inner())
            .collect();
        assert_eq!(ids, ["file://resources/a.txt", "file://resources/z/b.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_backslash_names_are_listed() {
        let (_temp, root) = root_with(&[("plain.txt", "p"), ("weird\\name.txt", "w")]);

        let ids: Vec<_> = enumerate(&root)
            .into_iter()
            .map(|d| d.identifier.into_inner())
            .collect();
        assert_eq!(
            ids,
            ["file://resources/plain.txt", "file://resources/weird\\name.txt"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let (temp, root) = root_with(&[("ok.txt", "fine"), ("locked/hidden.txt", "nope")]);
        let locked = temp.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let listed = enumerate(&root);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(
            listed
                .iter()
                .any(|d| d.identifier.as_str() == "file://resources/ok.txt")
        );
    }
}
