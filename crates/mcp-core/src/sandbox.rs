//! Sandbox root and identifier/path mapping.
//!
//! # Resolution strategy
//!
//! [`SandboxRoot::resolve`] runs in two phases:
//!
//! 1. Lexical: the relative part of the identifier is split on `/`. Empty
//!    relative paths, `..` segments and segments that are not a single
//!    normal component on this platform (absolute or drive-prefixed
//!    fragments, `\` on Windows) are refused as `AccessDenied`; empty or `.`
//!    segments are `InvalidIdentifier` because they would make the
//!    identifier ambiguous. On Unix `\` is an ordinary file name character.
//! 2. Physical: the candidate is canonicalized with
//!    [`std::fs::canonicalize`], which resolves every symlink component, and
//!    the result must have the canonical root as a strict prefix. When the
//!    candidate does not exist, its deepest existing ancestor is
//!    canonicalized instead, so a missing leaf behind an escaping symlinked
//!    directory is still `AccessDenied`.
//!
//! Resolution and the read that follows are not atomic. A directory component
//! swapped for an outward symlink in between would be followed by the read,
//! so readers re-check the path with [`SandboxRoot::contains`] afterwards and
//! discard the content if it no longer lies under the root.

use crate::identifier::ResourceId;
use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Canonical directory under which every resource operation is confined.
///
/// Established once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxRoot {
    root: PathBuf,
}

impl SandboxRoot {
    /// Canonicalizes `path` and checks that it is a directory.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigError` if the path does not exist, cannot be
    /// canonicalized, or is not a directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let root = path.canonicalize().map_err(|e| Error::ConfigError {
            message: format!("Failed to canonicalize sandbox root {}: {e}", path.display()),
        })?;

        if !root.is_dir() {
            return Err(Error::ConfigError {
                message: format!("Sandbox root is not a directory: {}", root.display()),
            });
        }

        Ok(Self { root })
    }

    /// Returns the canonical root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Maps a path under the root to its identifier.
    ///
    /// Absolute paths must lie under the canonical root; relative paths are
    /// taken relative to it. Separators are normalized to `/`.
    ///
    /// # Errors
    ///
    /// - `Error::AccessDenied` if the path lies outside the root, is the root
    ///   itself, or contains `..` components
    /// - `Error::InvalidIdentifier` if a component is not valid UTF-8
    pub fn to_identifier(&self, path: impl AsRef<Path>) -> Result<ResourceId> {
        let path = path.as_ref();
        let shown = || path.display().to_string();

        let relative = if path.is_absolute() {
            path.strip_prefix(&self.root)
                .map_err(|_| Error::AccessDenied { identifier: shown() })?
        } else {
            path
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    let part = part.to_str().ok_or_else(|| Error::InvalidIdentifier {
                        identifier: shown(),
                        reason: "path is not valid UTF-8".to_string(),
                    })?;
                    segments.push(part);
                }
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(Error::AccessDenied { identifier: shown() });
                }
            }
        }

        if segments.is_empty() {
            return Err(Error::AccessDenied { identifier: shown() });
        }

        Ok(ResourceId::from_relative_path(&segments.join("/")))
    }

    /// Resolves an identifier to the canonical path of a regular file.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidIdentifier` for a missing scheme or non-canonical segments
    /// - `Error::AccessDenied` if the location would be outside the root or is
    ///   the root itself
    /// - `Error::NotFound` if the location is contained but holds no regular file
    /// - `Error::IoFailure` for other filesystem errors during resolution
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_resources_core::SandboxRoot;
    /// # use tempfile::TempDir;
    ///
    /// # let temp = TempDir::new().unwrap();
    /// let root = SandboxRoot::new(temp.path()).unwrap();
    ///
    /// let err = root.resolve("file://resources/../../etc/passwd").unwrap_err();
    /// assert!(err.is_access_denied());
    ///
    /// let err = root.resolve("file://resources/missing.txt").unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    pub fn resolve(&self, identifier: &str) -> Result<PathBuf> {
        self.resolve_id(&ResourceId::parse(identifier)?)
    }

    /// Resolves an already parsed identifier.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve), except that the scheme is not
    /// checked again.
    pub fn resolve_id(&self, id: &ResourceId) -> Result<PathBuf> {
        let identifier = id.as_str();
        let candidate = self.candidate_path(identifier, id.relative_path())?;

        match candidate.canonicalize() {
            Ok(canonical) => {
                self.ensure_contained(&canonical, identifier)?;

                let metadata = fs::metadata(&canonical)
                    .map_err(|e| resolution_error(identifier, e))?;
                if !metadata.is_file() {
                    return Err(Error::NotFound {
                        identifier: identifier.to_string(),
                    });
                }

                Ok(canonical)
            }
            Err(e) if is_missing(&e) => {
                self.ensure_ancestor_contained(&candidate, identifier)?;
                Err(Error::NotFound {
                    identifier: identifier.to_string(),
                })
            }
            Err(e) => Err(Error::IoFailure {
                identifier: identifier.to_string(),
                source: e,
            }),
        }
    }

    /// Builds the lexical candidate `root/<segments>`.
    fn candidate_path(&self, identifier: &str, relative: &str) -> Result<PathBuf> {
        let denied = || {
            tracing::warn!(identifier, "Refused identifier escaping sandbox root");
            Error::AccessDenied {
                identifier: identifier.to_string(),
            }
        };

        if relative.is_empty() || relative.starts_with('/') {
            return Err(denied());
        }

        let mut candidate = self.root.clone();
        for segment in relative.split('/') {
            match segment {
                ".." => return Err(denied()),
                "" | "." => {
                    return Err(Error::InvalidIdentifier {
                        identifier: identifier.to_string(),
                        reason: "empty or '.' path segment".to_string(),
                    });
                }
                _ if segment.contains('\0') => {
                    return Err(Error::InvalidIdentifier {
                        identifier: identifier.to_string(),
                        reason: "NUL byte in path segment".to_string(),
                    });
                }
                _ => {
                    // A segment must stay a single normal component on this
                    // platform ("C:" and "a\b" split further on Windows).
                    let mut components = Path::new(segment).components();
                    match (components.next(), components.next()) {
                        (Some(Component::Normal(_)), None) => candidate.push(segment),
                        _ => return Err(denied()),
                    }
                }
            }
        }

        Ok(candidate)
    }

    /// Returns true if `path` currently canonicalizes to a location strictly
    /// below the root.
    ///
    /// Paths that cannot be canonicalized are not contained.
    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        path.as_ref()
            .canonicalize()
            .is_ok_and(|canonical| self.is_below_root(&canonical))
    }

    fn is_below_root(&self, canonical: &Path) -> bool {
        canonical != self.root && canonical.starts_with(&self.root)
    }

    /// Requires `canonical` to be strictly below the root.
    fn ensure_contained(&self, canonical: &Path, identifier: &str) -> Result<()> {
        if self.is_below_root(canonical) {
            return Ok(());
        }

        tracing::warn!(identifier, "Resolved path escapes sandbox root");
        Err(Error::AccessDenied {
            identifier: identifier.to_string(),
        })
    }

    /// Canonicalizes the deepest existing ancestor of a missing candidate.
    fn ensure_ancestor_contained(&self, candidate: &Path, identifier: &str) -> Result<()> {
        for ancestor in candidate.ancestors().skip(1) {
            if ancestor == self.root {
                return Ok(());
            }

            match ancestor.canonicalize() {
                Ok(canonical) if canonical == self.root || canonical.starts_with(&self.root) => {
                    return Ok(());
                }
                Ok(_) => {
                    tracing::warn!(identifier, "Missing path lies behind an escaping link");
                    return Err(Error::AccessDenied {
                        identifier: identifier.to_string(),
                    });
                }
                Err(e) if is_missing(&e) => {}
                Err(e) => return Err(resolution_error(identifier, e)),
            }
        }

        Ok(())
    }
}

fn is_missing(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

fn resolution_error(identifier: &str, error: io::Error) -> Error {
    if is_missing(&error) {
        Error::NotFound {
            identifier: identifier.to_string(),
        }
    } else {
        Error::IoFailure {
            identifier: identifier.to_string(),
            source: error,
        }
    }
}
