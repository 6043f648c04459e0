//! Manifest version read/write with format-preserving TOML editing.
//!
//! The manifest is read fully, the version field updated, and the document
//! written back in one atomic step (temp file in the same directory, then
//! rename), so an interrupt never leaves a partial write.

use std::io::Write;
use std::path::{Path, PathBuf};

use semver::Version;
use toml_edit::DocumentMut;

use crate::error::VersionError;

/// Fixed manifest name at the project root.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// A loaded manifest with its parsed version.
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    doc: DocumentMut,
    pub version: Version,
}

impl Manifest {
    /// Load the manifest from the current directory.
    pub fn load() -> Result<Self, VersionError> {
        Self::load_from(Path::new(MANIFEST_FILE))
    }

    /// Load a manifest from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, VersionError> {
        let content = std::fs::read_to_string(path).map_err(|source| VersionError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let doc = content
            .parse::<DocumentMut>()
            .map_err(|e| VersionError::ManifestParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let version_str = doc
            .get("package")
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| VersionError::MissingVersion {
                path: path.to_path_buf(),
            })?;

        let version = Version::parse(version_str)
            .map_err(|e| VersionError::InvalidVersion(version_str.to_string(), e))?;

        Ok(Self {
            path: path.to_path_buf(),
            doc,
            version,
        })
    }

    /// Update the version field and persist the full document.
    pub fn write_version(&mut self, new_version: &Version) -> Result<(), VersionError> {
        self.doc["package"]["version"] = toml_edit::value(new_version.to_string());

        let mut content = self.doc.to_string();
        if !content.ends_with('\n') {
            content.push('\n');
        }

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let write = || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
            tmp.write_all(content.as_bytes())?;
            tmp.persist(&self.path).map_err(|e| e.error)?;
            Ok(())
        };

        write().map_err(|e| VersionError::ManifestWrite {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        self.version = new_version.clone();
        Ok(())
    }
}
