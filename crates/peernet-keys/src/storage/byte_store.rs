//! Raw byte persistence underneath the key stores.

use std::path::{Path, PathBuf};

use crate::error::{KeystoreError, Result};

/// Directory where key files live unless an explicit path is given.
pub const DEFAULT_CONFIG_DIR: &str = "/etc/peernet";

/// Byte-level storage the key stores are built on.
///
/// [`FsByteStore`] is the production implementation; tests substitute
/// failure-injecting doubles to exercise error paths.
pub trait ByteStore {
    /// True if a file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the full contents of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::NotFound` if no file exists at `path`, or
    /// `KeystoreError::Io` for any other read fault.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>>;

    /// Write `data` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `KeystoreError::Io` on any write fault.
    fn write_bytes(&self, path: &Path, data: &[u8]) -> Result<()>;
}

/// Filesystem-backed byte store.
///
/// Writes go to a sibling temporary file first and are renamed into place,
/// so a crash mid-write never leaves a partially written key file visible.
/// Missing parent directories are created. Key files hold secrets, so on
/// unix they are written with mode 0600.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsByteStore;

impl ByteStore for FsByteStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        if !path.exists() {
            return Err(KeystoreError::NotFound(path.to_path_buf()));
        }
        Ok(std::fs::read(path)?)
    }

    fn write_bytes(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write to a sibling temp file first, then rename into place.
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, data)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
        }

        std::fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

/// Resolve an optional caller-supplied path, falling back to `default` when
/// the path is absent or empty.
pub(crate) fn resolve_or_default(path: Option<&Path>, default: PathBuf) -> PathBuf {
    match path {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => default,
    }
}
