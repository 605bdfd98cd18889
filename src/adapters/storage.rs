use crate::domain::ports::Storage;
use crate::utils::error::{GdapError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem storage. Relative paths resolve against `base_path`, absolute
/// paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        fs::read_to_string(&full_path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => GdapError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => GdapError::ReadError {
                path: path.to_path_buf(),
                source,
            },
        })
    }

    // Parent directories are not created; a missing one is a write failure.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        tracing::debug!("Writing {} bytes to {}", data.len(), full_path.display());
        fs::write(&full_path, data).map_err(|source| GdapError::OutputWriteError {
            path: path.to_path_buf(),
            source,
        })
    }
}
