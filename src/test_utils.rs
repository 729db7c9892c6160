//! Shared helpers for tests and benchmarks
//!
//! Compiled only for the crate's own tests and for consumers of the
//! `test-utils` feature, which the benchmarks turn on.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway directory tree, removed on drop.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty file, making parent directories as needed.
    pub fn file(&self, path: &str) -> PathBuf {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dirs");
        }
        fs::write(&full, b"").expect("failed to create file");
        full
    }

    /// Create a directory, making parents as needed.
    pub fn dir(&self, path: &str) -> PathBuf {
        let full = self.dir.path().join(path);
        fs::create_dir_all(&full).expect("failed to create dir");
        full
    }

    /// Create a symlink holding `target` as its raw text.
    #[cfg(unix)]
    pub fn link(&self, target: &str, link: &str) -> PathBuf {
        let full = self.dir.path().join(link);
        std::os::unix::fs::symlink(target, &full).expect("failed to create symlink");
        full
    }

    /// Create an executable file.
    #[cfg(unix)]
    pub fn executable(&self, path: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let full = self.file(path);
        fs::set_permissions(&full, fs::Permissions::from_mode(0o755))
            .expect("failed to set permissions");
        full
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}
