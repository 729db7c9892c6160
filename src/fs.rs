//! Filesystem access boundary
//!
//! The walker never calls `std::fs` directly. Everything goes through the
//! [`FileSystem`] trait so traversal logic can be driven by an in-memory
//! filesystem in unit tests.

use std::io;
use std::path::{Path, PathBuf};

/// What a path is, according to its own (non-followed) status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
    /// Anything the platform reports that fits none of the above.
    Other,
}

/// Snapshot of a path's type and permission bits, symlinks not followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStatus {
    pub kind: FileKind,
    /// Low twelve bits of the Unix mode (permissions plus setuid, setgid
    /// and sticky). Zero on platforms without them.
    pub mode: u32,
}

impl FileStatus {
    pub fn new(kind: FileKind, mode: u32) -> Self {
        Self { kind, mode }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == FileKind::Symlink
    }
}

/// The filesystem operations the walker depends on.
///
/// Every operation is one-shot and fallible. Callers degrade on failure
/// instead of aborting: an unreadable directory becomes an annotated line,
/// a vanished entry renders unstyled.
pub trait FileSystem {
    /// List a directory's children in whatever order the OS yields them.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Status of the path itself, not following a final symlink.
    fn symlink_status(&self, path: &Path) -> io::Result<FileStatus>;

    /// Raw target of a symlink, exactly as stored.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Whether the path exists, following symlinks.
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut children = Vec::new();
        for entry in std::fs::read_dir(path)? {
            // Entries that error mid-iteration are skipped, not fatal.
            let Ok(entry) = entry else { continue };
            children.push(entry.path());
        }
        Ok(children)
    }

    fn symlink_status(&self, path: &Path) -> io::Result<FileStatus> {
        let meta = std::fs::symlink_metadata(path)?;
        Ok(status_from_metadata(&meta))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(unix)]
fn status_from_metadata(meta: &std::fs::Metadata) -> FileStatus {
    use std::os::unix::fs::{FileTypeExt, PermissionsExt};

    let file_type = meta.file_type();
    let kind = if file_type.is_symlink() {
        FileKind::Symlink
    } else if file_type.is_dir() {
        FileKind::Directory
    } else if file_type.is_fifo() {
        FileKind::Fifo
    } else if file_type.is_socket() {
        FileKind::Socket
    } else if file_type.is_block_device() {
        FileKind::BlockDevice
    } else if file_type.is_char_device() {
        FileKind::CharDevice
    } else if file_type.is_file() {
        FileKind::Regular
    } else {
        FileKind::Other
    };
    FileStatus::new(kind, meta.permissions().mode() & 0o7777)
}

#[cfg(not(unix))]
fn status_from_metadata(meta: &std::fs::Metadata) -> FileStatus {
    let file_type = meta.file_type();
    let kind = if file_type.is_symlink() {
        FileKind::Symlink
    } else if file_type.is_dir() {
        FileKind::Directory
    } else if file_type.is_file() {
        FileKind::Regular
    } else {
        FileKind::Other
    };
    FileStatus::new(kind, 0)
}
