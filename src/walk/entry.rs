//! Entries and directory listings

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::fs::{FileStatus, FileSystem};

/// One path under consideration during a walk.
///
/// The status is fetched on first use and memoized, so sorting, filtering,
/// collapsing and classification share a single stat per entry.
#[derive(Debug, Clone)]
pub struct Entry {
    path: PathBuf,
    status: OnceCell<Option<FileStatus>>,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            status: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, lossily decoded. Paths like `/` or `..` that
    /// have no final component fall back to their full text.
    pub fn file_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }

    /// Status of the path itself, symlinks not followed. `None` when the
    /// lookup failed; the failure is memoized too.
    pub fn status(&self, fs: &dyn FileSystem) -> Option<FileStatus> {
        *self
            .status
            .get_or_init(|| fs.symlink_status(&self.path).ok())
    }

    pub fn is_dir(&self, fs: &dyn FileSystem) -> bool {
        self.status(fs).is_some_and(|s| s.is_dir())
    }

    pub fn is_symlink(&self, fs: &dyn FileSystem) -> bool {
        self.status(fs).is_some_and(|s| s.is_symlink())
    }

    /// Hidden by dotfile convention.
    pub fn is_hidden(&self) -> bool {
        self.path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'))
    }
}

/// A directory entry together with its listing, read once.
#[derive(Debug)]
pub struct Directory {
    entry: Entry,
    entries: Vec<Entry>,
    error: bool,
}

impl Directory {
    /// Read the listing for `entry`. A failed listing leaves the entry list
    /// empty and raises the error flag; the walk renders an annotation
    /// instead of recursing.
    pub fn read(entry: Entry, fs: &dyn FileSystem) -> Self {
        match fs.list_dir(entry.path()) {
            Ok(children) => Self {
                entry,
                entries: children.into_iter().map(Entry::new).collect(),
                error: false,
            },
            Err(_) => Self {
                entry,
                entries: Vec::new(),
                error: true,
            },
        }
    }

    pub fn read_path(path: impl Into<PathBuf>, fs: &dyn FileSystem) -> Self {
        Self::read(Entry::new(path), fs)
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn path(&self) -> &Path {
        self.entry.path()
    }

    /// Raw listing, in the order the filesystem produced it.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub(crate) fn into_parts(self) -> (Entry, Vec<Entry>) {
        (self.entry, self.entries)
    }

    pub fn had_error(&self) -> bool {
        self.error
    }
}
