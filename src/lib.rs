//! Larch - a tree command that folds single-child directory chains

pub mod fs;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use fs::{FileKind, FileStatus, FileSystem, OsFileSystem};
pub use walk::{Category, Directory, Entry, TreeWalker, WalkOptions};
