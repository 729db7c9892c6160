//! Symlink target resolution

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::fs::FileSystem;

use super::entry::Entry;

/// Join a raw link target against the link's parent directory when the
/// target is relative. Absolute targets pass through untouched.
pub fn absolute_target(link: &Path, raw: &Path) -> PathBuf {
    if raw.is_absolute() {
        return raw.to_path_buf();
    }
    match link.parent() {
        Some(parent) => parent.join(raw),
        None => raw.to_path_buf(),
    }
}

/// One-hop target of a symlink, absolutized. `None` when the link itself
/// cannot be read.
pub fn link_target(link: &Path, fs: &dyn FileSystem) -> Option<PathBuf> {
    let raw = fs.read_link(link).ok()?;
    Some(absolute_target(link, &raw))
}

/// Follow a chain of symlinks until something that is not a symlink.
///
/// A pure link cycle (`a -> b -> a`) has no end; the seen set cuts the loop
/// at the first repeat, and the returned entry is still a symlink, so the
/// caller will not walk into it.
pub fn chain_end(start: Entry, fs: &dyn FileSystem) -> Entry {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut current = start;
    while current.is_symlink(fs) {
        if !seen.insert(current.path().to_path_buf()) {
            break;
        }
        match link_target(current.path(), fs) {
            Some(next) => current = Entry::new(next),
            None => break,
        }
    }
    current
}
