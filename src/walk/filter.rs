//! Ordering and visibility transforms

use crate::fs::FileSystem;

use super::entry::Entry;
use super::options::WalkOptions;

/// Apply the configured transforms to a directory's raw listing, in a fixed
/// order: sort (then reverse, then directories first), hide dotfiles, keep
/// only directories. Runs once per walked directory, before rendering.
pub fn transform(entries: &mut Vec<Entry>, opts: &WalkOptions, fs: &dyn FileSystem) {
    if !opts.unsorted {
        entries.sort_by(|a, b| a.path().file_name().cmp(&b.path().file_name()));

        if opts.reverse_sort {
            entries.reverse();
        }

        if opts.dirs_first {
            // Stable split keeps the relative order within each group.
            let (dirs, files): (Vec<_>, Vec<_>) = std::mem::take(entries)
                .into_iter()
                .partition(|entry| entry.is_dir(fs));
            *entries = dirs;
            entries.extend(files);
        }
    }

    if !opts.show_all {
        entries.retain(|entry| !entry.is_hidden());
    }

    if opts.dirs_only {
        // Judged by the entry's own type, so a symlink pointing at a
        // directory is still dropped here.
        entries.retain(|entry| entry.is_dir(fs));
    }
}
