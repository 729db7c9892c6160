//! Single-child directory chain folding

use crate::fs::FileSystem;

use super::entry::{Directory, Entry};
use super::options::WalkOptions;

/// Whether a directory folds into its sole child on the rendered line.
///
/// A directory folds while its raw listing holds exactly one entry, that
/// entry is a directory by its own status, and the entry would not be hidden
/// from the current view. Unreadable directories have empty listings, so
/// they never fold.
pub fn is_collapsible(dir: &Directory, opts: &WalkOptions, fs: &dyn FileSystem) -> bool {
    let [sole] = dir.entries() else { return false };
    sole.is_dir(fs) && (opts.show_all || !sole.is_hidden())
}

/// Fold a chain of single-child directories. Returns the folded links in
/// order, then the terminal directory the walk continues into.
pub fn collapse_chain(
    start: Directory,
    opts: &WalkOptions,
    fs: &dyn FileSystem,
) -> (Vec<Entry>, Directory) {
    let mut folded = Vec::new();
    let mut current = start;
    while is_collapsible(&current, opts, fs) {
        let (own, mut children) = current.into_parts();
        folded.push(own);
        current = Directory::read(children.remove(0), fs);
    }
    (folded, current)
}
