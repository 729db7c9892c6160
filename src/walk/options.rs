//! Traversal configuration

/// Walk configuration, built once from the command line and borrowed
/// read-only for the whole invocation. Defaults match running with no
/// flags at all.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Do not skip hidden files.
    pub show_all: bool,
    /// Show only directories.
    pub dirs_only: bool,
    /// Walk into symlinks that resolve to directories.
    pub follow_symlinks: bool,
    /// Maximum walk depth; `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Append type signs as in `ls -F`.
    pub type_signs: bool,
    /// Suppress indentation and connector lines.
    pub no_indent: bool,
    /// Leave entries in filesystem listing order.
    pub unsorted: bool,
    /// Reverse the sorted order.
    pub reverse_sort: bool,
    /// List directories before files.
    pub dirs_first: bool,
}
