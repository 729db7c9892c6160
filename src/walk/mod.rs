//! Directory tree traversal
//!
//! The walk splits into small pieces: entries read listings and memoize
//! statuses, the filter orders and prunes them, collapsing folds
//! single-child chains, resolution follows symlinks, the visited set keeps
//! followed links from looping, classification names what each entry is,
//! and the walker drives the recursion and writes the lines.

mod classify;
mod collapse;
mod cycle;
mod entry;
mod filter;
mod options;
mod resolve;
mod walker;

pub use classify::{Category, classify, type_sign};
pub use cycle::{VisitedDirs, lexical_normal};
pub use entry::{Directory, Entry};
pub use options::WalkOptions;
pub use resolve::{absolute_target, chain_end, link_target};
pub use walker::TreeWalker;
