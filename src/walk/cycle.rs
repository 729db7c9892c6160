//! Cycle detection for followed symlinks

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path for identity comparison: `.` components drop
/// out, `..` pops what it can, trailing separators vanish. `a/b` and `a/b/`
/// produce the same key. Purely textual, so no filesystem access and no
/// canonicalization of symlinks.
pub fn lexical_normal(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    let mut normals = 0usize;
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if normals > 0 {
                    out.pop();
                    normals -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
                // `..` at the root stays at the root.
            }
            Component::Normal(name) => {
                out.push(name);
                normals += 1;
            }
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Directories entered so far in this invocation. A followed symlink whose
/// target is already here gets annotated instead of walked, which is what
/// keeps `-l` from looping forever.
#[derive(Debug, Default)]
pub struct VisitedDirs {
    seen: HashSet<PathBuf>,
}

impl VisitedDirs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: &Path) {
        self.seen.insert(lexical_normal(path));
    }

    pub fn seen(&self, path: &Path) -> bool {
        self.seen.contains(&lexical_normal(path))
    }
}
