//! Entry classification for styling and type signs

use crate::fs::{FileKind, FileSystem};

use super::entry::Entry;
use super::resolve;

/// Display category of a rendered name. Exactly one applies per entry.
///
/// `Door`, `Capability`, `StickyOtherWritable` and `OtherWritable` belong to
/// the classic dircolors vocabulary; classification never produces them on
/// the platforms supported here, but the style table covers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Regular,
    Directory,
    Symlink,
    Fifo,
    BlockDevice,
    CharDevice,
    Socket,
    Door,
    /// Symlink whose target does not exist.
    Orphan,
    /// Entry that vanished or could not be stated at all.
    Missing,
    Suid,
    Sgid,
    StickyDir,
    Executable,
    Capability,
    StickyOtherWritable,
    OtherWritable,
}

const MODE_SUID: u32 = 0o4000;
const MODE_SGID: u32 = 0o2000;
const MODE_STICKY: u32 = 0o1000;
const MODE_EXEC_ANY: u32 = 0o111;

/// Classify an entry from its own status. Only the symlink case looks
/// further, to tell live links from orphans.
///
/// Mode-based categories take precedence over plain ones: setuid beats
/// setgid beats executable for files, sticky beats plain for directories.
pub fn classify(entry: &Entry, fs: &dyn FileSystem) -> Category {
    let Some(status) = entry.status(fs) else {
        return Category::Missing;
    };
    match status.kind {
        FileKind::Symlink => match resolve::link_target(entry.path(), fs) {
            Some(target) if fs.exists(&target) => Category::Symlink,
            _ => Category::Orphan,
        },
        FileKind::Directory => {
            if status.mode & MODE_STICKY != 0 {
                Category::StickyDir
            } else {
                Category::Directory
            }
        }
        FileKind::Fifo => Category::Fifo,
        FileKind::Socket => Category::Socket,
        FileKind::BlockDevice => Category::BlockDevice,
        FileKind::CharDevice => Category::CharDevice,
        FileKind::Regular => {
            if status.mode & MODE_SUID != 0 {
                Category::Suid
            } else if status.mode & MODE_SGID != 0 {
                Category::Sgid
            } else if status.mode & MODE_EXEC_ANY != 0 {
                Category::Executable
            } else {
                Category::Regular
            }
        }
        FileKind::Other => Category::Regular,
    }
}

/// Sign appended after a name under `-F`, as in `ls -F`. Directories get a
/// trailing separator from the walker instead of a sign.
pub fn type_sign(category: Category) -> Option<char> {
    match category {
        Category::Symlink => Some('@'),
        Category::Fifo => Some('|'),
        Category::Socket => Some('='),
        Category::Door => Some('>'),
        Category::Executable => Some('*'),
        _ => None,
    }
}
