//! The recursive traversal and rendering engine

use std::io;
use std::path::MAIN_SEPARATOR;

use termcolor::WriteColor;

use crate::fs::FileSystem;
use crate::output;

use super::classify::{classify, type_sign};
use super::collapse;
use super::cycle::VisitedDirs;
use super::entry::{Directory, Entry};
use super::filter;
use super::options::WalkOptions;
use super::resolve;

const TURN_MID: &str = "├─ ";
const TURN_LAST: &str = "└─ ";
const SKIP_MID: &str = "│  ";
const SKIP_LAST: &str = "   ";

const ERROR_OPENING_DIR: &str = "[error opening dir]";
const RECURSIVE_NOT_FOLLOWED: &str = "[recursive, not followed]";

/// Depth-first tree renderer.
///
/// One walker spans every root of an invocation, so the visited set and the
/// counters carry across roots. Lines stream to the sink as they complete;
/// nothing is buffered beyond the current line.
pub struct TreeWalker<'a, W: WriteColor> {
    opts: &'a WalkOptions,
    fs: &'a dyn FileSystem,
    out: &'a mut W,
    visited: VisitedDirs,
    dirs: usize,
    files: usize,
}

impl<'a, W: WriteColor> TreeWalker<'a, W> {
    pub fn new(opts: &'a WalkOptions, fs: &'a dyn FileSystem, out: &'a mut W) -> Self {
        Self {
            opts,
            fs,
            out,
            visited: VisitedDirs::new(),
            dirs: 0,
            files: 0,
        }
    }

    /// Directories encountered so far. Roots are never counted.
    pub fn dir_count(&self) -> usize {
        self.dirs
    }

    /// Files encountered so far. Unfollowed symlinks count here whatever
    /// they point at.
    pub fn file_count(&self) -> usize {
        self.files
    }

    /// Render one root argument, shown by the path the caller gave rather
    /// than by its final component. Directory roots are walked. Symlink
    /// roots are followed one hop into a directory target even without the
    /// follow option. Anything else is a single line.
    pub fn process_root(&mut self, root: Directory) -> io::Result<()> {
        let shown = root.path().display().to_string();
        if root.entry().is_dir(self.fs) {
            self.render(root.entry(), Some(&shown))?;
            if root.had_error() {
                return writeln!(self.out, "  {ERROR_OPENING_DIR}");
            }
            writeln!(self.out)?;
            self.walk(root, "", 0)
        } else if root.entry().is_symlink(self.fs) {
            self.render(root.entry(), Some(&shown))?;
            let Ok(raw) = self.fs.read_link(root.path()) else {
                return writeln!(self.out);
            };
            let target = Entry::new(resolve::absolute_target(root.path(), &raw));
            let raw_text = raw.to_string_lossy();
            write!(self.out, " -> ")?;
            self.render(&target, Some(&raw_text))?;
            writeln!(self.out)?;
            if target.is_dir(self.fs) {
                let dir = Directory::read(target, self.fs);
                return self.walk(dir, "", 0);
            }
            Ok(())
        } else {
            self.render(root.entry(), Some(&shown))?;
            writeln!(self.out)
        }
    }

    /// Walk one directory level: transform the listing, then render a line
    /// per entry and recurse where entries lead further down.
    fn walk(&mut self, dir: Directory, prefix: &str, depth: usize) -> io::Result<()> {
        if self.opts.max_depth.is_some_and(|max| depth >= max) {
            return Ok(());
        }
        self.visited.record(dir.path());

        let mut entries = dir.into_entries();
        filter::transform(&mut entries, self.opts, self.fs);

        let count = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == count;
            if !self.opts.no_indent {
                let turn = if is_last { TURN_LAST } else { TURN_MID };
                write!(self.out, "{prefix}{turn}")?;
            }
            let skip = if is_last { SKIP_LAST } else { SKIP_MID };

            if entry.is_symlink(self.fs) {
                self.visit_symlink(entry, &format!("{prefix}{skip}"), depth)?;
            } else if entry.is_dir(self.fs) {
                self.visit_directory(entry, &format!("{prefix}{skip}"), depth)?;
            } else {
                self.files += 1;
                self.render(&entry, None)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Render a `link -> target` line. With the follow option on, targets
    /// that end up at a directory are walked, unless that directory was
    /// already entered, which gets an annotation instead of a loop.
    fn visit_symlink(&mut self, link: Entry, child_prefix: &str, depth: usize) -> io::Result<()> {
        let Ok(raw) = self.fs.read_link(link.path()) else {
            // Link vanished between listing and reading: render it bare.
            self.files += 1;
            self.render(&link, None)?;
            return writeln!(self.out);
        };
        let target = Entry::new(resolve::absolute_target(link.path(), &raw));

        let mut target_dir = None;
        if self.opts.follow_symlinks {
            if target.is_dir(self.fs) {
                target_dir = Some(Directory::read(target.clone(), self.fs));
            } else if target.is_symlink(self.fs) {
                let end = resolve::chain_end(target.clone(), self.fs);
                if end.is_dir(self.fs) {
                    target_dir = Some(Directory::read(end, self.fs));
                }
            }
        }

        let raw_text = raw.to_string_lossy();
        self.render(&link, None)?;
        write!(self.out, " -> ")?;
        self.render(&target, Some(&raw_text))?;

        match target_dir {
            Some(dir) => {
                self.dirs += 1;
                if self.visited.seen(dir.path()) {
                    writeln!(self.out, "  {RECURSIVE_NOT_FOLLOWED}")
                } else {
                    writeln!(self.out)?;
                    self.walk(dir, child_prefix, depth + 1)
                }
            }
            None => {
                // Unfollowed links count as files, whatever they point at.
                self.files += 1;
                writeln!(self.out)
            }
        }
    }

    /// Render a directory line, folding single-child chains into it, then
    /// recurse into the terminal directory unless its listing failed.
    fn visit_directory(&mut self, entry: Entry, child_prefix: &str, depth: usize) -> io::Result<()> {
        let start = Directory::read(entry, self.fs);
        let (folded, terminal) = collapse::collapse_chain(start, self.opts, self.fs);
        for segment in &folded {
            self.dirs += 1;
            self.render(segment, None)?;
            write!(self.out, "{MAIN_SEPARATOR}")?;
        }

        self.dirs += 1;
        self.render(terminal.entry(), None)?;
        if terminal.had_error() {
            writeln!(self.out, "  {ERROR_OPENING_DIR}")
        } else {
            writeln!(self.out, "{MAIN_SEPARATOR}")?;
            self.walk(terminal, child_prefix, depth + 1)
        }
    }

    /// Write one styled name. `text` overrides what is shown (roots show the
    /// caller's spelling, link targets their raw text); `None` falls back to
    /// the final path component.
    fn render(&mut self, entry: &Entry, text: Option<&str>) -> io::Result<()> {
        let category = classify(entry, self.fs);
        match text {
            Some(text) => output::paint(self.out, category, text)?,
            None => output::paint(self.out, category, &entry.file_name())?,
        }
        if self.opts.type_signs {
            if let Some(sign) = type_sign(category) {
                write!(self.out, "{sign}")?;
            }
        }
        Ok(())
    }
}
