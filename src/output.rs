//! Terminal styling and the summary report

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::walk::Category;

/// Style for a category, after the classic dircolors defaults: directories
/// bold blue, live links bold cyan, broken ones bold red, and so on. Regular
/// and missing entries stay unstyled.
pub fn style_for(category: Category) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match category {
        Category::Regular | Category::Missing => {}
        Category::Directory => {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
        }
        Category::Symlink => {
            spec.set_fg(Some(Color::Cyan)).set_bold(true);
        }
        Category::Fifo => {
            spec.set_fg(Some(Color::Yellow));
        }
        Category::BlockDevice | Category::CharDevice => {
            spec.set_fg(Some(Color::Yellow)).set_bold(true);
        }
        Category::Orphan => {
            spec.set_fg(Some(Color::Red)).set_bold(true);
        }
        Category::Socket | Category::Door => {
            spec.set_fg(Some(Color::Magenta)).set_bold(true);
        }
        Category::Suid => {
            spec.set_bg(Some(Color::Red));
        }
        Category::Sgid => {
            spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Yellow));
        }
        Category::StickyDir => {
            spec.set_bg(Some(Color::Blue));
        }
        Category::Executable => {
            spec.set_fg(Some(Color::Green)).set_bold(true);
        }
        Category::Capability => {
            spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Red));
        }
        Category::StickyOtherWritable => {
            spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Green));
        }
        Category::OtherWritable => {
            spec.set_fg(Some(Color::Blue)).set_bg(Some(Color::Green));
        }
    }
    spec
}

/// Write one styled span. Whether styling reaches the bytes is the sink's
/// business: a `NoColor` sink strips it, an `Ansi` sink emits escapes.
pub fn paint<W: WriteColor + ?Sized>(out: &mut W, category: Category, text: &str) -> io::Result<()> {
    let spec = style_for(category);
    if spec.is_none() {
        return write!(out, "{text}");
    }
    out.set_color(&spec)?;
    write!(out, "{text}")?;
    out.reset()
}

/// Trailing counters: a blank separator line, then the totals. Walks that
/// show only directories report only directories.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    dirs: usize,
    files: usize,
    dirs_only: bool,
) -> io::Result<()> {
    writeln!(out)?;
    if dirs_only {
        writeln!(out, "{dirs} directories")
    } else {
        writeln!(out, "{dirs} directories, {files} files")
    }
}
