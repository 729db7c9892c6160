//! CLI entry point for larch

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use larch::{Directory, OsFileSystem, TreeWalker, WalkOptions, output};

#[derive(Parser, Debug)]
#[command(name = "larch")]
#[command(about = "A tree command that folds single-child directory chains")]
#[command(version)]
struct Args {
    /// Do not skip hidden files
    #[arg(short = 'a', long = "all", help_heading = "Files options")]
    all: bool,

    /// Show only directories
    #[arg(short = 'd', help_heading = "Files options")]
    dirs_only: bool,

    /// Follow symlinks into directories
    #[arg(short = 'l', help_heading = "Files options")]
    follow_symlinks: bool,

    /// Set maximum tree depth
    #[arg(
        short = 'L',
        value_name = "DEPTH",
        value_parser = clap::value_parser!(u32).range(1..),
        help_heading = "Files options"
    )]
    level: Option<u32>,

    /// Disable the trailing counters
    #[arg(long = "noreport", help_heading = "Files options")]
    no_report: bool,

    /// Append type signs as in ls -F
    #[arg(short = 'F', help_heading = "Output format options")]
    type_signs: bool,

    /// Do not print indentation
    #[arg(short = 'i', long = "noindent", help_heading = "Output format options")]
    no_indent: bool,

    /// Disable colorization
    #[arg(short = 'n', long = "nocolor", help_heading = "Output format options")]
    no_color: bool,

    /// Force colorization
    #[arg(short = 'C', long = "color", help_heading = "Output format options")]
    force_color: bool,

    /// Leave entries unsorted
    #[arg(short = 'U', help_heading = "Sorting options")]
    unsorted: bool,

    /// Reverse the sorting order
    #[arg(short = 'r', help_heading = "Sorting options")]
    reverse: bool,

    /// List directories before files
    #[arg(long = "dirsfirst", help_heading = "Sorting options")]
    dirs_first: bool,

    /// Directories to show trees for
    #[arg(value_name = "DIR", default_value = ".")]
    roots: Vec<PathBuf>,
}

impl Args {
    fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            show_all: self.all,
            dirs_only: self.dirs_only,
            follow_symlinks: self.follow_symlinks,
            max_depth: self.level.map(|depth| depth as usize),
            type_signs: self.type_signs,
            no_indent: self.no_indent,
            unsorted: self.unsorted,
            reverse_sort: self.reverse,
            dirs_first: self.dirs_first,
        }
    }
}

/// Resolve the color mode once at startup. Forcing wins over everything;
/// explicit disabling and the NO_COLOR convention beat terminal detection.
fn resolve_color(force: bool, disable: bool, no_color_env: bool, tty: bool) -> ColorChoice {
    if force {
        ColorChoice::Always
    } else if disable || no_color_env || !tty {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

fn color_choice(args: &Args) -> ColorChoice {
    resolve_color(
        args.force_color,
        args.no_color,
        std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        std::io::stdout().is_terminal(),
    )
}

fn main() {
    let args = Args::parse();
    let opts = args.walk_options();

    let fs = OsFileSystem;
    let mut stdout = StandardStream::stdout(color_choice(&args));
    let mut walker = TreeWalker::new(&opts, &fs, &mut stdout);

    for root in &args.roots {
        let dir = Directory::read_path(root, &fs);
        if dir.entry().status(&fs).is_none() {
            eprintln!(
                "larch: cannot access '{}': No such file or directory",
                root.display()
            );
            process::exit(1);
        }
        if let Err(e) = walker.process_root(dir) {
            eprintln!("larch: error writing output: {e}");
            process::exit(1);
        }
    }

    let (dirs, files) = (walker.dir_count(), walker.file_count());
    drop(walker);

    if !args.no_report {
        if let Err(e) = output::write_report(&mut stdout, dirs, files, args.dirs_only) {
            eprintln!("larch: error writing output: {e}");
            process::exit(1);
        }
    }
}
