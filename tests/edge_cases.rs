//! Edge case tests for larch
//!
//! Symlinks, cycles, unreadable directories, and odd tree shapes. Most of
//! these are Unix-only since they lean on symlinks and permission bits.


use harness::{TempTree, run_larch};

// ============================================================
// Symlink rendering
// ============================================================

#[cfg(unix)]
#[test]
fn test_symlink_shows_raw_target_text() {
    let tree = TempTree::new();
    tree.file("a.txt");
    tree.link("a.txt", "ln");

    let (stdout, _, success) = run_larch(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("ln -> a.txt"));
    assert!(stdout.contains("0 directories, 2 files"));
}

#[cfg(unix)]
#[test]
fn test_symlink_to_directory_not_walked_by_default() {
    let tree = TempTree::new();
    tree.file("sub/in.txt");
    tree.link("sub", "sl");

    let (stdout, _, success) = run_larch(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("sl -> sub"));
    // The target's contents appear once, under the real directory only.
    assert_eq!(stdout.matches("in.txt").count(), 1);
    // The unfollowed link counts as a file.
    assert!(stdout.contains("1 directories, 2 files"));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_renders_and_counts_as_file() {
    let tree = TempTree::new();
    tree.link("nowhere", "ghost");

    let (stdout, _, success) = run_larch(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("ghost -> nowhere"));
    assert!(stdout.contains("0 directories, 1 files"));

    let (stdout, _, success) = run_larch(tree.path(), &["-l"]);
    assert!(success);
    assert!(stdout.contains("ghost -> nowhere"));
    assert!(stdout.contains("0 directories, 1 files"));
}

#[cfg(unix)]
#[test]
fn test_symlink_signs_mark_both_sides() {
    let tree = TempTree::new();
    tree.executable("run.sh");
    tree.link("run.sh", "ln");

    let (stdout, _, success) = run_larch(tree.path(), &["-F"]);
    assert!(success);
    assert!(stdout.contains("ln@ -> run.sh*"));
}

// ============================================================
// Following symlinks
// ============================================================

#[cfg(unix)]
#[test]
fn test_followed_link_walks_target_before_the_real_directory() {
    let tree = TempTree::new();
    tree.file("sub/in.txt");
    tree.link("sub", "sl");

    // "sl" sorts before "sub", so the link is walked first and the real
    // directory is then walked again on its own line.
    let (stdout, _, success) = run_larch(tree.path(), &["-l"]);
    assert!(success);
    assert_eq!(stdout.matches("in.txt").count(), 2);
    assert!(!stdout.contains("[recursive, not followed]"));
    assert!(stdout.contains("2 directories, 2 files"));
}

#[cfg(unix)]
#[test]
fn test_followed_link_to_walked_directory_is_annotated() {
    let tree = TempTree::new();
    tree.file("asub/in.txt");
    tree.link("asub", "zlink");

    // "asub" is walked before "zlink" resolves to it.
    let (stdout, _, success) = run_larch(tree.path(), &["-l"]);
    assert!(success);
    assert!(stdout.contains("zlink -> asub  [recursive, not followed]"));
    assert_eq!(stdout.matches("in.txt").count(), 1);
    assert!(stdout.contains("2 directories, 1 files"));
}

#[cfg(unix)]
#[test]
fn test_followed_chain_of_links_reaches_the_directory() {
    let tree = TempTree::new();
    tree.file("zreal/x.txt");
    tree.dir(".links");
    tree.link("../zreal", ".links/mid");
    tree.link(".links/mid", "start");

    let (stdout, _, success) = run_larch(tree.path(), &["-l"]);
    assert!(success);
    assert!(stdout.contains("start -> .links/mid"));
    // Once under the chain, once under the real directory.
    assert_eq!(stdout.matches("x.txt").count(), 2);
    assert!(!stdout.contains("[recursive, not followed]"));
    assert!(stdout.contains("2 directories, 2 files"));
}

// ============================================================
// Cycles
// ============================================================

#[cfg(unix)]
#[test]
fn test_link_to_parent_is_cut_off() {
    let tree = TempTree::new();
    tree.dir("sub");
    tree.link("..", "sub/up");

    let (stdout, _, success) = run_larch(tree.path(), &["-l"]);
    assert!(success);
    assert!(stdout.contains("up -> ..  [recursive, not followed]"));
    assert!(stdout.contains("2 directories, 0 files"));
}

#[cfg(unix)]
#[test]
fn test_link_to_root_itself_is_cut_off() {
    let tree = TempTree::new();
    tree.file("keep.txt");
    tree.link(".", "here");

    let (stdout, _, success) = run_larch(tree.path(), &["-l"]);
    assert!(success);
    assert_eq!(stdout.matches("[recursive, not followed]").count(), 1);
    assert_eq!(stdout.matches("keep.txt").count(), 1);
}

#[cfg(unix)]
#[test]
fn test_mutual_link_cycle_terminates() {
    let tree = TempTree::new();
    tree.link("b", "a");
    tree.link("a", "b");

    let (stdout, _, success) = run_larch(tree.path(), &["-l"]);
    assert!(success);
    assert!(stdout.contains("a -> b"));
    assert!(stdout.contains("b -> a"));
    // Neither end resolves to a directory, so both are plain files.
    assert!(stdout.contains("0 directories, 2 files"));
}

#[cfg(unix)]
#[test]
fn test_self_link_terminates() {
    let tree = TempTree::new();
    tree.link("me", "me");

    let (stdout, _, success) = run_larch(tree.path(), &["-l"]);
    assert!(success);
    assert!(stdout.contains("me -> me"));
    assert!(stdout.contains("0 directories, 1 files"));
}

// ============================================================
// Symlink roots
// ============================================================

#[cfg(unix)]
#[test]
fn test_symlink_root_is_followed_without_the_flag() {
    let tree = TempTree::new();
    tree.file("sub/in.txt");
    tree.link("sub", "sl");

    let (stdout, _, success) = run_larch(tree.path(), &["sl"]);
    assert!(success);
    assert_eq!(
        stdout,
        "sl -> sub\n\
         └─ in.txt\n\
         \n\
         0 directories, 1 files\n"
    );
}

#[cfg(unix)]
#[test]
fn test_symlink_root_to_file_is_one_line() {
    let tree = TempTree::new();
    tree.file("a.txt");
    tree.link("a.txt", "sl");

    let (stdout, _, success) = run_larch(tree.path(), &["sl"]);
    assert!(success);
    assert_eq!(stdout, "sl -> a.txt\n\n0 directories, 0 files\n");
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_root_still_renders() {
    let tree = TempTree::new();
    tree.link("nowhere", "ghost");

    let (stdout, _, success) = run_larch(tree.path(), &["ghost"]);
    assert!(success);
    assert_eq!(stdout, "ghost -> nowhere\n\n0 directories, 0 files\n");
}

// ============================================================
// Unreadable directories
// ============================================================

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_annotated_not_fatal() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let tree = TempTree::new();
    let locked = tree.dir("locked");
    tree.file("ok.txt");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))
        .expect("failed to lock dir");
    // Root can list 0o000 directories, so only assert the annotation when
    // the listing actually fails for this process.
    let expect_error = fs::read_dir(&locked).is_err();

    let (stdout, _, success) = run_larch(tree.path(), &["."]);

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("failed to unlock dir");

    assert!(success);
    assert!(stdout.contains("ok.txt"));
    if expect_error {
        assert!(stdout.contains("locked  [error opening dir]"));
        assert!(stdout.contains("1 directories, 1 files"));
    }
}

// ============================================================
// Deep and odd shapes
// ============================================================

#[test]
fn test_deep_chain_folds_to_one_line() {
    let tree = TempTree::new();
    let chain = (0..20)
        .map(|i| format!("level{i:02}"))
        .collect::<Vec<_>>()
        .join("/");
    tree.file(&format!("{chain}/leaf.txt"));

    let (stdout, _, success) = run_larch(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("level00/level01/"));
    assert!(stdout.contains("level19/"));
    assert!(stdout.contains("20 directories, 1 files"));
    // Root line, folded chain, leaf, blank, report.
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn test_hidden_sole_child_blocks_the_fold() {
    let tree = TempTree::new();
    tree.file("wrap/.inner/f.txt");

    let (stdout, _, success) = run_larch(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("wrap/\n"));
    assert!(!stdout.contains(".inner"));
    assert!(stdout.contains("1 directories, 0 files"));

    let (stdout, _, success) = run_larch(tree.path(), &["-a"]);
    assert!(success);
    assert!(stdout.contains("wrap/.inner/"));
    assert!(stdout.contains("2 directories, 1 files"));
}

#[cfg(unix)]
#[test]
fn test_dirs_only_drops_links_to_directories() {
    let tree = TempTree::new();
    tree.dir("real");
    tree.link("real", "ln");

    let (stdout, _, success) = run_larch(tree.path(), &["-d"]);
    assert!(success);
    assert!(stdout.contains("real/"));
    assert!(!stdout.contains("ln"));
    assert!(stdout.contains("1 directories"));
}

#[cfg(unix)]
#[test]
fn test_broken_and_live_links_coexist() {
    let tree = TempTree::new();
    tree.file("real.txt");
    tree.link("real.txt", "good");
    tree.link("gone.txt", "bad");

    let (stdout, _, success) = run_larch(tree.path(), &["."]);
    assert!(success);
    assert!(stdout.contains("good -> real.txt"));
    assert!(stdout.contains("bad -> gone.txt"));
    assert!(stdout.contains("0 directories, 3 files"));
}
