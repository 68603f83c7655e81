#![allow(dead_code)]

use std::fs;
use std::path::Path;

use siftree::filter::{Filter, NameSets};
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// NameSets from string slices, extensions normalized as in the CLI.
pub fn sets(files: &[&str], extensions: &[&str], directories: &[&str]) -> NameSets {
    NameSets::new(
        files.iter().map(|s| s.to_string()).collect(),
        extensions.iter().map(|s| s.to_string()).collect(),
        directories.iter().map(|s| s.to_string()).collect(),
    )
}

/// Render `root` with `filter` into a string.
pub fn render_to_string(root: &Path, filter: &Filter) -> String {
    let mut buf = Vec::new();
    siftree::tree::render_tree(root, filter, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}
