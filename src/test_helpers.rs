//! Shared test utilities.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let site = load_site(tmp.path()).unwrap();
//!
//! assert_sidebar_shape(&site.manifest.sidebar, &[
//!     ("Typescript", &["Typescript/symbol.md"]),
//!     ("Book", &["Book/010-book1.md", "Book/020-book2.md"]),
//! ]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

use crate::config::CONFIG_FILE;
use crate::navigation::{SidebarLeaf, SidebarNode, SidebarTree};

/// Copy `fixtures/docs/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs");
    for entry in WalkDir::new(&fixtures).min_depth(1) {
        let entry = entry.unwrap();
        let dst = tmp.path().join(entry.path().strip_prefix(&fixtures).unwrap());
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dst).unwrap();
        } else {
            fs::copy(entry.path(), &dst).unwrap();
        }
    }
    tmp
}

/// Replace the docs root's `config.toml`.
pub fn write_config(root: &Path, content: &str) {
    fs::write(root.join(CONFIG_FILE), content).unwrap();
}

pub fn find_group<'a>(tree: &'a SidebarTree, title: &str) -> &'a SidebarNode {
    tree.groups
        .iter()
        .find(|g| g.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<_> = tree.groups.iter().map(|g| &g.title).collect();
            panic!("group '{title}' not found. Available: {titles:?}")
        })
}

pub fn find_leaf<'a>(tree: &'a SidebarTree, group: &str, path: &str) -> &'a SidebarLeaf {
    let node = find_group(tree, group);
    node.children
        .iter()
        .find(|l| l.path == path)
        .unwrap_or_else(|| panic!("entry '{path}' not found in group '{group}'"))
}

/// Assert group titles and entry paths, both in order.
pub fn assert_sidebar_shape(tree: &SidebarTree, expected: &[(&str, &[&str])]) {
    let actual: Vec<(&str, Vec<&str>)> = tree
        .groups
        .iter()
        .map(|g| {
            (
                g.title.as_str(),
                g.children.iter().map(|l| l.path.as_str()).collect(),
            )
        })
        .collect();
    let expected: Vec<(&str, Vec<&str>)> = expected
        .iter()
        .map(|(title, paths)| (*title, paths.to_vec()))
        .collect();
    assert_eq!(actual, expected, "sidebar shape mismatch");
}
