//! Note filename conventions.
//!
//! Notes inside a category directory may carry an optional numeric prefix
//! (`NNN-`) that fixes their position when the category's entries are listed
//! from the filesystem:
//!
//! ```text
//! Book/
//! ├── README.md            → first (category index)
//! ├── 010-clean-code.md    → 2nd
//! ├── 020-refactoring.md   → 3rd
//! └── reading-list.md      → after all numbered notes, by name
//! ```
//!
//! The prefix is stripped for display: `010-clean-code.md` → "clean code".
//! That display title stands in for a note that has no title of its own.

use std::cmp::Ordering;

/// Parsed stem of a note filename like `010-clean-code`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName {
    /// Numeric prefix, if any (`10` for `010-clean-code`).
    pub order: Option<u32>,
    /// Stem after the prefix, dashes preserved. The full stem when unnumbered.
    pub slug: String,
    /// Slug with dashes turned into spaces.
    pub display_title: String,
}

/// Split a filename stem into its `NNN-` prefix and name.
///
/// - `"010-clean-code"` → order=Some(10), slug="clean-code"
/// - `"symbol"` → order=None, slug="symbol"
/// - `"2024"` → order=None, slug="2024" (a bare number is a name, not a prefix)
pub fn parse_entry_name(stem: &str) -> EntryName {
    let (order, slug) = match stem.split_once('-') {
        Some((prefix, rest))
            if !prefix.is_empty() && prefix.bytes().all(|b| b.is_ascii_digit()) =>
        {
            match prefix.parse::<u32>() {
                Ok(n) => (Some(n), rest),
                Err(_) => (None, stem),
            }
        }
        _ => (None, stem),
    };
    EntryName {
        order,
        slug: slug.to_string(),
        display_title: slug.replace('-', " "),
    }
}

/// True for `README.md` / `index.md`: the directory's own page.
///
/// Exact case only, like the `.md` extension itself; `readme.md` is an
/// ordinary note.
pub fn is_index_file(file_name: &str) -> bool {
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
    stem == "README" || stem == "index"
}

/// Display title derived from an entry path: `Book/010-clean-code.md` →
/// "clean code". Index pages take their directory's name; the root index is
/// "README" or "index".
pub fn display_title_for(path: &str) -> String {
    let path = path.trim_matches('/');
    let path = path.strip_suffix(".md").unwrap_or(path);
    let (dir, name) = match path.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, path),
    };
    let stem = match dir {
        Some(dir) if is_index_file(name) => dir.rsplit('/').next().unwrap_or(dir),
        _ => name,
    };
    parse_entry_name(stem).display_title
}

/// Listing order for markdown filenames in one directory.
///
/// Index pages first, then numbered notes by number, then the rest; ties by
/// filename so the order is total.
pub fn compare_note_files(a: &str, b: &str) -> Ordering {
    rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
}

fn rank(file_name: &str) -> (u8, u32) {
    if is_index_file(file_name) {
        return (0, 0);
    }
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
    match parse_entry_name(stem).order {
        Some(n) => (1, n),
        None => (2, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_multi_word() {
        let n = parse_entry_name("010-clean-code");
        assert_eq!(n.order, Some(10));
        assert_eq!(n.slug, "clean-code");
        assert_eq!(n.display_title, "clean code");
    }

    #[test]
    fn unnumbered_keeps_full_stem() {
        let n = parse_entry_name("reading-list");
        assert_eq!(n.order, None);
        assert_eq!(n.slug, "reading-list");
        assert_eq!(n.display_title, "reading list");
    }

    #[test]
    fn bare_number_is_a_name() {
        let n = parse_entry_name("2024");
        assert_eq!(n.order, None);
        assert_eq!(n.slug, "2024");
    }

    #[test]
    fn zero_prefix() {
        let n = parse_entry_name("000-intro");
        assert_eq!(n.order, Some(0));
        assert_eq!(n.display_title, "intro");
    }

    #[test]
    fn overflowing_prefix_is_a_name() {
        let n = parse_entry_name("99999999999-big");
        assert_eq!(n.order, None);
        assert_eq!(n.slug, "99999999999-big");
    }

    #[test]
    fn index_files_exact_case() {
        assert!(is_index_file("README.md"));
        assert!(is_index_file("index.md"));
        assert!(is_index_file("README"));
        assert!(!is_index_file("readme.md"));
        assert!(!is_index_file("Index.md"));
        assert!(!is_index_file("readme-notes.md"));
    }

    #[test]
    fn display_title_strips_prefix_and_extension() {
        assert_eq!(display_title_for("Book/010-clean-code.md"), "clean code");
        assert_eq!(display_title_for("/symbol.md"), "symbol");
        assert_eq!(display_title_for("Typescript/generics"), "generics");
    }

    #[test]
    fn display_title_of_index_page_is_directory() {
        assert_eq!(display_title_for("Book/README.md"), "Book");
        assert_eq!(display_title_for("Book/002-reading-notes/index.md"), "reading notes");
        assert_eq!(display_title_for("Typescript/"), "Typescript");
        assert_eq!(display_title_for("README.md"), "README");
    }

    #[test]
    fn listing_order() {
        let mut files = vec![
            "reading-list.md",
            "020-refactoring.md",
            "README.md",
            "010-clean-code.md",
            "appendix.md",
            "002-late.md",
        ];
        files.sort_by(|a, b| compare_note_files(a, b));
        assert_eq!(
            files,
            vec![
                "README.md",
                "002-late.md",
                "010-clean-code.md",
                "020-refactoring.md",
                "appendix.md",
                "reading-list.md",
            ]
        );
    }
}
