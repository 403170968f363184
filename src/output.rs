//! CLI output formatting.
//!
//! Output is information-first: each sidebar entry leads with its position
//! and document title, with the configured path shown as an indented
//! `Source:` line. Untitled documents fall back to the display title of their
//! filename (`020-book2.md` → "book2"), prefix and extension stripped.
//!
//! ```text
//! Site
//!     Today I Learned → /TIL/
//!     Study, summary and write down
//!
//! Nav
//!     001 GitHub → https://github.com/bomi94436
//!
//! Sidebar
//! 001 Typescript (1 entry)
//!     001 Symbol → /TIL/Typescript/symbol.html
//!         Source: Typescript/symbol.md
//! 002 Book (2 entries, listed from Book/)
//!     001 Book 1 → /TIL/Book/010-book1.html
//!         Source: Book/010-book1.md
//!     002 Book 2 → /TIL/Book/020-book2.html
//!         Source: Book/020-book2.md
//!
//! Unlisted
//!     README.md
//! ```
//!
//! Each `format_*` function is pure and returns lines; `print_*` wrappers
//! write them to stdout.

use crate::naming;
use crate::navigation::{SidebarLeaf, SidebarTree};
use crate::site::Site;

fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn leaf_lines(index: usize, leaf: &SidebarLeaf, depth: usize) -> Vec<String> {
    let pad = indent(depth);
    let title = match leaf.title.as_deref() {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => naming::display_title_for(&leaf.path),
    };
    vec![
        format!(
            "{pad}{} {} \u{2192} {}",
            format_index(index),
            title,
            leaf.route
        ),
        format!("{pad}    Source: {}", leaf.path),
    ]
}

/// Sidebar groups and their entries, in display order.
///
/// `discovered` names categories whose entries came from their directory.
pub fn format_sidebar(tree: &SidebarTree, discovered: &[String]) -> Vec<String> {
    let mut lines = vec!["Sidebar".to_string()];
    for (i, group) in tree.groups.iter().enumerate() {
        let count = plural(group.children.len(), "entry", "entries");
        let header = if discovered.iter().any(|d| d == &group.title) {
            format!("{} {} ({count}, listed from {}/)", format_index(i + 1), group.title, group.title)
        } else {
            format!("{} {} ({count})", format_index(i + 1), group.title)
        };
        lines.push(header);
        for (j, leaf) in group.children.iter().enumerate() {
            lines.extend(leaf_lines(j + 1, leaf, 1));
        }
    }
    lines
}

/// Full inventory of a loaded site: identity, nav links, sidebar, and the
/// documents nothing links to.
pub fn format_site(site: &Site) -> Vec<String> {
    let config = &site.manifest.config;
    let mut lines = vec![
        "Site".to_string(),
        format!("    {} \u{2192} {}", config.title(), config.base_path()),
    ];
    if !config.description().is_empty() {
        lines.push(format!("    {}", config.description()));
    }

    if !config.nav().is_empty() {
        lines.push(String::new());
        lines.push("Nav".to_string());
        for (i, link) in config.nav().iter().enumerate() {
            lines.push(format!(
                "    {} {} \u{2192} {}",
                format_index(i + 1),
                link.text,
                link.link
            ));
        }
    }

    lines.push(String::new());
    lines.extend(format_sidebar(&site.manifest.sidebar, &site.discovered));

    let unlisted = site.unlisted();
    if !unlisted.is_empty() {
        lines.push(String::new());
        lines.push("Unlisted".to_string());
        lines.extend(unlisted.iter().map(|p| format!("    {p}")));
    }

    lines
}

pub fn print_site(site: &Site) {
    for line in format_site(site) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::SidebarNode;
    use crate::site::load_site;
    use crate::test_helpers::*;

    fn leaf(path: &str, route: &str, title: Option<&str>) -> SidebarLeaf {
        SidebarLeaf {
            path: path.to_string(),
            route: route.to_string(),
            title: title.map(str::to_string),
        }
    }

    #[test]
    fn format_index_pads_to_three() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn titled_leaf_shows_source_line() {
        let lines = leaf_lines(1, &leaf("symbol.md", "/TIL/symbol.html", Some("Symbol")), 1);
        assert_eq!(
            lines,
            vec![
                "    001 Symbol \u{2192} /TIL/symbol.html",
                "        Source: symbol.md",
            ]
        );
    }

    #[test]
    fn untitled_leaf_uses_filename_display_title() {
        let lines = leaf_lines(2, &leaf("Book/020-book-two.md", "/TIL/Book/020-book-two.html", None), 1);
        assert_eq!(
            lines,
            vec![
                "    002 book two \u{2192} /TIL/Book/020-book-two.html",
                "        Source: Book/020-book-two.md",
            ]
        );
    }

    #[test]
    fn sidebar_headers_count_entries() {
        let tree = SidebarTree {
            base: "/TIL/".into(),
            groups: vec![
                SidebarNode {
                    title: "Typescript".into(),
                    children: vec![leaf("symbol.md", "/TIL/symbol.html", Some("Symbol"))],
                },
                SidebarNode {
                    title: "Book".into(),
                    children: vec![
                        leaf("book1.md", "/TIL/book1.html", None),
                        leaf("book2.md", "/TIL/book2.html", None),
                    ],
                },
            ],
        };
        let lines = format_sidebar(&tree, &["Book".to_string()]);
        assert_eq!(lines[0], "Sidebar");
        assert_eq!(lines[1], "001 Typescript (1 entry)");
        assert!(lines.contains(&"002 Book (2 entries, listed from Book/)".to_string()));
    }

    #[test]
    fn site_output_for_fixtures() {
        let tmp = setup_fixtures();
        let site = load_site(tmp.path()).unwrap();
        let lines = format_site(&site);

        assert_eq!(lines[0], "Site");
        assert_eq!(lines[1], "    Today I Learned \u{2192} /TIL/");
        assert_eq!(lines[2], "    Study, summary and write down");
        assert!(lines.contains(&"    001 GitHub \u{2192} https://github.com/bomi94436".to_string()));
        assert!(lines.contains(&"    001 Book 1 \u{2192} /TIL/Book/010-book1.html".to_string()));
        assert!(lines.contains(&"    002 Book 2 \u{2192} /TIL/Book/020-book2.html".to_string()));
        assert_eq!(lines.last().unwrap(), "    README.md");
    }
}
