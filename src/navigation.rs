//! Renderer-facing sidebar tree.
//!
//! [`to_navigation_tree`] is a pure mapping from a validated [`SiteConfig`]
//! to the group → entries structure the site generator draws. Order is taken
//! verbatim from the config; nothing is sorted or deduplicated here because
//! [`SiteConfig::build`] already rejected duplicates.
//!
//! Each leaf also carries its route under the base path:
//!
//! ```text
//! base "/TIL/"
//! symbol.md               → /TIL/symbol.html
//! Typescript/symbol       → /TIL/Typescript/symbol.html
//! Typescript/README.md    → /TIL/Typescript/
//! /                       → /TIL/
//! ```

use crate::config::SiteConfig;
use crate::naming::is_index_file;
use crate::types::ContentEntryRef;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarTree {
    pub base: String,
    pub groups: Vec<SidebarNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarNode {
    pub title: String,
    pub children: Vec<SidebarLeaf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLeaf {
    /// Entry path as configured.
    pub path: String,
    /// URL path under the base path.
    pub route: String,
    /// First heading of the document, once resolved against the content tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

pub fn to_navigation_tree(config: &SiteConfig) -> SidebarTree {
    let base = config.base_path();
    SidebarTree {
        base: base.to_string(),
        groups: config
            .sidebar()
            .iter()
            .map(|group| SidebarNode {
                title: group.title.clone(),
                children: group
                    .children
                    .iter()
                    .map(|entry| SidebarLeaf {
                        path: entry.as_str().to_string(),
                        route: route(base, entry),
                        title: None,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// URL path an entry is served at, under `base` (which ends with `/`).
pub fn route(base: &str, entry: &ContentEntryRef) -> String {
    let path = entry.normalized();
    let path = path.strip_suffix(".md").unwrap_or(path);

    if path.is_empty() || path.ends_with('/') {
        return format!("{base}{path}");
    }
    let (dir, last) = match path.rsplit_once('/') {
        Some((dir, last)) => (Some(dir), last),
        None => (None, path),
    };
    if is_index_file(last) {
        return match dir {
            Some(dir) => format!("{base}{dir}/"),
            None => base.to_string(),
        };
    }
    format!("{base}{path}.html")
}
