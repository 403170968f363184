//! Shared navigation types.
//!
//! These are the values the configuration model hands to the rendering
//! collaborator, and they are serialized as-is into `site.json`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A top-level navigation link (header bar).
///
/// `link` is opaque: an absolute URL or a root-relative path. Nothing here
/// checks that it is reachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Path of one document in the docs tree, as written in the sidebar.
///
/// A leading `/` means "relative to the docs root" and is dropped by
/// [`ContentEntryRef::normalized`]. Accepted forms:
/// - `"symbol.md"` → exactly that file
/// - `"symbol"` → `symbol.md` or `symbol/README.md`
/// - `"Typescript/"` → `Typescript/README.md`
/// - `"/"` → the root `README.md`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentEntryRef(String);

impl ContentEntryRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path exactly as configured.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path relative to the docs root (no leading `/`).
    pub fn normalized(&self) -> &str {
        self.0.trim_start_matches('/')
    }

    /// True when the path is usable: non-empty and free of `..` segments.
    ///
    /// `"/"` alone is valid and names the root `README.md`.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty() && !self.normalized().split('/').any(|segment| segment == "..")
    }
}

impl fmt::Display for ContentEntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentEntryRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ContentEntryRef {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// A sidebar category and its documents, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub title: String,
    pub children: Vec<ContentEntryRef>,
}

impl SidebarGroup {
    pub fn new<I, P>(title: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ContentEntryRef>,
    {
        Self {
            title: title.into(),
            children: children.into_iter().map(Into::into).collect(),
        }
    }
}
