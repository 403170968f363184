//! The docs directory as a set of markdown documents.
//!
//! The site generator owns rendering, but a sidebar entry that points at
//! nothing (or at two things) is a configuration error, and it is cheaper to
//! report it here with the category and entry named than to let the
//! generator produce a dead link.
//!
//! ## Resolution
//!
//! | Entry              | Candidates                                  |
//! |--------------------|---------------------------------------------|
//! | `symbol.md`        | `symbol.md`                                 |
//! | `symbol`           | `symbol.md`, `symbol/README.md`, `symbol/index.md` |
//! | `Typescript/`, `/` | `<dir>/README.md`, `<dir>/index.md`         |
//!
//! Exactly one candidate must exist.
//!
//! ## Titles
//!
//! A document's title is the `title:` key of its front matter if present,
//! else its first level-1 heading.
//!
//! ## Category Listing
//!
//! A `[[sidebar]]` table without `children` is filled by
//! [`discover_entries`]: every `*.md` directly inside the directory named
//! after the category, ordered by [`crate::naming::compare_note_files`].

use crate::config::SiteConfig;
use crate::naming::compare_note_files;
use crate::navigation::SidebarTree;
use crate::types::ContentEntryRef;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Sidebar category {category:?}: entry {entry:?} does not match any document")]
    BrokenEntry { category: String, entry: String },
    #[error("Sidebar category {category:?}: entry {entry:?} matches several documents: {}", .candidates.join(", "))]
    AmbiguousEntry {
        category: String,
        entry: String,
        candidates: Vec<String>,
    },
}

/// One markdown file, addressed by its `/`-separated path under the root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug)]
pub struct ContentTree {
    documents: BTreeMap<String, Document>,
}

impl ContentTree {
    /// Walk `root` and index every markdown document.
    ///
    /// Hidden entries (`.vuepress`, `.git`, ...) and `node_modules` are skipped.
    pub fn scan(root: &Path) -> Result<Self, ContentError> {
        let mut documents = BTreeMap::new();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped(e.file_name()));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };
            let path = slash_path(rel);
            let content = fs::read_to_string(entry.path())?;
            documents.insert(
                path.clone(),
                Document {
                    path,
                    title: extract_title(&content),
                },
            );
        }

        Ok(Self { documents })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All documents, ordered by path.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    pub fn get(&self, path: &str) -> Option<&Document> {
        self.documents.get(path)
    }

    /// Documents matching `entry`, in candidate order.
    pub fn matches(&self, entry: &ContentEntryRef) -> Vec<&Document> {
        candidates(entry)
            .iter()
            .filter_map(|c| self.documents.get(c))
            .collect()
    }

    /// The single document `entry` names; `category` is error context.
    pub fn resolve(
        &self,
        category: &str,
        entry: &ContentEntryRef,
    ) -> Result<&Document, ContentError> {
        let mut found = self.matches(entry);
        match found.len() {
            1 => Ok(found.remove(0)),
            0 => Err(ContentError::BrokenEntry {
                category: category.to_string(),
                entry: entry.to_string(),
            }),
            _ => Err(ContentError::AmbiguousEntry {
                category: category.to_string(),
                entry: entry.to_string(),
                candidates: found.into_iter().map(|d| d.path.clone()).collect(),
            }),
        }
    }

    /// Resolve every sidebar entry, failing on the first one that doesn't.
    pub fn check(&self, config: &SiteConfig) -> Result<(), ContentError> {
        for group in config.sidebar() {
            for entry in &group.children {
                self.resolve(&group.title, entry)?;
            }
        }
        Ok(())
    }

    /// Copy of `tree` with each leaf's document title filled in.
    pub fn annotate(&self, tree: &SidebarTree) -> Result<SidebarTree, ContentError> {
        let mut annotated = tree.clone();
        for group in &mut annotated.groups {
            for leaf in &mut group.children {
                let entry = ContentEntryRef::new(leaf.path.as_str());
                leaf.title = self.resolve(&group.title, &entry)?.title.clone();
            }
        }
        Ok(annotated)
    }
}

/// Candidate document paths for an entry, most specific first.
pub fn candidates(entry: &ContentEntryRef) -> Vec<String> {
    let path = entry.normalized();
    if path.is_empty() || path.ends_with('/') {
        return vec![format!("{path}README.md"), format!("{path}index.md")];
    }
    if path.ends_with(".md") {
        return vec![path.to_string()];
    }
    vec![
        format!("{path}.md"),
        format!("{path}/README.md"),
        format!("{path}/index.md"),
    ]
}

/// List the notes of `category` from `root/<category>/`.
///
/// Only direct children are listed. A missing directory, or a category title
/// that is not a plain directory name, yields no entries.
pub fn discover_entries(root: &Path, category: &str) -> Result<Vec<ContentEntryRef>, ContentError> {
    if category.is_empty()
        || category == "."
        || category == ".."
        || category.contains(['/', '\\'])
    {
        return Ok(Vec::new());
    }
    let dir = root.join(category);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file()
            && is_markdown(entry.path())
            && !is_skipped(entry.file_name())
        {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    files.sort_by(|a, b| compare_note_files(a, b));

    Ok(files
        .into_iter()
        .map(|f| ContentEntryRef::new(format!("{category}/{f}")))
        .collect())
}

/// Front matter fields read from a document's YAML metadata block.
#[derive(Deserialize)]
struct FrontMatter {
    title: Option<String>,
}

/// Title from front matter `title:`, else the first `# heading`.
///
/// Front matter that is not valid YAML is ignored, as if absent.
pub fn extract_title(markdown: &str) -> Option<String> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);

    let mut in_metadata = false;
    let mut metadata = String::new();
    let mut in_h1 = false;
    let mut heading = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::MetadataBlock(_)) => in_metadata = true,
            Event::End(TagEnd::MetadataBlock(_)) => {
                in_metadata = false;
                if let Some(title) = front_matter_title(&metadata) {
                    return Some(title);
                }
            }
            Event::Text(text) if in_metadata => metadata.push_str(&text),
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = heading.trim();
                if !title.is_empty() {
                    return Some(title.to_string());
                }
                in_h1 = false;
                heading.clear();
            }
            Event::Text(text) | Event::Code(text) if in_h1 => heading.push_str(&text),
            _ => {}
        }
    }
    None
}

fn front_matter_title(block: &str) -> Option<String> {
    let block = block.trim();
    if block.is_empty() {
        return None;
    }
    let front_matter: FrontMatter = serde_yaml::from_str(block).ok()?;
    let title = front_matter.title?;
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn is_skipped(name: &OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name == "node_modules"
}

/// Only a lowercase `.md` extension counts, matching [`candidates`] and
/// [`crate::navigation::route`].
fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "md")
}

fn slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
