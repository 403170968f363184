//! Loading a docs directory into a validated site.
//!
//! ```text
//! config.toml ──parse──▶ RawSiteConfig
//!                            │ fill groups without `children` (discover_entries)
//!                            ▼
//!                 SiteConfig::build ──▶ ContentTree::check
//!                                             │ to_navigation_tree
//!                                             │ ContentTree::annotate
//!                                             ▼
//!                                          Manifest ──▶ site.json
//! ```
//!
//! Every step fails hard: a site with a bad config or a dangling sidebar
//! entry is never partially built.

use crate::config::{self, SiteConfig};
use crate::content::{self, ContentTree};
use crate::navigation::{self, SidebarTree};
use crate::types::SidebarGroup;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MANIFEST_FILE: &str = "site.json";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
}

/// What the site generator consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub config: SiteConfig,
    pub sidebar: SidebarTree,
}

/// A loaded docs directory.
#[derive(Debug)]
pub struct Site {
    pub manifest: Manifest,
    pub content: ContentTree,
    /// Categories whose entries were listed from their directory.
    pub discovered: Vec<String>,
}

impl Site {
    /// Documents no sidebar entry points at, ordered by path.
    pub fn unlisted(&self) -> Vec<&str> {
        let listed: HashSet<String> = self
            .manifest
            .config
            .sidebar()
            .iter()
            .flat_map(|g| g.children.iter().map(move |e| (g, e)))
            .filter_map(|(g, e)| self.content.resolve(&g.title, e).ok())
            .map(|d| d.path.clone())
            .collect();
        self.content
            .documents()
            .map(|d| d.path.as_str())
            .filter(|p| !listed.contains(*p))
            .collect()
    }
}

pub fn load_site(root: &Path) -> Result<Site, SiteError> {
    let raw = config::load_raw_config(root)?;

    let mut discovered = Vec::new();
    let mut groups = Vec::with_capacity(raw.sidebar.len());
    for group in raw.sidebar {
        let children = match group.children {
            Some(children) => children,
            None => {
                discovered.push(group.title.clone());
                content::discover_entries(root, &group.title)?
            }
        };
        groups.push(SidebarGroup {
            title: group.title,
            children,
        });
    }

    let config = SiteConfig::build(raw.title, raw.description, raw.base, raw.nav, groups)?;
    let content = ContentTree::scan(root)?;
    content.check(&config)?;
    let sidebar = content.annotate(&navigation::to_navigation_tree(&config))?;

    Ok(Site {
        manifest: Manifest { config, sidebar },
        content,
        discovered,
    })
}

/// Write `site.json` into `output_dir`, creating it if needed.
pub fn write_manifest(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf, SiteError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json)?;
    Ok(path)
}
