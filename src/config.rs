//! Site configuration module.
//!
//! Holds the site identity (title, description, base path) and the navigation
//! model (header links and sidebar categories), and validates all of it
//! eagerly in [`SiteConfig::build`]. A [`SiteConfig`] that exists is valid:
//! fields are private and there is no way to mutate one after construction.
//!
//! ## Config File Location
//!
//! `config.toml` lives at the root of the docs directory, next to the notes:
//!
//! ```text
//! docs/
//! ├── config.toml              # Site config
//! ├── README.md                # Home page
//! ├── Typescript/
//! │   └── symbol.md
//! └── Book/
//!     ├── 010-book1.md
//!     └── 020-book2.md
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Today I Learned"          # Required, non-empty
//! description = "Study, summary and write down"
//! base = "/TIL/"                     # Must start and end with "/"
//!
//! [[nav]]
//! text = "GitHub"
//! link = "https://github.com/bomi94436"
//!
//! [[sidebar]]
//! title = "Typescript"
//! children = ["Typescript/symbol.md"]
//!
//! [[sidebar]]
//! title = "Book"                     # No children: listed from docs/Book/
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{ContentEntryRef, NavLink, SidebarGroup};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config file not found: {0}")]
    Missing(PathBuf),
    #[error("Site title must not be empty")]
    EmptyTitle,
    #[error("Base path {0:?} must start and end with '/'")]
    InvalidBasePath(String),
    #[error("Duplicate sidebar category {0:?}")]
    DuplicateCategory(String),
    #[error("Sidebar category {0:?} has no entries")]
    EmptyCategory(String),
    #[error("Sidebar category {category:?} lists {entry:?} more than once")]
    DuplicateEntry { category: String, entry: String },
    #[error("Sidebar category {category:?} has an invalid entry path {entry:?}")]
    InvalidEntryPath { category: String, entry: String },
}

/// Validated, immutable site configuration.
///
/// Construct with [`SiteConfig::build`] (or [`RawSiteConfig::build`] after
/// parsing `config.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    title: String,
    description: String,
    #[serde(rename = "base")]
    base_path: String,
    nav: Vec<NavLink>,
    sidebar: Vec<SidebarGroup>,
}

impl SiteConfig {
    /// Validate every input and assemble the configuration.
    ///
    /// Checks run in order: title, base path, then each group (duplicate
    /// title, empty, then its entries). The first violation is returned.
    pub fn build(
        title: impl Into<String>,
        description: impl Into<String>,
        base_path: impl Into<String>,
        nav: Vec<NavLink>,
        groups: Vec<SidebarGroup>,
    ) -> Result<Self, ConfigError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }
        let base_path = base_path.into();
        validate_base_path(&base_path)?;
        validate_groups(&groups)?;

        Ok(Self {
            title,
            description: description.into(),
            base_path,
            nav,
            sidebar: groups,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// URL prefix under which the whole site is served. Always `/`-delimited.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn nav(&self) -> &[NavLink] {
        &self.nav
    }

    pub fn sidebar(&self) -> &[SidebarGroup] {
        &self.sidebar
    }
}

fn validate_base_path(base_path: &str) -> Result<(), ConfigError> {
    if base_path.starts_with('/') && base_path.ends_with('/') {
        Ok(())
    } else {
        Err(ConfigError::InvalidBasePath(base_path.to_string()))
    }
}

fn validate_groups(groups: &[SidebarGroup]) -> Result<(), ConfigError> {
    let mut categories = HashSet::new();
    for group in groups {
        if !categories.insert(group.title.as_str()) {
            return Err(ConfigError::DuplicateCategory(group.title.clone()));
        }
        if group.children.is_empty() {
            return Err(ConfigError::EmptyCategory(group.title.clone()));
        }

        // "/symbol.md" and "symbol.md" name the same document
        let mut seen = HashSet::new();
        for entry in &group.children {
            if !entry.is_well_formed() {
                return Err(ConfigError::InvalidEntryPath {
                    category: group.title.clone(),
                    entry: entry.to_string(),
                });
            }
            if !seen.insert(entry.normalized()) {
                return Err(ConfigError::DuplicateEntry {
                    category: group.title.clone(),
                    entry: entry.to_string(),
                });
            }
        }
    }
    Ok(())
}

// =============================================================================
// config.toml parsing
// =============================================================================

/// `config.toml` as written, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSiteConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_base")]
    pub base: String,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub sidebar: Vec<RawSidebarGroup>,
}

/// A `[[sidebar]]` table. `children` may be omitted, in which case the
/// entries are listed from the category's directory by the site loader.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSidebarGroup {
    pub title: String,
    #[serde(default)]
    pub children: Option<Vec<ContentEntryRef>>,
}

fn default_base() -> String {
    "/".to_string()
}

impl RawSiteConfig {
    /// Validate as-is. Groups without `children` count as empty.
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        let groups = self
            .sidebar
            .into_iter()
            .map(|g| SidebarGroup {
                title: g.title,
                children: g.children.unwrap_or_default(),
            })
            .collect();
        SiteConfig::build(self.title, self.description, self.base, self.nav, groups)
    }
}

pub fn parse_raw_config(content: &str) -> Result<RawSiteConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read `config.toml` from the docs root.
pub fn load_raw_config(root: &Path) -> Result<RawSiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Err(ConfigError::Missing(config_path));
    }
    let content = fs::read_to_string(&config_path)?;
    parse_raw_config(&content)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# til-site configuration
# ======================
# Place this file at the root of the docs directory.
# Unknown keys will cause an error.

# Site name shown in the header. Required.
title = "Today I Learned"

# Free-text description used in page metadata.
description = "Study, summary and write down"

# URL prefix the site is served under. Must start and end with "/".
# Use "/" when serving from the domain root.
base = "/"

# ---------------------------------------------------------------------------
# Header links
# ---------------------------------------------------------------------------
# [[nav]]
# text = "GitHub"
# link = "https://github.com/your-name"

# ---------------------------------------------------------------------------
# Sidebar
# ---------------------------------------------------------------------------
# One [[sidebar]] table per category, in display order. Category titles
# must be unique.
#
# `children` lists the category's notes in display order, as paths relative
# to the docs directory. Omit it to list every *.md file in the directory
# named after the category (README.md first, then by NNN- prefix, then name).
#
# [[sidebar]]
# title = "Typescript"
# children = ["Typescript/symbol.md"]
#
# [[sidebar]]
# title = "Book"
"##
}
