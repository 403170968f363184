//! # til-site
//!
//! The navigation model of a "Today I Learned" documentation site: site
//! identity, header links, and a sidebar of categories whose entries point at
//! markdown notes. Rendering is left to a static site generator; this crate
//! validates the configuration and hands that generator a sidebar tree it can
//! draw without further checks.
//!
//! # Pipeline
//!
//! ```text
//! docs/config.toml ─▶ SiteConfig::build ─▶ to_navigation_tree ─▶ site.json
//!        docs/**/*.md ─▶ ContentTree ────────────┘ (resolve + titles)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `SiteConfig`, its eager validation, and `config.toml` parsing |
//! | [`types`] | `NavLink`, `SidebarGroup`, `ContentEntryRef` |
//! | [`navigation`] | `SidebarTree` and route derivation under the base path |
//! | [`content`] | Docs directory scan, entry resolution, titles, category listing |
//! | [`naming`] | `NNN-name` note filename convention and listing order |
//! | [`site`] | Loads a docs directory end to end and writes the manifest |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Validated On Construction
//!
//! [`config::SiteConfig`] has private fields and a single constructor,
//! [`config::SiteConfig::build`], that checks every invariant up front: a
//! non-empty title, a `/`-delimited base path, unique category titles,
//! non-empty categories, and no repeated entries within a category. Holding
//! a `SiteConfig` means holding a valid one, so nothing downstream re-checks.
//!
//! ## Order Is Data
//!
//! Sidebar order is whatever the config says. [`navigation::to_navigation_tree`]
//! never sorts. Only categories that omit `children` get an order computed
//! for them, from the `NNN-` prefixes of their files.
//!
//! ## Free-Form Categories
//!
//! Category titles are strings, not an enum. A notes site grows categories
//! as its author learns new subjects; the only rule is that titles are unique.
//!
//! ## Dangling Entries Are Errors
//!
//! An entry that names no document, or names two (`symbol.md` next to
//! `symbol/README.md`), fails the load with the category and entry in the
//! message. A site generator would otherwise emit a dead sidebar link.

pub mod config;
pub mod content;
pub mod naming;
pub mod navigation;
pub mod output;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
