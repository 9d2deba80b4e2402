//! Documentation entry model and content-store queries.
//!
//! Entries arrive from the content store with their frontmatter metadata;
//! this module owns the locale/draft/exclusion filtering and the ordering
//! rules shared by every generated document.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

/// One documentation entry with the metadata the generators need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocEntry {
    /// Identifier/slug of the entry, e.g. `guides/install`.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Hero heading override, preferred over `title` when present.
    #[serde(default)]
    pub hero_title: Option<String>,
    /// Hero tagline override, preferred over `description` when present.
    #[serde(default)]
    pub hero_tagline: Option<String>,
    #[serde(default)]
    pub draft: bool,
    /// Locale of the entry; `None` means the site default.
    #[serde(default)]
    pub lang: Option<String>,
}

impl DocEntry {
    /// Heading text: the hero title when set, the page title otherwise.
    pub fn display_title(&self) -> &str {
        match self.hero_title.as_deref() {
            Some(hero) if !hero.is_empty() => hero,
            _ => &self.title,
        }
    }

    /// Blockquote text: hero tagline, then description, then nothing.
    pub fn display_description(&self) -> Option<&str> {
        self.hero_tagline
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.description.as_deref().filter(|d| !d.is_empty()))
    }

    pub fn is_default_locale(&self, default_lang: &str) -> bool {
        self.lang.as_deref().is_none_or(|lang| lang == default_lang)
    }

    /// Slug of the entry's generated Markdown file (without `.md`).
    pub fn markdown_slug(&self) -> &str {
        &self.id
    }
}

/// Entries in the site's default locale, in stable input order.
///
/// Drafts are kept: the aggregate documents mirror the rendered site,
/// which includes drafts during preview builds.
pub fn default_locale_entries<'a>(
    entries: &'a [DocEntry],
    default_lang: &str,
) -> Vec<&'a DocEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_default_locale(default_lang))
        .collect()
}

/// Entries that get their own published Markdown page: default locale,
/// not draft, not excluded by the configured globs.
pub fn published_entries<'a>(
    entries: &'a [DocEntry],
    config: &SiteConfig,
) -> Vec<&'a DocEntry> {
    entries
        .iter()
        .filter(|entry| entry.is_default_locale(config.default_lang()))
        .filter(|entry| !entry.draft)
        .filter(|entry| !config.is_excluded(&entry.id))
        .collect()
}

/// Sort entries for aggregate output: the `index` entry first, the rest
/// ascending by id.
pub fn sort_entries(entries: &mut [&DocEntry]) {
    entries.sort_by(|a, b| {
        let a_is_index = a.id == "index";
        let b_is_index = b.id == "index";
        match (a_is_index, b_is_index) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.id.cmp(&b.id),
        }
    });
}

/// Find one entry by its slug.
pub fn resolve_entry<'a>(entries: &'a [DocEntry], slug: &str) -> Option<&'a DocEntry> {
    entries.iter().find(|entry| entry.id == slug)
}

/// The set of slugs that have a per-page Markdown route.
///
/// An entry whose slug already ends in `.md` would collide with the
/// generated output path; it is skipped with a warning.
pub fn markdown_routes(entries: &[&DocEntry]) -> HashSet<String> {
    let mut routes = HashSet::new();
    for entry in entries {
        let slug = entry.markdown_slug();
        if slug.ends_with(".md") {
            log::warn!(
                "Skipping per-page markdown for \"{}\" because its slug would conflict with .md output",
                entry.id
            );
            continue;
        }
        routes.insert(slug.to_string());
    }
    routes
}
