//! Assembly of the generated Markdown documents.
//!
//! Three outputs share the entry model and the Simplifier:
//!
//! - `llms.txt`: an introductory index with links to everything else
//! - `llms-full.txt` / `llms-small.txt`: one aggregate document over all
//!   pages, in full and abridged form
//! - per-page `.md` files with frontmatter
//!
//! Per-entry conversion failures are logged and skipped; they never abort
//! the rest of a batch.

pub mod full;
pub mod llms_txt;
pub mod page;

pub use full::{llms_full, llms_small};
pub use llms_txt::generate_llms_txt;
pub use page::{generate_page_markdown, page_markdown};

use crate::config::{SiteConfig, TrailingSlash};
use crate::entries::DocEntry;
use crate::utils::{ensure_trailing_slash, strip_trailing_slash};

/// Heading + optional blockquote + body, joined with blank lines.
pub(crate) fn entry_document(entry: &DocEntry, body: &str) -> String {
    let mut segments = vec![format!("# {}", entry.display_title())];
    if let Some(description) = entry.display_description() {
        segments.push(format!("> {description}"));
    }
    segments.push(body.to_string());
    segments.join("\n\n")
}

/// Site-relative path of an entry's generated Markdown file.
pub(crate) fn markdown_path(config: &SiteConfig, slug: &str) -> String {
    format!("{}{slug}.md", ensure_trailing_slash(config.base()))
}

/// Absolute URL of the entry's HTML page, honoring base path and
/// trailing-slash mode.
pub(crate) fn page_url(config: &SiteConfig, slug: &str) -> String {
    let base_path = strip_trailing_slash(config.base());
    let base_path = if base_path == "/" { "" } else { base_path };

    let mut path = if slug == "index" {
        if base_path.is_empty() {
            "/".to_string()
        } else {
            base_path.to_string()
        }
    } else {
        format!("{base_path}/{slug}")
    };
    if !path.starts_with('/') {
        path = format!("/{path}");
    }

    let path = match config.trailing_slash() {
        TrailingSlash::Always => ensure_trailing_slash(&path),
        TrailingSlash::Never => strip_trailing_slash(&path).to_string(),
        TrailingSlash::Ignore => path,
    };

    match url::Url::parse(config.site_url()).and_then(|site| site.join(&path)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            // The site URL was validated at config time; a join can still
            // fail on exotic slugs, in which case the relative path is
            // better than nothing.
            log::warn!("Failed to resolve page URL for '{slug}': {e}");
            path
        }
    }
}

/// Absolute URL of a sibling file next to the site base, e.g.
/// `llms-full.txt`.
pub(crate) fn base_file_url(config: &SiteConfig, file_name: &str) -> String {
    let base = ensure_trailing_slash(config.base());
    match url::Url::parse(config.site_url())
        .and_then(|site| site.join(&base))
        .and_then(|dir| dir.join(file_name))
    {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::warn!("Failed to resolve link for '{file_name}': {e}");
            format!("{base}{file_name}")
        }
    }
}
