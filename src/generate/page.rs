//! Per-page Markdown generation with frontmatter.

use crate::config::SiteConfig;
use crate::entries::{published_entries, DocEntry};
use crate::error::GenerateResult;
use crate::render::Renderer;
use crate::simplify::simplify;

use super::page_url;

/// Frontmatter block with JSON-quoted values; empty values are omitted.
fn serialize_frontmatter(fields: &[(&str, &str)]) -> String {
    let mut lines = vec!["---".to_string()];
    for (key, value) in fields {
        if !value.is_empty() {
            let quoted = serde_json::Value::String((*value).to_string());
            lines.push(format!("{key}: {quoted}"));
        }
    }
    lines.push("---".to_string());
    lines.join("\n")
}

/// The standalone Markdown document for one entry: frontmatter, blank
/// line, full (non-minified) body, trailing newline.
pub fn page_markdown<R: Renderer>(
    entry: &DocEntry,
    config: &SiteConfig,
    renderer: &R,
) -> GenerateResult<String> {
    let url = page_url(config, entry.markdown_slug());
    let frontmatter = serialize_frontmatter(&[
        ("title", entry.display_title()),
        ("description", entry.display_description().unwrap_or("")),
        ("url", &url),
    ]);

    let html = renderer.render(entry)?;
    let markdown = simplify(&html, None)?;

    Ok(format!("{frontmatter}\n\n{markdown}\n"))
}

/// Generate the Markdown page for one slug, or `None` when the slug is
/// unknown, excluded, a draft, or outside the default locale.
pub fn generate_page_markdown<R: Renderer>(
    entries: &[DocEntry],
    config: &SiteConfig,
    renderer: &R,
    slug: &str,
) -> GenerateResult<Option<String>> {
    let Some(entry) = published_entries(entries, config)
        .into_iter()
        .find(|entry| entry.id == slug)
    else {
        return Ok(None);
    };
    page_markdown(entry, config, renderer).map(Some)
}
