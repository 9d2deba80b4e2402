//! Aggregate documents: `llms-full.txt` and `llms-small.txt`.

use rayon::prelude::*;

use crate::config::{MinifyPolicy, SiteConfig};
use crate::entries::{default_locale_entries, sort_entries, DocEntry};
use crate::render::Renderer;
use crate::simplify::simplify;

use super::entry_document;

/// One plaintext Markdown document over the full site content.
pub fn llms_full<R: Renderer>(entries: &[DocEntry], config: &SiteConfig, renderer: &R) -> String {
    aggregate(entries, config, renderer, None)
}

/// The abridged aggregate: excluded entries dropped, minification policy
/// applied to every page.
pub fn llms_small<R: Renderer>(entries: &[DocEntry], config: &SiteConfig, renderer: &R) -> String {
    aggregate(entries, config, renderer, Some(config.minify()))
}

fn aggregate<R: Renderer>(
    entries: &[DocEntry],
    config: &SiteConfig,
    renderer: &R,
    policy: Option<&MinifyPolicy>,
) -> String {
    let mut docs = default_locale_entries(entries, config.default_lang());
    if policy.is_some() {
        docs.retain(|entry| !config.is_excluded(&entry.id));
    }
    sort_entries(&mut docs);

    // Conversions are independent: each owns its tree, the policy is
    // read-only. Failed entries are skipped, the batch continues.
    let segments: Vec<String> = docs
        .par_iter()
        .filter_map(|entry| match convert(entry, renderer, policy) {
            Ok(segment) => Some(segment),
            Err(e) => {
                log::warn!("Skipping \"{}\" in aggregate output: {e}", entry.id);
                None
            }
        })
        .collect();

    let label = if policy.is_some() { "abridged" } else { "full" };
    let preamble = format!(
        "<SYSTEM>This is the {label} developer documentation for {}</SYSTEM>",
        config.title()
    );

    let mut document = preamble;
    document.push_str("\n\n");
    document.push_str(&segments.join("\n\n"));
    document
}

fn convert<R: Renderer>(
    entry: &DocEntry,
    renderer: &R,
    policy: Option<&MinifyPolicy>,
) -> crate::error::GenerateResult<String> {
    let html = renderer.render(entry)?;
    let markdown = simplify(&html, policy)?;
    Ok(entry_document(entry, &markdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateResult;

    struct MapRenderer(Vec<(&'static str, &'static str)>);

    impl Renderer for MapRenderer {
        fn render(&self, entry: &DocEntry) -> GenerateResult<String> {
            self.0
                .iter()
                .find(|(id, _)| *id == entry.id)
                .map(|(_, html)| (*html).to_string())
                .ok_or_else(|| crate::error::GenerateError::MissingEntry(entry.id.clone()))
        }
    }

    fn entry(id: &str, title: &str) -> DocEntry {
        DocEntry {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            hero_title: None,
            hero_tagline: None,
            draft: false,
            lang: None,
        }
    }

    fn config() -> SiteConfig {
        SiteConfig::builder()
            .title("Example Docs")
            .site_url("https://example.com")
            .exclude(vec!["internal/*".to_string()])
            .build()
            .unwrap()
    }

    #[test]
    fn full_document_has_preamble_and_ordered_entries() {
        let entries = vec![
            entry("guides/install", "Install"),
            entry("index", "Welcome"),
        ];
        let renderer = MapRenderer(vec![
            ("guides/install", "<p>install body</p>"),
            ("index", "<p>welcome body</p>"),
        ]);
        let output = llms_full(&entries, &config(), &renderer);

        assert!(output
            .starts_with("<SYSTEM>This is the full developer documentation for Example Docs</SYSTEM>"));
        let welcome = output.find("# Welcome").unwrap();
        let install = output.find("# Install").unwrap();
        assert!(welcome < install, "index entry must come first");
        assert!(output.contains("install body"));
    }

    #[test]
    fn abridged_document_applies_exclusions_and_policy() {
        let entries = vec![
            entry("guide", "Guide"),
            entry("internal/notes", "Notes"),
        ];
        let renderer = MapRenderer(vec![
            ("guide", "<p>public</p><details><p>secret</p></details>"),
            ("internal/notes", "<p>internal only</p>"),
        ]);
        let output = llms_small(&entries, &config(), &renderer);

        assert!(output.contains("abridged developer documentation"));
        assert!(output.contains("public"));
        assert!(!output.contains("internal only"), "excluded entry leaked");
        assert!(!output.contains("secret"), "details content leaked");
    }

    #[test]
    fn excluded_entries_stay_in_the_full_document() {
        let entries = vec![entry("internal/notes", "Notes")];
        let renderer = MapRenderer(vec![("internal/notes", "<p>internal only</p>")]);
        let output = llms_full(&entries, &config(), &renderer);
        assert!(output.contains("internal only"));
    }

    #[test]
    fn failed_entries_are_skipped_not_fatal() {
        let entries = vec![entry("present", "Present"), entry("broken", "Broken")];
        let renderer = MapRenderer(vec![("present", "<p>still here</p>")]);
        let output = llms_full(&entries, &config(), &renderer);
        assert!(output.contains("still here"));
        assert!(!output.contains("# Broken"));
    }
}
