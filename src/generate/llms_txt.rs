//! The `llms.txt` index document: an introductory summary of the site
//! with links to the aggregate documents and every per-page Markdown
//! file.

use crate::config::SiteConfig;
use crate::entries::{published_entries, DocEntry};

use super::{base_file_url, markdown_path};

pub fn generate_llms_txt(entries: &[DocEntry], config: &SiteConfig) -> String {
    let mut segments: Vec<String> = vec![format!("# {}", config.title())];

    if let Some(description) = config.description() {
        segments.push(format!("> {description}"));
    }
    if let Some(details) = config.details() {
        segments.push(details.to_string());
    }

    let llms_small_link = base_file_url(config, "llms-small.txt");
    let llms_full_link = base_file_url(config, "llms-full.txt");
    segments.push("## Documentation Sets".to_string());
    segments.push(
        [
            format!(
                "- [Abridged documentation]({llms_small_link}): a compact version of the documentation for {}, with non-essential content removed",
                config.title()
            ),
            format!(
                "- [Complete documentation]({llms_full_link}): the full documentation for {}",
                config.title()
            ),
        ]
        .join("\n"),
    );

    let mut docs = published_entries(entries, config);
    docs.sort_by(|a, b| a.id.cmp(&b.id));
    let pages: Vec<String> = docs
        .iter()
        .filter_map(|entry| {
            let slug = entry.markdown_slug();
            if slug.ends_with(".md") {
                log::warn!(
                    "Skipping per-page markdown for \"{}\" because its slug would conflict with .md output",
                    entry.id
                );
                return None;
            }
            let path = markdown_path(config, slug);
            let line = match entry.display_description() {
                Some(description) => {
                    format!("- [{}]({path}): {description}", entry.display_title())
                }
                None => format!("- [{}]({path})", entry.display_title()),
            };
            Some(line)
        })
        .collect();
    if !pages.is_empty() {
        segments.push("## Pages".to_string());
        segments.push(pages.join("\n"));
    }

    segments.push("## Notes".to_string());
    segments.push(
        "- The complete documentation includes all content from the official documentation\n- The content is automatically generated from the same source as the official documentation"
            .to_string(),
    );

    if !config.optional_links().is_empty() {
        segments.push("## Optional".to_string());
        segments.push(
            config
                .optional_links()
                .iter()
                .map(|link| match &link.description {
                    Some(description) => {
                        format!("- [{}]({}): {description}", link.label, link.url)
                    }
                    None => format!("- [{}]({})", link.label, link.url),
                })
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    segments.join("\n\n") + "\n"
}
