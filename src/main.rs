//! CLI: generate LLM-friendly Markdown outputs for a documentation site.
//!
//! Takes a site config, an entries manifest, and a directory of
//! pre-rendered HTML pages; writes `llms.txt`, `llms-full.txt`,
//! `llms-small.txt`, and one `.md` file per published page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use llmstxt::{
    generate_llms_txt, llms_full, llms_small, page_markdown, published_entries, DirRenderer,
    DocEntry, SiteConfig,
};

#[derive(Parser, Debug)]
#[command(name = "llmstxt", version, about = "Generate llms.txt Markdown outputs for a documentation site")]
struct Cli {
    /// Path to the site configuration JSON file
    #[arg(long, value_name = "FILE")]
    config: PathBuf,

    /// Directory containing pre-rendered HTML pages (one `<id>.html` per entry)
    #[arg(long, value_name = "DIR")]
    html_dir: PathBuf,

    /// Entries manifest (JSON array of entry metadata); defaults to
    /// `entries.json` inside the HTML directory
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Output directory for the generated files
    #[arg(long, value_name = "DIR")]
    out: PathBuf,
}

fn load_entries(path: &Path) -> Result<Vec<DocEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entries manifest {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid entries manifest {}", path.display()))
}

fn write_output(out_dir: &Path, relative: &str, content: &str) -> Result<()> {
    let path = out_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SiteConfig::from_json_file(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;
    let manifest = cli
        .manifest
        .unwrap_or_else(|| cli.html_dir.join("entries.json"));
    let entries = load_entries(&manifest)?;
    let renderer = DirRenderer::new(&cli.html_dir);

    write_output(&cli.out, "llms.txt", &generate_llms_txt(&entries, &config))?;
    write_output(&cli.out, "llms-full.txt", &llms_full(&entries, &config, &renderer))?;
    write_output(&cli.out, "llms-small.txt", &llms_small(&entries, &config, &renderer))?;

    for entry in published_entries(&entries, &config) {
        let slug = entry.markdown_slug();
        if slug.ends_with(".md") {
            log::warn!(
                "Skipping per-page markdown for \"{}\" because its slug would conflict with .md output",
                entry.id
            );
            continue;
        }
        match page_markdown(entry, &config, &renderer) {
            Ok(markdown) => write_output(&cli.out, &format!("{slug}.md"), &markdown)?,
            Err(e) => log::warn!("Skipping page \"{}\": {e}", entry.id),
        }
    }

    Ok(())
}
