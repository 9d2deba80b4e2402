//! HTML-to-Markdown simplification pipeline.
//!
//! Turns one rendered HTML fragment into a simplified, optionally
//! minified Markdown document. Stages run strictly in order on a tree
//! owned by the single invocation:
//!
//! 1. String-level expressive-code normalization (pre-parse)
//! 2. Parse into a document tree
//! 3. Removal filter (only with a minification policy)
//! 4. Code-block language annotation
//! 5. Tab-component flattening
//! 6. Markdown serialization + line normalization
//! 7. Whitespace collapse (only with a policy that asks for it)
//!
//! With no policy the pipeline still runs the structural passes (3-6)
//! and produces the full representation; a policy produces the abridged
//! one. Conversion is deterministic, so failures are surfaced to the
//! caller without retries.

pub mod code_language;
pub mod expressive_code;
pub mod normalize;
pub mod remove;
pub mod serializer;
pub mod tabs;
pub mod whitespace;

use kuchiki::traits::TendrilSink;

use crate::config::MinifyPolicy;
use crate::error::{GenerateError, GenerateResult};

/// Simplify one rendered HTML fragment into Markdown.
pub fn simplify(html: &str, policy: Option<&MinifyPolicy>) -> GenerateResult<String> {
    let prepared = expressive_code::restructure_code_lines(html);

    let document = kuchiki::parse_html().one(prepared);

    if let Some(policy) = policy {
        remove::strip_minified_elements(&document, policy)?;
    }

    code_language::annotate_code_languages(&document);
    tabs::flatten_tab_containers(&document);

    let mut tree_html = Vec::new();
    document
        .serialize(&mut tree_html)
        .map_err(|e| GenerateError::Parse(e.to_string()))?;
    let tree_html = String::from_utf8(tree_html)
        .map_err(|e| GenerateError::Parse(e.to_string()))?;
    let tree_html = expressive_code::restore_code_newlines(&tree_html);

    let markdown = serializer::to_markdown(&tree_html)?;
    let markdown = normalize::normalize_markdown(markdown.trim());

    Ok(match policy {
        Some(policy) if policy.whitespace => whitespace::collapse_whitespace(&markdown),
        _ => markdown,
    })
}
