//! Request-path rewrite decision for Markdown content negotiation.
//!
//! Pure logic deciding whether an incoming request for an HTML page
//! should be served the page's generated `.md` sibling instead. The
//! routing layer applies the returned target path; everything here is
//! side-effect free.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::negotiate::prefers_markdown;
use crate::utils::{ensure_trailing_slash, has_file_extension};

static LLMS_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/llms(-\w+)?\.txt$").expect("LLMS_FILE_RE: hardcoded regex is valid")
});

/// Decide whether a request should be rewritten to a Markdown route.
///
/// Returns the rewrite target path when all of these hold: the path has
/// no file extension, is not one of the `llms*.txt` outputs, sits under
/// the configured base, resolves to a known Markdown route, and the
/// `Accept` header prefers Markdown. Returns `None` otherwise, meaning
/// the HTML response should be served as-is.
pub fn markdown_rewrite_target(
    pathname: &str,
    accept: &str,
    routes: &HashSet<String>,
    base: &str,
) -> Option<String> {
    if has_file_extension(pathname) {
        return None;
    }
    if LLMS_FILE_RE.is_match(pathname) {
        return None;
    }

    let base_path = ensure_trailing_slash(base);
    let base_prefix = base_path.trim_end_matches('/');
    if !pathname.starts_with(base_prefix) {
        return None;
    }

    let mut slug = pathname;
    if base_path != "/" {
        slug = &pathname[base_prefix.len()..];
    }
    let slug = slug.trim_start_matches('/').trim_end_matches('/');
    let slug = if slug.is_empty() { "index" } else { slug };

    if !routes.contains(slug) {
        return None;
    }
    if !prefers_markdown(accept) {
        return None;
    }

    Some(if slug == "index" {
        format!("{base_prefix}/index.md")
    } else {
        format!("{base_prefix}/{slug}.md")
    })
}
