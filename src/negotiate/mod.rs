//! Content negotiation between Markdown and HTML page representations.
//!
//! Parses HTTP `Accept` headers into weighted media-type preferences and
//! decides whether a requester should receive the Markdown rendition of a
//! documentation page instead of the HTML one.
//!
//! Malformed input never fails: unparsable quality values fall back to
//! `1.0` and an empty header means "no stated preference", which resolves
//! to HTML.

use std::cmp::Ordering;

/// One parsed, weighted entry from an `Accept` header.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaTypePreference {
    /// Lowercased media type token, e.g. `text/markdown`, `text/*`, `*/*`.
    pub media_type: String,
    /// Quality value in `[0, 1]`; `1.0` when absent or unparsable.
    pub q: f32,
    /// Sort rank: `1` for `*/*`, `2` for `<category>/*`, `3` for a full type.
    pub specificity: u8,
}

/// Parse an `Accept` header into preferences sorted by specificity, then
/// quality, both descending. The sort is stable, so entries with equal keys
/// keep their original header order.
pub fn parse_accept_header(accept: &str) -> Vec<MediaTypePreference> {
    if accept.trim().is_empty() {
        return Vec::new();
    }

    let mut preferences: Vec<MediaTypePreference> = accept
        .split(',')
        .map(|segment| {
            let mut pieces = segment.trim().split(';');
            let media_type = pieces.next().unwrap_or("").trim().to_ascii_lowercase();

            let mut q = 1.0f32;
            for param in pieces {
                let mut key_value = param.trim().splitn(2, '=');
                let key = key_value.next().map(str::trim);
                if key == Some("q") {
                    if let Some(value) = key_value.next() {
                        q = value
                            .trim()
                            .parse::<f32>()
                            .ok()
                            .filter(|parsed| !parsed.is_nan())
                            .unwrap_or(1.0);
                    }
                }
            }

            let specificity = if media_type == "*/*" {
                1
            } else if media_type.ends_with("/*") {
                2
            } else {
                3
            };

            MediaTypePreference {
                media_type,
                q: q.clamp(0.0, 1.0),
                specificity,
            }
        })
        .collect();

    // Vec::sort_by is stable, which the walk in prefers_markdown relies on.
    preferences.sort_by(|a, b| {
        b.specificity
            .cmp(&a.specificity)
            .then(b.q.partial_cmp(&a.q).unwrap_or(Ordering::Equal))
    });
    preferences
}

/// Decide whether an `Accept` header prefers a Markdown response over HTML.
///
/// `text/markdown` and `text/plain` count toward Markdown; `text/html` and
/// `application/xhtml+xml` count toward HTML. Wildcards (`text/*`, `*/*`)
/// only fill in a category that no specific entry has resolved yet; thanks
/// to the specificity-first sort, specific entries always lock in before
/// wildcards regardless of their position in the header.
///
/// An explicit `q=0` on the most specific matching entry rejects that
/// category outright. Ties resolve to HTML.
pub fn prefers_markdown(accept: &str) -> bool {
    let mut markdown_q: Option<f32> = None;
    let mut html_q: Option<f32> = None;
    let mut markdown_rejected = false;
    let mut html_rejected = false;

    for preference in parse_accept_header(accept) {
        let q = preference.q;
        match preference.media_type.as_str() {
            "text/markdown" | "text/plain" => {
                if markdown_q.is_none() {
                    if q == 0.0 {
                        markdown_rejected = true;
                    } else {
                        markdown_q = Some(q);
                    }
                }
            }
            "text/html" | "application/xhtml+xml" => {
                if html_q.is_none() {
                    if q == 0.0 {
                        html_rejected = true;
                    } else {
                        html_q = Some(q);
                    }
                }
            }
            "text/*" | "*/*" => {
                if markdown_q.is_none() && !markdown_rejected {
                    if q == 0.0 {
                        markdown_rejected = true;
                    } else {
                        markdown_q = Some(q);
                    }
                }
                if html_q.is_none() && !html_rejected {
                    if q == 0.0 {
                        html_rejected = true;
                    } else {
                        html_q = Some(q);
                    }
                }
            }
            _ => {}
        }
    }

    if markdown_rejected {
        return false;
    }
    if html_rejected && markdown_q.is_some_and(|q| q > 0.0) {
        return true;
    }

    // Unset qualities count as zero; strict comparison so ties keep HTML.
    markdown_q.unwrap_or(0.0) > html_q.unwrap_or(0.0)
}
