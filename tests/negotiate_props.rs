//! Property tests for Accept-header negotiation.

use llmstxt::prefers_markdown;
use proptest::prelude::*;

/// Media types that never count toward the Markdown category.
fn non_markdown_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("text/html".to_string()),
        Just("application/xhtml+xml".to_string()),
        Just("application/json".to_string()),
        Just("image/png".to_string()),
        Just("image/*".to_string()),
        Just("text/*".to_string()),
        Just("*/*".to_string()),
    ]
}

/// Fully specific types outside both categories entirely.
fn unrelated_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("application/json".to_string()),
        Just("application/octet-stream".to_string()),
        Just("image/png".to_string()),
        Just("audio/mpeg".to_string()),
    ]
}

fn segment(types: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    (types, proptest::option::of(0u8..=10u8)).prop_map(|(media_type, tenths)| match tenths {
        Some(tenths) => format!("{media_type};q={:.1}", f32::from(tenths) / 10.0),
        None => media_type,
    })
}

proptest! {
    /// An explicit `text/markdown;q=0` rejects Markdown no matter what
    /// other (non-Markdown-category) entries say or where it sits in the
    /// header.
    #[test]
    fn markdown_rejection_always_wins(
        others in prop::collection::vec(segment(non_markdown_type()), 0..5),
        position in 0usize..6,
    ) {
        let mut segments = others;
        let position = position.min(segments.len());
        segments.insert(position, "text/markdown;q=0".to_string());
        let header = segments.join(",");
        prop_assert!(!prefers_markdown(&header), "header: {header}");
    }

    /// Headers that never mention a Markdown-capable type (and carry no
    /// wildcards) resolve to HTML.
    #[test]
    fn unrelated_headers_default_to_html(
        segments in prop::collection::vec(segment(unrelated_type()), 1..6),
    ) {
        let header = segments.join(",");
        prop_assert!(!prefers_markdown(&header), "header: {header}");
    }

    /// Whitespace-only headers behave like empty headers.
    #[test]
    fn blank_headers_default_to_html(spaces in " {0,8}") {
        prop_assert!(!prefers_markdown(&spaces));
    }

    /// Negotiation never panics, whatever the header contains.
    #[test]
    fn negotiation_is_total(header in ".{0,200}") {
        let _ = prefers_markdown(&header);
    }

    /// A specific markdown grant beats any wildcard rejection, because
    /// specific entries sort first and lock in their category.
    #[test]
    fn specific_grant_beats_wildcard_rejection(
        wildcard in prop_oneof![Just("text/*;q=0"), Just("*/*;q=0")],
        markdown_first in any::<bool>(),
    ) {
        let header = if markdown_first {
            format!("text/markdown;q=0.8,{wildcard}")
        } else {
            format!("{wildcard},text/markdown;q=0.8")
        };
        prop_assert!(prefers_markdown(&header), "header: {header}");
    }
}

#[test]
fn documented_examples() {
    assert!(!prefers_markdown(""));
    assert!(prefers_markdown("text/markdown"));
    assert!(!prefers_markdown("text/html"));
    assert!(prefers_markdown("text/html;q=0.5,text/markdown;q=0.9"));
    assert!(!prefers_markdown("text/markdown;q=0.5,text/html;q=0.5"));
    assert!(!prefers_markdown("*/*"));
    assert!(prefers_markdown("text/markdown;q=0.1,text/html;q=0"));
    assert!(!prefers_markdown("application/json"));
}
