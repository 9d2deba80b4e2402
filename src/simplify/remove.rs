//! Removal filter for the abridged representation.
//!
//! Deletes subtrees the minification policy marks as non-essential:
//! `<details>` elements, matches of user-configured structural selectors,
//! and aside components whose variant flag is enabled. Runs before every
//! other pass, so deleted nodes are invisible to the rest of the
//! pipeline.

use kuchiki::NodeRef;

use crate::config::MinifyPolicy;
use crate::error::{GenerateError, GenerateResult};

/// Class marking an aside component; the variant rides on a
/// `starlight-aside--{note|tip|caution|danger}` companion class.
const ASIDE_SELECTOR: &str = ".starlight-aside";

pub fn strip_minified_elements(document: &NodeRef, policy: &MinifyPolicy) -> GenerateResult<()> {
    if policy.details {
        let matches = collect_matches(document, "details")
            .expect("hardcoded details selector is valid");
        for node_ref in matches {
            node_ref.as_node().detach();
        }
    }

    for selector in &policy.custom_selectors {
        let matches = collect_matches(document, selector).map_err(|()| {
            GenerateError::Config(format!("Invalid custom selector '{selector}'"))
        })?;
        for node_ref in matches {
            node_ref.as_node().detach();
        }
    }

    strip_asides(document, policy);
    Ok(())
}

/// Collect selector matches up front; detaching during iteration would
/// invalidate the live iterator.
fn collect_matches(
    document: &NodeRef,
    selector: &str,
) -> Result<Vec<kuchiki::NodeDataRef<kuchiki::ElementData>>, ()> {
    Ok(document.select(selector)?.collect())
}

fn strip_asides(document: &NodeRef, policy: &MinifyPolicy) {
    let matches = collect_matches(document, ASIDE_SELECTOR)
        .expect("hardcoded aside selector is valid");
    for node_ref in matches {
        let remove = {
            let attributes = node_ref.attributes.borrow();
            attributes
                .get("class")
                .is_some_and(|classes| variant_flag_enabled(policy, classes))
        };
        if remove {
            node_ref.as_node().detach();
        }
    }
}

fn variant_flag_enabled(policy: &MinifyPolicy, classes: &str) -> bool {
    classes
        .split_whitespace()
        .any(|class| match class.strip_prefix("starlight-aside--") {
            Some("note") => policy.note,
            Some("tip") => policy.tip,
            Some("caution") => policy.caution,
            Some("danger") => policy.danger,
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink;

    fn parse(html: &str) -> NodeRef {
        kuchiki::parse_html().one(html)
    }

    fn remaining_text(document: &NodeRef) -> String {
        document.text_contents()
    }

    #[test]
    fn details_subtrees_are_removed() {
        let document = parse("<p>keep</p><details><summary>s</summary><p>drop</p></details>");
        strip_minified_elements(&document, &MinifyPolicy::default()).unwrap();
        let text = remaining_text(&document);
        assert!(text.contains("keep"));
        assert!(!text.contains("drop"));
        assert!(document.select("details").unwrap().next().is_none());
    }

    #[test]
    fn details_kept_when_flag_disabled() {
        let policy = MinifyPolicy {
            details: false,
            ..MinifyPolicy::default()
        };
        let document = parse("<details><p>kept</p></details>");
        strip_minified_elements(&document, &policy).unwrap();
        assert!(remaining_text(&document).contains("kept"));
    }

    #[test]
    fn aside_variants_follow_their_flags() {
        let html = concat!(
            r#"<aside class="starlight-aside starlight-aside--note">n</aside>"#,
            r#"<aside class="starlight-aside starlight-aside--tip">t</aside>"#,
            r#"<aside class="starlight-aside starlight-aside--caution">c</aside>"#,
            r#"<aside class="starlight-aside starlight-aside--danger">d</aside>"#,
        );
        let document = parse(html);
        strip_minified_elements(&document, &MinifyPolicy::default()).unwrap();
        let text = remaining_text(&document);
        // Defaults remove note and tip but keep caution and danger.
        assert!(!text.contains('n'));
        assert!(!text.contains('t'));
        assert!(text.contains('c'));
        assert!(text.contains('d'));
    }

    #[test]
    fn unmarked_aside_is_untouched() {
        let document = parse(r#"<aside class="starlight-aside">plain</aside>"#);
        strip_minified_elements(&document, &MinifyPolicy::default()).unwrap();
        assert!(remaining_text(&document).contains("plain"));
    }

    #[test]
    fn custom_selectors_remove_matches_in_order() {
        let policy = MinifyPolicy {
            custom_selectors: vec![".sidebar".to_string(), "nav".to_string()],
            ..MinifyPolicy::default()
        };
        let document = parse(r#"<div class="sidebar">s</div><nav>n</nav><p>body</p>"#);
        strip_minified_elements(&document, &policy).unwrap();
        let text = remaining_text(&document);
        assert!(!text.contains('s'));
        assert!(!text.contains('n'));
        assert!(text.contains("body"));
    }

    #[test]
    fn invalid_custom_selector_surfaces_config_error() {
        let policy = MinifyPolicy {
            custom_selectors: vec![":::".to_string()],
            ..MinifyPolicy::default()
        };
        let document = parse("<p>x</p>");
        let result = strip_minified_elements(&document, &policy);
        assert!(matches!(result, Err(GenerateError::Config(_))));
    }
}
