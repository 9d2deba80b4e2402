//! Code-block language annotation.
//!
//! Expressive-code wrappers record the fence language as a
//! `data-language` attribute on their `<pre>` element, but the Markdown
//! serializer only reads a `language-*` class on the `<code>` node. This
//! pass copies the attribute over as a class token so code fences keep
//! their language tag.

use kuchiki::NodeRef;

/// Class marking a fenced-code-block wrapper component.
const WRAPPER_SELECTOR: &str = ".expressive-code";

pub fn annotate_code_languages(document: &NodeRef) {
    let wrappers: Vec<_> = document
        .select(WRAPPER_SELECTOR)
        .expect("hardcoded expressive-code selector is valid")
        .collect();

    for wrapper in wrappers {
        let node = wrapper.as_node();
        let Ok(pre) = node.select_first("pre") else {
            continue;
        };
        let language = {
            let attributes = pre.attributes.borrow();
            attributes.get("data-language").map(str::to_string)
        };
        let Some(language) = language.filter(|l| !l.is_empty()) else {
            continue;
        };
        let Ok(code) = node.select_first("code") else {
            continue;
        };

        let mut attributes = code.attributes.borrow_mut();
        let classes = match attributes.get("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{existing} language-{language}")
            }
            _ => format!("language-{language}"),
        };
        attributes.insert("class", classes);
    }
}
