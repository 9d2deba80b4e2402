//! String-level normalization of expressive-code blocks.
//!
//! Rendered code blocks arrive as nested div markup:
//!
//! ```html
//! <div class="expressive-code">
//!   <pre data-language="rust">
//!     <code>
//!       <div class="ec-line"><div class="code">line 1</div></div>
//!       <div class="ec-line"><div class="code">line 2</div></div>
//!     </code>
//!   </pre>
//! </div>
//! ```
//!
//! The per-line divs carry no newlines between them, so plain text
//! extraction would run the lines together. Before the tree is parsed,
//! this pass rewrites each line-div to its content joined with `<br>`
//! separators, which survive parsing and serialization; after the tree is
//! serialized back to HTML, [`restore_code_newlines`] turns those `<br>`
//! separators inside `<pre>` blocks into literal newlines for the
//! Markdown serializer.
//!
//! The `data-language` attribute on the `<pre>` element is left in place
//! for the code-language annotation pass.

use std::sync::LazyLock;

use regex::Regex;

/// Line separator that survives HTML parser whitespace handling.
const LINE_SEPARATOR: &str = "<br>";

static CODE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<pre([^>]*)><code([^>]*)>(.*?)</code></pre>")
        .expect("CODE_BLOCK_RE: hardcoded regex is valid")
});

static LINE_DIV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<div[^>]*class="[^"]*ec-line[^"]*"[^>]*>.*?<div[^>]*class="[^"]*code[^"]*"[^>]*>(.*?)</div>.*?</div>"#,
    )
    .expect("LINE_DIV_RE: hardcoded regex is valid")
});

static PRE_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)(<pre[^>]*>)(.*?)(</pre>)").expect("PRE_BLOCK_RE: hardcoded regex is valid")
});

static BR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br\s*/?>").expect("BR_RE: hardcoded regex is valid"));

/// Rewrite expressive-code line divs to `<br>`-separated text.
///
/// Code blocks without `ec-line` markup pass through unchanged.
pub fn restructure_code_lines(html: &str) -> String {
    // Fast path: nothing to rewrite
    if !html.contains("ec-line") {
        return html.to_string();
    }

    CODE_BLOCK_RE
        .replace_all(html, |caps: &regex::Captures| {
            let pre_attrs = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let code_attrs = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            let inner_html = caps.get(3).map(|m| m.as_str()).unwrap_or("");

            if !inner_html.contains("ec-line") {
                return caps[0].to_string();
            }

            // Decode each line, then re-encode its markup-significant
            // characters so the joined <br> separators stay real elements.
            let lines: Vec<String> = LINE_DIV_RE
                .captures_iter(inner_html)
                .map(|line| {
                    let content = line.get(1).map(|m| m.as_str()).unwrap_or("");
                    let decoded = html_escape::decode_html_entities(content).to_string();
                    decoded
                        .replace('&', "&amp;")
                        .replace('<', "&lt;")
                        .replace('>', "&gt;")
                })
                .collect();

            if lines.is_empty() {
                return caps[0].to_string();
            }

            format!(
                "<pre{}><code{}>{}</code></pre>",
                pre_attrs,
                code_attrs,
                lines.join(LINE_SEPARATOR)
            )
        })
        .to_string()
}

/// Convert `<br>` separators back to newlines inside `<pre>` blocks.
///
/// Applied to the serialized tree right before Markdown conversion, since
/// the Markdown serializer does not translate `<br>` inside code content.
pub fn restore_code_newlines(html: &str) -> String {
    if !html.contains("<pre") {
        return html.to_string();
    }

    PRE_BLOCK_RE
        .replace_all(html, |caps: &regex::Captures| {
            let content = BR_RE.replace_all(&caps[2], "\n");
            format!("{}{}{}", &caps[1], content, &caps[3])
        })
        .into_owned()
}
