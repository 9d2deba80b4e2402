//! Tree-to-Markdown serialization.
//!
//! Wraps the htmd converter with custom element handlers:
//!
//! - Code blocks (`<pre>`, `<code>`): fence language taken from a
//!   `language-*` class or `data-language` attribute (placed there by the
//!   annotation pass)
//! - Strikethrough (`<del>`, `<s>`, `<strike>`): GFM `~~text~~`
//! - Checkbox inputs: GFM task-list markers inside list items
//!
//! Tables are handled natively by htmd.

use htmd::{
    element_handler::{HandlerResult, Handlers},
    Element, HtmlToMarkdown,
};

use crate::error::{GenerateError, GenerateResult};

/// Convert an HTML string to Markdown.
pub fn to_markdown(html: &str) -> GenerateResult<String> {
    create_converter()
        .convert(html)
        .map_err(|e| GenerateError::Serialize(e.to_string()))
}

fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .add_handler(vec!["pre"], pre_handler)
        .add_handler(vec!["code"], code_handler)
        .add_handler(vec!["del", "s", "strike"], strikethrough_handler)
        .add_handler(vec!["input"], input_handler)
        .build()
}

/// Handle `<pre>` elements - code blocks with fences
fn pre_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let result = handlers.walk_children(element.node);
    let content = result.content.trim_matches('\n');

    // The child code handler already produced a fenced block
    if content.starts_with("```") {
        return Some(HandlerResult::from(format!("\n\n{}\n\n", content)));
    }

    let fence = match language_of(&element) {
        Some(language) => format!("```{language}"),
        None => "```".to_string(),
    };

    Some(HandlerResult::from(format!(
        "\n\n{}\n{}\n```\n\n",
        fence, content
    )))
}

/// Handle `<code>` elements - inline code or code block content
fn code_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let is_in_pre = is_inside_pre(element.node);

    // Raw text extraction preserves angle brackets and entity-decoded
    // characters that the default handler pipeline would strip.
    let content = extract_raw_text(element.node);

    if is_in_pre {
        let fence = match language_of(&element) {
            Some(language) => format!("```{language}"),
            None => "```".to_string(),
        };
        Some(HandlerResult::from(format!("{}\n{}\n```", fence, content)))
    } else {
        let trimmed = content.trim();
        if trimmed.contains('`') {
            if trimmed.starts_with('`') {
                Some(HandlerResult::from(format!("`` {} ``", trimmed)))
            } else {
                Some(HandlerResult::from(format!("``{}``", trimmed)))
            }
        } else {
            Some(HandlerResult::from(format!("`{}`", trimmed)))
        }
    }
}

/// Handle `<del>`, `<s>`, `<strike>` elements -> ~~strikethrough~~
fn strikethrough_handler(handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let content = handlers.walk_children(element.node).content;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Some(HandlerResult::from(""));
    }
    Some(HandlerResult::from(format!("~~{trimmed}~~")))
}

/// Handle `<input>` elements - task-list markers for checkboxes, nothing
/// for other form controls
fn input_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    let is_checkbox = get_attr(element.attrs, "type")
        .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"));
    if !is_checkbox {
        return Some(HandlerResult::from(""));
    }
    let checked = element
        .attrs
        .iter()
        .any(|attr| &*attr.name.local == "checked");
    Some(HandlerResult::from(if checked { "[x] " } else { "[ ] " }))
}

// === Helper Functions ===

/// Language hint from element attributes (`language-*` class or
/// `data-language`)
fn language_of(element: &Element) -> Option<String> {
    if let Some(class) = get_attr(element.attrs, "class")
        && let Some(language) = extract_language_from_class(&class)
    {
        return Some(language);
    }
    get_attr(element.attrs, "data-language").filter(|l| !l.is_empty())
}

fn extract_language_from_class(class: &str) -> Option<String> {
    class
        .split_whitespace()
        .find_map(|token| token.strip_prefix("language-"))
        .filter(|language| !language.is_empty())
        .map(str::to_string)
}

/// Get attribute value from element
fn get_attr(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .filter(|v| !v.trim().is_empty())
}

/// Extract raw text content from a node tree, preserving all whitespace
fn extract_raw_text(node: &std::rc::Rc<markup5ever_rcdom::Node>) -> String {
    use markup5ever_rcdom::NodeData;

    let mut text = String::new();

    match &node.data {
        NodeData::Text { contents } => {
            text.push_str(&contents.borrow());
        }
        NodeData::Element { .. } | NodeData::Document | NodeData::Doctype { .. } => {
            for child in node.children.borrow().iter() {
                text.push_str(&extract_raw_text(child));
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }

    text
}

/// Check if a node is inside a `<pre>` element
fn is_inside_pre(node: &std::rc::Rc<markup5ever_rcdom::Node>) -> bool {
    use markup5ever_rcdom::NodeData;

    let mut current = node.parent.take();
    node.parent.set(current.clone());

    while let Some(weak_parent) = current {
        if let Some(parent) = weak_parent.upgrade() {
            if let NodeData::Element { ref name, .. } = parent.data
                && &*name.local == "pre"
            {
                return true;
            }
            current = parent.parent.take();
            parent.parent.set(current.clone());
        } else {
            break;
        }
    }
    false
}
