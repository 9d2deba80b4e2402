//! Tab-component flattening.
//!
//! The Markdown serializer has no concept of tabbed content, so each tab
//! container is rewritten into an unordered list: one item per
//! label/panel pair, with the label as a leading paragraph and the panel
//! content moved in unchanged. Labels and panels pair up in order;
//! whichever sequence is longer has its extras dropped.

use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;

/// Custom element wrapping a tabbed region.
const CONTAINER_SELECTOR: &str = "starlight-tabs";
/// ARIA roles marking the labels and their content panels.
const TAB_SELECTOR: &str = "[role=tab]";
const PANEL_SELECTOR: &str = "[role=tabpanel]";

pub fn flatten_tab_containers(document: &NodeRef) {
    let containers: Vec<_> = document
        .select(CONTAINER_SELECTOR)
        .expect("hardcoded tab container selector is valid")
        .collect();

    for container in containers {
        let node = container.as_node();

        let tabs: Vec<NodeRef> = node
            .select(TAB_SELECTOR)
            .expect("hardcoded tab selector is valid")
            .map(|tab| tab.as_node().clone())
            .collect();
        let panels: Vec<NodeRef> = node
            .select(PANEL_SELECTOR)
            .expect("hardcoded tabpanel selector is valid")
            .map(|panel| panel.as_node().clone())
            .collect();

        let list = new_element("ul");
        for (tab, panel) in tabs.iter().zip(panels.iter()) {
            let item = new_element("li");
            let paragraph = new_element("p");
            let label = label_text(tab);
            if !label.is_empty() {
                paragraph.append(NodeRef::new_text(label));
            }
            item.append(paragraph);
            // append() detaches the panel from the container first, so
            // its content moves over intact.
            item.append(panel.clone());
            list.append(item);
        }

        node.insert_before(list);
        node.detach();
    }
}

/// Label text of a tab node: its non-empty, trimmed text-node children,
/// joined with single spaces. Icon and other element children are
/// decorative and skipped.
fn label_text(tab: &NodeRef) -> String {
    tab.children()
        .filter_map(|child| {
            child
                .as_text()
                .map(|text| text.borrow().trim().to_string())
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a detached element by parsing a minimal fragment.
fn new_element(tag: &str) -> NodeRef {
    let fragment = kuchiki::parse_html().one(format!("<{tag}></{tag}>"));
    let element = fragment
        .select_first(tag)
        .expect("freshly parsed fragment contains the element");
    let node = element.as_node().clone();
    node.detach();
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> NodeRef {
        kuchiki::parse_html().one(html)
    }

    const TABBED: &str = r#"
        <starlight-tabs>
          <ul role="tablist">
            <li role="presentation"><a role="tab"> npm <svg></svg></a></li>
            <li role="presentation"><a role="tab"> pnpm </a></li>
          </ul>
          <section role="tabpanel"><p>npm install</p></section>
          <section role="tabpanel"><p>pnpm add</p></section>
        </starlight-tabs>"#;

    #[test]
    fn container_becomes_labeled_list() {
        let document = parse(TABBED);
        flatten_tab_containers(&document);

        assert!(document.select_first("starlight-tabs").is_err());
        let items: Vec<_> = document.select("li").unwrap().collect();
        assert_eq!(items.len(), 2);

        let first = items[0].as_node();
        let paragraph = first.select_first("p").unwrap();
        assert_eq!(paragraph.text_contents(), "npm");
        assert!(first.text_contents().contains("npm install"));

        let second = items[1].as_node();
        assert!(second.text_contents().contains("pnpm add"));
    }

    #[test]
    fn surplus_tabs_are_dropped() {
        let html = r#"
            <starlight-tabs>
              <a role="tab">one</a>
              <a role="tab">two</a>
              <a role="tab">three</a>
              <section role="tabpanel"><p>first</p></section>
              <section role="tabpanel"><p>second</p></section>
            </starlight-tabs>"#;
        let document = parse(html);
        flatten_tab_containers(&document);

        let items: Vec<_> = document.select("li").unwrap().collect();
        assert_eq!(items.len(), 2);
        let text = document.text_contents();
        assert!(!text.contains("three"));
        assert!(text.contains("second"));
    }

    #[test]
    fn surplus_panels_are_dropped() {
        let html = r#"
            <starlight-tabs>
              <a role="tab">only</a>
              <section role="tabpanel"><p>first</p></section>
              <section role="tabpanel"><p>orphan</p></section>
            </starlight-tabs>"#;
        let document = parse(html);
        flatten_tab_containers(&document);

        let items: Vec<_> = document.select("li").unwrap().collect();
        assert_eq!(items.len(), 1);
        assert!(!document.text_contents().contains("orphan"));
    }

    #[test]
    fn icon_children_are_not_part_of_the_label() {
        let document = parse(
            r#"<starlight-tabs><a role="tab">label<svg><title>icon</title></svg></a>
               <div role="tabpanel">content</div></starlight-tabs>"#,
        );
        flatten_tab_containers(&document);
        let paragraph = document.select_first("p").unwrap();
        assert_eq!(paragraph.text_contents(), "label");
    }

    #[test]
    fn document_without_tabs_is_untouched() {
        let document = parse("<p>plain</p>");
        flatten_tab_containers(&document);
        assert_eq!(document.select("ul").unwrap().count(), 0);
    }
}
