//! Reduce an HTML page to the text of its main content region.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};

// Checked in order; the first region with any text wins.
static CONTENT_REGIONS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["main", "article", "body"]
        .iter()
        .map(|tag| Selector::parse(tag).unwrap())
        .collect()
});

/// Text of the page's main content.
///
/// Takes the text of `main`, else `article`, else `body`. A region that exists but
/// holds only whitespace counts as empty, so a bare `<main>` still falls through to
/// `article`. `script` and `style` contents never count as text. Returns an empty
/// string when no region has text.
pub fn main_content(html: &str) -> String {
    let document = Html::parse_document(html);

    CONTENT_REGIONS
        .iter()
        .map(|selector| region_text(&document, selector))
        .find(|text| !text.trim().is_empty())
        .unwrap_or_default()
}

/// Concatenated text of every element matching `selector`, in document order.
fn region_text(document: &Html, selector: &Selector) -> String {
    let mut text = String::new();
    for element in document.select(selector) {
        collect_text(&element, &mut text);
    }
    text
}

fn collect_text(element: &ElementRef, out: &mut String) {
    if should_skip_element(element) {
        return;
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(child_ref) = ElementRef::wrap(child) {
                    collect_text(&child_ref, out);
                }
            }
            _ => {}
        }
    }
}

fn should_skip_element(element: &ElementRef) -> bool {
    matches!(element.value().name(), "script" | "style")
}
