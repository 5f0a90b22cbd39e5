//! HTML reference extraction
//!
//! The sole HTML collaborator: given a document, pull out the raw attribute
//! values for a tag/attribute pair. Resolution against the page URL happens
//! in the traversal, not here — this module is a pure function of the
//! document text.

use scraper::{Html, Selector};

/// Raw references extracted from one HTML page
#[derive(Debug, Clone, Default)]
pub struct PageRefs {
    /// `src` attribute values of every `<img>` element
    pub image_sources: Vec<String>,

    /// `href` attribute values of every `<a>` element
    pub link_targets: Vec<String>,
}

/// Extracts image and link references from an HTML document
pub fn extract_page_refs(html: &str) -> PageRefs {
    let document = Html::parse_document(html);

    PageRefs {
        image_sources: extract_attr_values(&document, "img", "src"),
        link_targets: extract_attr_values(&document, "a", "href"),
    }
}

/// Collects the values of `attr` across every `tag` element, in document order
///
/// Elements missing the attribute or carrying an empty value are skipped.
fn extract_attr_values(document: &Html, tag: &str, attr: &str) -> Vec<String> {
    let selector = match Selector::parse(&format!("{}[{}]", tag, attr)) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
