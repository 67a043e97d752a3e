//! Read-only DOM adapter over the `dom_query` crate.
//!
//! Exposes the handful of query operations the extractor needs: loading,
//! selection, attribute/class checks, sibling navigation, and text
//! extraction. Nothing here mutates the caller's tree; the one operation
//! that conceptually "removes" children ([`text_without_children`]) works on
//! a private scratch copy and is a pure function of its input node.

use crate::error::{Error, Result};

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse HTML text into a queryable document.
///
/// Parsing is permissive: malformed markup degrades to a best-effort tree
/// rather than failing. Only input that cannot produce any tree at all
/// (empty or whitespace-only) is rejected.
pub fn load(html: &str) -> Result<Document> {
    if html.trim().is_empty() {
        return Err(Error::Parse("document is empty".to_string()));
    }
    Ok(Document::from(html))
}

/// Get tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check whether the selection's first node carries the given class token.
#[must_use]
pub fn has_class(sel: &Selection, class: &str) -> bool {
    sel.attr("class")
        .is_some_and(|attr| attr.split_whitespace().any(|token| token == class))
}

/// Get all text content of node and descendants, markup stripped.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Direct element children of the selection's first node.
#[must_use]
pub fn child_elements<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .filter(|node| node.is_element())
        .map(|node| Selection::from(*node))
        .collect()
}

/// Combined text of the direct children with the given tag name.
#[must_use]
pub fn child_text_by_tag(sel: &Selection, tag: &str) -> String {
    child_elements(sel)
        .iter()
        .filter(|child| tag_name(child).as_deref() == Some(tag))
        .map(|child| child.text().to_string())
        .collect()
}

/// Combined text of the direct children carrying the given class.
#[must_use]
pub fn child_text_by_class(sel: &Selection, class: &str) -> String {
    child_elements(sel)
        .iter()
        .filter(|child| has_class(child, class))
        .map(|child| child.text().to_string())
        .collect()
}

/// Whether the selection has at least one direct child with the given tag.
#[must_use]
pub fn has_child_tag(sel: &Selection, tag: &str) -> bool {
    child_elements(sel)
        .iter()
        .any(|child| tag_name(child).as_deref() == Some(tag))
}

/// Whether the selection has at least one direct child with the given class.
#[must_use]
pub fn has_child_class(sel: &Selection, class: &str) -> bool {
    child_elements(sel).iter().any(|child| has_class(child, class))
}

/// Get next element sibling (skipping text nodes).
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Text of a node minus the text under its direct children matching any of
/// the `excluded` selectors.
///
/// The exclusion runs on a scratch copy built from the node's outer HTML, so
/// the caller's tree is never touched.
#[must_use]
pub fn text_without_children(sel: &Selection, excluded: &[&str]) -> String {
    if excluded.is_empty() {
        return sel.text().to_string();
    }
    let scratch = Document::from(sel.html());
    let scoped = excluded
        .iter()
        .map(|s| format!("body > * > {s}"))
        .collect::<Vec<_>>()
        .join(", ");
    scratch.select(&scoped).remove();
    scratch.select("body > *").text().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_blank_input() {
        assert!(matches!(load(""), Err(Error::Parse(_))));
        assert!(matches!(load("   \n\t  "), Err(Error::Parse(_))));
    }

    #[test]
    fn load_accepts_malformed_markup() {
        let doc = load("<p>text<div>more").expect("permissive parse");
        assert!(doc.select("p").exists());
    }

    #[test]
    fn tag_name_is_lowercase() {
        let doc = Document::from("<DIV><P>x</P></DIV>");
        assert_eq!(tag_name(&doc.select("p")), Some("p".to_string()));
    }

    #[test]
    fn has_class_matches_whole_tokens_only() {
        let doc = Document::from(r#"<span class="header large">x</span>"#);
        let span = doc.select("span");
        assert!(has_class(&span, "header"));
        assert!(has_class(&span, "large"));
        assert!(!has_class(&span, "head"));
    }

    #[test]
    fn child_text_by_tag_ignores_nested_matches() {
        let doc = Document::from("<p><code>a</code><em><code>b</code></em><code>c</code></p>");
        assert_eq!(child_text_by_tag(&doc.select("p"), "code"), "ac");
    }

    #[test]
    fn child_text_by_class_combines_all_matching_children() {
        let doc = Document::from(
            r#"<p><span class="alias">Alias: collect</span><span class="alias">, select</span></p>"#,
        );
        assert_eq!(
            child_text_by_class(&doc.select("p"), "alias"),
            "Alias: collect, select"
        );
    }

    #[test]
    fn next_element_sibling_skips_text_nodes() {
        let doc = Document::from(r#"<div><p id="a">one</p>  <p id="b">two</p></div>"#);
        let next = next_element_sibling(&doc.select("#a")).expect("sibling exists");
        assert_eq!(next.attr("id").map(|s| s.to_string()), Some("b".to_string()));
    }

    #[test]
    fn next_element_sibling_none_at_end() {
        let doc = Document::from(r#"<div><p id="last">one</p></div>"#);
        assert!(next_element_sibling(&doc.select("#last")).is_none());
    }

    #[test]
    fn text_without_children_excludes_only_listed_direct_children() {
        let doc = Document::from(
            r#"<p id="x"><b class="header">map</b><code>_.map(list)</code> keeps <tt>inline</tt> text</p>"#,
        );
        let text = text_without_children(&doc.select("#x"), &[".header", "code"]);
        assert_eq!(text, " keeps inline text");
    }

    #[test]
    fn text_without_children_leaves_source_tree_intact() {
        let doc = Document::from(r#"<p id="x"><code>sig</code>rest</p>"#);
        let para = doc.select("#x");
        let _ = text_without_children(&para, &["code"]);
        assert!(doc.select("#x code").exists());
        assert_eq!(para.text().to_string(), "sigrest");
    }
}
