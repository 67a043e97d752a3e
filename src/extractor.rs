//! Core entry extraction algorithm.
//!
//! Turns the parsed documentation DOM into an ordered sequence of
//! [`ApiEntry`] records: select candidate paragraphs, keep the ones whose
//! signature belongs to the top-level namespace, then derive the name,
//! aliases, arguments and description fields from each.

use crate::dom::{self, Document, Selection};
use crate::entry::ApiEntry;
use crate::error::{Error, Result};
use crate::patterns::{
    ALIAS_LABEL, CANDIDATE_SELECTOR, LIST_SEPARATOR, NON_DESCRIPTION_CHILDREN,
    SIGNATURE_MARKER_SELECTOR, TOP_LEVEL_SIGNATURE,
};
use crate::text::collapse_soft_wraps;

/// Extract all top-level API entries from the documentation tree, in
/// document order.
///
/// The contract is "as many well-formed entries as possible": a candidate
/// whose fields cannot be derived is logged and dropped, never a reason to
/// abort the run.
#[must_use]
pub fn extract_entries(doc: &Document) -> Vec<ApiEntry> {
    let candidates = doc.select(CANDIDATE_SELECTOR);
    let mut entries = Vec::new();

    for node in candidates.nodes() {
        let para = Selection::from(*node);

        // Only paragraphs containing a header immediately followed by a
        // code element document a method.
        if !para.select(SIGNATURE_MARKER_SELECTOR).exists() {
            continue;
        }

        // Combined text of the direct code children is the signature.
        let signature = dom::child_text_by_tag(&para, "code");

        // Instance-level methods (e.g. chaining helpers) carry no `_.`
        // namespace prefix and are not part of the top-level API.
        if !TOP_LEVEL_SIGNATURE.is_match(&signature) {
            continue;
        }

        match build_entry(&para, &signature) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                tracing::warn!(%err, %signature, "dropping malformed entry");
            }
        }
    }

    entries
}

/// Derive the four output fields from one accepted candidate paragraph.
fn build_entry(para: &Selection, signature: &str) -> Result<ApiEntry> {
    let name = dom::child_text_by_class(para, "header");
    if name.is_empty() {
        return Err(Error::Entry("candidate has no header text".to_string()));
    }
    let aliases = parse_aliases(para);
    let arguments = parse_arguments(signature)?;
    let description = parse_description(para);

    Ok(ApiEntry {
        name,
        aliases,
        arguments,
        description,
    })
}

/// Alias names declared next to the header, label stripped.
fn parse_aliases(para: &Selection) -> Vec<String> {
    let text = dom::child_text_by_class(para, "alias");
    if text.is_empty() {
        return Vec::new();
    }
    ALIAS_LABEL
        .replace(&text, "")
        .split(LIST_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Split the parenthesized argument list out of the signature text.
///
/// The candidate already passed the top-level filter, so a non-matching
/// signature here is a logic error; it surfaces as a per-entry failure
/// rather than a panic.
fn parse_arguments(signature: &str) -> Result<Vec<String>> {
    let caps = TOP_LEVEL_SIGNATURE
        .captures(signature)
        .ok_or_else(|| Error::Entry(format!("signature does not parse: {signature}")))?;

    let list = caps.get(1).map_or("", |m| m.as_str());
    Ok(list
        .split(LIST_SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Description text: the candidate minus its header/code/alias/br children,
/// newline-normalized, plus one plain continuation paragraph if the next
/// element sibling is one.
fn parse_description(para: &Selection) -> String {
    let mut description =
        collapse_soft_wraps(&dom::text_without_children(para, NON_DESCRIPTION_CHILDREN));

    if let Some(next) = dom::next_element_sibling(para) {
        if is_continuation_paragraph(&next) {
            description.push('\n');
            description.push_str(&collapse_soft_wraps(&dom::text_content(&next)));
        }
    }

    description
}

/// A continuation paragraph is a `p` with no header or code markers of its
/// own; anything else (including the next documented entry) is not appended.
fn is_continuation_paragraph(sel: &Selection) -> bool {
    dom::tag_name(sel).as_deref() == Some("p")
        && !dom::has_child_class(sel, "header")
        && !dom::has_child_tag(sel, "code")
}
