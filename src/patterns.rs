//! Compiled regex patterns and CSS selectors for entry extraction.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Candidate Selection
// =============================================================================

/// Paragraphs under the documentation container that carry an anchor id.
/// These are the only nodes considered as potential API entries.
pub const CANDIDATE_SELECTOR: &str = "#documentation p[id]";

/// A header element immediately followed by a code element marks a
/// "documented method" paragraph (name plus signature).
pub const SIGNATURE_MARKER_SELECTOR: &str = ".header + code";

/// Direct children stripped from a candidate before reading its
/// description text.
pub const NON_DESCRIPTION_CHILDREN: &[&str] = &[".header", "code", ".alias", "br"];

// =============================================================================
// Signature Parsing
// =============================================================================

/// Matches a top-level namespace signature `_.<identifier>(<arguments>)` and
/// captures the argument list.
///
/// The greedy `.*` runs to the last closing paren on the line, so nested
/// parens inside default-value expressions stay within the captured list.
/// This mirrors the behavior the existing documentation corpus was written
/// against; instance-level signatures (no `_.` prefix) never match.
pub static TOP_LEVEL_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\.\w+\((.*)\)").expect("TOP_LEVEL_SIGNATURE regex"));

/// Separator between items in alias and argument lists.
pub const LIST_SEPARATOR: &str = ", ";

/// Leading label on alias declarations. The corpus uses both the singular
/// and plural spellings.
pub static ALIAS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Alias(?:es)?:\s*").expect("ALIAS_LABEL regex"));

// =============================================================================
// Text Cleanup
// =============================================================================

/// A word character broken across a hard-wrapped line: the newline plus the
/// following indentation collapse to a single space.
pub static WRAPPED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w)\n\s+").expect("WRAPPED_WORD regex"));

/// Any remaining newline-plus-indentation run carries no semantic content
/// and is removed outright.
pub static DANGLING_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s+").expect("DANGLING_NEWLINE regex"));
