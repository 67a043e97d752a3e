//! Text cleanup for extracted description prose.

use crate::patterns::{DANGLING_NEWLINE, WRAPPED_WORD};

/// Collapse the hard-wrap artifacts the documentation markup leaves in
/// extracted text.
///
/// Two ordered phases:
/// 1. a newline-plus-indentation run directly after a word character becomes
///    a single space (rejoins sentences wrapped mid-line);
/// 2. any remaining newline-plus-indentation run is removed outright.
///
/// Phase 1 must run first: once the blanket removal has run there is no
/// word-boundary context left to rejoin.
#[must_use]
pub fn collapse_soft_wraps(text: &str) -> String {
    let rejoined = WRAPPED_WORD.replace_all(text, "${1} ");
    DANGLING_NEWLINE.replace_all(&rejoined, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejoins_words_wrapped_mid_sentence() {
        assert_eq!(collapse_soft_wraps("returns\n    the value"), "returns the value");
    }

    #[test]
    fn drops_structural_newlines_without_word_context() {
        assert_eq!(collapse_soft_wraps("\n   \nfoo"), "foo");
    }

    #[test]
    fn leaves_flat_text_untouched() {
        assert_eq!(collapse_soft_wraps("plain text"), "plain text");
    }

    #[test]
    fn handles_multiple_wraps_in_one_paragraph() {
        let wrapped = "Produces a new\n      array of values by mapping\n      each value.";
        assert_eq!(
            collapse_soft_wraps(wrapped),
            "Produces a new array of values by mapping each value."
        );
    }

    #[test]
    fn preserves_deliberate_single_newlines_after_punctuation() {
        // A newline not followed by indentation is outside both patterns.
        assert_eq!(collapse_soft_wraps("first\nsecond"), "first\nsecond");
    }
}
