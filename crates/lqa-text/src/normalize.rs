//! Title normalization and concept-key derivation.
//!
//! The concept key groups near-duplicate listings: cosmetic differences
//! (casing, punctuation, pack size) collapse to the same key, and the
//! collision is the duplicate signal.

use crate::vocab::Vocabulary;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Multiple whitespace pattern
    static ref MULTI_SPACE: Regex = Regex::new(r"\s+").unwrap();

    /// Parenthetical substrings, removed wholesale: "(100 Prompts)"
    static ref PARENTHETICAL: Regex = Regex::new(r"\([^)]*\)").unwrap();

    /// Runs of anything that is not a lowercase letter or digit
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    MULTI_SPACE.replace_all(text.trim(), " ").to_string()
}

/// Derive the duplicate-grouping key for a title with the default vocabulary.
pub fn concept_key(title: &str) -> String {
    concept_key_with(title, &Vocabulary::default())
}

/// Derive the duplicate-grouping key for a title.
///
/// Lowercases, drops parentheticals, squashes punctuation to spaces, then
/// drops the literal tokens "prompt"/"prompts" and any pack-size count
/// marker. This function only strips; an empty or missing title must be
/// replaced with a fallback literal (ex: "untitled") by the caller.
pub fn concept_key_with(title: &str, vocab: &Vocabulary) -> String {
    let lowered = title.to_lowercase();
    let without_parens = PARENTHETICAL.replace_all(&lowered, " ");
    let spaced = NON_ALNUM.replace_all(&without_parens, " ");

    let words: Vec<&str> = spaced
        .split_whitespace()
        .filter(|token| *token != "prompt" && *token != "prompts")
        .filter(|token| match token.parse::<u32>() {
            Ok(n) => !vocab.count_markers.contains(&n),
            Err(_) => true,
        })
        .collect();

    words.join(" ")
}
