//! Banned-claim detection.
use crate::vocab::Vocabulary;

/// Scan text for banned marketing claims with the default vocabulary.
pub fn banned_claims(text: &str) -> Vec<String> {
    banned_claims_with(text, &Vocabulary::default())
}

/// Case-insensitive substring scan of `text` against the banned-phrase list.
///
/// Returns every phrase that occurs, in list order, not just the first.
/// An empty result means the copy is clean.
pub fn banned_claims_with(text: &str, vocab: &Vocabulary) -> Vec<String> {
    let haystack = text.to_lowercase();
    vocab
        .banned_phrases
        .iter()
        .filter(|phrase| haystack.contains(phrase.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let hits = banned_claims("This offers a GUARANTEED PROFIT scheme");
        assert_eq!(hits, vec!["guaranteed profit".to_string()]);
    }

    #[test]
    fn test_all_matches_reported_in_list_order() {
        let hits = banned_claims("Risk-free! Make money fast with a guaranteed profit.");
        assert_eq!(
            hits,
            vec![
                "guaranteed profit".to_string(),
                "risk-free".to_string(),
                "make money fast".to_string(),
            ]
        );
    }

    #[test]
    fn test_clean_copy() {
        assert!(banned_claims("A calm, honest prompt pack for writers.").is_empty());
    }
}
