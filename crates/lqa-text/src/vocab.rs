//! Fixed vocabularies consumed by the text transforms and the rubric.
//!
//! The production lists live in `Default`; tests and tuning passes can
//! construct their own.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Marketing phrases that block a listing outright. Stored lowercase;
    /// matching is substring, case-insensitive.
    pub banned_phrases: Vec<String>,
    /// Substrings that mark a cover URL as a stand-in image
    pub placeholder_markers: Vec<String>,
    /// CDN host fragments that only count together with "placeholder"
    pub cdn_hosts: Vec<String>,
    /// Numeric pack-size tokens stripped from titles before keying
    pub count_markers: Vec<u32>,
    /// Words signalling the description lists what the buyer gets
    pub contents_signals: Vec<String>,
    /// Words signalling the description explains setup or usage
    pub setup_signals: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            banned_phrases: vec![
                "guaranteed profit".to_string(),
                "risk-free".to_string(),
                "make money fast".to_string(),
                "100% win".to_string(),
                "beat the market".to_string(),
                "get rich quick".to_string(),
                "double your money".to_string(),
                "passive income guaranteed".to_string(),
            ],
            placeholder_markers: vec![
                "placehold".to_string(),
                "dummy".to_string(),
                "sample".to_string(),
                "other-bold".to_string(),
            ],
            cdn_hosts: vec![
                "cdn.shopify.com".to_string(),
                "public-files.gumroad.com".to_string(),
            ],
            count_markers: vec![40, 60, 80, 100, 120, 200],
            contents_signals: vec![
                "what".to_string(),
                "includes".to_string(),
                "inside".to_string(),
            ],
            setup_signals: vec![
                "how to".to_string(),
                "steps".to_string(),
                "setup".to_string(),
            ],
        }
    }
}
