//! Placeholder cover detection.
//!
//! Heuristic allowlist-of-badness: false negatives are expected and
//! acceptable, false positives should be rare given the marker substrings.
use crate::vocab::Vocabulary;

/// Check a cover URL against the default vocabulary.
pub fn placeholder_cover(url: Option<&str>) -> bool {
    placeholder_cover_with(url, &Vocabulary::default())
}

/// True when the cover URL is absent, contains a placeholder marker, or is
/// hosted on a known CDN with "placeholder" in the path.
pub fn placeholder_cover_with(url: Option<&str>, vocab: &Vocabulary) -> bool {
    let url = match url {
        Some(u) if !u.trim().is_empty() => u.to_lowercase(),
        _ => return true,
    };

    if vocab.placeholder_markers.iter().any(|marker| url.contains(marker.as_str())) {
        return true;
    }

    vocab.cdn_hosts.iter().any(|host| url.contains(host.as_str())) && url.contains("placeholder")
}
