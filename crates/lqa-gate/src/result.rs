//! Verdict types produced by the rubric.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall verdict for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QaStatus {
    Passed,
    Failed,
}

/// Canonical rubric violations. Serialized snake_case, so the wire form is
/// the reporting tag ("title_too_short", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    TitleTooShort,
    TitlePlaceholder,
    DescriptionTooShort,
    MissingWhatsInsideLanguage,
    BannedClaims,
    CoverMissingOrPlaceholder,
    ArtifactMissing,
    ArtifactTooSmall,
    ReadmeMissing,
    PromptCountMismatch,
    PriceInvalid,
}

impl FailReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TitleTooShort => "title_too_short",
            Self::TitlePlaceholder => "title_placeholder",
            Self::DescriptionTooShort => "description_too_short",
            Self::MissingWhatsInsideLanguage => "missing_whats_inside_language",
            Self::BannedClaims => "banned_claims",
            Self::CoverMissingOrPlaceholder => "cover_missing_or_placeholder",
            Self::ArtifactMissing => "artifact_missing",
            Self::ArtifactTooSmall => "artifact_too_small",
            Self::ReadmeMissing => "readme_missing",
            Self::PromptCountMismatch => "prompt_count_mismatch",
            Self::PriceInvalid => "price_invalid",
        }
    }
}

impl std::fmt::Display for FailReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single rubric check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    /// Deducts score without adding a fail reason
    Soft,
    Fail,
}

/// Single check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RubricCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub impact: i32, // Score impact (negative)
}

/// Complete evaluation of one listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaResult {
    pub status: QaStatus,

    /// Numeric score, clamped to [0,100]
    pub score: u32,

    /// Deduplicated fail reasons in first-seen order
    pub fail_reasons: Vec<FailReason>,

    /// Normalized title key used for duplicate grouping
    pub concept_key: String,

    /// When the evaluation ran
    pub checked_at: DateTime<Utc>,

    /// Per-check trace
    pub checks: Vec<RubricCheck>,

    /// Opaque diagnostics (carries the raw artifact inspection); not part
    /// of the pass/fail contract
    pub details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_reason_wire_form_matches_tag() {
        let json = serde_json::to_string(&FailReason::MissingWhatsInsideLanguage).unwrap();
        assert_eq!(json, "\"missing_whats_inside_language\"");
        assert_eq!(FailReason::TitleTooShort.to_string(), "title_too_short");
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!(serde_json::to_string(&QaStatus::Passed).unwrap(), "\"passed\"");
    }
}
