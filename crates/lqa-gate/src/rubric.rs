//! Rubric evaluation for product listings.
//!
//! Applies the fixed check table to a record plus its artifact inspection
//! and produces a [`QaResult`]. All deductions are independent and additive;
//! the score starts at 100 and is clamped to [0,100] at the end.

use crate::profile::GateProfile;
use crate::result::{CheckStatus, FailReason, QaResult, QaStatus, RubricCheck};
use chrono::Utc;
use lqa_artifact::{ArtifactInspection, ArtifactInspector};
use lqa_core::{GateError, ProductRecord};
use lqa_text::{banned_claims_with, concept_key_with, placeholder_cover_with, Vocabulary};
use serde_json::json;

/// Fallback key source for listings without a usable title.
const UNTITLED: &str = "untitled";

/// Gate that evaluates product listings against a profile.
pub struct ListingGate {
    profile: GateProfile,
    vocab: Vocabulary,
}

/// Running tally while the checks execute.
struct Tally {
    score: i32,
    checks: Vec<RubricCheck>,
    fail_reasons: Vec<FailReason>,
}

impl Tally {
    fn new() -> Self {
        Self {
            score: 100,
            checks: Vec::new(),
            fail_reasons: Vec::new(),
        }
    }

    fn fail(&mut self, reason: FailReason, message: String, impact: i32) {
        self.score += impact;
        if !self.fail_reasons.contains(&reason) {
            self.fail_reasons.push(reason);
        }
        self.checks.push(RubricCheck {
            name: reason.as_str().to_string(),
            status: CheckStatus::Fail,
            message,
            impact,
        });
    }

    /// Score-only deduction: lowers the score without adding a fail reason.
    fn soft(&mut self, name: &str, message: String, impact: i32) {
        self.score += impact;
        self.checks.push(RubricCheck {
            name: name.to_string(),
            status: CheckStatus::Soft,
            message,
            impact,
        });
    }

    fn ok(&mut self, name: &str, message: String) {
        self.checks.push(RubricCheck {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message,
            impact: 0,
        });
    }
}

impl ListingGate {
    /// Create a gate with the given profile and the default vocabulary.
    pub fn new(profile: GateProfile) -> Self {
        Self {
            profile,
            vocab: Vocabulary::default(),
        }
    }

    /// Create a gate with an explicit vocabulary (for tuning and tests).
    pub fn with_vocabulary(profile: GateProfile, vocab: Vocabulary) -> Self {
        Self { profile, vocab }
    }

    /// Create a gate for a specific mode ("standard" or "strict").
    pub fn for_mode(mode: &str) -> Self {
        Self::new(GateProfile::for_mode(mode))
    }

    pub fn profile(&self) -> &GateProfile {
        &self.profile
    }

    /// Evaluate a record end to end: inspect the artifact, then score.
    ///
    /// The only error is a contract violation (blank record id); every
    /// well-formed record yields a complete result.
    pub async fn evaluate(
        &self,
        record: &ProductRecord,
        inspector: &dyn ArtifactInspector,
    ) -> Result<QaResult, GateError> {
        if record.id.trim().is_empty() {
            return Err(GateError::Contract("record id must not be empty".to_string()));
        }

        let path = record.artifact_path.as_deref().filter(|p| !p.trim().is_empty());
        let url = record.artifact_url.as_deref().filter(|u| !u.trim().is_empty());
        let inspection = inspector.inspect(path, url).await;

        let result = self.score(record, &inspection);
        tracing::debug!(
            id = %record.id,
            score = result.score,
            status = ?result.status,
            reasons = result.fail_reasons.len(),
            "listing scored"
        );
        Ok(result)
    }

    /// Apply the rubric to a record and a pre-obtained inspection. Pure and
    /// deterministic: same inputs give the same score, status, and reasons.
    pub fn score(&self, record: &ProductRecord, inspection: &ArtifactInspection) -> QaResult {
        let mut tally = Tally::new();

        // === Title ===
        let title = record.title.trim();
        let title_len = title.chars().count();
        if title_len < self.profile.min_title_chars {
            tally.fail(
                FailReason::TitleTooShort,
                format!("title is {} chars (min {})", title_len, self.profile.min_title_chars),
                -20,
            );
        } else {
            tally.ok("title_length", format!("{} chars", title_len));
        }

        if record.title.to_lowercase().contains("product title") {
            tally.fail(
                FailReason::TitlePlaceholder,
                "title still carries the template placeholder".to_string(),
                -40,
            );
        }

        // === Description ===
        let description = record.description.trim();
        let description_len = description.chars().count();
        if description_len < self.profile.min_description_chars {
            tally.fail(
                FailReason::DescriptionTooShort,
                format!(
                    "description is {} chars (min {})",
                    description_len, self.profile.min_description_chars
                ),
                -20,
            );
        } else {
            tally.ok("description_length", format!("{} chars", description_len));
        }

        let description_lc = description.to_lowercase();
        if !self
            .vocab
            .contents_signals
            .iter()
            .any(|signal| description_lc.contains(signal.as_str()))
        {
            tally.fail(
                FailReason::MissingWhatsInsideLanguage,
                "description never says what the buyer gets".to_string(),
                -10,
            );
        }

        if !self
            .vocab
            .setup_signals
            .iter()
            .any(|signal| description_lc.contains(signal.as_str()))
        {
            tally.soft(
                "setup_language",
                "description has no setup or how-to language".to_string(),
                -5,
            );
        }

        // === Claims ===
        let combined = format!("{} {}", record.title, record.description);
        let claims = banned_claims_with(&combined, &self.vocab);
        if !claims.is_empty() {
            tally.fail(
                FailReason::BannedClaims,
                format!("banned claims: {}", claims.join(", ")),
                -40,
            );
        }

        // === Cover ===
        if placeholder_cover_with(record.cover_url.as_deref(), &self.vocab) {
            tally.fail(
                FailReason::CoverMissingOrPlaceholder,
                "cover image is missing or a stand-in".to_string(),
                -25,
            );
        }

        // === Artifact ===
        if !inspection.present {
            tally.fail(
                FailReason::ArtifactMissing,
                "no deliverable artifact found".to_string(),
                -50,
            );
        } else {
            tally.ok(
                "artifact_present",
                match inspection.size_bytes {
                    Some(size) => format!("{} bytes", size),
                    None => "size unknown".to_string(),
                },
            );

            if inspection.too_small {
                tally.fail(
                    FailReason::ArtifactTooSmall,
                    format!(
                        "artifact below the {} byte minimum",
                        self.profile.inspector.min_artifact_bytes
                    ),
                    -20,
                );
            }

            if inspection.missing_readme {
                tally.fail(
                    FailReason::ReadmeMissing,
                    "archive has no README entry".to_string(),
                    -20,
                );
            }
        }

        // === Content count ===
        if let (Some(expected), Some(detected)) = (record.prompt_count, inspection.detected_count) {
            if expected.abs_diff(detected) > self.profile.max_count_drift {
                tally.fail(
                    FailReason::PromptCountMismatch,
                    format!("expected {} items, found {}", expected, detected),
                    -30,
                );
            } else {
                tally.ok("prompt_count", format!("{}/{} items", detected, expected));
            }
        }

        // === Price ===
        if let Some(price) = record.price {
            if price <= 0.0 {
                tally.fail(
                    FailReason::PriceInvalid,
                    format!("price {} is not positive", price),
                    -25,
                );
            }
        }

        // Clamp and decide
        let score = tally.score.clamp(0, 100) as u32;
        let status = if score >= self.profile.passing_score && tally.fail_reasons.is_empty() {
            QaStatus::Passed
        } else {
            QaStatus::Failed
        };

        let concept_key = {
            let source = if title.is_empty() { UNTITLED } else { title };
            concept_key_with(source, &self.vocab)
        };

        QaResult {
            status,
            score,
            fail_reasons: tally.fail_reasons,
            concept_key,
            checked_at: Utc::now(),
            checks: tally.checks,
            details: serde_json::to_value(inspection)
                .ok()
                .map(|artifact| json!({ "artifact": artifact })),
        }
    }
}

impl Default for ListingGate {
    fn default() -> Self {
        Self::new(GateProfile::default())
    }
}
