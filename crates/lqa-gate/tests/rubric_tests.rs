//! Integration tests for the listing rubric.
//!
//! These encode the boundary scenarios of the check table literally, scoring
//! hand-built inspections so no file or network access is involved.

use lqa_artifact::{ArtifactInspection, StaticInspector};
use lqa_core::ProductRecord;
use lqa_gate::{CheckStatus, FailReason, GateProfile, ListingGate, QaStatus};

/// 300 chars, carries "includes" and "steps", no banned claims.
const GOOD_DESCRIPTION: &str = "This pack includes forty curated prompts for landing pages, all tuned \
for conversion copy. Follow the numbered steps in the guide to adapt hooks, \
offers, FAQs, and objection handling to your own store. Every template ships \
with notes on tone and structure so the output stays consistent across pages.";

fn healthy_inspection() -> ArtifactInspection {
    ArtifactInspection {
        present: true,
        size_bytes: Some(40_000),
        has_readme: Some(true),
        detected_count: Some(40),
        ..ArtifactInspection::default()
    }
}

fn well_formed_record(id: &str, title: &str) -> ProductRecord {
    let mut record = ProductRecord::new(id, title, GOOD_DESCRIPTION);
    record.price = Some(9.99);
    record.prompt_count = Some(40);
    record.cover_url = Some("https://cdn.shopify.com/s/files/1/0001/landing-pack-cover.png".to_string());
    record
}

// =============================================================================
// Boundary: score meets the threshold but a fail reason blocks the pass
// =============================================================================

#[test]
fn test_short_title_alone_holds_score_at_threshold_but_fails() {
    let gate = ListingGate::default();
    let record = well_formed_record("p-1", "Promo"); // 5 chars
    let result = gate.score(&record, &healthy_inspection());

    assert_eq!(result.fail_reasons, vec![FailReason::TitleTooShort]);
    assert_eq!(result.score, 80);
    assert_eq!(result.status, QaStatus::Failed);
}

#[test]
fn test_clean_listing_passes() {
    let gate = ListingGate::default();
    let record = well_formed_record("p-2", "Landing Page Prompt Pack");
    let result = gate.score(&record, &healthy_inspection());

    assert_eq!(result.status, QaStatus::Passed);
    assert_eq!(result.score, 100);
    assert!(result.fail_reasons.is_empty());
}

// =============================================================================
// Missing artifact always fails
// =============================================================================

#[test]
fn test_missing_artifact_fails_regardless_of_copy_quality() {
    let gate = ListingGate::default();
    let record = well_formed_record("p-3", "Landing Page Prompt Pack");
    let inspection = ArtifactInspection::absent("no artifact reference on record");
    let result = gate.score(&record, &inspection);

    assert!(result.fail_reasons.contains(&FailReason::ArtifactMissing));
    assert_eq!(result.score, 50);
    assert_eq!(result.status, QaStatus::Failed);
}

#[test]
fn test_missing_artifact_stacks_with_other_penalties() {
    let gate = ListingGate::default();
    let mut record = well_formed_record("p-4", "Landing Page Prompt Pack");
    record.cover_url = None; // -25 on top of -50
    let result = gate.score(&record, &ArtifactInspection::absent("none"));

    assert!(result.score <= 50);
    assert_eq!(result.score, 25);
    assert_eq!(result.status, QaStatus::Failed);
}

// =============================================================================
// Score-only soft penalty
// =============================================================================

#[test]
fn test_setup_language_deducts_without_a_fail_reason() {
    let gate = ListingGate::default();
    // 201 chars, has "includes", never mentions setup, steps, or how-to
    let description = "This pack includes forty curated prompts for landing pages, \
all tuned for conversion copy, plus hooks, offers, FAQs, objection handling, and \
subject lines, with notes on tone for every single template.";
    assert!(description.len() >= 200);
    let mut record = well_formed_record("p-5", "Landing Page Prompt Pack");
    record.description = description.to_string();
    let result = gate.score(&record, &healthy_inspection());

    assert_eq!(result.score, 95);
    assert!(result.fail_reasons.is_empty());
    assert_eq!(result.status, QaStatus::Passed);
    assert!(result
        .checks
        .iter()
        .any(|check| check.name == "setup_language" && check.status == CheckStatus::Soft));
}

// =============================================================================
// Inspection-driven penalties
// =============================================================================

#[test]
fn test_small_artifact_and_missing_readme_stack() {
    let gate = ListingGate::default();
    let record = well_formed_record("p-6", "Landing Page Prompt Pack");
    let inspection = ArtifactInspection {
        present: true,
        size_bytes: Some(100),
        too_small: true,
        has_readme: Some(false),
        missing_readme: true,
        detected_count: Some(40),
        ..ArtifactInspection::default()
    };
    let result = gate.score(&record, &inspection);

    assert_eq!(result.score, 60);
    assert_eq!(
        result.fail_reasons,
        vec![FailReason::ArtifactTooSmall, FailReason::ReadmeMissing]
    );
}

#[test]
fn test_count_mismatch_beyond_drift() {
    let gate = ListingGate::default();
    let record = well_formed_record("p-7", "Landing Page Prompt Pack");
    let mut inspection = healthy_inspection();
    inspection.detected_count = Some(30); // drift 10 > 2
    let result = gate.score(&record, &inspection);

    assert_eq!(result.fail_reasons, vec![FailReason::PromptCountMismatch]);
    assert_eq!(result.score, 70);
}

#[test]
fn test_banned_claims_block() {
    let gate = ListingGate::default();
    let mut record = well_formed_record("p-8", "Landing Page Prompt Pack");
    record.description = format!("{} Guaranteed profit for every buyer.", GOOD_DESCRIPTION);
    let result = gate.score(&record, &healthy_inspection());

    assert!(result.fail_reasons.contains(&FailReason::BannedClaims));
    assert_eq!(result.status, QaStatus::Failed);
}

// =============================================================================
// Determinism and the async entry point
// =============================================================================

#[tokio::test]
async fn test_evaluate_is_deterministic_apart_from_timestamp() {
    let gate = ListingGate::default();
    let record = well_formed_record("p-9", "Landing Page Prompt Pack");
    let inspector = StaticInspector(healthy_inspection());

    let first = gate.evaluate(&record, &inspector).await.unwrap();
    let second = gate.evaluate(&record, &inspector).await.unwrap();

    assert_eq!(first.score, second.score);
    assert_eq!(first.status, second.status);
    assert_eq!(first.fail_reasons, second.fail_reasons);
    assert_eq!(first.concept_key, second.concept_key);
}

#[tokio::test]
async fn test_blank_id_is_a_contract_error() {
    let gate = ListingGate::default();
    let record = ProductRecord::new("  ", "Landing Page Prompt Pack", GOOD_DESCRIPTION);
    let inspector = StaticInspector(healthy_inspection());

    let err = gate.evaluate(&record, &inspector).await.unwrap_err();
    assert!(err.to_string().starts_with("CONTRACT/"));
}

#[tokio::test]
async fn test_result_details_carry_the_inspection() {
    let gate = ListingGate::default();
    let record = well_formed_record("p-10", "Landing Page Prompt Pack");
    let inspector = StaticInspector(healthy_inspection());

    let result = gate.evaluate(&record, &inspector).await.unwrap();
    let details = result.details.unwrap();
    assert_eq!(details["artifact"]["present"], serde_json::json!(true));
    assert_eq!(details["artifact"]["detected_count"], serde_json::json!(40));
}

// =============================================================================
// Profile loading
// =============================================================================

#[test]
fn test_profile_file_roundtrip() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap();
    let yaml = std::fs::read_to_string(workspace_root.join("profiles/strict.yaml")).unwrap();
    let profile = GateProfile::from_yaml(&yaml).unwrap();

    assert_eq!(profile.name, "strict@1.0");
    assert_eq!(profile.passing_score, 90);
    assert_eq!(profile.inspector.min_artifact_bytes, 4096);
}
