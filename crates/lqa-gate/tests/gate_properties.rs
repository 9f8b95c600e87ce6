//! Property tests over randomized records: the score is always bounded and
//! the pass verdict is exactly "score at threshold and no fail reasons".

use lqa_artifact::ArtifactInspection;
use lqa_core::ProductRecord;
use lqa_gate::{ListingGate, QaStatus};
use proptest::option;
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(256))]
    #[test]
    fn score_bounded_and_verdict_consistent(
        title in ".{0,48}",
        description in ".{0,400}",
        price in option::of(-50.0_f64..500.0),
        prompt_count in option::of(0_u32..300),
        cover in option::of("[a-z:/.placeholder-]{0,40}"),
        present in any::<bool>(),
        too_small in any::<bool>(),
        missing_readme in any::<bool>(),
        detected in option::of(0_u32..300),
    ) {
        let mut record = ProductRecord::new("p-prop", title, description);
        record.price = price;
        record.prompt_count = prompt_count;
        record.cover_url = cover;

        let inspection = ArtifactInspection {
            present,
            too_small,
            missing_readme,
            detected_count: detected,
            ..ArtifactInspection::default()
        };

        let gate = ListingGate::default();
        let result = gate.score(&record, &inspection);

        prop_assert!(result.score <= 100);
        let passed = result.status == QaStatus::Passed;
        prop_assert_eq!(
            passed,
            result.score >= gate.profile().passing_score && result.fail_reasons.is_empty()
        );
    }

    #[test]
    fn scoring_is_deterministic(
        title in ".{0,48}",
        description in ".{0,300}",
        present in any::<bool>(),
    ) {
        let record = ProductRecord::new("p-det", title, description);
        let inspection = ArtifactInspection { present, ..ArtifactInspection::default() };
        let gate = ListingGate::default();

        let first = gate.score(&record, &inspection);
        let second = gate.score(&record, &inspection);

        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.status, second.status);
        prop_assert_eq!(first.fail_reasons, second.fail_reasons);
        prop_assert_eq!(first.concept_key, second.concept_key);
    }
}
