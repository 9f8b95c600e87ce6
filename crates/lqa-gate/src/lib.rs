//! LQA Gate: deterministic quality scoring for product listings.
//!
//! This crate evaluates a listing against a fixed rubric and produces a
//! verdict: a score in [0,100], a set of canonical fail reasons, pass/fail,
//! and the normalized concept key used for duplicate grouping.
//!
//! # Example
//!
//! ```ignore
//! use lqa_gate::ListingGate;
//! use lqa_artifact::{FsInspector, InspectorConfig};
//!
//! let gate = ListingGate::for_mode("standard");
//! let inspector = FsInspector::new(gate.profile().inspector.clone())?;
//!
//! let result = gate.evaluate(&record, &inspector).await?;
//! println!("{:?} (score: {})", result.status, result.score);
//! ```

pub mod profile;
pub mod result;
pub mod rubric;

pub use profile::GateProfile;
pub use result::{CheckStatus, FailReason, QaResult, QaStatus, RubricCheck};
pub use rubric::ListingGate;

use lqa_artifact::{ArtifactInspection, ArtifactInspector};
use lqa_core::{GateError, ProductRecord};

/// Evaluate a record with the default profile and the given inspector.
pub async fn evaluate_product(
    record: &ProductRecord,
    inspector: &dyn ArtifactInspector,
) -> Result<QaResult, GateError> {
    ListingGate::default().evaluate(record, inspector).await
}

/// Check whether a record would pass the gate for a given mode, scoring a
/// pre-obtained inspection.
pub fn would_pass(record: &ProductRecord, inspection: &ArtifactInspection, mode: &str) -> bool {
    let result = ListingGate::for_mode(mode).score(record, inspection);
    result.status == QaStatus::Passed
}
