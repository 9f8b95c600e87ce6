//! LQA Dedup: concept-key duplicate lookup.
//!
//! Listings that normalize to the same concept key are candidate duplicates.
//! The store answers bounded lookups; deciding which matches are problematic
//! (group and variant linkage) stays with the caller, and
//! [`flag_duplicates`] is that caller-side policy.

pub mod index;

pub use index::MemoryIndex;

use async_trait::async_trait;
use lqa_core::{DuplicateSummary, GateError, ProductRecord};

/// Upper bound on lookup results.
pub const DEFAULT_LOOKUP_LIMIT: usize = 10;

/// Read-side interface to a persistent concept-key index.
#[async_trait]
pub trait DuplicateStore: Send + Sync {
    /// Listings sharing `concept_key`, excluding `exclude_id`, capped at
    /// `limit` summaries.
    async fn find_by_concept_key(
        &self,
        concept_key: &str,
        exclude_id: &str,
        limit: usize,
    ) -> Result<Vec<DuplicateSummary>, GateError>;
}

/// Look up problematic duplicates for a record.
///
/// Records that declare a group or variant linkage are intended siblings of
/// their matches, so lookups for them return nothing.
pub async fn flag_duplicates(
    record: &ProductRecord,
    store: &dyn DuplicateStore,
) -> Result<Vec<DuplicateSummary>, GateError> {
    if record.has_linkage() {
        return Ok(Vec::new());
    }

    let title = record.title.trim();
    let key = lqa_text::concept_key(if title.is_empty() { "untitled" } else { title });
    store
        .find_by_concept_key(&key, &record.id, DEFAULT_LOOKUP_LIMIT)
        .await
}
