//! In-memory concept-key index.
//!
//! Backs the duplicate lookup in tests and single-process deployments; a
//! database-backed store implements the same trait in larger setups.
use crate::DuplicateStore;
use async_trait::async_trait;
use lqa_core::{DuplicateSummary, GateError, ProductRecord};
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct MemoryIndex {
    entries: RwLock<HashMap<String, Vec<DuplicateSummary>>>,
}

impl MemoryIndex {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Index a record under its concept key. Re-inserting the same id
    /// replaces the previous summary.
    pub async fn insert(&self, record: &ProductRecord) {
        let title = record.title.trim();
        let key = lqa_text::concept_key(if title.is_empty() { "untitled" } else { title });
        let summary = DuplicateSummary {
            id: record.id.clone(),
            title: Some(record.title.clone()),
            price: record.price,
            status: record.status,
        };

        let mut entries = self.entries.write().await;
        let bucket = entries.entry(key).or_default();
        bucket.retain(|existing| existing.id != summary.id);
        bucket.push(summary);
    }

    /// Number of distinct concept keys currently indexed.
    pub async fn key_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MemoryIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DuplicateStore for MemoryIndex {
    async fn find_by_concept_key(
        &self,
        concept_key: &str,
        exclude_id: &str,
        limit: usize,
    ) -> Result<Vec<DuplicateSummary>, GateError> {
        let entries = self.entries.read().await;
        let matches: Vec<DuplicateSummary> = entries
            .get(concept_key)
            .map(|bucket| {
                bucket
                    .iter()
                    .filter(|summary| summary.id != exclude_id)
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        tracing::debug!(key = concept_key, hits = matches.len(), "duplicate lookup");
        Ok(matches)
    }
}
