//! Data Model: ProductRecord, ListingStatus, DuplicateSummary
use serde::{Deserialize, Serialize};

/// Lifecycle state of a listing in the upstream store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Pending,
    Draft,
    Published,
    Failed,
}

/// A product listing as read from the upstream store.
///
/// The gate treats records as read-only. Missing or malformed fields are
/// scoring inputs, never errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Opaque identifier (ex: a store document id)
    pub id: String,
    pub title: String,
    pub description: String,
    /// Listed price in `currency`
    pub price: Option<f64>,
    /// ex: "prompt_pack", "automation_kit", "bundle"
    pub product_type: Option<String>,
    /// Expected number of discrete content items inside the artifact
    pub prompt_count: Option<u32>,
    /// Cover image URL
    pub cover_url: Option<String>,
    /// Local path of the deliverable file
    pub artifact_path: Option<String>,
    /// Remote URL of the deliverable file
    pub artifact_url: Option<String>,
    /// Group linkage; suppresses duplicate flagging across the group
    pub product_group_id: Option<String>,
    /// Variant linkage; suppresses duplicate flagging against the parent
    pub variant_of: Option<String>,
    pub status: Option<ListingStatus>,
    pub currency: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductRecord {
    /// A record with only the identity fields set. Everything else starts
    /// empty and is filled in by the caller.
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            price: None,
            product_type: None,
            prompt_count: None,
            cover_url: None,
            artifact_path: None,
            artifact_url: None,
            product_group_id: None,
            variant_of: None,
            status: None,
            currency: None,
            tags: Vec::new(),
        }
    }

    /// Whether the record declares a group or variant linkage.
    pub fn has_linkage(&self) -> bool {
        self.product_group_id.is_some() || self.variant_of.is_some()
    }
}

/// Bounded projection of a listing returned by duplicate lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateSummary {
    pub id: String,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub status: Option<ListingStatus>,
}
