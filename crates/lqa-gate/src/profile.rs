//! Gate profiles: thresholds for standard and strict review.
use lqa_artifact::InspectorConfig;
use lqa_core::GateError;
use serde::{Deserialize, Serialize};

/// Thresholds consumed by the rubric. Deltas per check are fixed; profiles
/// move the boundaries the checks compare against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateProfile {
    /// Profile name (ex: "standard@1.0")
    pub name: String,

    /// Minimum score required to pass (a listing also needs zero fail reasons)
    pub passing_score: u32,

    /// Minimum trimmed title length
    pub min_title_chars: usize,

    /// Minimum trimmed description length
    pub min_description_chars: usize,

    /// Allowed drift between the declared and detected content count
    pub max_count_drift: u32,

    /// Options forwarded to the artifact inspector
    pub inspector: InspectorConfig,
}

impl GateProfile {
    /// The production thresholds.
    pub fn standard() -> Self {
        Self {
            name: "standard@1.0".to_string(),
            passing_score: 80,
            min_title_chars: 12,
            min_description_chars: 200,
            max_count_drift: 2,
            inspector: InspectorConfig::default(),
        }
    }

    /// Tightened thresholds for curated storefront sections.
    pub fn strict() -> Self {
        Self {
            name: "strict@1.0".to_string(),
            passing_score: 90,
            min_title_chars: 12,
            min_description_chars: 300,
            max_count_drift: 0,
            inspector: InspectorConfig {
                min_artifact_bytes: 4096,
                require_readme: true,
                probe_timeout_secs: 5,
            },
        }
    }

    /// Load a profile from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, GateError> {
        serde_yaml::from_str(yaml).map_err(|e| GateError::Config(e.to_string()))
    }

    /// Get profile by mode name.
    pub fn for_mode(mode: &str) -> Self {
        match mode {
            "strict" => Self::strict(),
            _ => Self::standard(),
        }
    }
}

impl Default for GateProfile {
    fn default() -> Self {
        Self::standard()
    }
}
