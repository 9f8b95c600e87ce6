//! Remote existence probe.
//!
//! A single HEAD request with the client-level timeout; the body is never
//! downloaded. Remote unreachability must not fail an evaluation, so every
//! outcome is a valid inspection.
use crate::{ArtifactInspection, InspectorConfig};

pub(crate) async fn probe_remote(
    client: &reqwest::Client,
    url: &str,
    config: &InspectorConfig,
) -> ArtifactInspection {
    let mut inspection = ArtifactInspection {
        present: true,
        ..ArtifactInspection::default()
    };

    match client.head(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                inspection.note(format!("remote probe returned status {}", status.as_u16()));
            }
            let declared = response
                .headers()
                .get(reqwest::header::CONTENT_LENGTH)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok());
            match declared {
                Some(length) => {
                    inspection.size_bytes = Some(length);
                    if length < config.min_artifact_bytes {
                        inspection.too_small = true;
                        inspection.note(format!(
                            "artifact too small: {} bytes (min {})",
                            length, config.min_artifact_bytes
                        ));
                    }
                }
                None => inspection.note("remote artifact size unknown".to_string()),
            }
        }
        Err(e) => {
            tracing::debug!(url, error = %e, "remote probe failed");
            inspection.note(format!("remote artifact size unknown: {}", e));
        }
    }

    inspection
}
