//! Archive inspection: entry listing, README policy, prompts manifest.
use crate::{content, ArtifactInspection, InspectorConfig};
use std::io::{Cursor, Read};

/// Entry basenames treated as the canonical content manifest.
const MANIFEST_NAMES: [&str; 2] = ["prompts.json", "prompts.txt"];

/// Inspect a zip artifact already loaded into memory.
///
/// Unreadable archives and unparseable manifests leave the affected fields
/// undetermined; they never raise.
pub(crate) fn inspect_zip(bytes: &[u8], config: &InspectorConfig, inspection: &mut ArtifactInspection) {
    let mut archive = match zip::ZipArchive::new(Cursor::new(bytes)) {
        Ok(archive) => archive,
        Err(e) => {
            inspection.note(format!("unreadable zip: {}", e));
            return;
        }
    };

    let names: Vec<String> = archive.file_names().map(str::to_string).collect();

    let has_readme = names.iter().any(|name| name.to_lowercase().contains("readme"));
    inspection.has_readme = Some(has_readme);
    if config.require_readme && !has_readme {
        inspection.missing_readme = true;
        inspection.note("zip missing README".to_string());
    }

    if let Some(manifest) = manifest_entry(&names) {
        let mut buf = Vec::new();
        let readable = archive
            .by_name(&manifest)
            .ok()
            .map(|mut entry| entry.read_to_end(&mut buf).is_ok())
            .unwrap_or(false);
        if readable {
            inspection.detected_count = if manifest.to_lowercase().ends_with(".json") {
                content::count_json(&buf)
            } else {
                Some(content::count_lines(&buf))
            };
        }
    }
}

/// Locate the manifest entry by case-insensitive basename, JSON preferred.
fn manifest_entry(names: &[String]) -> Option<String> {
    for wanted in MANIFEST_NAMES {
        let hit = names.iter().find(|name| {
            name.rsplit('/')
                .next()
                .map(|base| base.eq_ignore_ascii_case(wanted))
                .unwrap_or(false)
        });
        if let Some(name) = hit {
            return Some(name.clone());
        }
    }
    None
}
