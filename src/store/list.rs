//! List records from the itinerary directory.

use crate::record::Itinerary;
use std::path::Path;
use tracing::warn;

/// List every record in the itinerary directory.
///
/// Unreadable or unparseable entries are skipped individually (logged, not
/// fatal). A missing or unreadable directory yields an empty list rather
/// than an error, so callers can't distinguish "no store yet" from
/// "no records".
pub fn list(dir: &Path) -> Vec<Itinerary> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut records = Vec::new();

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();

        if !path.extension().map(|e| e == "json").unwrap_or(false) {
            continue;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Itinerary>(&content) {
                Ok(record) => records.push(record),
                Err(err) => warn!("Skipping malformed record {}: {}", path.display(), err),
            },
            Err(err) => warn!("Skipping unreadable record {}: {}", path.display(), err),
        }
    }

    records
}
