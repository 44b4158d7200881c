//! Delete record files from the itinerary directory.

use super::{path_for, StoreError, StoreResult};
use std::path::Path;

/// Delete the record at `id`.
///
/// Fails with `NotFound` if no record with that id exists; storage is left
/// unchanged on failure. No tombstone is kept.
pub fn delete(dir: &Path, id: &str) -> StoreResult<()> {
    let path = path_for(dir, id);

    if !path.exists() {
        return Err(StoreError::NotFound(id.to_string()));
    }

    std::fs::remove_file(&path)?;
    Ok(())
}
