//! Local itinerary file storage.
//!
//! Manages storing and retrieving itineraries as .json files on disk,
//! one file per record. The record id doubles as the storage key; the
//! adapter owns the id -> path mapping.

mod create;
mod delete;
mod list;
mod update;

pub use create::{create, sanitize};
pub use delete::delete;
pub use list::list;
pub use update::update;

use crate::record::Itinerary;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the storage adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No itinerary found with id '{0}'")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Create the itinerary directory if it doesn't exist yet.
/// No-op when it's already there.
pub fn ensure_dir(dir: &Path) -> StoreResult<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Where the record with this id lives on disk.
fn path_for(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{id}.json"))
}

/// Read and parse a single record by id.
pub fn get(dir: &Path, id: &str) -> StoreResult<Itinerary> {
    let path = path_for(dir, id);
    if !path.exists() {
        return Err(StoreError::NotFound(id.to_string()));
    }
    let content = std::fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_record(dir: &Path, record: &Itinerary) -> StoreResult<()> {
    let content = serde_json::to_string_pretty(record)?;
    std::fs::write(path_for(dir, &record.id), content)?;
    Ok(())
}
