//! Update record files in the itinerary directory.

use super::{get, write_record, StoreResult};
use crate::record::{Itinerary, ItineraryDraft};
use chrono::Utc;
use std::path::Path;

/// Overwrite the record at `id` with the draft's fields.
///
/// Reads the existing record first so `id` and `createdAt` survive the
/// rewrite, then refreshes `updatedAt`. Fails with `NotFound` if no record
/// with that id exists.
pub fn update(dir: &Path, id: &str, draft: ItineraryDraft) -> StoreResult<Itinerary> {
    let existing = get(dir, id)?;

    let record = Itinerary {
        id: existing.id,
        trip_name: draft.trip_name,
        destination: draft.destination,
        date_time: draft.date_time,
        activities: draft.activities,
        created_at: existing.created_at,
        updated_at: Some(Utc::now()),
        weather_forecast: draft.weather_forecast,
    };

    write_record(dir, &record)?;
    Ok(record)
}
