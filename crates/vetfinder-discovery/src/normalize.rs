//! Normalization from raw provider places to [`ClinicRecord`].
//!
//! Name and address are required; everything else is copied through when
//! present and left `None` otherwise. Defaults such as "no rating means 0"
//! belong to ranking, not to the record.

use vetfinder_core::{ClinicRecord, GeoPoint};
use vetfinder_places::RawPlace;

use crate::error::NormalizeError;

/// Converts one raw place into a [`ClinicRecord`].
///
/// # Errors
///
/// Returns [`NormalizeError::MalformedRecord`] if the display name or the
/// formatted address is missing or blank.
pub fn normalize_place(place: RawPlace) -> Result<ClinicRecord, NormalizeError> {
    let name = non_blank(place.display_name_text())
        .ok_or(NormalizeError::MalformedRecord { field: "displayName" })?;
    let address = non_blank(place.formatted_address.as_deref())
        .ok_or(NormalizeError::MalformedRecord {
            field: "formattedAddress",
        })?;

    let hours = place
        .opening_hours()
        .map(|hours| hours.weekday_descriptions.join("; "))
        .filter(|joined| !joined.is_empty());

    Ok(ClinicRecord {
        name,
        address,
        rating: place.rating,
        rating_count: place.user_rating_count,
        phone: place.international_phone_number,
        location: place.location.map(|loc| GeoPoint {
            lat: loc.latitude,
            lng: loc.longitude,
        }),
        website: place.website_uri,
        hours,
    })
}

/// Normalizes every place, dropping the malformed ones.
///
/// Provider order is preserved for the records that survive.
#[must_use]
pub fn normalize_places(places: Vec<RawPlace>) -> Vec<ClinicRecord> {
    places
        .into_iter()
        .enumerate()
        .filter_map(|(index, place)| match normalize_place(place) {
            Ok(record) => Some(record),
            Err(error) => {
                tracing::debug!(index, %error, "dropping malformed place");
                None
            }
        })
        .collect()
}

/// Removes repeated clinics (same name and address), keeping the first.
///
/// Records from the initial search precede the expanded ones, so an
/// initial record always wins over its expanded-search duplicate.
#[must_use]
pub fn dedupe_records(records: Vec<ClinicRecord>) -> Vec<ClinicRecord> {
    let mut kept: Vec<ClinicRecord> = Vec::with_capacity(records.len());
    for record in records {
        if kept.iter().any(|existing| existing.same_clinic(&record)) {
            tracing::debug!(name = %record.name, "dropping duplicate clinic");
            continue;
        }
        kept.push(record);
    }
    kept
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
