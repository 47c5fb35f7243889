use vetfinder_core::ClinicRecord;

/// Picks the highest-rated record; the earliest one wins a tie.
///
/// An absent rating counts as `0`. Returns `None` for an empty slice.
#[must_use]
pub fn recommend(records: &[ClinicRecord]) -> Option<&ClinicRecord> {
    records.iter().fold(None, |best, candidate| match best {
        Some(current)
            if !candidate
                .effective_rating()
                .total_cmp(&current.effective_rating())
                .is_gt() =>
        {
            Some(current)
        }
        _ => Some(candidate),
    })
}
