//! Ranking of clinic records.
//!
//! Records are ordered by rating, highest first, with an absent rating
//! counting as `0`. Among records of equal rating, those that carry a
//! location are ordered by the squared magnitude of their coordinates
//! (`lat² + lng²`, smallest first). Records without a location keep their
//! position, so the result is deterministic for identical input.

use std::cmp::Ordering;

use vetfinder_core::ClinicRecord;

/// Returns `records` in ranked order.
#[must_use]
pub fn rank_records(mut records: Vec<ClinicRecord>) -> Vec<ClinicRecord> {
    // Stable: equal ratings keep provider order.
    records.sort_by(compare_rating_desc);

    let mut start = 0;
    while start < records.len() {
        let rating = records[start].effective_rating();
        let run = records[start..]
            .iter()
            .take_while(|r| r.effective_rating().total_cmp(&rating).is_eq())
            .count();
        order_by_proximity(&mut records[start..start + run]);
        start += run;
    }

    records
}

fn compare_rating_desc(a: &ClinicRecord, b: &ClinicRecord) -> Ordering {
    b.effective_rating().total_cmp(&a.effective_rating())
}

/// Sorts the located records of an equal-rating run among themselves and
/// writes them back into the slots located records occupied.
fn order_by_proximity(run: &mut [ClinicRecord]) {
    let slots: Vec<usize> = run
        .iter()
        .enumerate()
        .filter(|(_, record)| record.location.is_some())
        .map(|(index, _)| index)
        .collect();
    if slots.len() < 2 {
        return;
    }

    let mut located: Vec<ClinicRecord> = slots.iter().map(|&i| run[i].clone()).collect();
    located.sort_by(|a, b| proximity(a).total_cmp(&proximity(b)));

    for (slot, record) in slots.into_iter().zip(located) {
        run[slot] = record;
    }
}

fn proximity(record: &ClinicRecord) -> f64 {
    record
        .location
        .as_ref()
        .map_or(f64::INFINITY, vetfinder_core::GeoPoint::squared_magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{names, record, record_at};

    #[test]
    fn orders_by_rating_descending() {
        let ranked = rank_records(vec![
            record("four", Some(4.0)),
            record("five", Some(5.0)),
            record("three", Some(3.0)),
        ]);
        assert_eq!(names(&ranked), vec!["five", "four", "three"]);
    }

    #[test]
    fn absent_rating_ranks_as_zero_but_stays_absent() {
        let ranked = rank_records(vec![
            record("unrated", None),
            record("low", Some(0.5)),
        ]);
        assert_eq!(names(&ranked), vec!["low", "unrated"]);
        assert_eq!(ranked[1].rating, None);
    }

    #[test]
    fn equal_ratings_break_ties_by_squared_magnitude() {
        let ranked = rank_records(vec![
            record_at("far", Some(4.5), 2.0, 2.0),
            record_at("near", Some(4.5), 1.0, 1.0),
        ]);
        assert_eq!(names(&ranked), vec!["near", "far"]);
    }

    #[test]
    fn negative_coordinates_use_magnitude_not_sign() {
        let ranked = rank_records(vec![
            record_at("a", Some(4.0), 47.6, -122.3),
            record_at("b", Some(4.0), -1.0, -1.0),
        ]);
        assert_eq!(names(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn unlocated_records_keep_their_position_within_a_tie() {
        let ranked = rank_records(vec![
            record_at("far", Some(4.0), 3.0, 3.0),
            record("unlocated", Some(4.0)),
            record_at("near", Some(4.0), 1.0, 0.0),
        ]);
        assert_eq!(names(&ranked), vec!["near", "unlocated", "far"]);
    }

    #[test]
    fn ties_without_locations_preserve_input_order() {
        let ranked = rank_records(vec![
            record("first", Some(4.0)),
            record("second", Some(4.0)),
            record("third", Some(4.0)),
        ]);
        assert_eq!(names(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn location_never_overrides_rating() {
        let ranked = rank_records(vec![
            record_at("close-but-worse", Some(3.0), 0.0, 0.0),
            record_at("far-but-better", Some(4.9), 80.0, 170.0),
        ]);
        assert_eq!(names(&ranked), vec!["far-but-better", "close-but-worse"]);
    }

    #[test]
    fn ranking_is_repeatable() {
        let input = vec![
            record_at("a", Some(4.0), 2.0, 2.0),
            record("b", None),
            record("c", Some(4.0)),
            record_at("d", Some(4.0), 1.0, 1.0),
            record("e", Some(5.0)),
        ];
        let first = rank_records(input.clone());
        let second = rank_records(input);
        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["e", "d", "c", "a", "b"]);
    }

    #[test]
    fn empty_input_ranks_to_empty() {
        assert!(rank_records(Vec::new()).is_empty());
    }
}
