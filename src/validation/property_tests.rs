//! Property-Based Tests for Validation Module

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use crate::validation::{
    earliest_apod_date, validate_apod_query_on, validate_rover_query, Rover,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn rover_strategy() -> impl Strategy<Value = Rover> {
    prop::sample::select(Rover::ALL.to_vec())
}

/// Randomly upper-cases ASCII letters.
fn mixed_case(input: &str, mask: u64) -> String {
    input
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if mask >> (i % 64) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_non_pattern_dates_rejected(raw in "[0-9/ a-z-]{0,12}") {
        let bytes = raw.as_bytes();
        let matches_pattern = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        prop_assume!(!matches_pattern);

        let err = validate_apod_query_on(Some(&raw), today()).unwrap_err();
        prop_assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn prop_date_range(offset in -20_000i64..2_000) {
        let date = today() + Duration::days(offset);
        let raw = date.format("%Y-%m-%d").to_string();
        let result = validate_apod_query_on(Some(&raw), today());

        if date > today() || date < earliest_apod_date() {
            prop_assert_eq!(result.unwrap_err().status_code(), 400);
        } else {
            prop_assert_eq!(result.unwrap().date, Some(raw));
        }
    }

    #[test]
    fn prop_unknown_rovers_rejected(name in "[a-z]{1,12}") {
        prop_assume!(Rover::ALL.iter().all(|r| r.as_str() != name));

        let err = validate_rover_query(Some(&name), Some("1"), None, None).unwrap_err();
        prop_assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn prop_valid_rover_camera_pairs_accepted(
        rover in rover_strategy(),
        index in any::<prop::sample::Index>(),
        mask in any::<u64>(),
        sol in 0u32..5_000,
        page in 1u32..100,
    ) {
        let camera = index.get(rover.cameras());
        let query = validate_rover_query(
            Some(&mixed_case(rover.as_str(), mask)),
            Some(&sol.to_string()),
            Some(&mixed_case(camera, mask.rotate_left(7))),
            Some(&page.to_string()),
        ).unwrap();

        prop_assert_eq!(query.rover, rover);
        prop_assert_eq!(query.camera.as_deref(), Some(*camera));
        prop_assert_eq!(query.sol, sol);
        prop_assert_eq!(query.page, page);
    }

    #[test]
    fn prop_mismatched_cameras_rejected(
        rover in rover_strategy(),
        other in rover_strategy(),
        index in any::<prop::sample::Index>(),
    ) {
        let camera = index.get(other.cameras());
        prop_assume!(!rover.has_camera(camera));

        let err = validate_rover_query(Some(rover.as_str()), Some("1"), Some(*camera), None)
            .unwrap_err();
        prop_assert_eq!(err.status_code(), 400);
    }
}
