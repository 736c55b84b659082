use crate::{
    error::AccessError,
    test_support::live_set,
    window::{WindowSpec, derive_range},
};
use proptest::prelude::*;

fn arb_window() -> impl Strategy<Value = WindowSpec> {
    prop_oneof![
        Just(WindowSpec::All),
        Just(WindowSpec::First),
        Just(WindowSpec::Last),
        (0usize..24).prop_map(WindowSpec::FirstN),
        (0usize..24).prop_map(WindowSpec::LastN),
    ]
}

fn arb_rows() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..48)
}

proptest! {
    #[test]
    fn derived_range_is_bounded_by_the_backend(spec in arb_window(), raw in 0usize..64) {
        match derive_range(spec, raw) {
            Some(range) => {
                prop_assert!(range.first <= range.last);
                prop_assert!(range.last < raw);
            }
            None => {
                // Empty only for an empty backend or a vacuous request.
                prop_assert!(raw == 0 || spec.is_vacuous());
            }
        }
    }

    #[test]
    fn count_matches_the_range_formula(spec in arb_window(), rows in arb_rows()) {
        let set = live_set(rows, spec);
        match set.logical_range() {
            Some(range) => prop_assert_eq!(set.count(), range.last - range.first + 1),
            None => prop_assert_eq!(set.count(), 0),
        }
    }

    #[test]
    fn cursor_yields_item_at_order_exactly_once(spec in arb_window(), rows in arb_rows()) {
        let set = live_set(rows, spec);
        let count = set.count();
        let mut cursor = set.iter();

        for index in 0..count {
            let expected = set.item_at(index);
            prop_assert!(expected.is_ok());
            prop_assert_eq!(cursor.next(), expected.ok());
        }

        // Unbounded tail of None; exhaustion never resurrects rows.
        for _ in 0..4 {
            prop_assert_eq!(cursor.next(), None);
        }
    }

    #[test]
    fn window_rows_match_the_raw_backend_slice(spec in arb_window(), rows in arb_rows()) {
        let set = live_set(rows.clone(), spec);
        let window = set.to_vec();

        match set.logical_range() {
            Some(range) => prop_assert_eq!(window, rows[range.first..=range.last].to_vec()),
            None => prop_assert!(window.is_empty()),
        }
    }

    #[test]
    fn filtering_twice_with_the_same_predicate_is_stable(rows in arb_rows()) {
        let even = |row: &i64| row % 2 == 0;
        let once = live_set(rows, WindowSpec::All).filtered(&even);
        let twice = once.filtered(&even);

        prop_assert_eq!(once.to_vec(), twice.to_vec());
    }

    #[test]
    fn item_at_count_always_fails_out_of_range(spec in arb_window(), rows in arb_rows()) {
        let set = live_set(rows, spec);
        let count = set.count();

        prop_assert_eq!(
            set.item_at(count),
            Err(AccessError::IndexOutOfRange { index: count, count })
        );
    }

    #[test]
    fn index_of_round_trips_through_item_at(spec in arb_window(), rows in arb_rows()) {
        let set = live_set(rows, spec);

        for index in 0..set.count() {
            let row = set.item_at(index);
            prop_assert!(row.is_ok());
            let row = row.unwrap_or_default();

            // index_of returns the logical index of the FIRST raw occurrence,
            // so looking the row back up must land on an equal row.
            if let Some(found) = set.index_of(&row) {
                prop_assert_eq!(set.item_at(found), Ok(row));
            }
        }
    }
}
