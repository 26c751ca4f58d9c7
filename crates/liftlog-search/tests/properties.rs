//! Property tests for workout name search.

use liftlog_model::Workout;
use liftlog_search::filter_by_name;
use proptest::prelude::*;

fn workouts(names: &[String]) -> Vec<Workout> {
    names.iter().map(|n| Workout::new(n.as_str())).collect()
}

proptest! {
    #[test]
    fn empty_query_is_identity(names in prop::collection::vec("[A-Za-z ]{0,12}", 0..8)) {
        let list = workouts(&names);
        let all = filter_by_name(&list, "");
        prop_assert_eq!(all.len(), list.len());
        for (found, original) in all.iter().zip(&list) {
            prop_assert_eq!(*found, original);
        }
    }

    #[test]
    fn result_is_ordered_subsequence(
        names in prop::collection::vec("[A-Za-z ]{0,12}", 0..8),
        query in "[A-Za-z]{0,3}",
    ) {
        let list = workouts(&names);
        let found = filter_by_name(&list, &query);

        // Every hit appears in the input, after the previous hit.
        let mut cursor = 0;
        for hit in &found {
            let offset = list[cursor..]
                .iter()
                .position(|w| w.id == hit.id);
            prop_assert!(offset.is_some());
            cursor += offset.unwrap_or_default() + 1;
        }

        // Exactly the case-insensitive matches are kept.
        let expected = list
            .iter()
            .filter(|w| w.name.to_lowercase().contains(&query.to_lowercase()))
            .count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn query_case_does_not_matter(
        names in prop::collection::vec("[A-Za-z ]{0,12}", 0..8),
        query in "[A-Za-z]{0,3}",
    ) {
        let list = workouts(&names);
        let upper: Vec<_> = filter_by_name(&list, &query.to_uppercase())
            .iter()
            .map(|w| w.id.clone())
            .collect();
        let lower: Vec<_> = filter_by_name(&list, &query.to_lowercase())
            .iter()
            .map(|w| w.id.clone())
            .collect();
        prop_assert_eq!(upper, lower);
    }
}

#[test]
fn leg_day_and_arm_day_both_match_day() {
    let list = vec![Workout::new("Leg Day"), Workout::new("Arm day")];
    let found = filter_by_name(&list, "day");
    assert_eq!(found, vec![&list[0], &list[1]]);
}
