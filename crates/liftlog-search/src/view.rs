//! Search state for a list screen.

use liftlog_model::Workout;

use crate::filter::NameFilter;

/// The full workout list together with the current search query.
///
/// The full list is kept intact; [`WorkoutSearch::visible`] always projects
/// from it, so clearing the query brings every workout back.
#[derive(Debug, Clone, Default)]
pub struct WorkoutSearch {
    all: Vec<Workout>,
    query: String,
    filter: Option<NameFilter>,
}

impl WorkoutSearch {
    pub fn new(all: Vec<Workout>) -> Self {
        Self {
            all,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The full, unfiltered list.
    pub fn all(&self) -> &[Workout] {
        &self.all
    }

    /// Workouts matching the current query, in original order.
    pub fn visible(&self) -> Vec<&Workout> {
        match &self.filter {
            Some(filter) => filter.apply(&self.all),
            None => self.all.iter().collect(),
        }
    }

    /// Change the query.
    ///
    /// Returns whether the visible workouts differ from before, so callers
    /// can skip redrawing when they don't.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        let filter = NameFilter::new(&query);
        let filter = (!filter.is_empty()).then_some(filter);

        let before = self.visible_positions();
        self.query = query;
        self.filter = filter;
        before != self.visible_positions()
    }

    /// Swap in a freshly loaded list, keeping the query.
    pub fn replace_all(&mut self, all: Vec<Workout>) {
        self.all = all;
    }

    fn visible_positions(&self) -> Vec<usize> {
        self.all
            .iter()
            .enumerate()
            .filter(|(_, w)| self.filter.as_ref().is_none_or(|f| f.matches(&w.name)))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search() -> WorkoutSearch {
        WorkoutSearch::new(vec![
            Workout::new("Leg Day"),
            Workout::new("Push"),
            Workout::new("Arm day"),
        ])
    }

    fn visible_names(search: &WorkoutSearch) -> Vec<&str> {
        search.visible().into_iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn narrowing_and_clearing() {
        let mut search = search();
        assert_eq!(visible_names(&search).len(), 3);

        assert!(search.set_query("day"));
        assert_eq!(visible_names(&search), ["Leg Day", "Arm day"]);
        assert_eq!(search.all().len(), 3);

        assert!(search.set_query(""));
        assert_eq!(visible_names(&search), ["Leg Day", "Push", "Arm day"]);
    }

    #[test]
    fn unchanged_results_report_false() {
        let mut search = search();
        assert!(search.set_query("d"));
        // "da" still matches the same two workouts.
        assert!(!search.set_query("da"));
        assert_eq!(search.query(), "da");
        assert!(!search.set_query("DA"));
    }

    #[test]
    fn replace_all_reapplies_query() {
        let mut search = search();
        search.set_query("push");
        search.replace_all(vec![
            Workout::new("Push A"),
            Workout::new("Pull A"),
            Workout::new("Push B"),
        ]);
        assert_eq!(visible_names(&search), ["Push A", "Push B"]);
    }
}
