use liftlog_model::Workout;

/// Case-insensitive substring matcher for workout names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    needle: String,
}

impl NameFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// An empty query matches every name.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || name.to_lowercase().contains(&self.needle)
    }

    /// Matching workouts, in their original order.
    pub fn apply<'a>(&self, workouts: &'a [Workout]) -> Vec<&'a Workout> {
        workouts.iter().filter(|w| self.matches(&w.name)).collect()
    }
}

/// Workouts whose name contains `query`, ignoring case, in original order.
pub fn filter_by_name<'a>(workouts: &'a [Workout], query: &str) -> Vec<&'a Workout> {
    NameFilter::new(query).apply(workouts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Vec<Workout> {
        names.iter().map(|n| Workout::new(*n)).collect()
    }

    fn names<'a>(workouts: &[&'a Workout]) -> Vec<&'a str> {
        workouts.iter().map(|w| w.name.as_str()).collect()
    }

    #[test]
    fn matches_ignore_case_and_keep_order() {
        let workouts = named(&["Leg Day", "Push", "Arm day"]);
        assert_eq!(
            names(&filter_by_name(&workouts, "day")),
            ["Leg Day", "Arm day"]
        );
        assert_eq!(names(&filter_by_name(&workouts, "DAY")), ["Leg Day", "Arm day"]);
    }

    #[test]
    fn empty_query_returns_everything() {
        let workouts = named(&["Leg Day", "Push"]);
        let all = filter_by_name(&workouts, "");
        assert_eq!(all.len(), 2);
        assert!(all.iter().zip(&workouts).all(|(a, b)| *a == b));
    }

    #[test]
    fn substring_anywhere_in_name() {
        let workouts = named(&["Upper A", "Lower B", "Conditioning"]);
        assert_eq!(names(&filter_by_name(&workouts, "er")), ["Upper A", "Lower B"]);
        assert!(filter_by_name(&workouts, "zzz").is_empty());
    }

    #[test]
    fn non_ascii_case_folding() {
        let workouts = named(&["ÜBUNGEN", "Straße"]);
        assert_eq!(names(&filter_by_name(&workouts, "übungen")), ["ÜBUNGEN"]);
        assert_eq!(names(&filter_by_name(&workouts, "STRASSE")).len(), 0);
        assert_eq!(names(&filter_by_name(&workouts, "STRAßE")), ["Straße"]);
    }

    #[test]
    fn whitespace_is_significant() {
        let workouts = named(&["Leg Day", "Legday"]);
        assert_eq!(names(&filter_by_name(&workouts, "g d")), ["Leg Day"]);
    }
}
