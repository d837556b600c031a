//! Rewards colleges in the student's home state.

use crate::exams::StudentSignals;
use crate::traits::ScoringFactor;
use catalog::CollegeRecord;

const MAX_POINTS: f64 = 15.0;

/// All-or-nothing: full points when `college.state` equals the home state
/// ignoring case. There is no partial credit for neighbouring regions.
pub struct StateProximityFactor;

impl ScoringFactor for StateProximityFactor {
    fn name(&self) -> &'static str {
        "state_proximity"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn score(&self, college: &CollegeRecord, signals: &StudentSignals) -> f64 {
        match (college.state.as_deref(), signals.home_state()) {
            (Some(state), Some(home)) if state.to_lowercase() == home => MAX_POINTS,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::test_support::signals_for;

    fn college_in(state: Option<&str>) -> CollegeRecord {
        CollegeRecord {
            state: state.map(String::from),
            ..CollegeRecord::new("c", "College")
        }
    }

    #[test]
    fn test_same_state_ignoring_case() {
        let signals = signals_for(&[], Some("karnataka"));
        assert_eq!(StateProximityFactor.score(&college_in(Some("Karnataka")), &signals), 15.0);
    }

    #[test]
    fn test_different_or_missing_state() {
        let signals = signals_for(&[], Some("Karnataka"));
        assert_eq!(StateProximityFactor.score(&college_in(Some("Kerala")), &signals), 0.0);
        assert_eq!(StateProximityFactor.score(&college_in(None), &signals), 0.0);

        let no_home = signals_for(&[], None);
        assert_eq!(StateProximityFactor.score(&college_in(Some("Karnataka")), &no_home), 0.0);
    }
}
