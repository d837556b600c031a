//! Rewards colleges with strong placements and ratings.

use crate::exams::StudentSignals;
use crate::traits::ScoringFactor;
use catalog::CollegeRecord;

const PLACEMENT_POINTS: f64 = 15.0;
const RATING_POINTS: f64 = 10.0;

/// Two independent sub-scores, summed:
/// - placement: `placement_percent / 100 * 15`, at most 15
/// - rating: `rating / 5 * 10`, at most 10
///
/// A missing value contributes nothing to its sub-score. Inputs are clamped
/// to 0-100 and 0-5 so neither sub-score can go negative or overshoot.
pub struct QualityFactor;

impl QualityFactor {
    pub fn placement_points(college: &CollegeRecord) -> f64 {
        college
            .placement_percent
            .filter(|p| p.is_finite())
            .map(|p| (p.clamp(0.0, 100.0) / 100.0 * PLACEMENT_POINTS).min(PLACEMENT_POINTS))
            .unwrap_or(0.0)
    }

    pub fn rating_points(college: &CollegeRecord) -> f64 {
        college
            .rating
            .filter(|r| r.is_finite())
            .map(|r| r.clamp(0.0, 5.0) / 5.0 * RATING_POINTS)
            .unwrap_or(0.0)
    }
}

impl ScoringFactor for QualityFactor {
    fn name(&self) -> &'static str {
        "quality"
    }

    fn max_points(&self) -> f64 {
        PLACEMENT_POINTS + RATING_POINTS
    }

    fn score(&self, college: &CollegeRecord, _signals: &StudentSignals) -> f64 {
        Self::placement_points(college) + Self::rating_points(college)
    }
}
