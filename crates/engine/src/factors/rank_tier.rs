//! Bonus for NIRF-ranked colleges.

use crate::exams::StudentSignals;
use crate::traits::ScoringFactor;
use catalog::CollegeRecord;

const MAX_POINTS: f64 = 10.0;

/// Tiered bonus by NIRF rank: top 10 -> 10, top 50 -> 7, top 100 -> 4,
/// any other rank -> 2, unranked -> 0. A rank of 0 is read as unranked.
pub struct RankTierFactor;

impl ScoringFactor for RankTierFactor {
    fn name(&self) -> &'static str {
        "rank_tier"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn score(&self, college: &CollegeRecord, _signals: &StudentSignals) -> f64 {
        match college.nirf_rank {
            None | Some(0) => 0.0,
            Some(1..=10) => 10.0,
            Some(11..=50) => 7.0,
            Some(51..=100) => 4.0,
            Some(_) => 2.0,
        }
    }
}
