//! Scoring factor implementations.
//!
//! The five factors below make up the standard scorer. Their ceilings sum
//! to 100: exam match 40, state proximity 15, affordability 10, quality
//! 25, rank tier 10.

pub mod affordability;
pub mod exam_match;
pub mod quality;
pub mod rank_tier;
pub mod state_proximity;

// Re-export for convenience
pub use affordability::{AffordabilityFactor, parse_fees};
pub use exam_match::ExamMatchFactor;
pub use quality::QualityFactor;
pub use rank_tier::RankTierFactor;
pub use state_proximity::StateProximityFactor;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::exams::StudentSignals;
    use catalog::{ExamKind, StudentProfile};

    pub fn signals_for(exams: &[ExamKind], home_state: Option<&str>) -> StudentSignals {
        let mut profile = StudentProfile::new();
        for &exam in exams {
            profile = profile.with_exam(exam, "1");
        }
        if let Some(state) = home_state {
            profile = profile.with_home_state(state);
        }
        StudentSignals::from_profile(&profile)
    }
}
