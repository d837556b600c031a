//! Rewards colleges that admit through exams the student has taken.

use crate::exams::StudentSignals;
use crate::traits::ScoringFactor;
use catalog::CollegeRecord;

const POINTS_PER_MATCH: f64 = 15.0;
const MAX_POINTS: f64 = 40.0;

/// Counts matches between the college's accepted exams and the student's
/// alias set.
///
/// ## Algorithm
/// For every exam the college lists (lower-cased):
/// 1. +1 if it equals one of the student's aliases exactly
/// 2. +1 more if any alias contains it or is contained in it
///
/// An exact match also satisfies step 2, so it counts twice. Exam strings
/// are compared as listed, without trimming: a padded name is only a
/// substring match, and an empty entry is contained in every alias. Each
/// match is worth 15 points and the total is capped at 40.
pub struct ExamMatchFactor;

impl ExamMatchFactor {
    /// Raw match count before weighting
    pub fn match_count(college: &CollegeRecord, signals: &StudentSignals) -> u32 {
        let aliases = signals.exam_aliases();
        if aliases.is_empty() {
            return 0;
        }

        let mut count = 0;
        for exam in &college.entrance_exams {
            let exam = exam.to_lowercase();
            if aliases.contains(&exam) {
                count += 1;
            }
            if aliases
                .iter()
                .any(|alias| exam.contains(alias.as_str()) || alias.contains(exam.as_str()))
            {
                count += 1;
            }
        }
        count
    }
}

impl ScoringFactor for ExamMatchFactor {
    fn name(&self) -> &'static str {
        "exam_match"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn score(&self, college: &CollegeRecord, signals: &StudentSignals) -> f64 {
        (Self::match_count(college, signals) as f64 * POINTS_PER_MATCH).min(MAX_POINTS)
    }
}
