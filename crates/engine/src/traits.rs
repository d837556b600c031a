//! Core traits for the scoring pipeline.
//!
//! Each ranking signal is a `ScoringFactor`. The `Scorer` sums whatever
//! factors it was built with, so a factor can be added, dropped or tested
//! on its own without touching the others.

use crate::exams::StudentSignals;
use catalog::CollegeRecord;

/// One independently capped contribution to a college's score.
///
/// ## Contract
/// - `score` never fails: missing or malformed college data yields `0.0`
/// - results lie in `0.0..=max_points()`; the `Scorer` clamps anything
///   outside that range (NaN included) before summing
/// - `Send + Sync` so colleges can be scored in parallel
pub trait ScoringFactor: Send + Sync {
    /// Stable identifier used in score breakdowns
    fn name(&self) -> &'static str;

    /// Ceiling of this factor's contribution
    fn max_points(&self) -> f64;

    /// Points this college earns for the student's signals
    fn score(&self, college: &CollegeRecord, signals: &StudentSignals) -> f64;
}
