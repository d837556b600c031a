//! The Scorer combines scoring factors into one relevance score.
//!
//! Factors are chained with the builder pattern, the same way a ranking
//! pipeline adds stages. `Scorer::standard()` is the production setup.

use crate::exams::StudentSignals;
use crate::factors::{
    AffordabilityFactor, ExamMatchFactor, QualityFactor, RankTierFactor, StateProximityFactor,
};
use crate::traits::ScoringFactor;
use catalog::CollegeRecord;

/// Points one factor awarded one college
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScore {
    pub name: &'static str,
    pub points: f64,
    pub max_points: f64,
}

/// Per-factor points for one college, in the scorer's factor order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorScore>,
}

impl ScoreBreakdown {
    /// Sum of all factor points
    pub fn total(&self) -> f64 {
        self.factors.iter().map(|f| f.points).sum()
    }

    /// Points awarded by the named factor, if the scorer has it
    pub fn points(&self, name: &str) -> Option<f64> {
        self.factors.iter().find(|f| f.name == name).map(|f| f.points)
    }
}

/// Sums a set of independently capped factors.
///
/// ## Usage
/// ```ignore
/// let scorer = Scorer::new()
///     .add_factor(ExamMatchFactor)
///     .add_factor(StateProximityFactor);
///
/// let breakdown = scorer.score(&college, &signals);
/// ```
pub struct Scorer {
    factors: Vec<Box<dyn ScoringFactor>>,
}

impl Scorer {
    /// Create a scorer with no factors (every college scores 0).
    pub fn new() -> Self {
        Self {
            factors: Vec::new(),
        }
    }

    /// The five-factor scorer with a 100 point ceiling
    pub fn standard() -> Self {
        Self::new()
            .add_factor(ExamMatchFactor)
            .add_factor(StateProximityFactor)
            .add_factor(AffordabilityFactor)
            .add_factor(QualityFactor)
            .add_factor(RankTierFactor)
    }

    /// Add a factor to the scorer (builder pattern).
    pub fn add_factor(mut self, factor: impl ScoringFactor + 'static) -> Self {
        self.factors.push(Box::new(factor));
        self
    }

    /// Highest total any college can reach
    pub fn max_total(&self) -> f64 {
        self.factors.iter().map(|f| f.max_points()).sum()
    }

    /// Score one college.
    ///
    /// Each factor's points are clamped to `0..=max_points`; a non-finite
    /// result counts as 0.
    pub fn score(&self, college: &CollegeRecord, signals: &StudentSignals) -> ScoreBreakdown {
        let factors = self
            .factors
            .iter()
            .map(|factor| {
                let raw = factor.score(college, signals);
                let points = if raw.is_finite() {
                    raw.clamp(0.0, factor.max_points())
                } else {
                    0.0
                };
                FactorScore {
                    name: factor.name(),
                    points,
                    max_points: factor.max_points(),
                }
            })
            .collect();

        ScoreBreakdown { factors }
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::test_support::signals_for;
    use catalog::ExamKind;

    struct Wild(f64);

    impl ScoringFactor for Wild {
        fn name(&self) -> &'static str {
            "wild"
        }

        fn max_points(&self) -> f64 {
            5.0
        }

        fn score(&self, _college: &CollegeRecord, _signals: &StudentSignals) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_empty_scorer() {
        let scorer = Scorer::new();
        let signals = signals_for(&[ExamKind::Kcet], None);
        let breakdown = scorer.score(&CollegeRecord::new("a", "A"), &signals);

        assert!(breakdown.factors.is_empty());
        assert_eq!(breakdown.total(), 0.0);
        assert_eq!(scorer.max_total(), 0.0);
    }

    #[test]
    fn test_standard_ceiling_is_100() {
        assert_eq!(Scorer::standard().max_total(), 100.0);
    }

    #[test]
    fn test_factor_output_is_clamped() {
        let signals = signals_for(&[], Some("Goa"));
        let college = CollegeRecord::new("a", "A");

        for (raw, expected) in [(12.0, 5.0), (-3.0, 0.0), (f64::NAN, 0.0), (2.5, 2.5)] {
            let breakdown = Scorer::new().add_factor(Wild(raw)).score(&college, &signals);
            assert_eq!(breakdown.points("wild"), Some(expected));
        }
    }

    #[test]
    fn test_breakdown_names_each_factor() {
        let signals = signals_for(&[ExamKind::JeeMain], Some("Karnataka"));
        let college = CollegeRecord {
            state: Some("Karnataka".to_string()),
            entrance_exams: vec!["JEE Main".to_string()],
            fees: Some("₹5 Lakhs".to_string()),
            placement_percent: Some(90.0),
            rating: Some(4.0),
            nirf_rank: Some(20),
            ..CollegeRecord::new("x", "College X")
        };

        let breakdown = Scorer::standard().score(&college, &signals);
        assert_eq!(breakdown.points("exam_match"), Some(30.0));
        assert_eq!(breakdown.points("state_proximity"), Some(15.0));
        assert_eq!(breakdown.points("affordability"), Some(10.0));
        assert_eq!(breakdown.points("rank_tier"), Some(7.0));
        assert!((breakdown.total() - 83.5).abs() < 1e-9);
        assert_eq!(breakdown.points("missing"), None);
    }
}
