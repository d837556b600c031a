//! Ranking colleges for a student.
//!
//! Two modes:
//! - **Personalized**: the profile carries at least one exam or a home
//!   state, so every college is scored and sorted by total score.
//! - **TopRated**: no profile, or nothing in it to go on. Colleges are
//!   sorted by rating instead; scoring everything to zero would just echo
//!   catalog order.
//!
//! Both sorts are stable, so equal keys keep catalog order, and both
//! return borrowed records rather than copies.

use crate::exams::StudentSignals;
use crate::scorer::{ScoreBreakdown, Scorer};
use catalog::{CollegeRecord, StudentProfile};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Number of recommendations the discovery page asks for
pub const DEFAULT_LIMIT: usize = 6;

/// How a ranking was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMode {
    Personalized,
    TopRated,
}

/// A college paired with where it sat in the catalog and how it scored
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub college: &'a CollegeRecord,
    /// Index in the input catalog; the tie-breaker
    pub position: usize,
    /// `None` in top-rated mode, where nothing is scored
    pub breakdown: Option<ScoreBreakdown>,
}

impl ScoredCandidate<'_> {
    pub fn score(&self) -> Option<f64> {
        self.breakdown.as_ref().map(ScoreBreakdown::total)
    }
}

/// Result of a ranking pass, best first
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations<'a> {
    pub mode: RankingMode,
    pub candidates: Vec<ScoredCandidate<'a>>,
}

impl<'a> Recommendations<'a> {
    /// The ranked colleges without their scores
    pub fn colleges(&self) -> Vec<&'a CollegeRecord> {
        self.candidates.iter().map(|c| c.college).collect()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Top `limit` colleges for `profile`, best first.
///
/// Returns `min(limit, catalog.len())` references into `catalog`.
pub fn recommend<'a>(
    catalog: &'a [CollegeRecord],
    profile: Option<&StudentProfile>,
    limit: usize,
) -> Vec<&'a CollegeRecord> {
    rank(catalog, profile, limit).colleges()
}

/// Like [`recommend`], but keeps the ranking mode and score breakdowns
pub fn rank<'a>(
    catalog: &'a [CollegeRecord],
    profile: Option<&StudentProfile>,
    limit: usize,
) -> Recommendations<'a> {
    Scorer::standard().rank(catalog, profile, limit)
}

impl Scorer {
    /// Rank `catalog` for `profile` with this scorer's factors
    #[instrument(skip_all, fields(catalog_size = catalog.len(), limit = limit))]
    pub fn rank<'a>(
        &self,
        catalog: &'a [CollegeRecord],
        profile: Option<&StudentProfile>,
        limit: usize,
    ) -> Recommendations<'a> {
        let signals = profile.map(StudentSignals::from_profile).unwrap_or_default();

        let recommendations = if signals.has_signal() {
            self.rank_personalized(catalog, &signals, limit)
        } else {
            rank_top_rated(catalog, limit)
        };

        debug!(
            "Ranked {} of {} colleges ({:?})",
            recommendations.len(),
            catalog.len(),
            recommendations.mode
        );
        recommendations
    }

    fn rank_personalized<'a>(
        &self,
        catalog: &'a [CollegeRecord],
        signals: &StudentSignals,
        limit: usize,
    ) -> Recommendations<'a> {
        // Indexed collect keeps catalog order, which the stable sort relies on
        let mut scored: Vec<(f64, ScoredCandidate<'a>)> = catalog
            .par_iter()
            .enumerate()
            .map(|(position, college)| {
                let breakdown = self.score(college, signals);
                let candidate = ScoredCandidate {
                    college,
                    position,
                    breakdown: Some(breakdown),
                };
                (candidate.score().unwrap_or(0.0), candidate)
            })
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        scored.truncate(limit);

        Recommendations {
            mode: RankingMode::Personalized,
            candidates: scored.into_iter().map(|(_, candidate)| candidate).collect(),
        }
    }
}

fn rank_top_rated(catalog: &[CollegeRecord], limit: usize) -> Recommendations<'_> {
    let mut ranked: Vec<ScoredCandidate<'_>> = catalog
        .iter()
        .enumerate()
        .map(|(position, college)| ScoredCandidate {
            college,
            position,
            breakdown: None,
        })
        .collect();

    ranked.sort_by(|a, b| b.college.rating_or_zero().total_cmp(&a.college.rating_or_zero()));
    ranked.truncate(limit);

    Recommendations {
        mode: RankingMode::TopRated,
        candidates: ranked,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::ExamKind;

    fn rated(id: &str, rating: Option<f64>) -> CollegeRecord {
        CollegeRecord {
            rating,
            ..CollegeRecord::new(id, id.to_uppercase())
        }
    }

    fn ids(colleges: &[&CollegeRecord]) -> Vec<String> {
        colleges.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_no_profile_sorts_by_rating() {
        let catalog = vec![rated("a", None), rated("b", Some(3.0)), rated("c", Some(4.5))];

        let result = rank(&catalog, None, 10);
        assert_eq!(result.mode, RankingMode::TopRated);
        assert_eq!(ids(&result.colleges()), vec!["c", "b", "a"]);
        assert!(result.candidates.iter().all(|c| c.score().is_none()));
    }

    #[test]
    fn test_empty_profile_falls_back() {
        let catalog = vec![rated("a", Some(2.0)), rated("b", Some(5.0))];
        let profile = StudentProfile::new();

        let result = rank(&catalog, Some(&profile), 10);
        assert_eq!(result.mode, RankingMode::TopRated);
        assert_eq!(ids(&result.colleges()), vec!["b", "a"]);
    }

    #[test]
    fn test_home_state_alone_personalizes() {
        let catalog = vec![
            CollegeRecord {
                state: Some("Kerala".to_string()),
                ..rated("a", Some(5.0))
            },
            CollegeRecord {
                state: Some("Goa".to_string()),
                ..rated("b", Some(4.0))
            },
        ];
        let profile = StudentProfile::new().with_home_state("GOA");

        let result = rank(&catalog, Some(&profile), 10);
        assert_eq!(result.mode, RankingMode::Personalized);
        // b: 15 + 8, a: 10
        assert_eq!(ids(&result.colleges()), vec!["b", "a"]);
        assert_eq!(result.candidates[0].score(), Some(23.0));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog = vec![rated("a", Some(4.0)), rated("b", Some(4.0)), rated("c", Some(4.0))];
        let profile = StudentProfile::new().with_exam(ExamKind::Wbjee, "120");

        let personalized = recommend(&catalog, Some(&profile), 3);
        assert_eq!(ids(&personalized), vec!["a", "b", "c"]);

        let top_rated = recommend(&catalog, None, 3);
        assert_eq!(ids(&top_rated), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_results_borrow_input() {
        let catalog = vec![rated("a", Some(1.0))];
        let result = recommend(&catalog, None, 1);
        assert!(std::ptr::eq(result[0], &catalog[0]));
        assert_eq!(rank(&catalog, None, 1).candidates[0].position, 0);
    }

    #[test]
    fn test_zero_limit_and_empty_catalog() {
        let catalog = vec![rated("a", Some(1.0))];
        assert!(recommend(&catalog, None, 0).is_empty());
        assert!(recommend(&[], None, DEFAULT_LIMIT).is_empty());
    }
}
