//! Recommendation engine for the college discovery flow.
//!
//! This crate provides:
//! - ScoringFactor trait and the five standard factors
//! - Scorer for composing factors into a 0-100 relevance score
//! - `recommend` / `rank` for producing a ranked shortlist
//!
//! ## Architecture
//! A ranking call runs in stages:
//! 1. The student profile is normalized once into `StudentSignals`
//! 2. With no signal at all, colleges are simply sorted by rating
//! 3. Otherwise every college is scored (in parallel) by the `Scorer`
//! 4. A stable sort by score, then truncation to the requested limit
//!
//! The engine does no I/O and never fails: missing or malformed college
//! data only costs that college the points for the affected factor.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{recommend, DEFAULT_LIMIT};
//!
//! let shortlist = recommend(catalog.records(), Some(&profile), DEFAULT_LIMIT);
//! for college in shortlist {
//!     println!("{}", college.name);
//! }
//! ```

pub mod exams;
pub mod factors;
pub mod recommend;
pub mod scorer;
pub mod traits;

// Re-export main types
pub use exams::{EXAM_ALIAS_TABLE_VERSION, StudentSignals, aliases};
pub use factors::parse_fees;
pub use recommend::{DEFAULT_LIMIT, RankingMode, Recommendations, ScoredCandidate, rank, recommend};
pub use scorer::{FactorScore, ScoreBreakdown, Scorer};
pub use traits::ScoringFactor;
