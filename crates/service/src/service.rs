//! # Recommendation Service
//!
//! Coordinates a recommendation request:
//! 1. Load the catalog (primary source, static fallback), once per service
//! 2. Rank it for the student's profile on a blocking thread
//! 3. Turn ranked records into owned, display-ready recommendations
//!
//! The service is constructed explicitly with its sources; nothing is read
//! from global state.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use catalog::{Catalog, CatalogSource, StudentProfile};
use engine::{RankingMode, ScoredCandidate, Scorer};

/// Final recommendation returned to callers
#[derive(Debug, Clone, PartialEq)]
pub struct CollegeRecommendation {
    pub id: String,
    pub name: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub fees: Option<String>,
    pub rating: Option<f64>,
    /// Relevance out of 100; `None` when ranked by rating alone
    pub score: Option<f64>,
    pub explanation: String,
}

/// Cheap to clone; clones share the sources and the loaded catalog
#[derive(Clone)]
pub struct RecommendationService {
    primary: Arc<dyn CatalogSource>,
    fallback: Option<Arc<dyn CatalogSource>>,
    scorer: Arc<Scorer>,
    catalog: Arc<OnceCell<Arc<Catalog>>>,
}

impl RecommendationService {
    /// Create a service reading from `primary` with the standard scorer
    pub fn new(primary: Arc<dyn CatalogSource>) -> Self {
        Self {
            primary,
            fallback: None,
            scorer: Arc::new(Scorer::standard()),
            catalog: Arc::new(OnceCell::new()),
        }
    }

    /// Source to use when the primary fails to load
    pub fn with_fallback(mut self, fallback: Arc<dyn CatalogSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Replace the scorer (defaults to `Scorer::standard()`)
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = Arc::new(scorer);
        self
    }

    /// The catalog, loaded on first use and cached afterwards
    pub async fn catalog(&self) -> Result<Arc<Catalog>> {
        let catalog = self
            .catalog
            .get_or_try_init(|| async { self.load_catalog().await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(catalog))
    }

    /// Main entry point: ranked recommendations for a student.
    ///
    /// # Arguments
    /// * `profile` - The student's form data, if any
    /// * `limit` - Number of recommendations to return
    ///
    /// # Returns
    /// At most `limit` recommendations, best first
    pub async fn recommend(
        &self,
        profile: Option<StudentProfile>,
        limit: usize,
    ) -> Result<Vec<CollegeRecommendation>> {
        let start_time = Instant::now();

        let catalog = self.catalog().await?;
        let scorer = Arc::clone(&self.scorer);

        let recommendations = tokio::task::spawn_blocking(move || {
            let ranked = scorer.rank(catalog.records(), profile.as_ref(), limit);
            let mode = ranked.mode;
            let recommendations: Vec<CollegeRecommendation> = ranked
                .candidates
                .iter()
                .map(to_recommendation)
                .collect();
            (mode, recommendations)
        })
        .await
        .context("Ranking task panicked")?;

        let (mode, recommendations) = recommendations;
        info!(
            "Selected {} recommendations ({:?}) in {:.2?}",
            recommendations.len(),
            mode,
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Load from the primary source, falling back when it errors.
    ///
    /// An empty primary catalog is a valid answer and is not replaced.
    async fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match load_from(Arc::clone(&self.primary)).await {
            Ok(catalog) => catalog,
            Err(primary_err) => {
                let fallback = self.fallback.as_ref().ok_or_else(|| {
                    anyhow!(
                        "Failed to load catalog from {}: {:#}",
                        self.primary.name(),
                        primary_err
                    )
                })?;
                warn!(
                    "Catalog source {} failed ({:#}), falling back to {}",
                    self.primary.name(),
                    primary_err,
                    fallback.name()
                );
                load_from(Arc::clone(fallback)).await?
            }
        };

        if let Err(e) = catalog.validate() {
            warn!("Catalog has out-of-range data, affected factors will score low: {}", e);
        }
        info!("Catalog ready with {} colleges", catalog.len());
        Ok(catalog)
    }
}

async fn load_from(source: Arc<dyn CatalogSource>) -> Result<Catalog> {
    let name = source.name().to_string();
    tokio::task::spawn_blocking(move || source.load())
        .await
        .context("Catalog loading task panicked")?
        .with_context(|| format!("Failed to load catalog from {}", name))
}

fn to_recommendation(candidate: &ScoredCandidate<'_>) -> CollegeRecommendation {
    let college = candidate.college;
    CollegeRecommendation {
        id: college.id.clone(),
        name: college.name.clone(),
        state: college.state.clone(),
        city: college.city.clone(),
        fees: college.fees.clone(),
        rating: college.rating,
        score: candidate.score(),
        explanation: explain(candidate),
    }
}

/// Human-readable reason for a candidate's place in the ranking
pub fn explain(candidate: &ScoredCandidate<'_>) -> String {
    match &candidate.breakdown {
        Some(breakdown) => {
            let parts: Vec<String> = breakdown
                .factors
                .iter()
                .filter(|f| f.points > 0.0)
                .map(|f| format!("{} {:.1}/{:.0}", f.name, f.points, f.max_points))
                .collect();
            if parts.is_empty() {
                format!("Score {:.1}: no matching factors", breakdown.total())
            } else {
                format!("Score {:.1}: {}", breakdown.total(), parts.join(", "))
            }
        }
        None => match candidate.college.rating {
            Some(rating) => format!("Top rated ({:.1}/5)", rating),
            None => "Top rated (unrated)".to_string(),
        },
    }
}

/// Convenience for callers that only need to know how a profile will be ranked
pub fn ranking_mode(profile: Option<&StudentProfile>) -> RankingMode {
    match profile {
        Some(p) if p.has_signal() => RankingMode::Personalized,
        _ => RankingMode::TopRated,
    }
}
