//! Service layer for college recommendations.
//!
//! This crate contains the `RecommendationService` that ties a catalog
//! source to the ranking engine and shapes results for display.

pub mod service;

pub use service::{CollegeRecommendation, RecommendationService};
