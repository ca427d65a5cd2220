//! Talent Match - bulk talent-to-job matching and ranking engine
//!
//! This library scores every pair drawn from a talent collection and a job
//! collection through a pluggable scorer and returns the full cartesian
//! product ranked by descending compatibility score.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    extract_features, BulkOutcome, MatchError, MatchFailure, Matcher, Scorer, ScorerError,
    WeightedScorer,
};
pub use crate::models::{FeatureVector, Job, MatchResult, Prediction, ScoringWeights, Talent};
