// Core algorithm exports
pub mod error;
pub mod features;
pub mod matcher;
pub mod scorer;

pub use error::{MatchError, ScorerError};
pub use features::{build_dataset, extract_features, extract_labeled};
pub use matcher::{default_worker_count, BulkOutcome, MatchFailure, Matcher};
pub use scorer::{Scorer, WeightedScorer};
