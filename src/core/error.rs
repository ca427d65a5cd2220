use thiserror::Error;

/// Errors a scorer implementation can surface.
///
/// Scorer failures are fatal for the pair being evaluated; the engine never
/// substitutes a default score.
#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("scorer rejected input: {0}")]
    InvalidInput(String),

    #[error("scorer backend failed: {0}")]
    Backend(String),
}

/// Errors that can occur during ingestion, feature extraction, or matching.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A required field is absent from a talent or job record.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A record field exists but cannot be interpreted.
    #[error("invalid {kind} record: {message}")]
    InvalidRecord { kind: &'static str, message: String },

    /// A dataset record failed to parse.
    #[error("record {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<MatchError>,
    },

    /// A feature's denominator set is empty.
    #[error("division by zero computing `{feature}`: empty denominator set")]
    DivisionByZero { feature: &'static str },

    #[error(transparent)]
    Scorer(#[from] ScorerError),

    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
