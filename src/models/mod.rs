// Model exports
pub mod dataset;
pub mod domain;

pub use dataset::{pair_from_value, pairs_from_str, LabeledPair};
pub use domain::{
    degree_rank, FeatureVector, Job, LabeledFeatures, LanguageRequirement, LanguageSkill,
    MatchResult, Prediction, ScoringWeights, Talent,
};
