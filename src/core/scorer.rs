use crate::core::error::ScorerError;
use crate::models::{FeatureVector, Prediction, ScoringWeights};

/// Capability that turns a feature vector into a label and a score in `[0, 1]`.
///
/// Implementations must be deterministic for deterministic input and safe for
/// concurrent invocation from multiple workers; the engine shares one scorer
/// read-only across its whole pool.
pub trait Scorer: Send + Sync {
    fn score(&self, features: &FeatureVector) -> Result<Prediction, ScorerError>;
}

impl<F> Scorer for F
where
    F: Fn(&FeatureVector) -> Result<Prediction, ScorerError> + Send + Sync,
{
    fn score(&self, features: &FeatureVector) -> Result<Prediction, ScorerError> {
        self(features)
    }
}

/// Deterministic linear scorer over normalized features.
///
/// Each feature is squashed into `[0, 1]`, combined by the configured weights,
/// and normalized by the total weight. The label is a simple threshold on the
/// score. A trained model can replace this through the [`Scorer`] trait
/// without touching the engine.
#[derive(Debug, Clone)]
pub struct WeightedScorer {
    weights: ScoringWeights,
    threshold: f64,
    /// Salary gap (absolute, in salary units) at which the gap feature
    /// saturates.
    salary_scale: f64,
}

impl WeightedScorer {
    pub fn new(weights: ScoringWeights, threshold: f64) -> Self {
        Self {
            weights,
            threshold,
            salary_scale: 20_000.0,
        }
    }

    pub fn with_salary_scale(mut self, salary_scale: f64) -> Self {
        self.salary_scale = salary_scale.max(1.0);
        self
    }

    fn normalized_scores(&self, features: &FeatureVector) -> [(f64, f64); 8] {
        let w = &self.weights;
        [
            (features.must_have_language_overlap, w.must_have_languages),
            (
                saturating_count(features.optional_languages_spoken),
                w.optional_languages,
            ),
            (features.job_roles_overlap, w.roles_overlap),
            (saturating_count(features.job_roles_number), w.roles_number),
            (features.talent_has_seniority_requirement, w.seniority),
            (features.talent_has_min_degree_requirement, w.degree),
            (features.salary_expectation_matches_offer, w.salary_match),
            (
                centered_gap(features.salary_expectation_gap, self.salary_scale),
                w.salary_gap,
            ),
        ]
    }
}

impl Default for WeightedScorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default(), 0.5)
    }
}

impl Scorer for WeightedScorer {
    fn score(&self, features: &FeatureVector) -> Result<Prediction, ScorerError> {
        let mut score = 0.0;
        let mut total_weight = 0.0;

        for (value, weight) in self.normalized_scores(features) {
            if !value.is_finite() {
                return Err(ScorerError::InvalidInput(format!(
                    "non-finite feature value {value}"
                )));
            }
            score += value * weight;
            total_weight += weight;
        }

        let score = if total_weight > 0.0 {
            (score / total_weight).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Ok(Prediction {
            label: score >= self.threshold,
            score,
        })
    }
}

/// Squash an unbounded count into `[0, 1]` with diminishing returns.
#[inline]
fn saturating_count(count: f64) -> f64 {
    (count / 5.0).min(1.0)
}

/// Map a signed salary gap onto `[0, 1]`, with 0.5 at a gap of zero.
#[inline]
fn centered_gap(gap: f64, scale: f64) -> f64 {
    0.5 + (gap / scale).clamp(-1.0, 1.0) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features() -> FeatureVector {
        FeatureVector {
            must_have_language_overlap: 1.0,
            optional_languages_spoken: 2.0,
            job_roles_overlap: 1.0,
            job_roles_number: 1.0,
            talent_has_seniority_requirement: 1.0,
            talent_has_min_degree_requirement: 1.0,
            salary_expectation_matches_offer: 1.0,
            salary_expectation_gap: 5000.0,
        }
    }

    #[test]
    fn test_score_within_bounds() {
        let scorer = WeightedScorer::default();

        let prediction = scorer.score(&features()).unwrap();
        assert!(prediction.score >= 0.0 && prediction.score <= 1.0);
        assert!(prediction.label);
    }

    #[test]
    fn test_score_is_deterministic() {
        let scorer = WeightedScorer::default();

        let first = scorer.score(&features()).unwrap();
        let second = scorer.score(&features()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_better_overlap_scores_higher() {
        let scorer = WeightedScorer::default();

        let strong = scorer.score(&features()).unwrap();

        let mut weak_features = features();
        weak_features.must_have_language_overlap = 0.0;
        weak_features.job_roles_overlap = 0.0;
        let weak = scorer.score(&weak_features).unwrap();

        assert!(strong.score > weak.score);
    }

    #[test]
    fn test_negative_gap_lowers_score() {
        let scorer = WeightedScorer::default();

        let mut underpaid = features();
        underpaid.salary_expectation_gap = -30000.0;
        underpaid.salary_expectation_matches_offer = 0.0;

        let fits = scorer.score(&features()).unwrap();
        let does_not_fit = scorer.score(&underpaid).unwrap();
        assert!(fits.score > does_not_fit.score);
    }

    #[test]
    fn test_non_finite_feature_rejected() {
        let scorer = WeightedScorer::default();

        let mut bad = features();
        bad.salary_expectation_gap = f64::NAN;

        assert!(scorer.score(&bad).is_err());
    }

    #[test]
    fn test_closure_scorer() {
        let scorer = |features: &FeatureVector| -> Result<Prediction, ScorerError> {
            Ok(Prediction {
                label: false,
                score: features.job_roles_overlap,
            })
        };

        let prediction = Scorer::score(&scorer, &features()).unwrap();
        assert_eq!(prediction.score, 1.0);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let weights = ScoringWeights {
            must_have_languages: 0.0,
            optional_languages: 0.0,
            roles_overlap: 0.0,
            roles_number: 0.0,
            seniority: 0.0,
            degree: 0.0,
            salary_match: 0.0,
            salary_gap: 0.0,
        };
        let scorer = WeightedScorer::new(weights, 0.5);

        let prediction = scorer.score(&features()).unwrap();
        assert_eq!(prediction.score, 0.0);
        assert!(!prediction.label);
    }
}
