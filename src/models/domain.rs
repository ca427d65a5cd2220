use serde::{Deserialize, Serialize};

/// A language a talent speaks, with a proficiency rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSkill {
    pub title: String,
    pub rating: u8,
}

/// A language requirement on a job posting.
///
/// `must_have` marks the requirement as mandatory rather than advantageous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRequirement {
    pub title: String,
    pub rating: u8,
    pub must_have: bool,
}

/// Candidate record with skills, role history, seniority, degree, and salary
/// expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talent {
    pub languages: Vec<LanguageSkill>,
    pub job_roles: Vec<String>,
    pub seniority: String,
    pub degree: String,
    pub salary_expectation: f64,
}

/// Posting record with required skills, roles, accepted seniorities, degree
/// floor, and salary ceiling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub languages: Vec<LanguageRequirement>,
    pub job_roles: Vec<String>,
    pub seniorities: Vec<String>,
    pub min_degree: String,
    pub max_salary: f64,
}

/// Ordinal rank of a degree string.
///
/// Unknown degree strings rank lowest. The rank is only ever compared, never
/// used arithmetically.
pub fn degree_rank(degree: &str) -> u8 {
    match degree {
        "none" => 0,
        "apprenticeship" => 1,
        "bachelor" => 2,
        "master" => 3,
        "doctorate" => 4,
        _ => 0,
    }
}

/// Fixed-order numeric encoding of one (talent, job) pair.
///
/// Field order is contractual: scorers consume the vector positionally via
/// [`FeatureVector::as_array`]. Boolean features are encoded as 0.0 / 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub must_have_language_overlap: f64,
    pub optional_languages_spoken: f64,
    pub job_roles_overlap: f64,
    pub job_roles_number: f64,
    pub talent_has_seniority_requirement: f64,
    pub talent_has_min_degree_requirement: f64,
    pub salary_expectation_matches_offer: f64,
    pub salary_expectation_gap: f64,
}

impl FeatureVector {
    /// Number of features in the vector.
    pub const LEN: usize = 8;

    /// The features in their contractual positional order.
    pub fn as_array(&self) -> [f64; Self::LEN] {
        [
            self.must_have_language_overlap,
            self.optional_languages_spoken,
            self.job_roles_overlap,
            self.job_roles_number,
            self.talent_has_seniority_requirement,
            self.talent_has_min_degree_requirement,
            self.salary_expectation_matches_offer,
            self.salary_expectation_gap,
        ]
    }
}

/// Feature vector paired with its ground-truth label, used for dataset
/// construction outside the runtime matching path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledFeatures {
    #[serde(flatten)]
    pub features: FeatureVector,
    pub label: bool,
}

/// Output of a scorer for one feature vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: bool,
    /// Compatibility score in `[0, 1]`.
    pub score: f64,
}

/// One scored (talent, job) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub talent: Talent,
    pub job: Job,
    pub label: bool,
    pub score: f64,
}

/// Per-feature weights for the built-in linear scorer.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub must_have_languages: f64,
    pub optional_languages: f64,
    pub roles_overlap: f64,
    pub roles_number: f64,
    pub seniority: f64,
    pub degree: f64,
    pub salary_match: f64,
    pub salary_gap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            must_have_languages: 0.30,
            optional_languages: 0.05,
            roles_overlap: 0.25,
            roles_number: 0.05,
            seniority: 0.10,
            degree: 0.10,
            salary_match: 0.10,
            salary_gap: 0.05,
        }
    }
}
