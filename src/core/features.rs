use std::collections::HashSet;

use crate::core::error::MatchError;
use crate::models::{degree_rank, FeatureVector, Job, LabeledFeatures, LabeledPair, Talent};

/// Compute the 8-dimensional feature vector for one (talent, job) pair.
///
/// Pure function: no I/O, no shared state. The only failure mode on typed
/// records is an empty job role set (see [`job_roles_overlap`]).
pub fn extract_features(talent: &Talent, job: &Job) -> Result<FeatureVector, MatchError> {
    Ok(FeatureVector {
        must_have_language_overlap: must_have_language_overlap(talent, job),
        optional_languages_spoken: optional_languages_spoken(talent, job) as f64,
        job_roles_overlap: job_roles_overlap(talent, job)?,
        job_roles_number: job_roles_number(job) as f64,
        talent_has_seniority_requirement: if has_seniority_requirement(talent, job) {
            1.0
        } else {
            0.0
        },
        talent_has_min_degree_requirement: if has_min_degree_requirement(talent, job) {
            1.0
        } else {
            0.0
        },
        salary_expectation_matches_offer: if salary_expectation_matches_offer(talent, job) {
            1.0
        } else {
            0.0
        },
        salary_expectation_gap: salary_expectation_gap(talent, job),
    })
}

/// Extract features plus an externally supplied ground-truth label.
///
/// Used only for dataset construction, never on the runtime matching path.
pub fn extract_labeled(talent: &Talent, job: &Job, label: bool) -> Result<LabeledFeatures, MatchError> {
    Ok(LabeledFeatures {
        features: extract_features(talent, job)?,
        label,
    })
}

/// Build a labeled feature dataset from raw records.
pub fn build_dataset(records: &[LabeledPair]) -> Result<Vec<LabeledFeatures>, MatchError> {
    records
        .iter()
        .map(|record| extract_labeled(&record.talent, &record.job, record.label))
        .collect()
}

/// Fraction of the job's must-have languages the talent satisfies.
///
/// A requirement is satisfied when the talent lists the same title with a
/// rating at least as high as required. A job with no must-have languages
/// scores exactly 0, not full marks.
#[inline]
pub fn must_have_language_overlap(talent: &Talent, job: &Job) -> f64 {
    let mut required = 0usize;
    let mut matched = 0usize;

    for requirement in job.languages.iter().filter(|l| l.must_have) {
        required += 1;
        let satisfied = talent.languages.iter().any(|spoken| {
            spoken.title == requirement.title && spoken.rating >= requirement.rating
        });
        if satisfied {
            matched += 1;
        }
    }

    if required == 0 {
        return 0.0;
    }
    matched as f64 / required as f64
}

/// Number of distinct languages the talent speaks beyond the job's must-have
/// set, including languages the job does not ask for at all.
#[inline]
pub fn optional_languages_spoken(talent: &Talent, job: &Job) -> usize {
    let must_have: HashSet<&str> = job
        .languages
        .iter()
        .filter(|l| l.must_have)
        .map(|l| l.title.as_str())
        .collect();

    let spoken: HashSet<&str> = talent.languages.iter().map(|l| l.title.as_str()).collect();

    spoken.difference(&must_have).count()
}

/// Fraction of the job's distinct roles the talent covers.
///
/// An empty job role set is a defined error, not a zero-default; the
/// asymmetry with [`must_have_language_overlap`] is deliberate.
#[inline]
pub fn job_roles_overlap(talent: &Talent, job: &Job) -> Result<f64, MatchError> {
    let job_roles: HashSet<&str> = job.job_roles.iter().map(String::as_str).collect();
    if job_roles.is_empty() {
        return Err(MatchError::DivisionByZero {
            feature: "job_roles_overlap",
        });
    }

    let talent_roles: HashSet<&str> = talent.job_roles.iter().map(String::as_str).collect();

    Ok(talent_roles.intersection(&job_roles).count() as f64 / job_roles.len() as f64)
}

/// Number of distinct roles on the job, independent of the talent.
#[inline]
pub fn job_roles_number(job: &Job) -> usize {
    job.job_roles
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .len()
}

/// Whether the talent's seniority is one the job accepts.
#[inline]
pub fn has_seniority_requirement(talent: &Talent, job: &Job) -> bool {
    job.seniorities.iter().any(|s| s == &talent.seniority)
}

/// Whether the talent's degree meets the job's floor, by ordinal rank.
#[inline]
pub fn has_min_degree_requirement(talent: &Talent, job: &Job) -> bool {
    degree_rank(&talent.degree) >= degree_rank(&job.min_degree)
}

/// Whether the talent's salary expectation fits within the job's ceiling.
#[inline]
pub fn salary_expectation_matches_offer(talent: &Talent, job: &Job) -> bool {
    talent.salary_expectation <= job.max_salary
}

/// Signed gap between the job's ceiling and the talent's expectation.
/// Negative when the talent expects more than the job offers.
#[inline]
pub fn salary_expectation_gap(talent: &Talent, job: &Job) -> f64 {
    job.max_salary - talent.salary_expectation
}
