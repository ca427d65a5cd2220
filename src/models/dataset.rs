use serde_json::Value;

use crate::core::error::MatchError;
use crate::models::domain::{Job, Talent};

/// One raw dataset record: a talent, a job, and the ground-truth label for
/// whether the pair was a successful match.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LabeledPair {
    pub talent: Talent,
    pub job: Job,
    pub label: bool,
}

const TALENT_FIELDS: [&str; 5] = [
    "languages",
    "job_roles",
    "seniority",
    "degree",
    "salary_expectation",
];

const JOB_FIELDS: [&str; 5] = [
    "languages",
    "job_roles",
    "seniorities",
    "min_degree",
    "max_salary",
];

/// Parse a JSON array of `{talent, job, label}` records.
///
/// Records are validated once here; the matching core only ever sees typed
/// values. Errors name the offending record index.
pub fn pairs_from_str(raw: &str) -> Result<Vec<LabeledPair>, MatchError> {
    let values: Vec<Value> = serde_json::from_str(raw).map_err(|e| MatchError::InvalidRecord {
        kind: "dataset",
        message: e.to_string(),
    })?;

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            pair_from_value(value).map_err(|source| MatchError::Record {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Parse a single `{talent, job, label}` record.
pub fn pair_from_value(value: &Value) -> Result<LabeledPair, MatchError> {
    let talent = talent_from_value(required(value, "talent")?)?;
    let job = job_from_value(required(value, "job")?)?;
    let label = required(value, "label")?
        .as_bool()
        .ok_or_else(|| MatchError::InvalidRecord {
            kind: "label",
            message: "expected a boolean".to_string(),
        })?;

    Ok(LabeledPair { talent, job, label })
}

/// Parse a talent record, reporting the first missing required field by name.
pub fn talent_from_value(value: &Value) -> Result<Talent, MatchError> {
    check_required_fields(value, &TALENT_FIELDS)?;
    serde_json::from_value(value.clone()).map_err(|e| MatchError::InvalidRecord {
        kind: "talent",
        message: e.to_string(),
    })
}

/// Parse a job record, reporting the first missing required field by name.
pub fn job_from_value(value: &Value) -> Result<Job, MatchError> {
    check_required_fields(value, &JOB_FIELDS)?;
    serde_json::from_value(value.clone()).map_err(|e| MatchError::InvalidRecord {
        kind: "job",
        message: e.to_string(),
    })
}

fn required<'a>(value: &'a Value, field: &str) -> Result<&'a Value, MatchError> {
    value
        .get(field)
        .ok_or_else(|| MatchError::MissingField(field.to_string()))
}

fn check_required_fields(value: &Value, fields: &[&str]) -> Result<(), MatchError> {
    for field in fields {
        if value.get(field).is_none() {
            return Err(MatchError::MissingField((*field).to_string()));
        }
    }
    Ok(())
}
