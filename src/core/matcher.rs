use rayon::prelude::*;

use crate::core::error::MatchError;
use crate::core::features::extract_features;
use crate::core::scorer::Scorer;
use crate::models::{Job, MatchResult, Talent};

/// A pair that failed during a partial bulk run, identified by its position
/// in the input collections.
#[derive(Debug)]
pub struct MatchFailure {
    pub talent_index: usize,
    pub job_index: usize,
    pub error: MatchError,
}

/// Result of a partial-failure bulk run: sorted successes plus the pairs that
/// failed.
#[derive(Debug)]
pub struct BulkOutcome {
    pub matches: Vec<MatchResult>,
    pub failures: Vec<MatchFailure>,
}

/// Matching engine: evaluates (talent, job) pairs through an injected scorer
/// and ranks the results.
///
/// The scorer is shared read-only across the worker pool; nothing here
/// mutates the input collections.
pub struct Matcher<S: Scorer> {
    scorer: S,
    workers: Option<usize>,
}

impl<S: Scorer> Matcher<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            workers: None,
        }
    }

    /// Override the worker count instead of deriving it from available
    /// parallelism.
    pub fn with_workers(scorer: S, workers: usize) -> Self {
        Self {
            scorer,
            workers: Some(workers.max(1)),
        }
    }

    /// Score a single (talent, job) pair.
    ///
    /// Extraction and scorer errors propagate unchanged; there is no silent
    /// defaulting.
    pub fn match_pair(&self, talent: &Talent, job: &Job) -> Result<MatchResult, MatchError> {
        let features = extract_features(talent, job)?;
        let prediction = self.scorer.score(&features)?;

        Ok(MatchResult {
            talent: talent.clone(),
            job: job.clone(),
            label: prediction.label,
            score: prediction.score,
        })
    }

    /// Score every pair in the cartesian product and rank by descending score.
    ///
    /// Evaluation is fanned out over the worker pool; completion order is
    /// irrelevant because the only ordering guarantee is the final sort.
    /// A single failing pair fails the whole run: the output is either the
    /// complete T×J result set or the first error encountered.
    pub fn match_bulk(
        &self,
        talents: &[Talent],
        jobs: &[Job],
    ) -> Result<Vec<MatchResult>, MatchError> {
        let pool = self.build_pool()?;

        let mut results: Vec<MatchResult> = pool.install(|| {
            talents
                .par_iter()
                .flat_map_iter(|talent| jobs.iter().map(move |job| (talent, job)))
                .map(|(talent, job)| self.match_pair(talent, job))
                .collect::<Result<Vec<_>, MatchError>>()
        })?;

        sort_by_score(&mut results);
        Ok(results)
    }

    /// Opt-in partial-failure variant of [`Matcher::match_bulk`].
    ///
    /// Failing pairs are collected with their input indices instead of
    /// aborting the run; successful matches are still ranked by descending
    /// score.
    pub fn match_bulk_partial(
        &self,
        talents: &[Talent],
        jobs: &[Job],
    ) -> Result<BulkOutcome, MatchError> {
        let pool = self.build_pool()?;

        let evaluated: Vec<Result<MatchResult, MatchFailure>> = pool.install(|| {
            talents
                .par_iter()
                .enumerate()
                .flat_map_iter(|(talent_index, talent)| {
                    jobs.iter()
                        .enumerate()
                        .map(move |(job_index, job)| (talent_index, job_index, talent, job))
                })
                .map(|(talent_index, job_index, talent, job)| {
                    self.match_pair(talent, job).map_err(|error| MatchFailure {
                        talent_index,
                        job_index,
                        error,
                    })
                })
                .collect()
        });

        let mut matches = Vec::new();
        let mut failures = Vec::new();
        for result in evaluated {
            match result {
                Ok(matched) => matches.push(matched),
                Err(failure) => failures.push(failure),
            }
        }

        sort_by_score(&mut matches);
        Ok(BulkOutcome { matches, failures })
    }

    fn build_pool(&self) -> Result<rayon::ThreadPool, MatchError> {
        let workers = self.workers.unwrap_or_else(default_worker_count);
        Ok(rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()?)
    }
}

/// Worker count derived from available parallelism, keeping one unit free for
/// coordination.
pub fn default_worker_count() -> usize {
    let available = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2);
    available.saturating_sub(1).max(1)
}

fn sort_by_score(results: &mut [MatchResult]) {
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
