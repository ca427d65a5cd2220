use std::time::Instant;

use talent_match::config::Settings;
use talent_match::models::{self, Job, ScoringWeights, Talent};
use talent_match::{Matcher, WeightedScorer};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting talent-match...");

    // Load configuration
    let settings = Settings::load()?;

    info!("Loading data from {}...", settings.data.path);
    let raw = std::fs::read_to_string(&settings.data.path)?;
    let mut pairs = models::pairs_from_str(&raw)?;

    if let Some(max_records) = settings.matching.max_records {
        pairs.truncate(max_records);
    }

    let talents: Vec<Talent> = pairs.iter().map(|pair| pair.talent.clone()).collect();
    let jobs: Vec<Job> = pairs.iter().map(|pair| pair.job.clone()).collect();

    // Initialize the scorer and matching engine
    let weights = ScoringWeights {
        must_have_languages: settings.scoring.weights.must_have_languages,
        optional_languages: settings.scoring.weights.optional_languages,
        roles_overlap: settings.scoring.weights.roles_overlap,
        roles_number: settings.scoring.weights.roles_number,
        seniority: settings.scoring.weights.seniority,
        degree: settings.scoring.weights.degree,
        salary_match: settings.scoring.weights.salary_match,
        salary_gap: settings.scoring.weights.salary_gap,
    };
    let scorer = WeightedScorer::new(weights, settings.scoring.threshold);

    let matcher = match settings.matching.workers {
        Some(workers) => Matcher::with_workers(scorer, workers),
        None => Matcher::new(scorer),
    };

    info!(
        "Matching {} talents with {} jobs...",
        talents.len(),
        jobs.len()
    );

    let started = Instant::now();
    let results = matcher.match_bulk(&talents, &jobs)?;
    let elapsed = started.elapsed();

    info!(
        "Matching completed: {} results in {:.2?}",
        results.len(),
        elapsed
    );

    info!("Top 5 results:");
    for (rank, result) in results.iter().take(5).enumerate() {
        info!(
            "#{} score={:.4} label={} seniority={} max_salary={}",
            rank + 1,
            result.score,
            result.label,
            result.talent.seniority,
            result.job.max_salary
        );
    }

    Ok(())
}
