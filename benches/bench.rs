// Criterion benchmarks for Talent Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use talent_match::core::features::extract_features;
use talent_match::models::{Job, LanguageRequirement, LanguageSkill, Talent};
use talent_match::{Matcher, WeightedScorer};

fn create_talent(id: usize) -> Talent {
    Talent {
        languages: vec![
            LanguageSkill {
                title: "English".to_string(),
                rating: (id % 5) as u8 + 1,
            },
            LanguageSkill {
                title: "German".to_string(),
                rating: (id % 3) as u8 + 1,
            },
        ],
        job_roles: vec![
            "backend-developer".to_string(),
            "frontend-developer".to_string(),
        ],
        seniority: if id % 2 == 0 { "senior" } else { "junior" }.to_string(),
        degree: "bachelor".to_string(),
        salary_expectation: 40000.0 + (id % 10) as f64 * 2000.0,
    }
}

fn create_job(id: usize) -> Job {
    Job {
        languages: vec![LanguageRequirement {
            title: "English".to_string(),
            rating: 2,
            must_have: true,
        }],
        job_roles: vec!["backend-developer".to_string(), "data-engineer".to_string()],
        seniorities: vec!["senior".to_string(), "midlevel".to_string()],
        min_degree: "bachelor".to_string(),
        max_salary: 45000.0 + (id % 6) as f64 * 4000.0,
    }
}

fn bench_feature_extraction(c: &mut Criterion) {
    let talent = create_talent(1);
    let job = create_job(1);

    c.bench_function("extract_features", |b| {
        b.iter(|| extract_features(black_box(&talent), black_box(&job)));
    });
}

fn bench_match_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_bulk");

    for (talents_len, jobs_len) in [(10, 10), (50, 20), (100, 50)] {
        let talents: Vec<Talent> = (0..talents_len).map(create_talent).collect();
        let jobs: Vec<Job> = (0..jobs_len).map(create_job).collect();
        let matcher = Matcher::new(WeightedScorer::default());

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", talents_len, jobs_len)),
            &(talents, jobs),
            |b, (talents, jobs)| {
                b.iter(|| matcher.match_bulk(black_box(talents), black_box(jobs)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_feature_extraction, bench_match_bulk);
criterion_main!(benches);
