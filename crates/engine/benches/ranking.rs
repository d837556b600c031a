//! Benchmarks for ranking
//!
//! Run with: cargo bench --package engine
//!
//! Ranks a synthetic catalog of a few thousand colleges, both personalized
//! and through the top-rated fallback.

use catalog::{CollegeRecord, ExamKind, StudentProfile};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use engine::{Scorer, StudentSignals, rank};

const STATES: [&str; 6] = ["Karnataka", "Tamil Nadu", "Maharashtra", "Delhi", "West Bengal", "Telangana"];
const EXAMS: [&str; 7] = ["JEE Main", "BITSAT", "COMEDK", "KCET", "MHT-CET", "WBJEE", "SRMJEE"];

fn synthetic_catalog(size: usize) -> Vec<CollegeRecord> {
    (0..size)
        .map(|i| CollegeRecord {
            state: Some(STATES[i % STATES.len()].to_string()),
            entrance_exams: vec![
                EXAMS[i % EXAMS.len()].to_string(),
                EXAMS[(i * 3 + 1) % EXAMS.len()].to_string(),
            ],
            fees: Some(format!("₹{}.5 Lakhs (4 years)", i % 30)),
            placement_percent: Some((i % 100) as f64),
            rating: Some((i % 50) as f64 / 10.0),
            nirf_rank: if i % 4 == 0 { None } else { Some((i % 200) as u32 + 1) },
            ..CollegeRecord::new(format!("college-{i}"), format!("College {i}"))
        })
        .collect()
}

fn student_profile() -> StudentProfile {
    StudentProfile::new()
        .with_exam(ExamKind::JeeMain, "96.2")
        .with_exam(ExamKind::Comedk, "1800")
        .with_home_state("Karnataka")
}

fn bench_rank_personalized(c: &mut Criterion) {
    let catalog = synthetic_catalog(5_000);
    let profile = student_profile();

    c.bench_function("rank_personalized_5000", |b| {
        b.iter(|| {
            let result = rank(black_box(&catalog), black_box(Some(&profile)), black_box(20));
            black_box(result)
        })
    });
}

fn bench_rank_top_rated(c: &mut Criterion) {
    let catalog = synthetic_catalog(5_000);

    c.bench_function("rank_top_rated_5000", |b| {
        b.iter(|| {
            let result = rank(black_box(&catalog), black_box(None), black_box(20));
            black_box(result)
        })
    });
}

fn bench_score_single(c: &mut Criterion) {
    let catalog = synthetic_catalog(1);
    let scorer = Scorer::standard();
    let signals = StudentSignals::from_profile(&student_profile());

    c.bench_function("score_single_college", |b| {
        b.iter(|| {
            let breakdown = scorer.score(black_box(&catalog[0]), black_box(&signals));
            black_box(breakdown)
        })
    });
}

criterion_group!(
    benches,
    bench_rank_personalized,
    bench_rank_top_rated,
    bench_score_single
);
criterion_main!(benches);
