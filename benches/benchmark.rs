// Ranking and review scoring benchmarks
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nbhdfit_core::{NeighbourhoodScores, ScoreTable, DIMENSION_COUNT};
use nbhdfit_ranker::{rank, ExplainedMatch, UserPreferences};
use nbhdfit_scorer::{score_reviews, LexiconPolarity, PolarityScorer, ReviewRecord};
use rand::prelude::*;

const COMMENTS: &[&str] = &[
    "Great tapas bar around the corner and the metro is a two minute walk",
    "Very quiet street, lovely park nearby, we felt safe with the kids",
    "The flat was dirty and the club downstairs was way too loud",
    "Not a bad place, restaurants everywhere but the bus connection is poor",
    "Amazing brunch cafe, beautiful garden, perfect for families",
];

fn generate_table(rng: &mut impl Rng, n: usize) -> ScoreTable {
    let rows = (0..n)
        .map(|i| {
            let mut scores = [0.0; DIMENSION_COUNT];
            for s in scores.iter_mut() {
                *s = (rng.random_range(0..=1000) as f64) / 10.0;
            }
            NeighbourhoodScores::new(format!("neighbourhood {}", i), scores)
        })
        .collect();
    ScoreTable::new(rows).unwrap()
}

fn generate_reviews(rng: &mut impl Rng, n: usize) -> Vec<ReviewRecord> {
    (0..n)
        .map(|i| {
            let comment = COMMENTS[rng.random_range(0..COMMENTS.len())];
            ReviewRecord::new(format!("neighbourhood {}", i % 70), comment)
        })
        .collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let mut rng = rand::rng();
    let prefs = UserPreferences::new([5, 1, 5, 1, 5, 3, 3, 1]).unwrap();

    for size in [73, 1000, 10000].iter() {
        let table = generate_table(&mut rng, *size);
        group.bench_with_input(BenchmarkId::new("cosine", size), size, |b, _| {
            b.iter(|| rank(black_box(&prefs), black_box(&table)));
        });
    }

    let table = generate_table(&mut rng, 73);
    group.bench_function("rank_and_explain", |b| {
        b.iter(|| {
            let ranked = rank(black_box(&prefs), &table);
            ExplainedMatch::from_ranked_list(&ranked, &prefs)
        });
    });

    group.finish();
}

fn benchmark_polarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("polarity");
    let scorer = LexiconPolarity::new();

    group.bench_function("single_review", |b| {
        b.iter(|| scorer.polarity(black_box(COMMENTS[3])));
    });

    let mut rng = rand::rng();
    for size in [1000, 10000].iter() {
        let reviews = generate_reviews(&mut rng, *size);
        group.bench_with_input(BenchmarkId::new("score_reviews", size), size, |b, _| {
            b.iter(|| score_reviews(black_box(&reviews), &scorer, usize::MAX));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rank, benchmark_polarity);
criterion_main!(benches);
