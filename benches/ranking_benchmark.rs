use criterion::{criterion_group, criterion_main, Criterion};
use octofit_tracker::services::{rank, UserScore};
use std::collections::HashMap;
use std::hint::black_box;

/// Score map with heavy ties so the email tie-break is exercised.
fn make_scores(users: usize) -> HashMap<String, UserScore> {
    (0..users)
        .map(|i| {
            (
                format!("user{:06}@example.com", (i * 7919) % users),
                UserScore {
                    points: ((i * 31) % 500) as i64 * 10,
                    team: if i % 2 == 0 { "Team Marvel" } else { "Team DC" }.to_string(),
                },
            )
        })
        .collect()
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for users in [100, 10_000] {
        let scores = make_scores(users);
        group.bench_function(format!("{}_users", users), |b| {
            b.iter(|| rank(black_box(scores.clone()), "2024-01-01T00:00:00Z"))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rank);
criterion_main!(benches);
