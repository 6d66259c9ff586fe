// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use squad_desk::domain::filter::{FilterCriterion, ListFilterEngine};
use squad_desk::domain::team::{Player, PlayerStatus, Position};
use squad_desk::infrastructure::fixtures;
use std::hint::black_box;

/// Repeats the sample roster until it holds `size` players.
fn large_roster(size: usize) -> Vec<Player> {
    let template = fixtures::roster(fixtures::DEFAULT_TEAM_ID);
    template
        .iter()
        .cycle()
        .take(size)
        .enumerate()
        .map(|(index, player)| Player {
            id: index as u32,
            name: format!("{} {index}", player.name),
            ..player.clone()
        })
        .collect()
}

fn filter_pass_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_pass");

    for size in [1_000usize, 10_000] {
        let roster = large_roster(size);

        group.bench_with_input(BenchmarkId::new("criteria", size), &roster, |b, roster| {
            let mut engine = ListFilterEngine::new();
            b.iter(|| {
                engine.apply_filters(
                    roster,
                    vec![
                        FilterCriterion::contains("position", Position::Midfielder.label()),
                        FilterCriterion::equals("status", PlayerStatus::Available.token()),
                    ],
                );
                black_box(engine.visible_count())
            });
        });

        group.bench_with_input(BenchmarkId::new("search", size), &roster, |b, roster| {
            let mut engine = ListFilterEngine::new();
            b.iter(|| {
                engine.apply_search(roster, black_box("mid"));
                black_box(engine.visible_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, filter_pass_benchmark);
criterion_main!(benches);
