use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lineup_optimizer::{
    TeamSelector,
    problem::{
        candidate::{Candidate, CandidateBuilder},
        constraint_set::ConstraintSet,
        role::Role,
        selection_problem::SelectionProblem,
    },
    solver::{composition::Composition, greedy_fallback::GreedyFallback},
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

fn random_pool(size: usize, seed: u64) -> Vec<Candidate> {
    let mut rng = SmallRng::seed_from_u64(seed);

    (0..size)
        .map(|index| {
            let role = Role::VARIANTS[rng.random_range(0..Role::VARIANTS.len())];
            let mut builder =
                CandidateBuilder::new(format!("p{index:02}"), rng.random_range(20.0..100.0), role);
            builder.set_overseas(rng.random_bool(0.3));
            builder.build()
        })
        .collect()
}

fn exact_benchmark(c: &mut Criterion) -> () {
    let selector = TeamSelector::default();

    for size in [20, 30] {
        let problem = SelectionProblem::new(random_pool(size, 17), ConstraintSet::default());
        let Ok(problem) = problem else {
            continue;
        };

        c.bench_function(&format!("exact selection ({size} candidates)"), |b| {
            b.iter(|| selector.solve(black_box(&problem)))
        });
    }
}

fn greedy_benchmark(c: &mut Criterion) -> () {
    let Ok(problem) = SelectionProblem::new(random_pool(30, 17), ConstraintSet::default()) else {
        return;
    };

    c.bench_function("greedy selection (30 candidates)", |b| {
        b.iter(|| GreedyFallback.select(black_box(&problem)))
    });
}

fn composition_benchmark(c: &mut Criterion) -> () {
    let pool = random_pool(11, 3);
    let constraints = ConstraintSet::default();

    c.bench_function("composition of roster", |b| {
        b.iter(|| Composition::of(black_box(&pool)).violations(black_box(&constraints)))
    });
}

criterion_group!(
    benches,
    exact_benchmark,
    greedy_benchmark,
    composition_benchmark,
);
criterion_main!(benches);
