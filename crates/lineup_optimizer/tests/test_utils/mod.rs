#![allow(dead_code)]

use lineup_optimizer::{
    problem::{
        candidate::{Candidate, CandidateBuilder},
        constraint_set::ConstraintSet,
        role::Role,
    },
    solver::composition::Composition,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub fn candidate(id: &str, score: f64, role: Role) -> Candidate {
    Candidate::new(id, score, role)
}

pub fn overseas(id: &str, score: f64, role: Role) -> Candidate {
    let mut builder = CandidateBuilder::new(id, score, role);
    builder.set_overseas(true);
    builder.build()
}

/// 6 batters, 6 bowlers, 2 all-rounders and 1 keeper, all domestic.
pub fn scenario_pool() -> Vec<Candidate> {
    let mut pool = Vec::new();

    for (index, score) in [80.0, 75.0, 70.0, 65.0, 60.0, 55.0].into_iter().enumerate() {
        pool.push(candidate(&format!("bat{}", index + 1), score, Role::Batter));
    }

    for (index, score) in [78.0, 74.0, 69.0, 64.0, 59.0, 54.0].into_iter().enumerate() {
        pool.push(candidate(&format!("bowl{}", index + 1), score, Role::Bowler));
    }

    pool.push(candidate("ar1", 72.0, Role::AllRounder));
    pool.push(candidate("ar2", 68.0, Role::AllRounder));
    pool.push(candidate("wk1", 66.0, Role::Wicketkeeper));

    pool
}

pub fn scenario_constraints() -> ConstraintSet {
    ConstraintSet {
        squad_size: 11,
        min_wicketkeepers: 1,
        max_wicketkeepers: None,
        min_batters: 5,
        min_bowlers: 4,
        min_allrounders: 2,
        max_overseas: 4,
    }
}

/// Best total over every subset of exactly `squad_size` candidates meeting
/// all constraints, or `None` when there is no such subset.
pub fn brute_force_best(pool: &[Candidate], constraints: &ConstraintSet) -> Option<f64> {
    let mut best: Option<f64> = None;
    let mut chosen: Vec<&Candidate> = Vec::with_capacity(constraints.squad_size);

    fn visit<'a>(
        pool: &'a [Candidate],
        start: usize,
        constraints: &ConstraintSet,
        chosen: &mut Vec<&'a Candidate>,
        best: &mut Option<f64>,
    ) {
        if chosen.len() == constraints.squad_size {
            if Composition::of(chosen.iter().copied()).satisfies(constraints) {
                let total: f64 = chosen.iter().map(|c| c.predicted_score()).sum();
                if best.is_none_or(|best| total > best) {
                    *best = Some(total);
                }
            }
            return;
        }

        let needed = constraints.squad_size - chosen.len();
        for index in start..pool.len() {
            if pool.len() - index < needed {
                break;
            }

            chosen.push(&pool[index]);
            visit(pool, index + 1, constraints, chosen, best);
            chosen.pop();
        }
    }

    visit(pool, 0, constraints, &mut chosen, &mut best);
    best
}

const ROLES: [Role; 4] = [
    Role::Batter,
    Role::Bowler,
    Role::AllRounder,
    Role::Wicketkeeper,
];

/// Scores are multiples of 5 so that ties are common.
pub fn random_pool(rng: &mut SmallRng, size: usize, overseas_probability: f64) -> Vec<Candidate> {
    (0..size)
        .map(|index| {
            let role = if rng.random_bool(0.15) {
                Role::Wicketkeeper
            } else {
                ROLES[rng.random_range(0..3)]
            };
            let score = rng.random_range(0..20) as f64 * 5.0;
            let id = format!("p{index:02}");

            if rng.random_bool(overseas_probability) {
                overseas(&id, score, role)
            } else {
                candidate(&id, score, role)
            }
        })
        .collect()
}

pub fn random_constraints(rng: &mut SmallRng, squad_size: usize) -> ConstraintSet {
    ConstraintSet {
        squad_size,
        min_wicketkeepers: rng.random_range(0..=2),
        max_wicketkeepers: if rng.random_bool(0.3) {
            Some(rng.random_range(1..=3))
        } else {
            None
        },
        min_batters: rng.random_range(0..=squad_size / 2),
        min_bowlers: rng.random_range(0..=squad_size / 2),
        min_allrounders: rng.random_range(0..=3),
        max_overseas: rng.random_range(1..=squad_size),
    }
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
