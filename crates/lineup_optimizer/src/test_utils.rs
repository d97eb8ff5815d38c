use crate::problem::{
    candidate::{Candidate, CandidateBuilder},
    role::Role,
};

pub struct CandidateSpec {
    id: &'static str,
    score: f64,
    role: Role,
    overseas: bool,
}

impl CandidateSpec {
    pub fn new(id: &'static str, score: f64, role: Role) -> Self {
        CandidateSpec {
            id,
            score,
            role,
            overseas: false,
        }
    }

    pub fn overseas(mut self) -> Self {
        self.overseas = true;
        self
    }
}

pub fn create_candidates(specs: &[CandidateSpec]) -> Vec<Candidate> {
    specs
        .iter()
        .map(|spec| {
            let mut builder = CandidateBuilder::new(spec.id, spec.score, spec.role);
            builder.set_overseas(spec.overseas);
            builder.build()
        })
        .collect()
}

const POOL_ROLES: [Role; 8] = [
    Role::Wicketkeeper,
    Role::Batter,
    Role::Bowler,
    Role::AllRounder,
    Role::Batter,
    Role::Bowler,
    Role::Batter,
    Role::Bowler,
];

/// Domestic pool with distinct descending scores. Any pool of 12 or more
/// satisfies the default constraints.
pub fn create_pool(size: usize) -> Vec<Candidate> {
    (0..size)
        .map(|index| {
            Candidate::new(
                format!("player_{index:02}"),
                100.0 - 3.0 * index as f64,
                POOL_ROLES[index % POOL_ROLES.len()],
            )
        })
        .collect()
}
