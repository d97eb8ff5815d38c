use thiserror::Error;

/// Input that no selection algorithm can work with. Infeasible pools are not
/// errors: they produce a greedy result instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectionError {
    #[error("Candidate pool is empty")]
    EmptyPool,

    #[error("Squad size must be positive, got {0}")]
    NonPositiveSquadSize(i64),

    #[error("Constraint `{name}` must not be negative, got {value}")]
    NegativeBound { name: &'static str, value: i64 },

    #[error("Duplicate candidate id `{0}`")]
    DuplicateCandidate(String),

    #[error("Candidate `{0}` has a non-finite predicted score")]
    NonFiniteScore(String),

    #[error(
        "Role minimums require at least {required} players but the squad size is {squad_size}"
    )]
    ContradictoryConstraints { required: usize, squad_size: usize },

    #[error("Minimum of {min} wicketkeepers exceeds the maximum of {max}")]
    WicketkeeperBounds { min: usize, max: usize },
}
