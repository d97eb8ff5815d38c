use clap::Args;
use lineup_optimizer::{
    json::types::JsonConstraintSet,
    solver::solver_params::{SolverParams, Termination},
};

use crate::parsers;

/// Overrides applied on top of the constraints of a request.
#[derive(Args, Debug, Clone, Default)]
pub struct ConstraintArgs {
    #[arg(long, env = "LINEUP_SQUAD_SIZE", allow_negative_numbers = true)]
    pub(crate) squad_size: Option<i64>,

    #[arg(long, env = "LINEUP_MIN_WICKETKEEPERS", allow_negative_numbers = true)]
    pub(crate) min_wicketkeepers: Option<i64>,

    #[arg(long, env = "LINEUP_MAX_WICKETKEEPERS", allow_negative_numbers = true)]
    pub(crate) max_wicketkeepers: Option<i64>,

    #[arg(long, env = "LINEUP_MIN_BATTERS", allow_negative_numbers = true)]
    pub(crate) min_batters: Option<i64>,

    #[arg(long, env = "LINEUP_MIN_BOWLERS", allow_negative_numbers = true)]
    pub(crate) min_bowlers: Option<i64>,

    #[arg(long, env = "LINEUP_MIN_ALLROUNDERS", allow_negative_numbers = true)]
    pub(crate) min_allrounders: Option<i64>,

    #[arg(long, env = "LINEUP_MAX_OVERSEAS", allow_negative_numbers = true)]
    pub(crate) max_overseas: Option<i64>,
}

impl ConstraintArgs {
    pub fn apply(&self, constraints: &mut JsonConstraintSet) {
        let overrides = [
            (&mut constraints.squad_size, self.squad_size),
            (&mut constraints.min_wicketkeepers, self.min_wicketkeepers),
            (&mut constraints.max_wicketkeepers, self.max_wicketkeepers),
            (&mut constraints.min_batters, self.min_batters),
            (&mut constraints.min_bowlers, self.min_bowlers),
            (&mut constraints.min_allrounders, self.min_allrounders),
            (&mut constraints.max_overseas, self.max_overseas),
        ];

        for (field, value) in overrides {
            if value.is_some() {
                *field = value;
            }
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SolverArgs {
    /// Time limit for the exact search (e.g., "5s", "500ms", "PT1M")
    #[arg(short, long, value_parser = parsers::parse_duration, default_value = "5s")]
    timeout: jiff::SignedDuration,

    /// Node limit for the exact search
    #[arg(long, env = "LINEUP_MAX_NODES")]
    max_nodes: Option<usize>,
}

impl SolverArgs {
    pub fn params(&self) -> SolverParams {
        let mut terminations = vec![Termination::Duration(self.timeout)];
        if let Some(nodes) = self.max_nodes {
            terminations.push(Termination::Nodes(nodes));
        }

        SolverParams { terminations }
    }
}
