use rayon::prelude::*;
use tracing::{info, instrument, warn};

use crate::{
    error::SelectionError,
    problem::{
        candidate::{Candidate, CandidateIdx},
        constraint_set::ConstraintSet,
        selection_problem::SelectionProblem,
    },
};

use super::{
    binary_program::BinaryProgram,
    branch_and_bound::BranchAndBound,
    exact_solver::{ExactSolver, ExactStatus},
    greedy_fallback::GreedyFallback,
    selection_result::{FallbackReason, SelectionMethod, SelectionResult},
    solver_params::SolverParams,
};

/// One independent selection call.
#[derive(Debug, Clone)]
pub struct SelectionRequest {
    pub id: Option<String>,
    pub candidates: Vec<Candidate>,
    pub constraints: ConstraintSet,
}

/// Outcome of one [`SelectionRequest`] inside a batch, tagged with the
/// request id.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResponse {
    pub id: Option<String>,
    pub result: Result<SelectionResult, SelectionError>,
}

pub struct TeamSelector<S = BranchAndBound> {
    solver: S,
    params: SolverParams,
    fallback: GreedyFallback,
}

impl Default for TeamSelector<BranchAndBound> {
    fn default() -> Self {
        TeamSelector::new(BranchAndBound, SolverParams::default())
    }
}

impl TeamSelector<BranchAndBound> {
    pub fn with_params(params: SolverParams) -> Self {
        TeamSelector::new(BranchAndBound, params)
    }
}

impl<S: ExactSolver> TeamSelector<S> {
    pub fn new(solver: S, params: SolverParams) -> Self {
        TeamSelector {
            solver,
            params,
            fallback: GreedyFallback,
        }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Highest-scoring roster that meets every constraint, or the greedy
    /// roster when no such roster is found. Only malformed input is an error.
    #[instrument(skip_all, fields(candidates = candidates.len(), solver = self.solver.solver_name()))]
    pub fn select_team(
        &self,
        candidates: Vec<Candidate>,
        constraints: ConstraintSet,
    ) -> Result<SelectionResult, SelectionError> {
        let problem = SelectionProblem::new(candidates, constraints)?;
        Ok(self.solve(&problem))
    }

    pub fn solve(&self, problem: &SelectionProblem) -> SelectionResult {
        if !problem.has_full_pool() {
            warn!(
                candidates = problem.len(),
                squad_size = problem.squad_size(),
                "Pool is smaller than the squad, using greedy selection"
            );
            return self.fall_back(problem, FallbackReason::InsufficientPool);
        }

        let program = BinaryProgram::from_problem(problem);
        let outcome = self.solver.solve(&program, &self.params);

        match outcome.status {
            ExactStatus::Optimal {
                assignment,
                objective,
            } => {
                info!(
                    objective,
                    nodes = outcome.statistics.nodes,
                    "Exact selection found"
                );

                let selected: Vec<CandidateIdx> = assignment.ones().map(CandidateIdx::new).collect();
                SelectionResult::new(problem, &selected, SelectionMethod::Exact, None)
            }
            ExactStatus::Infeasible => {
                warn!(
                    nodes = outcome.statistics.nodes,
                    "No roster satisfies every constraint, using greedy selection"
                );
                self.fall_back(problem, FallbackReason::Infeasible)
            }
            ExactStatus::Terminated(termination) => {
                warn!(
                    ?termination,
                    nodes = outcome.statistics.nodes,
                    "Exact search stopped early, using greedy selection"
                );
                self.fall_back(problem, FallbackReason::Terminated)
            }
        }
    }

    /// Runs independent requests in parallel; results keep the request order.
    pub fn select_many(
        &self,
        requests: Vec<SelectionRequest>,
    ) -> Vec<SelectionResponse> {
        requests
            .into_par_iter()
            .map(|request| SelectionResponse {
                result: self.select_team(request.candidates, request.constraints),
                id: request.id,
            })
            .collect()
    }

    fn fall_back(&self, problem: &SelectionProblem, reason: FallbackReason) -> SelectionResult {
        let selected = self.fallback.select(problem);
        let result = SelectionResult::new(
            problem,
            &selected,
            SelectionMethod::GreedyFallback,
            Some(reason),
        );

        if !result.is_complete() {
            warn!(
                violations = ?result.violations(),
                "Greedy roster does not meet every constraint"
            );
        }

        result
    }
}

/// [`TeamSelector::select_team`] with the default solver and limits.
pub fn select_team(
    candidates: Vec<Candidate>,
    constraints: ConstraintSet,
) -> Result<SelectionResult, SelectionError> {
    TeamSelector::default().select_team(candidates, constraints)
}
